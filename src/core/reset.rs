//! Resets the working agenda for the next meeting: fill-in fields are
//! cleared, checklists are restored from the template, the item structure
//! and computed start times survive untouched.

use crate::models::agenda::Agenda;
use crate::models::template::AgendaTemplate;

pub fn reset(agenda: &mut Agenda, template: &AgendaTemplate) {
    agenda.meeting_date = None;
    agenda.location.clear();
    for role in &mut agenda.roles {
        role.assignee.clear();
    }
    for row in &mut agenda.rows {
        row.item.notes.clear();
    }
    agenda.restore_actions(template);
    agenda.next_meeting.clear();
    agenda.host.clear();
}
