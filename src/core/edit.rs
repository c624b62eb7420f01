//! In-place edits of the working agenda (the `set` command): the original
//! workflow edits sheet cells between meetings; here the same fields are
//! filled in through CLI flags.

use crate::errors::{AppError, AppResult};
use crate::models::agenda::Agenda;
use chrono::NaiveDate;

/// Collected `set` flags, already parsed by the command handler.
#[derive(Debug, Default)]
pub struct Changes {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    /// (role, assignee) pairs; role names match case-insensitively.
    pub roles: Vec<(String, String)>,
    /// (1-based row number, text) pairs for the Notes column.
    pub notes: Vec<(usize, String)>,
    /// 1-based checklist numbers spanning immediate then ongoing actions.
    pub check: Vec<usize>,
    pub uncheck: Vec<usize>,
    pub next_meeting: Option<String>,
    pub host: Option<String>,
}

pub fn apply(agenda: &mut Agenda, changes: &Changes) -> AppResult<()> {
    if let Some(d) = changes.date {
        agenda.meeting_date = Some(d);
    }
    if let Some(loc) = &changes.location {
        agenda.location = loc.clone();
    }

    for (role, assignee) in &changes.roles {
        let slot = agenda
            .roles
            .iter_mut()
            .find(|r| r.role.eq_ignore_ascii_case(role))
            .ok_or_else(|| AppError::InvalidRole(role.clone()))?;
        slot.assignee = assignee.clone();
    }

    for (num, text) in &changes.notes {
        let row = num
            .checked_sub(1)
            .and_then(|i| agenda.rows.get_mut(i))
            .ok_or_else(|| AppError::InvalidItem(num.to_string()))?;
        row.item.notes = text.clone();
    }

    for &num in &changes.check {
        set_checkbox(agenda, num, true)?;
    }
    for &num in &changes.uncheck {
        set_checkbox(agenda, num, false)?;
    }

    if let Some(next) = &changes.next_meeting {
        agenda.next_meeting = next.clone();
    }
    if let Some(host) = &changes.host {
        agenda.host = host.clone();
    }

    Ok(())
}

/// Checklist numbering runs through the immediate actions first, then the
/// ongoing ones, matching the order `show` prints them in.
fn set_checkbox(agenda: &mut Agenda, num: usize, done: bool) -> AppResult<()> {
    let immediate = agenda.immediate_actions.len();
    let idx = num
        .checked_sub(1)
        .ok_or_else(|| AppError::InvalidItem(num.to_string()))?;

    let step = if idx < immediate {
        &mut agenda.immediate_actions[idx]
    } else {
        agenda
            .ongoing_actions
            .get_mut(idx - immediate)
            .ok_or_else(|| AppError::InvalidItem(num.to_string()))?
    };
    step.done = done;
    Ok(())
}
