//! Builds a fresh working agenda from the template and a parsed start time.

use crate::core::schedule::build_schedule;
use crate::models::agenda::{Agenda, RoleAssignment, action_steps};
use crate::models::template::AgendaTemplate;
use chrono::NaiveTime;

pub fn compose(template: &AgendaTemplate, start: NaiveTime) -> Agenda {
    Agenda {
        title: template.title.clone(),
        time_window: template.time_window.clone(),
        meeting_date: None,
        location: String::new(),
        roles: template
            .roles
            .iter()
            .map(|r| RoleAssignment {
                role: r.clone(),
                assignee: String::new(),
            })
            .collect(),
        rows: build_schedule(start, &template.items),
        immediate_actions: action_steps(&template.immediate_actions),
        ongoing_actions: action_steps(&template.ongoing_actions),
        next_meeting: String::new(),
        host: String::new(),
    }
}
