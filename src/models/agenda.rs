use crate::models::item::ScheduledItem;
use crate::models::template::AgendaTemplate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER: &str = "_____________";

/// One responsibility slot, e.g. "Time Keeper" → "Ana".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
    #[serde(default)]
    pub assignee: String,
}

/// One checklist entry, rendered as ☐ / ☑.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionStep {
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

impl ActionStep {
    pub fn checkbox(&self) -> String {
        let mark = if self.done { '☑' } else { '☐' };
        format!("{} {}", mark, self.label)
    }
}

/// The working agenda document: template-derived structure plus the
/// fill-in fields edited between meetings. The store keeps exactly one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agenda {
    pub title: String,
    pub time_window: String,
    #[serde(default)]
    pub meeting_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    pub roles: Vec<RoleAssignment>,
    pub rows: Vec<ScheduledItem>,
    pub immediate_actions: Vec<ActionStep>,
    pub ongoing_actions: Vec<ActionStep>,
    #[serde(default)]
    pub next_meeting: String,
    #[serde(default)]
    pub host: String,
}

impl Agenda {
    /// "Date: ... | Time: ... | Location: ..." subtitle line.
    pub fn info_line(&self) -> String {
        let date = match self.meeting_date {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => PLACEHOLDER.to_string(),
        };
        let location = if self.location.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.location.clone()
        };
        format!(
            "Date: {} | Time: {} | Location: {}",
            date, self.time_window, location
        )
    }

    /// Restore the template-provided checklists, dropping done flags.
    pub fn restore_actions(&mut self, template: &AgendaTemplate) {
        self.immediate_actions = action_steps(&template.immediate_actions);
        self.ongoing_actions = action_steps(&template.ongoing_actions);
    }
}

pub fn action_steps(labels: &[String]) -> Vec<ActionStep> {
    labels
        .iter()
        .map(|l| ActionStep {
            label: l.clone(),
            done: false,
        })
        .collect()
}

/// A completed agenda frozen into the historical log, keyed by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub meeting_date: NaiveDate,
    pub agenda: Agenda,
}

impl ArchiveEntry {
    /// "MEETING: June 18, 2026" banner used by renderings.
    pub fn banner(&self) -> String {
        format!("MEETING: {}", self.meeting_date.format("%B %-d, %Y"))
    }
}
