use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Marker prefix that flags a sub-item of the preceding top-level item.
/// Display convention only: rendering indents/italicizes, nothing else
/// treats it as structure.
pub const SUB_ITEM_MARKER: char = '→';

/// One line of the meeting template: label, allotted minutes, responsible
/// speaker and optional notes. Ordering inside the template is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub label: String,
    pub duration_minutes: u32,
    pub speaker: String,
    #[serde(default)]
    pub notes: String,
}

impl AgendaItem {
    pub fn new(label: &str, duration_minutes: u32, speaker: &str, notes: &str) -> Self {
        Self {
            label: label.to_string(),
            duration_minutes,
            speaker: speaker.to_string(),
            notes: notes.to_string(),
        }
    }

    pub fn is_sub_item(&self) -> bool {
        self.label.trim_start().starts_with(SUB_ITEM_MARKER)
    }

    /// "15 min" column value.
    pub fn length_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

/// An AgendaItem plus its computed wall-clock start. Derived, never stored
/// on its own: regenerated every time the schedule is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledItem {
    #[serde(flatten)]
    pub item: AgendaItem,
    pub start: NaiveTime,
}

impl ScheduledItem {
    /// 12-hour clock label with meridian, e.g. "7:00 PM".
    pub fn start_label(&self) -> String {
        self.start.format("%-I:%M %p").to_string()
    }
}
