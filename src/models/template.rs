//! The recurring-meeting template: single source of truth for the item
//! list, responsibility roles and action-step checklists. Schedule
//! generation, rendering and reset all consume this one structure.

use crate::errors::AppResult;
use crate::models::item::AgendaItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaTemplate {
    pub title: String,
    /// Display label for the usual meeting slot, e.g. "7:30pm - 8:30pm".
    pub time_window: String,
    /// Responsibility roles filled in before each meeting.
    pub roles: Vec<String>,
    pub items: Vec<AgendaItem>,
    /// "This week" checklist restored on reset.
    pub immediate_actions: Vec<String>,
    /// Standing checklist restored on reset.
    pub ongoing_actions: Vec<String>,
}

impl AgendaTemplate {
    /// Load a template from a YAML file (the `template` config key).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn total_minutes(&self) -> u32 {
        self.items.iter().map(|i| i.duration_minutes).sum()
    }
}

impl Default for AgendaTemplate {
    fn default() -> Self {
        Self {
            title: "Northeast Pastors Meeting".to_string(),
            time_window: "7:30pm - 8:30pm".to_string(),
            roles: vec![
                "MC/Facilitator".to_string(),
                "Attendance Taker".to_string(),
                "Note Taker".to_string(),
                "Time Keeper".to_string(),
                "Prayer Leader".to_string(),
                "Follow-up Coordinator".to_string(),
            ],
            items: vec![
                AgendaItem::new(
                    "Welcome, Rollcall, Prayer, Trinity Check-in",
                    15,
                    "MC",
                    "5 min Trinity check-in included",
                ),
                AgendaItem::new("Key Developments", 10, "Naokimi", "LV Summit updates"),
                AgendaItem::new("Sprint 1 Goals by Community", 30, "Various", ""),
                AgendaItem::new(
                    "  → Current membership active status",
                    5,
                    "TBD",
                    "Report next week",
                ),
                AgendaItem::new("  → Donor level data stats", 5, "TBD", "Report next week"),
                AgendaItem::new(
                    "  → Environment enhancement project",
                    5,
                    "TBD",
                    "Need details – fill in",
                ),
                AgendaItem::new(
                    "  → Sun Check-in plan & progress",
                    5,
                    "NJ",
                    "NJ to report progress",
                ),
                AgendaItem::new(
                    "  → 3 Campaign Metrics",
                    10,
                    "Team",
                    "Share plan & resources, set goals for 21 D",
                ),
                AgendaItem::new("True Family Tour in NY/NJ", 10, "Event Team", ""),
                AgendaItem::new(
                    "  → June 21 Bank Space Youth Event",
                    3,
                    "Event Team",
                    "3 pm event details",
                ),
                AgendaItem::new(
                    "  → June 22 Evening at Belvedere",
                    3,
                    "Event Team",
                    "6 pm event details",
                ),
                AgendaItem::new(
                    "Northeast Summit Plan & Registration",
                    5,
                    "Planning Committee",
                    "Registration process update",
                ),
            ],
            immediate_actions: vec![
                "Start utilizing Sunday service registration form".to_string(),
                "Complete PSWM Intro Course review".to_string(),
                "Submit community membership data".to_string(),
            ],
            ongoing_actions: vec![
                "Promote True Family Tour events".to_string(),
                "Monitor 3 Campaign Metrics weekly".to_string(),
                "Submit weekly Sun Checkin reports".to_string(),
            ],
        }
    }
}
