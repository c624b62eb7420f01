//! The document surface the agenda is rendered into. The schedule core
//! never touches a surface; `render` walks a composed agenda exactly once
//! and pushes semantic rows into whichever implementation the caller owns.

mod text;
mod xlsx;

pub use text::TextSurface;
pub use xlsx::XlsxSurface;

use crate::errors::AppResult;
use crate::models::agenda::{Agenda, PLACEHOLDER};
use crate::models::item::ScheduledItem;

pub const ITEM_HEADERS: [&str; 5] = ["Agenda Item", "Start", "Length", "Speaker/Lead", "Notes"];

pub trait Surface {
    fn title(&mut self, text: &str) -> AppResult<()>;
    fn subtitle(&mut self, text: &str) -> AppResult<()>;
    fn section(&mut self, text: &str) -> AppResult<()>;
    /// One row of the responsibilities grid: (role, assignee) pairs.
    fn role_row(&mut self, pairs: &[(String, String)]) -> AppResult<()>;
    fn table_header(&mut self, headers: &[&str]) -> AppResult<()>;
    fn item_row(&mut self, row: &ScheduledItem) -> AppResult<()>;
    /// Two side-by-side checklists (immediate / ongoing).
    fn action_columns(
        &mut self,
        left_title: &str,
        left: &[String],
        right_title: &str,
        right: &[String],
    ) -> AppResult<()>;
    fn footer_row(&mut self, left: &str, right: &str) -> AppResult<()>;
}

pub fn render(agenda: &Agenda, surface: &mut dyn Surface) -> AppResult<()> {
    surface.title(&agenda.title)?;
    surface.subtitle(&agenda.info_line())?;

    surface.section("Meeting Responsibilities")?;
    for chunk in agenda.roles.chunks(3) {
        let pairs: Vec<(String, String)> = chunk
            .iter()
            .map(|r| {
                let assignee = if r.assignee.is_empty() {
                    PLACEHOLDER.to_string()
                } else {
                    r.assignee.clone()
                };
                (format!("{}:", r.role), assignee)
            })
            .collect();
        surface.role_row(&pairs)?;
    }

    surface.table_header(&ITEM_HEADERS)?;
    for row in &agenda.rows {
        surface.item_row(row)?;
    }

    surface.section("Action Steps")?;
    let immediate: Vec<String> = agenda
        .immediate_actions
        .iter()
        .map(|a| a.checkbox())
        .collect();
    let ongoing: Vec<String> = agenda
        .ongoing_actions
        .iter()
        .map(|a| a.checkbox())
        .collect();
    surface.action_columns(
        "Immediate Actions (This Week)",
        &immediate,
        "Ongoing Actions",
        &ongoing,
    )?;

    let next = if agenda.next_meeting.is_empty() {
        PLACEHOLDER
    } else {
        agenda.next_meeting.as_str()
    };
    let host = if agenda.host.is_empty() {
        PLACEHOLDER
    } else {
        agenda.host.as_str()
    };
    surface.footer_row(
        &format!("Next Meeting: {}", next),
        &format!("Host: {}", host),
    )
}
