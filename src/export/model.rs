use crate::models::agenda::Agenda;
use serde::Serialize;

/// Flat per-row shape for CSV/JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct AgendaRowExport {
    pub position: usize,
    pub item: String,
    pub start: String,
    pub length_minutes: u32,
    pub speaker: String,
    pub notes: String,
    pub sub_item: bool,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "position",
        "item",
        "start",
        "length_minutes",
        "speaker",
        "notes",
        "sub_item",
    ]
}

pub(crate) fn agenda_to_rows(agenda: &Agenda) -> Vec<AgendaRowExport> {
    agenda
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| AgendaRowExport {
            position: i + 1,
            item: row.item.label.trim().to_string(),
            start: row.start_label(),
            length_minutes: row.item.duration_minutes,
            speaker: row.item.speaker.clone(),
            notes: row.item.notes.clone(),
            sub_item: row.item.is_sub_item(),
        })
        .collect()
}
