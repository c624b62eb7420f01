use crate::errors::AppResult;
use crate::export::model::agenda_to_rows;
use crate::export::notify_export_success;
use crate::models::agenda::Agenda;
use std::path::Path;

/// Write the scheduled rows as pretty-printed JSON.
pub(crate) fn export_json(agenda: &Agenda, path: &Path) -> AppResult<()> {
    let rows = agenda_to_rows(agenda);
    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
