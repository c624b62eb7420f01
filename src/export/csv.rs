use crate::errors::AppResult;
use crate::export::model::{agenda_to_rows, get_headers};
use crate::export::notify_export_success;
use crate::models::agenda::Agenda;
use csv::Writer;
use std::path::Path;

/// Write the scheduled rows as CSV.
pub(crate) fn export_csv(agenda: &Agenda, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in agenda_to_rows(agenda) {
        wtr.write_record(&[
            row.position.to_string(),
            row.item,
            row.start,
            row.length_minutes.to_string(),
            row.speaker,
            row.notes,
            row.sub_item.to_string(),
        ])?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
