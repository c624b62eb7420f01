//! Appends the current agenda to the historical log.

use crate::errors::AppResult;
use crate::models::agenda::ArchiveEntry;
use crate::store::Store;
use crate::utils::date;

/// Freeze the working copy into the archive and return the stored entry.
/// The entry is keyed by the agenda's meeting date when one was filled in,
/// otherwise by today.
pub fn archive(store: &Store) -> AppResult<ArchiveEntry> {
    let agenda = store.load_current()?;

    let meeting_date = agenda.meeting_date.unwrap_or_else(date::today);
    let entry = ArchiveEntry {
        meeting_date,
        agenda,
    };

    let mut entries = store.load_archive()?;
    entries.push(entry.clone());
    store.save_archive(&entries)?;

    Ok(entry)
}
