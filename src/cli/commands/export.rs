use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::utils::date;
use std::path::PathBuf;

/// Export the current or an archived agenda to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        meeting,
    } = cmd
    {
        let store = Store::open(cfg)?;

        //
        // 1. Pick the agenda: current, or an archived meeting by date
        //
        let (agenda, stem) = match meeting {
            Some(raw) => {
                let wanted =
                    date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
                let entry = store
                    .load_archive()?
                    .into_iter()
                    .find(|e| e.meeting_date == wanted)
                    .ok_or_else(|| AppError::NoArchivedMeeting(wanted.to_string()))?;
                (entry.agenda, format!("agenda_{}", entry.meeting_date))
            }
            None => (store.load_current()?, "agenda".to_string()),
        };

        //
        // 2. Resolve the output path
        //
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(format!("{}.{}", stem, format.as_str())),
        };

        format.export(&agenda, &path)?;
    }
    Ok(())
}
