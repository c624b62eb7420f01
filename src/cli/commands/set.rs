use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{self, Changes};
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;

/// Fill in fields of the current agenda.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        location,
        role,
        note,
        check,
        uncheck,
        next_meeting,
        host,
    } = cmd
    {
        //
        // 1. Parse flag values into a change set
        //
        let parsed_date = match date {
            Some(d) => {
                Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?)
            }
            None => None,
        };

        let changes = Changes {
            date: parsed_date,
            location: location.clone(),
            roles: split_pairs(role, |r| AppError::InvalidRole(r.to_string()))?,
            notes: parse_notes(note)?,
            check: check.clone(),
            uncheck: uncheck.clone(),
            next_meeting: next_meeting.clone(),
            host: host.clone(),
        };

        //
        // 2. Apply to the working copy
        //
        let store = Store::open(cfg)?;
        let mut agenda = store.load_current()?;
        edit::apply(&mut agenda, &changes)?;
        store.save_current(&agenda)?;

        success("Current agenda updated");
    }
    Ok(())
}

/// "KEY=VALUE" flag values into (key, value) pairs.
fn split_pairs(
    raw: &[String],
    err: impl Fn(&str) -> AppError,
) -> AppResult<Vec<(String, String)>> {
    raw.iter()
        .map(|s| {
            s.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .ok_or_else(|| err(s))
        })
        .collect()
}

/// "ITEM#=TEXT" flag values into (1-based index, text) pairs.
fn parse_notes(raw: &[String]) -> AppResult<Vec<(usize, String)>> {
    split_pairs(raw, |s| AppError::InvalidItem(s.to_string()))?
        .into_iter()
        .map(|(num, text)| {
            num.parse::<usize>()
                .map(|n| (n, text))
                .map_err(|_| AppError::InvalidItem(num))
        })
        .collect()
}
