use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{compose, schedule};
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::surface::{self, TextSurface};
use crate::ui::messages::success;

/// Build a fresh agenda from the template and make it the current one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New { at, force } = cmd {
        //
        // 1. Resolve the start time (flag, then config fallback)
        //
        let raw = at
            .as_deref()
            .or(cfg.default_start_time.as_deref())
            .ok_or_else(|| {
                AppError::Other(
                    "no start time given; use --at or set default_start_time in the config".into(),
                )
            })?;
        let start = schedule::parse_time_of_day(raw)?;

        //
        // 2. Refuse to clobber an existing agenda without --force
        //
        let store = Store::open(cfg)?;
        if store.has_current() && !force {
            return Err(AppError::AgendaExists);
        }

        //
        // 3. Compose and persist
        //
        let template = cfg.load_template()?;
        let agenda = compose::compose(&template, start);
        store.save_current(&agenda)?;

        success(format!(
            "Agenda created: {} items starting at {}",
            agenda.rows.len(),
            agenda
                .rows
                .first()
                .map(|r| r.start_label())
                .unwrap_or_else(|| start.format("%-I:%M %p").to_string())
        ));

        let mut text = TextSurface::new();
        surface::render(&agenda, &mut text)?;
        println!("{}", text.finish());
    }
    Ok(())
}
