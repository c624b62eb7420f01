use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{archive, reset};
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date::display_date;

/// Append the current agenda to the archive, optionally resetting it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Archive { reset: do_reset } = cmd {
        let store = Store::open(cfg)?;
        let entry = archive::archive(&store)?;

        success(format!(
            "Agenda archived for {}",
            display_date(&entry.meeting_date)
        ));

        if *do_reset {
            let template = cfg.load_template()?;
            let mut agenda = store.load_current()?;
            reset::reset(&mut agenda, &template);
            store.save_current(&agenda)?;
            success("Current agenda has been reset for next meeting");
        }
    }
    Ok(())
}
