use crate::config::Config;
use crate::core::reset;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;

/// Reset the current agenda for the next meeting, keeping the structure.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(cfg)?;
    let template = cfg.load_template()?;

    let mut agenda = store.load_current()?;
    reset::reset(&mut agenda, &template);
    store.save_current(&agenda)?;

    success("Current agenda has been reset for next meeting");
    Ok(())
}
