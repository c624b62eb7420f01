use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::surface::{self, TextSurface};

/// Print the current agenda to the terminal.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(cfg)?;
    let agenda = store.load_current()?;

    let mut text = TextSurface::new();
    surface::render(&agenda, &mut text)?;
    println!("{}", text.finish());
    Ok(())
}
