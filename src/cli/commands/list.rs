use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::surface::{self, TextSurface};
use crate::utils::formatting::bold;
use crate::utils::table::Table;

/// List archived meetings, oldest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { details } = cmd {
        let store = Store::open(cfg)?;
        let entries = store.load_archive()?;

        if entries.is_empty() {
            println!("No archived meetings yet.");
            return Ok(());
        }

        if *details {
            for entry in &entries {
                println!("{}", bold(&entry.banner()));
                let mut text = TextSurface::new();
                surface::render(&entry.agenda, &mut text)?;
                println!("{}", text.finish());
            }
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Title", "Items"]);
        for entry in &entries {
            table.add_row(vec![
                entry.meeting_date.to_string(),
                entry.agenda.title.clone(),
                entry.agenda.rows.len().to_string(),
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
