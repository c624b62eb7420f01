use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;

/// Handle the `init` command
///
/// This initializes:
///  - the workspace directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty archive
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.dir.clone(), cli.test)?;

    println!("⚙️  Initializing ragenda…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Workspace   : {}", cfg.workspace);

    Store::create(&cfg)?;

    println!("🎉 ragenda initialization completed!");
    Ok(())
}
