use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its directory
///  - all pending DB migrations
pub fn handle(cli: &Cli, current: &Config) -> AppResult<()> {
    //
    // 1) Configuration (`--db` is already resolved into `current`)
    //
    let custom_db = cli.db.as_ref().map(|_| current.database.as_str());
    let cfg = Config::init_all(custom_db, cli.test)?;

    println!("⚙️  Initializing rworklog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    //
    // 2) Open DB (creates file, tables, migrations)
    //
    let store = Store::open(&cfg.database)?;

    success(format!("Database initialized at {}", &cfg.database));

    //
    // 3) Internal log (non-blocking)
    //
    if let Err(e) = log::ttlog(
        &store.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rworklog initialization completed!");
    Ok(())
}
