use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    let cfg = Config::init_all(cli.db.clone(), cli.config.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rPayroll…");

    //
    // 2️⃣ APERTURA DB + MIGRAZIONI
    //
    let pool = DbPool::open(&db_path)?;
    success(format!("Database initialized at {}", &db_path));

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    log::ttlog_nonblocking(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    if cfg.payroll.monthly_salary().is_none() && cfg.payroll.hourly_rate().is_none() {
        warning("Set monthly_salary or hourly_rate in the configuration (rpayroll config --edit).");
    }

    println!("🎉 rPayroll initialization completed!");
    Ok(())
}
