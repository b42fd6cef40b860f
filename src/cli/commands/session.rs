use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::{LifecycleLogic, StartOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use chrono::Local;

/// `start` / `stop`: the session hooks, run with the current local time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let now = Local::now().naive_local();

    match cmd {
        Commands::Start => {
            let mut pool = DbPool::open(&cfg.database)?;
            match LifecycleLogic::on_app_start(&mut pool, now)? {
                out @ StartOutcome::AlreadyIn(_) => info(out),
                out => success(out),
            }
        }
        Commands::Stop => {
            let mut pool = DbPool::open(&cfg.database)?;
            let rec = LifecycleLogic::on_app_close(&mut pool, now)?;
            success(format!(
                "Logged OUT at {}.",
                rec.time_out_str().unwrap_or_default()
            ));
        }
        _ => {}
    }

    Ok(())
}
