use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

fn times(rec: &AttendanceRecord) -> String {
    format!(
        "in {} → out {}",
        rec.time_in_str().unwrap_or_else(|| "--:--".into()),
        rec.time_out_str().unwrap_or_else(|| "--:--".into())
    )
}

/// Create or replace the record of a day (`add`) or change part of it (`edit`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Add {
            date,
            time_in,
            time_out,
        } => {
            //
            // 1. Parse date and times
            //
            let d = date::parse_date(date)?;
            let t_in = parse_optional_time(time_in.as_ref())?;
            let t_out = parse_optional_time(time_out.as_ref())?;

            //
            // 2. Open DB and execute logic
            //
            let mut pool = DbPool::open(&cfg.database)?;
            let rec = AddLogic::apply(&mut pool, d, t_in, t_out)?;

            success(format!(
                "Record saved for {}: {}.",
                date::format_date(d, &cfg.show_weekday),
                times(&rec)
            ));
        }
        Commands::Edit {
            date,
            time_in,
            time_out,
            clear_out,
        } => {
            let d = date::parse_date(date)?;
            let t_in = parse_optional_time(time_in.as_ref())?;
            let t_out = parse_optional_time(time_out.as_ref())?;

            let mut pool = DbPool::open(&cfg.database)?;
            let rec = AddLogic::edit(&mut pool, d, t_in, t_out, *clear_out)?;

            success(format!(
                "Record updated for {}: {}.",
                date::format_date(d, &cfg.show_weekday),
                times(&rec)
            ));
        }
        _ => {}
    }

    Ok(())
}
