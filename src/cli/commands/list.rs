use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::period_containing;
use crate::db::pool::DbPool;
use crate::db::queries::{get_record, query_records};
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::List { period } => {
            let (start, end) = resolve_period(period, cfg)?;
            let pool = DbPool::open(&cfg.database)?;
            let records = query_records(&pool.conn, start, end)?;

            if records.is_empty() {
                info(format!("No attendance records between {} and {}.", start, end));
                return Ok(());
            }

            println!("📅 Attendance {} → {}\n", start, end);
            print!("{}", records_table(&records, cfg).render());
            println!("\n{} record(s)", records.len());
        }
        Commands::Show { date: date_str } => {
            let d = date::parse_date(date_str)?;
            let pool = DbPool::open(&cfg.database)?;

            match get_record(&pool.conn, d)? {
                Some(rec) => print!("{}", records_table(&[rec], cfg).render()),
                None => info(format!("No attendance record for {}.", d)),
            }
        }
        _ => {}
    }

    Ok(())
}

/// Explicit `--period`, or the pay period containing today.
fn resolve_period(period: &Option<String>, cfg: &Config) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => date::parse_period(p),
        None => period_containing(date::today(), &cfg.payroll),
    }
}

fn records_table(records: &[AttendanceRecord], cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("In"),
        Column::left("Out"),
        Column::right("Worked"),
    ]);

    for r in records {
        let worked = r
            .worked_minutes()
            .map(format_minutes)
            .unwrap_or_else(|| "-".into());

        table.add_row(vec![
            date::format_date(r.date, &cfg.show_weekday),
            colorize_in_out(&r.time_in_str().unwrap_or_else(|| "--:--".into()), true),
            colorize_in_out(&r.time_out_str().unwrap_or_else(|| "--:--".into()), false),
            colorize_optional(&worked),
        ]);
    }

    table
}
