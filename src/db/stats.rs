use crate::db::holidays::count_holidays;
use crate::db::log::count_operation;
use crate::db::pool::DbPool;
use crate::db::queries::record_bounds;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RECORDS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))?;
    println!(
        "{}• Attendance records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!(
        "{}• Holidays:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        count_holidays(&pool.conn)?,
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let bounds = record_bounds(&pool.conn)?;
    let (fmt_first, fmt_last) = match bounds {
        Some((f, l)) => (f.to_string(), l.to_string()),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) COVERAGE (records / days in range)
    //
    if let Some((f, l)) = bounds {
        let days = (l - f).num_days() + 1;
        let coverage = count as f64 * 100.0 / days as f64;
        println!("{}• Days with a record:{} {:.1}%", CYAN, RESET, coverage);
    }

    println!(
        "{}• Migrations applied:{} {}",
        CYAN,
        RESET,
        count_operation(&pool.conn, "migration_applied")?
    );

    println!();
    Ok(())
}
