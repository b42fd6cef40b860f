use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::core::holiday::HolidayLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Holiday { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::open(&cfg.database)?;

    match action {
        HolidayAction::Add { date, description } => {
            let d = date::parse_date(date)?;
            let h = HolidayLogic::add(&mut pool, d, description.as_deref())?;
            if h.description.is_empty() {
                success(format!("{} marked as holiday.", d));
            } else {
                success(format!("{} marked as holiday: {}.", d, h.description));
            }
        }
        HolidayAction::Del { date } => {
            let d = date::parse_date(date)?;
            HolidayLogic::remove(&mut pool, d)?;
            success(format!("Holiday {} removed.", d));
        }
        HolidayAction::List { period } => {
            let (start, end) = match period {
                Some(p) => date::parse_period(p)?,
                None => current_year(),
            };

            let holidays = HolidayLogic::list(&pool, start, end)?;
            if holidays.is_empty() {
                info(format!("No holidays between {} and {}.", start, end));
                return Ok(());
            }

            let mut table = Table::new(vec![Column::left("Date"), Column::left("Description")]);
            for h in &holidays {
                table.add_row(vec![
                    date::format_date(h.date, &cfg.show_weekday),
                    h.description.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}

fn current_year() -> (NaiveDate, NaiveDate) {
    let today = date::today();
    let first = today.with_ordinal(1).unwrap_or(today);
    let last = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
    (first, last)
}
