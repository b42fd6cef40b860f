use crate::db::holidays::{add_holiday, list_holidays, remove_holiday};
use crate::db::log::ttlog_nonblocking;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Holiday;
use chrono::NaiveDate;

pub struct HolidayLogic;

impl HolidayLogic {
    pub fn add(pool: &mut DbPool, date: NaiveDate, description: Option<&str>) -> AppResult<Holiday> {
        let holiday = Holiday::new(date, description.unwrap_or("").trim());
        add_holiday(&pool.conn, holiday.date, &holiday.description)?;

        ttlog_nonblocking(
            &pool.conn,
            "holiday_add",
            &date.to_string(),
            &holiday.description,
        );
        Ok(holiday)
    }

    pub fn remove(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        remove_holiday(&pool.conn, date)?;
        ttlog_nonblocking(&pool.conn, "holiday_del", &date.to_string(), "Holiday removed");
        Ok(())
    }

    pub fn list(pool: &DbPool, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Holiday>> {
        list_holidays(&pool.conn, start, end)
    }
}
