use crate::db::log::ttlog_nonblocking;
use crate::db::pool::DbPool;
use crate::db::queries::delete_record;
use crate::errors::AppResult;
use crate::models::attendance::DATE_FMT;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        delete_record(&pool.conn, date)?;

        let date_str = date.format(DATE_FMT).to_string();
        ttlog_nonblocking(&pool.conn, "del", &date_str, "Attendance record deleted");
        Ok(())
    }
}
