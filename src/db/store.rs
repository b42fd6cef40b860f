//! Read side of the record store, as consumed by the payroll engine.

use crate::db::holidays::list_holidays;
use crate::db::pool::DbPool;
use crate::db::queries::query_records;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, Holiday};
use chrono::NaiveDate;
use rusqlite::Connection;

pub trait RecordSource {
    /// Records with dates in [start, end], ordered by date.
    fn query(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<AttendanceRecord>>;

    /// Holidays with dates in [start, end], ordered by date.
    fn list_holidays(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Holiday>>;
}

impl RecordSource for Connection {
    fn query(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<AttendanceRecord>> {
        query_records(self, start, end)
    }

    fn list_holidays(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Holiday>> {
        list_holidays(self, start, end)
    }
}

impl RecordSource for DbPool {
    fn query(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<AttendanceRecord>> {
        RecordSource::query(&self.conn, start, end)
    }

    fn list_holidays(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Holiday>> {
        RecordSource::list_holidays(&self.conn, start, end)
    }
}
