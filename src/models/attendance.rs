use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,             // ⇔ attendance.date (TEXT "YYYY-MM-DD", PK)
    pub time_in: Option<NaiveTime>,  // ⇔ attendance.time_in (TEXT "HH:MM:SS" or NULL)
    pub time_out: Option<NaiveTime>, // ⇔ attendance.time_out (TEXT "HH:MM:SS" or NULL)
}

impl AttendanceRecord {
    /// Build a record, rejecting a time_out earlier than time_in.
    pub fn new(
        date: NaiveDate,
        time_in: Option<NaiveTime>,
        time_out: Option<NaiveTime>,
    ) -> AppResult<Self> {
        let rec = Self {
            date,
            time_in,
            time_out,
        };
        rec.validate()?;
        Ok(rec)
    }

    pub fn validate(&self) -> AppResult<()> {
        if let (Some(t_in), Some(t_out)) = (self.time_in, self.time_out)
            && t_out < t_in
        {
            return Err(AppError::InvalidRecord(format!(
                "time out {} precedes time in {} on {}",
                t_out.format(TIME_FMT),
                t_in.format(TIME_FMT),
                self.date
            )));
        }
        Ok(())
    }

    /// Minutes between time_in and time_out, when both are set.
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.time_in, self.time_out) {
            (Some(t_in), Some(t_out)) => Some((t_out - t_in).num_minutes()),
            _ => None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    pub fn time_in_str(&self) -> Option<String> {
        self.time_in.map(|t| t.format(TIME_FMT).to_string())
    }

    pub fn time_out_str(&self) -> Option<String> {
        self.time_out.map(|t| t.format(TIME_FMT).to_string())
    }
}
