//! Automatic time-in / time-out when a session starts or ends.

use crate::db::log::ttlog_nonblocking;
use crate::db::pool::DbPool;
use crate::db::queries::{get_record, upsert_record};
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use crate::utils::time::truncate_seconds;
use chrono::{NaiveDateTime, NaiveTime};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// First start of the day: record created.
    LoggedIn(NaiveTime),
    /// Record had a time out: it was cleared, the session goes on.
    Resumed,
    /// Record existed without time in: time in set now.
    TimeInSet(NaiveTime),
    /// Already logged in, nothing changed.
    AlreadyIn(NaiveTime),
}

impl fmt::Display for StartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartOutcome::LoggedIn(t) => write!(f, "Logged IN automatically at {}.", t),
            StartOutcome::Resumed => write!(f, "You are back IN. Previous OUT time cleared."),
            StartOutcome::TimeInSet(t) => write!(f, "IN time set to {}.", t),
            StartOutcome::AlreadyIn(t) => {
                write!(f, "You are already logged IN since {}. Welcome back!", t)
            }
        }
    }
}

pub struct LifecycleLogic;

impl LifecycleLogic {
    pub fn on_app_start(pool: &mut DbPool, now: NaiveDateTime) -> AppResult<StartOutcome> {
        let now = truncate_seconds(now);
        let (date, time) = (now.date(), now.time());

        let outcome = match get_record(&pool.conn, date)? {
            None => {
                upsert_record(&pool.conn, &AttendanceRecord::new(date, Some(time), None)?)?;
                StartOutcome::LoggedIn(time)
            }
            Some(mut rec) if rec.time_out.is_some() => {
                rec.time_out = None;
                if rec.time_in.is_none() {
                    rec.time_in = Some(time);
                }
                upsert_record(&pool.conn, &rec)?;
                StartOutcome::Resumed
            }
            Some(mut rec) => match rec.time_in {
                Some(t_in) => StartOutcome::AlreadyIn(t_in),
                None => {
                    rec.time_in = Some(time);
                    upsert_record(&pool.conn, &rec)?;
                    StartOutcome::TimeInSet(time)
                }
            },
        };

        if !matches!(outcome, StartOutcome::AlreadyIn(_)) {
            ttlog_nonblocking(&pool.conn, "start", &date.to_string(), &outcome.to_string());
        }
        Ok(outcome)
    }

    /// Set today's time out, overwriting an earlier one.
    pub fn on_app_close(pool: &mut DbPool, now: NaiveDateTime) -> AppResult<AttendanceRecord> {
        let now = truncate_seconds(now);
        let (date, time) = (now.date(), now.time());

        let mut rec = match get_record(&pool.conn, date)? {
            Some(r) if r.time_in.is_some() => r,
            _ => {
                return Err(AppError::NotFound(format!(
                    "Cannot log OUT: no IN time recorded for {}",
                    date
                )));
            }
        };

        rec.time_out = Some(time);
        upsert_record(&pool.conn, &rec)?;

        ttlog_nonblocking(
            &pool.conn,
            "stop",
            &date.to_string(),
            &format!("Logged OUT at {}", time),
        );
        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(h, m, 7, 450)
            .unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 7).unwrap()
    }

    #[test]
    fn first_start_creates_the_record() {
        let mut pool = DbPool::in_memory().unwrap();
        let out = LifecycleLogic::on_app_start(&mut pool, at(9, 2)).unwrap();
        assert_eq!(out, StartOutcome::LoggedIn(t(9, 2)));

        let rec = get_record(&pool.conn, at(9, 2).date()).unwrap().unwrap();
        assert_eq!(rec.time_in, Some(t(9, 2)));
        assert_eq!(rec.time_out, None);
    }

    #[test]
    fn second_start_changes_nothing() {
        let mut pool = DbPool::in_memory().unwrap();
        LifecycleLogic::on_app_start(&mut pool, at(9, 2)).unwrap();
        let out = LifecycleLogic::on_app_start(&mut pool, at(11, 0)).unwrap();
        assert_eq!(out, StartOutcome::AlreadyIn(t(9, 2)));
    }

    #[test]
    fn start_after_close_resumes_the_session() {
        let mut pool = DbPool::in_memory().unwrap();
        LifecycleLogic::on_app_start(&mut pool, at(9, 2)).unwrap();
        LifecycleLogic::on_app_close(&mut pool, at(13, 0)).unwrap();

        let out = LifecycleLogic::on_app_start(&mut pool, at(14, 0)).unwrap();
        assert_eq!(out, StartOutcome::Resumed);

        let rec = get_record(&pool.conn, at(9, 2).date()).unwrap().unwrap();
        assert_eq!((rec.time_in, rec.time_out), (Some(t(9, 2)), None));
    }

    #[test]
    fn close_overwrites_earlier_time_out() {
        let mut pool = DbPool::in_memory().unwrap();
        LifecycleLogic::on_app_start(&mut pool, at(9, 2)).unwrap();
        LifecycleLogic::on_app_close(&mut pool, at(13, 0)).unwrap();
        let rec = LifecycleLogic::on_app_close(&mut pool, at(18, 30)).unwrap();
        assert_eq!(rec.time_out, Some(t(18, 30)));
    }

    #[test]
    fn close_without_time_in_is_not_found() {
        let mut pool = DbPool::in_memory().unwrap();
        assert!(matches!(
            LifecycleLogic::on_app_close(&mut pool, at(18, 0)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn close_before_time_in_is_rejected() {
        let mut pool = DbPool::in_memory().unwrap();
        LifecycleLogic::on_app_start(&mut pool, at(9, 2)).unwrap();
        assert!(matches!(
            LifecycleLogic::on_app_close(&mut pool, at(8, 0)),
            Err(AppError::InvalidRecord(_))
        ));
    }
}
