use crate::db::log::ttlog_nonblocking;
use crate::db::pool::DbPool;
use crate::db::queries::{get_record, upsert_record};
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` and `edit` commands.
pub struct AddLogic;

fn describe(rec: &AttendanceRecord) -> String {
    format!(
        "in {}, out {}",
        rec.time_in_str().unwrap_or_else(|| "--:--".into()),
        rec.time_out_str().unwrap_or_else(|| "--:--".into())
    )
}

impl AddLogic {
    /// Create or replace the record for `date` with exactly the given times.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        time_in: Option<NaiveTime>,
        time_out: Option<NaiveTime>,
    ) -> AppResult<AttendanceRecord> {
        if time_in.is_none() && time_out.is_none() {
            return Err(AppError::InvalidRecord(
                "Nothing to do: specify at least --in or --out.".into(),
            ));
        }

        let rec = AttendanceRecord::new(date, time_in, time_out)?;
        upsert_record(&pool.conn, &rec)?;

        ttlog_nonblocking(&pool.conn, "add", &rec.date_str(), &describe(&rec));
        Ok(rec)
    }

    /// Merge the given changes into the existing record for `date`.
    ///
    /// Fields not mentioned keep their stored value; `clear_out` removes
    /// the time out.
    pub fn edit(
        pool: &mut DbPool,
        date: NaiveDate,
        time_in: Option<NaiveTime>,
        time_out: Option<NaiveTime>,
        clear_out: bool,
    ) -> AppResult<AttendanceRecord> {
        let mut rec = get_record(&pool.conn, date)?
            .ok_or_else(|| AppError::NotFound(format!("no attendance record for {}", date)))?;

        if time_in.is_none() && time_out.is_none() && !clear_out {
            return Err(AppError::InvalidRecord(
                "Nothing to do: specify --in, --out or --clear-out.".into(),
            ));
        }

        if let Some(t) = time_in {
            rec.time_in = Some(t);
        }
        if clear_out {
            rec.time_out = None;
        } else if let Some(t) = time_out {
            rec.time_out = Some(t);
        }

        upsert_record(&pool.conn, &rec)?;

        ttlog_nonblocking(&pool.conn, "edit", &rec.date_str(), &describe(&rec));
        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn t(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn add_replaces_the_whole_record() {
        let mut pool = DbPool::in_memory().unwrap();
        AddLogic::apply(&mut pool, d(), t(9, 0), t(18, 0)).unwrap();
        let rec = AddLogic::apply(&mut pool, d(), t(9, 30), None).unwrap();

        assert_eq!(rec.time_out, None);
        assert_eq!(get_record(&pool.conn, d()).unwrap(), Some(rec));
    }

    #[test]
    fn edit_keeps_unmentioned_fields() {
        let mut pool = DbPool::in_memory().unwrap();
        AddLogic::apply(&mut pool, d(), t(9, 0), t(18, 0)).unwrap();

        let rec = AddLogic::edit(&mut pool, d(), t(9, 45), None, false).unwrap();
        assert_eq!((rec.time_in, rec.time_out), (t(9, 45), t(18, 0)));

        let rec = AddLogic::edit(&mut pool, d(), None, None, true).unwrap();
        assert_eq!((rec.time_in, rec.time_out), (t(9, 45), None));
    }

    #[test]
    fn edit_of_missing_record_is_not_found() {
        let mut pool = DbPool::in_memory().unwrap();
        assert!(matches!(
            AddLogic::edit(&mut pool, d(), t(9, 0), None, false),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn edit_cannot_move_in_after_out() {
        let mut pool = DbPool::in_memory().unwrap();
        AddLogic::apply(&mut pool, d(), t(9, 0), t(12, 0)).unwrap();
        assert!(matches!(
            AddLogic::edit(&mut pool, d(), t(13, 0), None, false),
            Err(AppError::InvalidRecord(_))
        ));

        let stored = get_record(&pool.conn, d()).unwrap().unwrap();
        assert_eq!(stored.time_in, t(9, 0));
    }

    #[test]
    fn add_needs_a_time() {
        let mut pool = DbPool::in_memory().unwrap();
        assert!(AddLogic::apply(&mut pool, d(), None, None).is_err());
    }
}
