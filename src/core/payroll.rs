use crate::config::PayrollConfig;
use crate::core::calculator::build_report;
use crate::core::period::period_containing;
use crate::db::store::RecordSource;
use crate::errors::AppResult;
use crate::models::PayrollReport;
use chrono::NaiveDate;

/// Loads what the engine needs from a record source and runs it.
pub struct PayrollLogic;

impl PayrollLogic {
    pub fn generate<S: RecordSource + ?Sized>(
        source: &S,
        cfg: &PayrollConfig,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<PayrollReport> {
        let records = source.query(start, end)?;

        // holidays of the pay month set the day rate, even outside the range
        let (month_start, month_end) = period_containing(start, cfg)?;
        let holidays = source.list_holidays(start.min(month_start), end.max(month_end))?;

        build_report(start, end, &records, &holidays, cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::core::holiday::HolidayLogic;
    use crate::db::pool::DbPool;
    use crate::errors::AppError;
    use crate::models::{AttendanceRecord, DayStatus, Holiday};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn cfg() -> PayrollConfig {
        PayrollConfig {
            monthly_salary: Some(Decimal::from(30000)),
            hourly_rate: Some(Decimal::from(150)),
            ..PayrollConfig::default()
        }
    }

    /// In-memory source, to run the engine without SQLite.
    struct Fixed(Vec<AttendanceRecord>, Vec<Holiday>);

    impl RecordSource for Fixed {
        fn query(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<AttendanceRecord>> {
            Ok(self
                .0
                .iter()
                .filter(|r| r.date >= start && r.date <= end)
                .cloned()
                .collect())
        }

        fn list_holidays(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Holiday>> {
            Ok(self
                .1
                .iter()
                .filter(|h| h.date >= start && h.date <= end)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn report_from_database() {
        let mut pool = DbPool::in_memory().unwrap();
        AddLogic::apply(&mut pool, d(1), NaiveTime::from_hms_opt(10, 30, 0), None).unwrap();
        AddLogic::apply(&mut pool, d(2), NaiveTime::from_hms_opt(9, 0, 0), None).unwrap();
        HolidayLogic::add(&mut pool, d(3), Some("Day off")).unwrap();

        let report = PayrollLogic::generate(&pool, &cfg(), d(1), d(3)).unwrap();
        assert_eq!(report.day(d(1)).unwrap().deduction, Decimal::from(150));
        assert_eq!(report.day(d(2)).unwrap().status, DayStatus::OnTime);
        assert_eq!(report.day(d(3)).unwrap().status, DayStatus::Holiday);
        assert_eq!(report.total_working_days, 2);
    }

    #[test]
    fn same_inputs_same_report() {
        let src = Fixed(
            vec![AttendanceRecord::new(d(2), NaiveTime::from_hms_opt(9, 40, 0), None).unwrap()],
            vec![Holiday::new(d(4), "")],
        );
        let a = PayrollLogic::generate(&src, &cfg(), d(1), d(10)).unwrap();
        let b = PayrollLogic::generate(&src, &cfg(), d(1), d(10)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn month_holidays_outside_the_range_are_loaded() {
        let cfg = PayrollConfig {
            month_start_day: 1,
            month_end_day: 30,
            ..cfg()
        };
        let src = Fixed(Vec::new(), vec![Holiday::new(d(25), ""), Holiday::new(d(26), "")]);

        let report = PayrollLogic::generate(&src, &cfg, d(4), d(4)).unwrap();
        // 30000 over the 28 working days of 1st → 30th
        assert_eq!(report.full_day_amount, Decimal::new(107143, 2));
        assert_eq!(report.total_deductions, Decimal::new(107143, 2));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let src = Fixed(Vec::new(), Vec::new());
        assert!(matches!(
            PayrollLogic::generate(&src, &cfg(), d(10), d(1)),
            Err(AppError::InvalidRange { .. })
        ));
    }
}
