//! Pay period resolution.
//!
//! A pay month `YYYY-MM` runs from `month_start_day` of the previous month
//! to `month_end_day` of the given month when the start day is after the end
//! day (28 → 27 by default). Otherwise the whole period lies inside the
//! given month. Days past the end of a short month clamp to its last day;
//! a clamped start never falls inside the previous period.

use crate::config::PayrollConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate};

fn prev_month(y: i32, m: u32) -> (i32, u32) {
    if m == 1 { (y - 1, 12) } else { (y, m - 1) }
}

fn next_month(y: i32, m: u32) -> (i32, u32) {
    if m == 12 { (y + 1, 1) } else { (y, m + 1) }
}

fn clamped(y: i32, m: u32, day: u32) -> AppResult<NaiveDate> {
    let last = days_in_month(y, m)
        .ok_or_else(|| AppError::InvalidDate(format!("invalid month {y}-{m:02}")))?;
    NaiveDate::from_ymd_opt(y, m, day.min(last))
        .ok_or_else(|| AppError::InvalidDate(format!("invalid date {y}-{m:02}-{day:02}")))
}

fn crosses_month(cfg: &PayrollConfig) -> bool {
    cfg.month_start_day > cfg.month_end_day
}

/// Inclusive bounds of the pay month `year-month`.
pub fn pay_period(year: i32, month: u32, cfg: &PayrollConfig) -> AppResult<(NaiveDate, NaiveDate)> {
    let end = clamped(year, month, cfg.month_end_day)?;

    let start = if crosses_month(cfg) {
        let (py, pm) = prev_month(year, month);
        let start = clamped(py, pm, cfg.month_start_day)?;
        // the previous period ends on the (clamped) end day of that month
        let prev_end = clamped(py, pm, cfg.month_end_day)?;
        if start <= prev_end {
            prev_end.succ_opt().ok_or_else(|| {
                AppError::InvalidDate(format!("no day after {}", prev_end))
            })?
        } else {
            start
        }
    } else {
        clamped(year, month, cfg.month_start_day)?
    };

    Ok((start, end))
}

/// The pay period `date` belongs to.
///
/// When periods stay inside a month and `date` falls outside the configured
/// days, the period of the calendar month of `date` is returned.
pub fn period_containing(date: NaiveDate, cfg: &PayrollConfig) -> AppResult<(NaiveDate, NaiveDate)> {
    let (y, m) = (date.year(), date.month());

    if crosses_month(cfg) && date > clamped(y, m, cfg.month_end_day)? {
        let (ny, nm) = next_month(y, m);
        return pay_period(ny, nm, cfg);
    }

    pay_period(y, m, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_period_rolls_over_on_the_28th() {
        let cfg = PayrollConfig::default();
        assert_eq!(
            pay_period(2024, 3, &cfg).unwrap(),
            (ymd(2024, 2, 28), ymd(2024, 3, 27))
        );
        assert_eq!(
            pay_period(2024, 1, &cfg).unwrap(),
            (ymd(2023, 12, 28), ymd(2024, 1, 27))
        );
    }

    #[test]
    fn calendar_month_period() {
        let cfg = PayrollConfig {
            month_start_day: 1,
            month_end_day: 31,
            ..PayrollConfig::default()
        };
        assert_eq!(
            pay_period(2023, 2, &cfg).unwrap(),
            (ymd(2023, 2, 1), ymd(2023, 2, 28))
        );
    }

    #[test]
    fn start_day_clamps_to_short_month() {
        let cfg = PayrollConfig {
            month_start_day: 31,
            month_end_day: 30,
            ..PayrollConfig::default()
        };
        // February ends on its last day (the 30th clamps to the 29th)
        assert_eq!(
            pay_period(2024, 2, &cfg).unwrap(),
            (ymd(2024, 1, 31), ymd(2024, 2, 29))
        );
        assert_eq!(
            pay_period(2024, 3, &cfg).unwrap(),
            (ymd(2024, 3, 1), ymd(2024, 3, 30))
        );
    }

    #[test]
    fn consecutive_periods_never_overlap() {
        let cfg = PayrollConfig {
            month_start_day: 29,
            month_end_day: 28,
            ..PayrollConfig::default()
        };
        assert_eq!(
            pay_period(2023, 2, &cfg).unwrap(),
            (ymd(2023, 1, 29), ymd(2023, 2, 28))
        );
        assert_eq!(
            pay_period(2023, 3, &cfg).unwrap(),
            (ymd(2023, 3, 1), ymd(2023, 3, 28))
        );
        assert_eq!(
            period_containing(ymd(2023, 2, 28), &cfg).unwrap(),
            (ymd(2023, 1, 29), ymd(2023, 2, 28))
        );

        for cfg in [
            cfg.clone(),
            PayrollConfig::default(),
            PayrollConfig {
                month_start_day: 31,
                month_end_day: 30,
                ..PayrollConfig::default()
            },
        ] {
            for year in [2023, 2024] {
                for month in 1..12 {
                    let (_, end) = pay_period(year, month, &cfg).unwrap();
                    let (next_start, _) = pay_period(year, month + 1, &cfg).unwrap();
                    assert_eq!(end.succ_opt(), Some(next_start), "{year}-{month}");
                }
            }
        }
    }

    #[test]
    fn containing_period_follows_the_end_day() {
        let cfg = PayrollConfig::default();
        assert_eq!(
            period_containing(ymd(2024, 3, 27), &cfg).unwrap(),
            (ymd(2024, 2, 28), ymd(2024, 3, 27))
        );
        assert_eq!(
            period_containing(ymd(2024, 3, 28), &cfg).unwrap(),
            (ymd(2024, 3, 28), ymd(2024, 4, 27))
        );
        assert_eq!(
            period_containing(ymd(2024, 12, 30), &cfg).unwrap(),
            (ymd(2024, 12, 28), ymd(2025, 1, 27))
        );
    }
}
