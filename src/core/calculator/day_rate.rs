//! Working days of a period and the money values derived from them.

use crate::config::PayrollConfig;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashSet;

/// Round a money value to the cent, halves away from zero.
pub fn to_cents(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Days of [start, end] that are neither holidays nor non-working weekdays.
pub fn working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HashSet<NaiveDate>,
    cfg: &PayrollConfig,
) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !holidays.contains(d) && cfg.is_working_weekday(d.weekday()))
        .count() as u32
}

/// Money values shared by every day of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRates {
    pub gross: Decimal,
    pub full_day: Decimal,
    pub half_day: Decimal,
    /// Only needed when an hour cut fires.
    pub hourly: Option<Decimal>,
}

impl DayRates {
    /// Resolve gross pay and the full-day amount.
    ///
    /// With a monthly salary the full day is the salary split over
    /// `month_working_days`, the working days of the whole pay month (or
    /// over `salary_divisor_days` when set). Without one, pay is hourly: a
    /// full day is `hourly_rate × expected_daily_hours` and gross is that
    /// amount times `range_working_days`.
    pub fn resolve(
        cfg: &PayrollConfig,
        month_working_days: u32,
        range_working_days: u32,
    ) -> AppResult<Self> {
        let hourly = cfg.hourly_rate();

        let (gross, full_day) = match cfg.monthly_salary() {
            Some(salary) => {
                let divisor = cfg.salary_divisor_days.unwrap_or(month_working_days);
                let full_day = if divisor == 0 {
                    Decimal::ZERO
                } else {
                    to_cents(salary / Decimal::from(divisor))
                };
                (salary, full_day)
            }
            None => {
                let (rate, hours) = match (hourly, cfg.expected_daily_hours()) {
                    (Some(r), Some(h)) => (r, h),
                    _ => {
                        return Err(AppError::MissingConfiguration(
                            "set monthly_salary, or hourly_rate and expected_daily_hours".into(),
                        ));
                    }
                };
                let full_day = to_cents(rate * hours);
                (full_day * Decimal::from(range_working_days), full_day)
            }
        };

        Ok(Self {
            gross,
            full_day,
            half_day: to_cents(full_day / Decimal::TWO),
            hourly,
        })
    }

    /// Deduction for one late hour.
    pub fn hour_cut(&self) -> AppResult<Decimal> {
        self.hourly.map(to_cents).ok_or_else(|| {
            AppError::MissingConfiguration("hourly_rate is required to apply an hour cut".into())
        })
    }
}
