//! Payroll rules section of the configuration file.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What happens to the late counter once it triggers a day cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LateCounterPolicy {
    /// The counter goes back to zero: one day cut every N late arrivals.
    #[default]
    Reset,
    /// The counter keeps growing: every late arrival from the N-th onward costs a day.
    Accumulate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    pub monthly_salary: Option<Decimal>,
    pub hourly_rate: Option<Decimal>,
    pub expected_daily_hours: Option<Decimal>,
    pub month_start_day: u32,
    pub month_end_day: u32,
    pub late_threshold: NaiveTime,
    pub hour_cut_threshold: NaiveTime,
    pub half_day_threshold: NaiveTime,
    pub late_count_for_day_cut: u32,
    pub late_counter_policy: LateCounterPolicy,
    pub hour_cut_counts_as_late: bool,
    pub non_working_weekdays: Vec<Weekday>,
    pub salary_divisor_days: Option<u32>,
    /// Absences per report that are paid anyway, earliest first.
    pub paid_days_off_per_period: u32,
    /// Also print the net earned up to today in `report`.
    pub show_net_to_date: bool,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            monthly_salary: None,
            hourly_rate: None,
            expected_daily_hours: Some(Decimal::from(8)),
            month_start_day: 28,
            month_end_day: 27,
            late_threshold: hm(9, 15),
            hour_cut_threshold: hm(10, 0),
            half_day_threshold: hm(12, 0),
            late_count_for_day_cut: 3,
            late_counter_policy: LateCounterPolicy::Reset,
            hour_cut_counts_as_late: false,
            non_working_weekdays: Vec::new(),
            salary_divisor_days: None,
            paid_days_off_per_period: 0,
            show_net_to_date: false,
        }
    }
}

/// Zero (the value a fresh install starts with) means "not configured".
fn positive(v: Option<Decimal>) -> Option<Decimal> {
    v.filter(|d| *d > Decimal::ZERO)
}

impl PayrollConfig {
    pub fn monthly_salary(&self) -> Option<Decimal> {
        positive(self.monthly_salary)
    }

    pub fn hourly_rate(&self) -> Option<Decimal> {
        positive(self.hourly_rate)
    }

    pub fn expected_daily_hours(&self) -> Option<Decimal> {
        positive(self.expected_daily_hours)
    }

    pub fn is_working_weekday(&self, day: Weekday) -> bool {
        !self.non_working_weekdays.contains(&day)
    }

    /// Structural checks that do not depend on which rules fire.
    pub fn validate(&self) -> AppResult<()> {
        for (name, day) in [
            ("month_start_day", self.month_start_day),
            ("month_end_day", self.month_end_day),
        ] {
            if !(1..=31).contains(&day) {
                return Err(AppError::Config(format!(
                    "{name} must be between 1 and 31, got {day}"
                )));
            }
        }

        if !(self.late_threshold < self.hour_cut_threshold
            && self.hour_cut_threshold < self.half_day_threshold)
        {
            return Err(AppError::Config(format!(
                "thresholds must be increasing: late {} < hour cut {} < half day {}",
                self.late_threshold, self.hour_cut_threshold, self.half_day_threshold
            )));
        }

        if self.salary_divisor_days == Some(0) {
            return Err(AppError::Config(
                "salary_divisor_days must be greater than zero".into(),
            ));
        }

        for (name, v) in [
            ("monthly_salary", self.monthly_salary),
            ("hourly_rate", self.hourly_rate),
            ("expected_daily_hours", self.expected_daily_hours),
        ] {
            if let Some(d) = v
                && d < Decimal::ZERO
            {
                return Err(AppError::Config(format!("{name} cannot be negative")));
            }
        }

        Ok(())
    }
}
