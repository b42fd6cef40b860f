//! Derived payroll values: per-day classifications and the period report.
//! Nothing here is stored; everything is rebuilt from records on demand.

use super::day_status::{DayStatus, DeductionCategory};
use crate::core::calculator::to_cents;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub time_in: Option<NaiveTime>,
    pub time_out: Option<NaiveTime>,
    pub worked_minutes: Option<i64>,
    /// Direct deduction for this day. Late-count day cuts are kept apart.
    pub deduction: Decimal,
    pub category: Option<DeductionCategory>,
    /// Whether this day feeds the cumulative late counter.
    pub counts_as_late: bool,
}

impl DayClassification {
    pub fn free(date: NaiveDate, status: DayStatus) -> Self {
        Self {
            date,
            status,
            time_in: None,
            time_out: None,
            worked_minutes: None,
            deduction: Decimal::ZERO,
            category: None,
            counts_as_late: false,
        }
    }
}

/// Deduction totals per category, with the number of occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeductionBreakdown {
    pub absence: Decimal,
    pub hour_cut: Decimal,
    pub half_day: Decimal,
    pub late_day_cut: Decimal,

    pub absent_days: u32,
    pub hour_cuts: u32,
    pub half_days: u32,
    pub late_day_cuts: u32,
    pub late_arrivals: u32,
    pub paid_days_off: u32,
}

impl DeductionBreakdown {
    pub fn add(&mut self, category: DeductionCategory, amount: Decimal) {
        match category {
            DeductionCategory::Absence => {
                self.absence += amount;
                self.absent_days += 1;
            }
            DeductionCategory::HourCut => {
                self.hour_cut += amount;
                self.hour_cuts += 1;
            }
            DeductionCategory::HalfDay => {
                self.half_day += amount;
                self.half_days += 1;
            }
            DeductionCategory::LateDayCut => {
                self.late_day_cut += amount;
                self.late_day_cuts += 1;
            }
        }
    }

    pub fn amount(&self, category: DeductionCategory) -> Decimal {
        match category {
            DeductionCategory::Absence => self.absence,
            DeductionCategory::HourCut => self.hour_cut,
            DeductionCategory::HalfDay => self.half_day,
            DeductionCategory::LateDayCut => self.late_day_cut,
        }
    }

    pub fn total(&self) -> Decimal {
        self.absence + self.hour_cut + self.half_day + self.late_day_cut
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollReport {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_working_days: u32,
    /// Amount used for absences, half days and late-count cuts.
    pub full_day_amount: Decimal,
    pub gross: Decimal,
    pub total_deductions: Decimal,
    pub net: Decimal,
    pub breakdown: DeductionBreakdown,
    pub days: Vec<DayClassification>,
    /// Dates whose late arrival triggered a full-day cut.
    pub late_day_cut_dates: Vec<NaiveDate>,
}

impl PayrollReport {
    pub fn day(&self, date: NaiveDate) -> Option<&DayClassification> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn count(&self, status: DayStatus) -> usize {
        self.days.iter().filter(|d| d.status == status).count()
    }

    /// Net earned from the first day of the report up to `as_of` included.
    ///
    /// Gross accrues evenly over the calendar days of the report; only the
    /// deductions dated up to `as_of` are subtracted. `None` when `as_of`
    /// is before the report starts. Past the end it equals `net`.
    pub fn net_to_date(&self, as_of: NaiveDate) -> Option<Decimal> {
        if as_of < self.period_start {
            return None;
        }
        if as_of >= self.period_end {
            return Some(self.net);
        }

        let total_days = (self.period_end - self.period_start).num_days() + 1;
        let elapsed = (as_of - self.period_start).num_days() + 1;
        let gross = to_cents(self.gross * Decimal::from(elapsed) / Decimal::from(total_days));

        let day_cuts: Decimal = self
            .days
            .iter()
            .filter(|d| d.date <= as_of)
            .map(|d| d.deduction)
            .sum();
        let late_cuts = self.full_day_amount
            * Decimal::from(self.late_day_cut_dates.iter().filter(|d| **d <= as_of).count());

        Some(gross - day_cuts - late_cuts)
    }
}
