use crate::config::PayrollConfig;
use crate::core::calculator::classify::classify_day;
use crate::core::calculator::day_rate::{DayRates, working_days};
use crate::core::calculator::late_penalty::late_day_cuts;
use crate::core::period::period_containing;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceRecord, DayClassification, DayStatus, DeductionBreakdown, DeductionCategory,
    Holiday, PayrollReport,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// Build the payroll report for [start, end].
///
/// Pure function of its inputs: nothing is read from or written to the
/// store. Records outside the range are ignored. `holidays` must cover the
/// pay month containing `start` as well: the full-day amount is the monthly
/// salary over the working days of that whole month, whatever the range.
pub fn build_report(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AttendanceRecord],
    holidays: &[Holiday],
    cfg: &PayrollConfig,
) -> AppResult<PayrollReport> {
    // 1) Input checks
    cfg.validate()?;
    if start > end {
        return Err(AppError::InvalidRange { start, end });
    }

    let holiday_set: HashSet<NaiveDate> = holidays.iter().map(|h| h.date).collect();
    let by_date: HashMap<NaiveDate, &AttendanceRecord> =
        records.iter().map(|r| (r.date, r)).collect();

    // 2) Period-wide amounts
    let (month_start, month_end) = period_containing(start, cfg)?;
    let month_working_days = working_days(month_start, month_end, &holiday_set, cfg);
    let total_working_days = working_days(start, end, &holiday_set, cfg);
    let rates = DayRates::resolve(cfg, month_working_days, total_working_days)?;

    // 3) First pass: one classification per calendar day
    let mut days = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        days.push(classify_day(
            date,
            by_date.get(&date).copied(),
            holiday_set.contains(&date),
            cfg,
            &rates,
        )?);
    }

    // 4) Paid days off cover the earliest absences
    let paid_days_off = grant_paid_days_off(&mut days, cfg.paid_days_off_per_period);

    let mut breakdown = DeductionBreakdown {
        paid_days_off,
        ..DeductionBreakdown::default()
    };
    for day in &days {
        if let Some(cat) = day.category {
            breakdown.add(cat, day.deduction);
        }
        if day.counts_as_late {
            breakdown.late_arrivals += 1;
        }
    }

    // 5) Second pass: cumulative late counter
    let late_day_cut_dates =
        late_day_cuts(&days, cfg.late_count_for_day_cut, cfg.late_counter_policy);
    for _ in &late_day_cut_dates {
        breakdown.add(DeductionCategory::LateDayCut, rates.full_day);
    }

    // 6) Totals
    let total_deductions = breakdown.total();

    Ok(PayrollReport {
        period_start: start,
        period_end: end,
        total_working_days,
        full_day_amount: rates.full_day,
        gross: rates.gross,
        total_deductions,
        net: rates.gross - total_deductions,
        breakdown,
        days,
        late_day_cut_dates,
    })
}

/// Turn up to `allowance` absences, in date order, into paid days off.
fn grant_paid_days_off(days: &mut [DayClassification], allowance: u32) -> u32 {
    let mut granted = 0;
    for day in days.iter_mut().filter(|d| d.status == DayStatus::Absent) {
        if granted == allowance {
            break;
        }
        day.status = DayStatus::PaidDayOff;
        day.deduction = Decimal::ZERO;
        day.category = None;
        granted += 1;
    }
    granted
}
