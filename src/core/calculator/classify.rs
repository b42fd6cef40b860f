use crate::config::PayrollConfig;
use crate::core::calculator::day_rate::DayRates;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, DayClassification, DayStatus, DeductionCategory};
use chrono::{Datelike, NaiveDate};

/// Classify a single calendar day.
///
/// Rules are checked from the most to the least severe and the first match
/// wins. Thresholds are exclusive: arriving exactly at a threshold does not
/// trigger it. The late-count day cut is not applied here, see
/// [`late_penalty`](super::late_penalty).
pub fn classify_day(
    date: NaiveDate,
    record: Option<&AttendanceRecord>,
    is_holiday: bool,
    cfg: &PayrollConfig,
    rates: &DayRates,
) -> AppResult<DayClassification> {
    if is_holiday {
        return Ok(with_times(DayClassification::free(date, DayStatus::Holiday), record));
    }

    if !cfg.is_working_weekday(date.weekday()) {
        return Ok(with_times(DayClassification::free(date, DayStatus::RestDay), record));
    }

    let time_in = match record.and_then(|r| r.time_in) {
        Some(t) => t,
        None => {
            let mut day = with_times(DayClassification::free(date, DayStatus::Absent), record);
            day.deduction = rates.full_day;
            day.category = Some(DeductionCategory::Absence);
            return Ok(day);
        }
    };

    let mut day = with_times(DayClassification::free(date, DayStatus::OnTime), record);

    if time_in > cfg.half_day_threshold {
        day.status = DayStatus::HalfDay;
        day.deduction = rates.half_day;
        day.category = Some(DeductionCategory::HalfDay);
    } else if time_in > cfg.hour_cut_threshold {
        day.status = DayStatus::Late;
        day.deduction = rates.hour_cut()?;
        day.category = Some(DeductionCategory::HourCut);
        day.counts_as_late = cfg.hour_cut_counts_as_late;
    } else if time_in > cfg.late_threshold {
        day.status = DayStatus::Late;
        day.counts_as_late = true;
    }

    Ok(day)
}

fn with_times(mut day: DayClassification, record: Option<&AttendanceRecord>) -> DayClassification {
    if let Some(r) = record {
        day.time_in = r.time_in;
        day.time_out = r.time_out;
        day.worked_minutes = r.worked_minutes();
    }
    day
}
