use serde::Serialize;

/// Outcome of classifying one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    OnTime,
    Late,
    HalfDay,
    Absent,
    /// Absence covered by the paid days off of the period.
    PaidDayOff,
    Holiday,
    RestDay,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::OnTime => "on_time",
            DayStatus::Late => "late",
            DayStatus::HalfDay => "half_day",
            DayStatus::Absent => "absent",
            DayStatus::PaidDayOff => "paid_day_off",
            DayStatus::Holiday => "holiday",
            DayStatus::RestDay => "rest_day",
        }
    }

    /// Holidays and rest days are not part of the working days of a period.
    pub fn is_working_day(&self) -> bool {
        !matches!(self, DayStatus::Holiday | DayStatus::RestDay)
    }
}

/// Bucket a deduction is accounted under in the report breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    Absence,
    HourCut,
    HalfDay,
    LateDayCut,
}

impl DeductionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionCategory::Absence => "absence",
            DeductionCategory::HourCut => "hour_cut",
            DeductionCategory::HalfDay => "half_day",
            DeductionCategory::LateDayCut => "late_day_cut",
        }
    }
}
