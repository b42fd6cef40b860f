use crate::errors::{AppError, AppResult};
use crate::models::attendance::DATE_FMT;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT)
        .map_err(|_| AppError::InvalidDate(format!("'{}' (expected YYYY-MM-DD)", s)))
}

/// Number of days of month `m` of year `y`, `None` for an invalid month.
pub fn days_in_month(y: i32, m: u32) -> Option<u32> {
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)?;
    NaiveDate::from_ymd_opt(ny, nm, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let bad = || AppError::InvalidDate(format!("'{}' (expected YYYY-MM)", s));
    let s = s.trim();

    let (y, m) = s.split_once('-').ok_or_else(bad)?;
    if y.len() != 4 || m.len() != 2 {
        return Err(bad());
    }

    let year: i32 = y.parse().map_err(|_| bad())?;
    let month: u32 = m.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) {
        return Err(bad());
    }
    Ok((year, month))
}

/// Parse a `--period` filter into an inclusive date range.
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above as `start:end`, both sides in the same format
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "'{}': start and end must have the same format",
                p
            )));
        }

        let (from, _) = single_period(start)?;
        let (_, to) = single_period(end)?;
        if from > to {
            return Err(AppError::InvalidRange {
                start: from,
                end: to,
            });
        }
        return Ok((from, to));
    }

    single_period(p.trim())
}

fn single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("unsupported period '{}'", p));

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (y, m) = parse_month(p)?;
            let last = days_in_month(y, m).ok_or_else(invalid)?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Date with the weekday suffix selected by `show_weekday`
/// ("None", "Short" → "Tue", "Long" → "Tuesday").
pub fn format_date(d: NaiveDate, show_weekday: &str) -> String {
    let wd = match show_weekday {
        "None" => return d.format(DATE_FMT).to_string(),
        "Long" => d.format("%A").to_string(),
        _ => d.weekday().to_string(),
    };
    format!("{} ({})", d.format(DATE_FMT), wd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_forms() {
        assert_eq!(parse_period("2024").unwrap(), (ymd(2024, 1, 1), ymd(2024, 12, 31)));
        assert_eq!(parse_period("2024-02").unwrap(), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(parse_period("2024-02-10").unwrap(), (ymd(2024, 2, 10), ymd(2024, 2, 10)));
        assert_eq!(
            parse_period("2024-01:2024-03").unwrap(),
            (ymd(2024, 1, 1), ymd(2024, 3, 31))
        );
    }

    #[test]
    fn bad_periods_are_rejected() {
        assert!(matches!(parse_period("2024-1"), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_period("2024-13"), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_period("2024:2024-01"), Err(AppError::InvalidDate(_))));
        assert!(matches!(
            parse_period("2024-03:2024-01"),
            Err(AppError::InvalidRange { .. })
        ));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, 0), None);
    }

    #[test]
    fn weekday_suffix() {
        assert_eq!(format_date(ymd(2024, 3, 5), "Short"), "2024-03-05 (Tue)");
        assert_eq!(format_date(ymd(2024, 3, 5), "Long"), "2024-03-05 (Tuesday)");
        assert_eq!(format_date(ymd(2024, 3, 5), "None"), "2024-03-05");
    }
}
