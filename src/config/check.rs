use crate::errors::{AppError, AppResult};
use serde_yaml::Value;

const TOP_LEVEL_KEYS: &[&str] = &["database", "separator_char", "show_weekday", "payroll"];

const PAYROLL_KEYS: &[&str] = &[
    "monthly_salary",
    "hourly_rate",
    "expected_daily_hours",
    "month_start_day",
    "month_end_day",
    "late_threshold",
    "hour_cut_threshold",
    "half_day_threshold",
    "late_count_for_day_cut",
    "late_counter_policy",
    "hour_cut_counts_as_late",
    "non_working_weekdays",
    "salary_divisor_days",
    "paid_days_off_per_period",
    "show_net_to_date",
];

/// Return the keys absent from a config file. Absent keys fall back to
/// their defaults, so this is informational only.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let yaml: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("configuration root must be a mapping".into()))?;

    let mut missing: Vec<String> = TOP_LEVEL_KEYS
        .iter()
        .filter(|k| !map.contains_key(**k))
        .map(|k| k.to_string())
        .collect();

    if let Some(payroll) = map.get("payroll").and_then(Value::as_mapping) {
        missing.extend(
            PAYROLL_KEYS
                .iter()
                .filter(|k| !payroll.contains_key(**k))
                .map(|k| format!("payroll.{k}")),
        );
    }

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_payroll_keys() {
        let yaml = "database: x\nseparator_char: '-'\nshow_weekday: None\npayroll:\n  monthly_salary: 1\n";
        let missing = missing_keys(yaml).unwrap();
        assert!(missing.contains(&"payroll.hourly_rate".to_string()));
        assert!(!missing.contains(&"payroll.monthly_salary".to_string()));
        assert!(!missing.contains(&"database".to_string()));
    }

    #[test]
    fn reports_missing_section() {
        let missing = missing_keys("database: x\n").unwrap();
        assert!(missing.contains(&"payroll".to_string()));
    }
}
