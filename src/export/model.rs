// src/export/model.rs

use crate::models::PayrollReport;
use crate::utils::formatting::money;
use serde::Serialize;

/// Flat row: one calendar day of a report.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub status: String,
    pub time_in: String,
    pub time_out: String,
    pub worked_minutes: Option<i64>,
    pub deduction: String,
    pub category: String,
    pub counts_as_late: bool,
    pub late_day_cut: bool,
}

/// Totals plus the per-day rows (JSON only).
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub period_start: String,
    pub period_end: String,
    pub total_working_days: u32,
    pub full_day_amount: String,
    pub gross: String,
    pub total_deductions: String,
    pub net: String,
    pub absence: String,
    pub hour_cut: String,
    pub half_day: String,
    pub late_day_cut: String,
    pub late_arrivals: u32,
    pub paid_days_off: u32,
    pub days: Vec<DayExport>,
}

pub(crate) fn day_rows(report: &PayrollReport) -> Vec<DayExport> {
    report
        .days
        .iter()
        .map(|d| DayExport {
            date: d.date.format("%Y-%m-%d").to_string(),
            weekday: d.date.format("%a").to_string(),
            status: d.status.as_str().to_string(),
            time_in: d.time_in.map(|t| t.to_string()).unwrap_or_default(),
            time_out: d.time_out.map(|t| t.to_string()).unwrap_or_default(),
            worked_minutes: d.worked_minutes,
            deduction: money(d.deduction),
            category: d.category.map(|c| c.as_str()).unwrap_or("").to_string(),
            counts_as_late: d.counts_as_late,
            late_day_cut: report.late_day_cut_dates.contains(&d.date),
        })
        .collect()
}

impl From<&PayrollReport> for ReportExport {
    fn from(r: &PayrollReport) -> Self {
        Self {
            period_start: r.period_start.to_string(),
            period_end: r.period_end.to_string(),
            total_working_days: r.total_working_days,
            full_day_amount: money(r.full_day_amount),
            gross: money(r.gross),
            total_deductions: money(r.total_deductions),
            net: money(r.net),
            absence: money(r.breakdown.absence),
            hour_cut: money(r.breakdown.hour_cut),
            half_day: money(r.breakdown.half_day),
            late_day_cut: money(r.breakdown.late_day_cut),
            late_arrivals: r.breakdown.late_arrivals,
            paid_days_off: r.breakdown.paid_days_off,
            days: day_rows(r),
        }
    }
}
