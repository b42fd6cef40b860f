//! Payroll rules: day classification, late counter and report aggregation.
//!
//! Everything in here is pure: callers load records, holidays and config and
//! pass them in.

pub mod classify;
pub mod day_rate;
pub mod late_penalty;
pub mod report;

pub use classify::classify_day;
pub use day_rate::{DayRates, to_cents, working_days};
pub use late_penalty::late_day_cuts;
pub use report::build_report;
