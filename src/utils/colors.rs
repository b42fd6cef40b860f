/// ANSI color helper utilities for terminal output.
use crate::models::DayStatus;
use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::OnTime => GREEN,
        DayStatus::Late => YELLOW,
        DayStatus::HalfDay => MAGENTA,
        DayStatus::Absent => RED,
        DayStatus::PaidDayOff => CYAN,
        DayStatus::Holiday => CYAN,
        DayStatus::RestDay => GREY,
    }
}

/// Net color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_amount(value: Decimal) -> &'static str {
    if value > Decimal::ZERO {
        GREEN
    } else if value < Decimal::ZERO {
        RED
    } else {
        RESET
    }
}

/// Ritorna formattazione colorata di un valore opzionale.
///
/// Esempio:
/// `colorize_optional("--:--")` → "<grey>--:--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
