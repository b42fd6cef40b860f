pub mod add;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod del;
pub mod holiday;
pub mod lifecycle;
pub mod log;
pub mod payroll;
pub mod period;
