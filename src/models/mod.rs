pub mod attendance;
pub mod day_status;
pub mod holiday;
pub mod report;

pub use attendance::AttendanceRecord;
pub use day_status::{DayStatus, DeductionCategory};
pub use holiday::Holiday;
pub use report::{DayClassification, DeductionBreakdown, PayrollReport};
