use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,     // ⇔ holidays.date (TEXT "YYYY-MM-DD", PK)
    pub description: String, // ⇔ holidays.description (TEXT, default '')
}

impl Holiday {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}
