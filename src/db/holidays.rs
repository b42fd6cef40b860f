use crate::db::queries::{parse_date_col, unwrap_row_error};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::DATE_FMT;
use crate::models::holiday::Holiday;
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};

fn map_holiday(row: &Row) -> rusqlite::Result<Holiday> {
    let date_str: String = row.get("date")?;
    Ok(Holiday {
        date: parse_date_col(&date_str)?,
        description: row.get("description")?,
    })
}

/// Mark `date` as a holiday. Adding an existing date replaces its description.
pub fn add_holiday(conn: &Connection, date: NaiveDate, description: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holidays (date, description) VALUES (?1, ?2)
         ON CONFLICT(date) DO UPDATE SET description = excluded.description",
        params![date.format(DATE_FMT).to_string(), description],
    )?;
    Ok(())
}

pub fn remove_holiday(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM holidays WHERE date = ?1",
        [date.format(DATE_FMT).to_string()],
    )?;

    if n == 0 {
        return Err(AppError::NotFound(format!("{} is not a holiday", date)));
    }
    Ok(())
}

pub fn list_holidays(conn: &Connection, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Holiday>> {
    if start > end {
        return Err(AppError::InvalidRange { start, end });
    }

    let mut stmt = conn.prepare_cached(
        "SELECT date, description FROM holidays
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string()
        ],
        map_holiday,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(unwrap_row_error)?);
    }
    Ok(out)
}

pub fn count_holidays(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM holidays", [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn dates_are_unique() {
        let pool = DbPool::in_memory().unwrap();
        add_holiday(&pool.conn, d(23), "Pakistan Day").unwrap();
        add_holiday(&pool.conn, d(23), "National holiday").unwrap();

        let list = list_holidays(&pool.conn, d(1), d(31)).unwrap();
        assert_eq!(list, vec![Holiday::new(d(23), "National holiday")]);
    }

    #[test]
    fn list_is_bounded_and_ordered() {
        let pool = DbPool::in_memory().unwrap();
        for day in [30, 1, 15] {
            add_holiday(&pool.conn, d(day), "").unwrap();
        }

        let dates: Vec<NaiveDate> = list_holidays(&pool.conn, d(1), d(15))
            .unwrap()
            .into_iter()
            .map(|h| h.date)
            .collect();
        assert_eq!(dates, vec![d(1), d(15)]);
    }

    #[test]
    fn removing_unknown_date_is_not_found() {
        let pool = DbPool::in_memory().unwrap();
        add_holiday(&pool.conn, d(1), "").unwrap();
        remove_holiday(&pool.conn, d(1)).unwrap();
        assert!(matches!(
            remove_holiday(&pool.conn, d(1)),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(count_holidays(&pool.conn).unwrap(), 0);
    }
}
