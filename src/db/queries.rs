use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, DATE_FMT, TIME_FMT};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn decode_failure(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

/// Turn a decoding failure raised inside `map_row` back into the AppError it
/// carries; any other SQLite error stays a storage error.
pub(crate) fn unwrap_row_error(err: rusqlite::Error) -> AppError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => {
            match inner.downcast::<AppError>() {
                Ok(app) => *app,
                Err(other) => AppError::InvalidRecord(other.to_string()),
            }
        }
        other => AppError::Storage(other),
    }
}

pub(crate) fn parse_date_col(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FMT)
        .map_err(|_| decode_failure(AppError::InvalidRecord(format!("malformed date '{}'", raw))))
}

fn parse_time_col(raw: Option<String>) -> Result<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, TIME_FMT)
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"))
            .map(Some)
            .map_err(|_| decode_failure(AppError::InvalidRecord(format!("malformed time '{}'", s)))),
    }
}

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;

    Ok(AttendanceRecord {
        date: parse_date_col(&date_str)?,
        time_in: parse_time_col(row.get("time_in")?)?,
        time_out: parse_time_col(row.get("time_out")?)?,
    })
}

fn check_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if start > end {
        return Err(AppError::InvalidRange { start, end });
    }
    Ok(())
}

pub fn get_record(conn: &Connection, date: NaiveDate) -> AppResult<Option<AttendanceRecord>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM attendance WHERE date = ?1")?;

    stmt.query_row([date.format(DATE_FMT).to_string()], map_row)
        .optional()
        .map_err(unwrap_row_error)
}

/// Create or replace the record for `rec.date`.
pub fn upsert_record(conn: &Connection, rec: &AttendanceRecord) -> AppResult<()> {
    rec.validate()?;

    conn.execute(
        "INSERT INTO attendance (date, time_in, time_out, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(date) DO UPDATE SET
             time_in = excluded.time_in,
             time_out = excluded.time_out,
             updated_at = excluded.updated_at",
        params![
            rec.date_str(),
            rec.time_in_str(),
            rec.time_out_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_record(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM attendance WHERE date = ?1",
        [date.format(DATE_FMT).to_string()],
    )?;

    if n == 0 {
        return Err(AppError::NotFound(format!("no attendance record for {}", date)));
    }
    Ok(())
}

/// All records with dates in [start, end], ordered by date.
pub fn query_records(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<AttendanceRecord>> {
    check_range(start, end)?;

    let mut stmt = conn.prepare_cached(
        "SELECT * FROM attendance
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(unwrap_row_error)?);
    }
    Ok(out)
}

/// First and last recorded dates, if any.
pub fn record_bounds(conn: &Connection) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let bounds: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(date), MAX(date) FROM attendance",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match bounds {
        (Some(first), Some(last)) => {
            let first = parse_date_col(&first).map_err(unwrap_row_error)?;
            let last = parse_date_col(&last).map_err(unwrap_row_error)?;
            Ok(Some((first, last)))
        }
        _ => Ok(None),
    }
}
