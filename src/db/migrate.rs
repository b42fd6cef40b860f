use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

const IMPORT_LEGACY_LOGS: &str = "20250310_0002_import_attendance_logs";
const IMPORT_LEGACY_HOLIDAYS: &str = "20250310_0003_import_legacy_holidays";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `attendance` table: one row per calendar day.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            date        TEXT PRIMARY KEY NOT NULL,
            time_in     TEXT,
            time_out    TEXT,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_holidays_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            date         TEXT PRIMARY KEY NOT NULL,
            description  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// A database written by the previous desktop tool has `attendance_logs`
/// and a `holidays` table keyed by `holiday_date`.
fn is_legacy_schema(conn: &Connection) -> Result<bool> {
    let legacy_logs =
        table_exists(conn, "attendance_logs")? && !migration_applied(conn, IMPORT_LEGACY_LOGS)?;
    let legacy_holidays =
        table_exists(conn, "holidays")? && has_column(conn, "holidays", "holiday_date")?;
    Ok(legacy_logs || legacy_holidays)
}

/// Rebuild an old `holidays(id, holiday_date, description)` table with the
/// date as primary key.
fn migrate_legacy_holidays(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "holidays")? || !has_column(conn, "holidays", "holiday_date")? {
        return Ok(());
    }

    warning("Converting legacy holidays table...");

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE holidays RENAME TO holidays_old;

        CREATE TABLE holidays (
            date         TEXT PRIMARY KEY NOT NULL,
            description  TEXT NOT NULL DEFAULT ''
        );

        INSERT OR IGNORE INTO holidays (date, description)
        SELECT holiday_date, IFNULL(description, '')
        FROM holidays_old;

        DROP TABLE holidays_old;

        COMMIT;
        "#,
    )?;

    mark_applied(conn, IMPORT_LEGACY_HOLIDAYS, "Converted legacy holidays table")?;
    success(format!("Migration applied: {}", IMPORT_LEGACY_HOLIDAYS));
    Ok(())
}

/// Times of `attendance_logs` normalized to HH:MM:SS, one row per date not
/// yet present in `attendance`.
const LEGACY_LOGS_NORMALIZED: &str = r#"
    SELECT date,
           CASE WHEN length(time_in) = 5 THEN time_in || ':00' ELSE time_in END AS t_in,
           CASE WHEN length(time_out) = 5 THEN time_out || ':00' ELSE time_out END AS t_out
    FROM attendance_logs
    WHERE date NOT IN (SELECT date FROM attendance)
"#;

/// Copy rows of the old `attendance_logs` table (times stored as HH:MM or
/// HH:MM:SS) into `attendance`. Existing dates are never overwritten.
///
/// Overnight rows (time out before time in) are imported with no time out,
/// so every imported record is valid.
fn import_legacy_logs(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "attendance_logs")? || migration_applied(conn, IMPORT_LEGACY_LOGS)? {
        return Ok(());
    }

    warning("Importing attendance_logs from legacy schema...");

    // 1) righe notturne: l'uscita viene scartata
    let cleared: i64 = conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM ({}) WHERE t_out IS NOT NULL AND t_out < t_in",
            LEGACY_LOGS_NORMALIZED
        ),
        [],
        |row| row.get(0),
    )?;

    // 2) import
    let imported = conn.execute(
        &format!(
            r#"
            INSERT OR IGNORE INTO attendance (date, time_in, time_out, updated_at)
            SELECT date,
                   t_in,
                   CASE WHEN t_out < t_in THEN NULL ELSE t_out END,
                   datetime('now')
            FROM ({})
            "#,
            LEGACY_LOGS_NORMALIZED
        ),
        [],
    )?;

    mark_applied(
        conn,
        IMPORT_LEGACY_LOGS,
        &format!(
            "Imported {} rows from attendance_logs ({} with time out before time in, imported without time out)",
            imported, cleared
        ),
    )?;
    success(format!(
        "Migration applied: {} → imported {} attendance rows",
        IMPORT_LEGACY_LOGS, imported
    ));
    if cleared > 0 {
        warning(format!(
            "{} legacy rows had a time out before the time in: time out dropped.",
            cleared
        ));
    }
    Ok(())
}

fn backup_err(what: &str, e: impl std::fmt::Display) -> Error {
    Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
        "Backup failed ({}): {}",
        what, e
    ))))
}

fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    // Nome file backup
    let backup_name = format!(
        "{}-backup_db_pre_legacy_import.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let parent = std::path::Path::new(db_path)
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."));
    let backup_path = parent.join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| backup_err("create", e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| backup_err("start_file", e))?;

    let db_content = fs::read(db_path).map_err(|e| backup_err("read", e))?;
    zip.write_all(&db_content)
        .map_err(|e| backup_err("write_all", e))?;
    zip.finish().map_err(|e| backup_err("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Legacy schema → PRE-MIGRATION BACKUP
    if is_legacy_schema(conn)? {
        warning("Legacy schema detected — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }
    }

    // 3) Current tables
    create_attendance_table(conn)?;
    migrate_legacy_holidays(conn)?;
    create_holidays_table(conn)?;

    // 4) Data import from the old tool
    import_legacy_logs(conn)?;

    Ok(())
}
