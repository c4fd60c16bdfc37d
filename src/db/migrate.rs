use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Columns every `reports` table must carry, whoever created it.
const REPORTS_COLUMNS: [&str; 5] = ["id", "date", "ticket", "school", "task"];

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
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_columns(conn: &Connection, name: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", name))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    cols.collect()
}

/// Create the `reports` table. Same layout as the files written by the
/// Tätigkeitsbericht desktop tool, so those databases open unchanged.
fn create_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            date    TEXT NOT NULL,
            ticket  TEXT,
            school  TEXT NOT NULL,
            task    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Index on `reports(date)`: every read path filters by date.
fn migrate_reports_date_index(conn: &Connection) -> AppResult<()> {
    let version = "reports_date_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_reports_date ON reports(date);")
        .map_err(|e| AppError::Migration(format!("Failed to create date index: {}", e)))?;

    ttlog(
        conn,
        "migration_applied",
        version,
        "Added index on reports(date)",
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Detect a database written by the desktop tool (reports, no log)
    let had_log = table_exists(conn, "log")?;
    let had_reports = table_exists(conn, "reports")?;

    // 2) Ensure log table
    ensure_log_table(conn)?;

    // 3) Ensure reports table, or validate the one we found
    if had_reports {
        let cols = table_columns(conn, "reports")?;
        let missing: Vec<&str> = REPORTS_COLUMNS
            .iter()
            .copied()
            .filter(|c| !cols.iter().any(|col| col.as_str() == *c))
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Migration(format!(
                "table 'reports' is missing column(s): {}",
                missing.join(", ")
            )));
        }

        if !had_log {
            ttlog(
                conn,
                "legacy_import",
                "reports",
                "Adopted existing reports table",
            )?;
        }
    } else {
        create_reports_table(conn)?;
    }

    // 4) Incremental migrations
    migrate_reports_date_index(conn)?;

    Ok(())
}
