use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::unit::NO_TICKET;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};
use std::collections::BTreeSet;

fn parse_db_date(date_str: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let date = parse_db_date(row.get("date")?)?;

    // Older rows may carry NULL instead of the sentinel
    let ticket: Option<String> = row.get("ticket")?;

    Ok(Entry {
        id: row.get("id")?,
        date,
        unit: row.get("school")?,
        ticket: ticket.unwrap_or_else(|| NO_TICKET.to_string()),
        task: row.get("task")?,
    })
}

/// Insert one row and return its id. Values are stored as given.
pub fn insert_entry(
    conn: &Connection,
    date: &NaiveDate,
    ticket: &str,
    unit: &str,
    task: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO reports (date, ticket, school, task) VALUES (?1, ?2, ?3, ?4)",
        params![date.format("%Y-%m-%d").to_string(), ticket, unit, task],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, ticket, school, task FROM reports
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry_by_id(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, ticket, school, task FROM reports WHERE id = ?1",
    )?;

    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_distinct_dates(conn: &Connection) -> AppResult<BTreeSet<NaiveDate>> {
    let mut stmt = conn.prepare_cached("SELECT DISTINCT date FROM reports ORDER BY date ASC")?;

    let rows = stmt.query_map([], |row| parse_db_date(row.get(0)?))?;

    let mut out = BTreeSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

/// Delete by id. Returns the number of removed rows (0 or 1).
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let affected = conn.execute("DELETE FROM reports WHERE id = ?1", [id])?;
    Ok(affected)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?)
}

/// First and last date present, if any.
pub fn date_bounds(conn: &Connection) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let bounds: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(date), MAX(date) FROM reports",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match bounds {
        (Some(first), Some(last)) => Ok(Some((parse_db_date(first)?, parse_db_date(last)?))),
        _ => Ok(None),
    }
}
