//! The entry store: one SQLite connection, owned for the whole process.

use crate::db::initialize::init_db;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, NewEntry};
use crate::models::unit::{NO_TICKET, stored_unit};
use crate::utils::fs::ensure_parent_dir;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::BTreeSet;
use std::path::Path;

pub struct Store {
    pub conn: Connection,
}

impl Store {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = Path::new(path);
        ensure_parent_dir(path)?;

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Persist a new entry and return its id.
    ///
    /// A blank ticket becomes [`NO_TICKET`], a blank unit
    /// [`GENERAL_UNIT`](crate::models::unit::GENERAL_UNIT).
    /// A blank task is rejected with [`AppError::Validation`] and nothing is written.
    pub fn insert(&self, entry: &NewEntry) -> AppResult<i64> {
        let task = entry.task.trim();
        if task.is_empty() {
            return Err(AppError::Validation("task".into()));
        }

        let unit = stored_unit(&entry.unit);

        let ticket = match entry.ticket.as_deref().map(str::trim) {
            None | Some("") => NO_TICKET,
            Some(t) => t,
        };

        queries::insert_entry(&self.conn, &entry.date, ticket, unit, task)
    }

    /// Entries of one day, in id order.
    pub fn query_by_date(&self, date: NaiveDate) -> AppResult<Vec<Entry>> {
        queries::load_entries_by_date(&self.conn, &date)
    }

    /// Every date that has at least one entry.
    pub fn query_distinct_dates(&self) -> AppResult<BTreeSet<NaiveDate>> {
        queries::load_distinct_dates(&self.conn)
    }

    /// Returns `true` if a row was removed. An unknown id is not an error.
    pub fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(queries::delete_entry(&self.conn, id)? > 0)
    }

    pub fn find_by_id(&self, id: i64) -> AppResult<Option<Entry>> {
        queries::load_entry_by_id(&self.conn, id)
    }

    pub fn count(&self) -> AppResult<i64> {
        queries::count_entries(&self.conn)
    }

    pub fn date_range(&self) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        queries::date_bounds(&self.conn)
    }
}
