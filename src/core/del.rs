use crate::db::log::ttlog_quiet;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

pub struct DeleteLogic;

#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted(Entry),
    NotFound(i64),
}

impl DeleteLogic {
    /// Parse the id typed by the user. Nothing is deleted on failure.
    pub fn parse_id(raw: &str) -> AppResult<i64> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidId(raw.to_string()))
    }

    /// Delete one entry by id. The entry is looked up first so the caller
    /// can refresh the affected day.
    pub fn apply(store: &Store, id: i64) -> AppResult<DeleteOutcome> {
        let Some(entry) = store.find_by_id(id)? else {
            return Ok(DeleteOutcome::NotFound(id));
        };

        if !store.delete_by_id(id)? {
            return Ok(DeleteOutcome::NotFound(id));
        }

        ttlog_quiet(
            &store.conn,
            "del",
            &format!("#{}", id),
            &format!("{} | {} | {}", entry.date, entry.unit, entry.task),
        );

        Ok(DeleteOutcome::Deleted(entry))
    }
}
