//! Activity entries as stored in the `reports` table.

use chrono::NaiveDate;
use serde::Serialize;

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub unit: String,
    pub ticket: String,
    pub task: String,
}

/// Insert request. Sentinels for blank fields are applied by the store.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub ticket: Option<String>,
    pub unit: String,
    pub task: String,
}

impl NewEntry {
    pub fn new(date: NaiveDate, unit: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            date,
            ticket: None,
            unit: unit.into(),
            task: task.into(),
        }
    }

    pub fn with_ticket(mut self, ticket: impl Into<String>) -> Self {
        self.ticket = Some(ticket.into());
        self
    }
}
