use crate::db::log::ttlog_quiet;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;
use crate::models::unit::{canonical, stored_unit};
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Resolve the unit given on the command line.
    ///
    /// - no value → `default_unit`
    /// - known unit (any case) → canonical spelling
    /// - blank → passed through; the store files it under the general unit
    /// - anything else → only with `custom`, stored as typed
    pub fn resolve_unit(
        input: Option<&str>,
        known: &[String],
        default_unit: &str,
        custom: bool,
    ) -> AppResult<String> {
        let Some(raw) = input else {
            return Ok(default_unit.to_string());
        };

        if raw.trim().is_empty() {
            return Ok(String::new());
        }

        if let Some(unit) = canonical(raw, known) {
            return Ok(unit);
        }

        if custom {
            Ok(raw.trim().to_string())
        } else {
            Err(AppError::InvalidUnit(raw.to_string()))
        }
    }

    /// Insert the entry. A blank task skips the insert with a warning
    /// and returns `Ok(None)`; storage faults are propagated.
    pub fn apply(store: &Store, entry: &NewEntry) -> AppResult<Option<i64>> {
        let id = match store.insert(entry) {
            Ok(id) => id,
            Err(AppError::Validation(field)) => {
                warning(format!("Nothing added: {} must not be empty.", field));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        ttlog_quiet(
            &store.conn,
            "add",
            &format!("#{}", id),
            &format!(
                "{} | {} | {}",
                entry.date,
                stored_unit(&entry.unit),
                entry.task.trim()
            ),
        );

        success(format!("Entry #{} added for {}.", id, entry.date));
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::unit::{GENERAL_UNIT, default_units};
    use chrono::NaiveDate;

    #[test]
    fn unit_resolution() {
        let units = default_units();

        assert_eq!(
            AddLogic::resolve_unit(None, &units, GENERAL_UNIT, false).unwrap(),
            GENERAL_UNIT
        );
        assert_eq!(
            AddLogic::resolve_unit(Some("odl"), &units, GENERAL_UNIT, false).unwrap(),
            "ODL"
        );
        assert_eq!(
            AddLogic::resolve_unit(Some(" "), &units, GENERAL_UNIT, false).unwrap(),
            ""
        );
        assert!(matches!(
            AddLogic::resolve_unit(Some("Rathaus"), &units, GENERAL_UNIT, false),
            Err(AppError::InvalidUnit(_))
        ));
        assert_eq!(
            AddLogic::resolve_unit(Some("Rathaus"), &units, GENERAL_UNIT, true).unwrap(),
            "Rathaus"
        );
    }

    #[test]
    fn blank_task_is_skipped() {
        let store = Store::open_in_memory().unwrap();
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let res = AddLogic::apply(&store, &NewEntry::new(d, "FVM", "")).unwrap();
        assert_eq!(res, None);
        assert_eq!(store.count().unwrap(), 0);

        let id = AddLogic::apply(&store, &NewEntry::new(d, "FVM", "Toner")).unwrap();
        assert!(id.is_some());
    }

    #[test]
    fn audit_log_names_the_stored_unit() {
        let store = Store::open_in_memory().unwrap();
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        AddLogic::apply(&store, &NewEntry::new(d, "  ", "Mails")).unwrap();

        let message: String = store
            .conn
            .query_row(
                "SELECT message FROM log WHERE operation = 'add'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(message, format!("2024-06-01 | {} | Mails", GENERAL_UNIT));
    }
}
