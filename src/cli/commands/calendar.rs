use crate::cli::parser::Commands;
use crate::core::calendar::{list_dates, render_month};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::colorize_marked_days;
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Calendar { month, list } = cmd {
        let dates = store.query_distinct_dates()?;

        if *list {
            if dates.is_empty() {
                info("No entries yet.");
            } else {
                print!("{}", list_dates(&dates));
            }
            return Ok(());
        }

        let (year, month) = match month {
            Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
            None => {
                let today = date::today();
                (today.year(), today.month())
            }
        };

        println!("{}", colorize_marked_days(&render_month(year, month, &dates)));
    }

    Ok(())
}
