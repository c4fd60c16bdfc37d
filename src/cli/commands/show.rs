use crate::cli::parser::Commands;
use crate::core::report::{RenderMode, render};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Show { date: date_arg } = cmd {
        let d = date::resolve_date(date_arg.as_ref())?;
        print_day(store, d)?;
    }

    Ok(())
}

/// Print the internal report of one day.
pub fn print_day(store: &Store, d: NaiveDate) -> AppResult<()> {
    let entries = store.query_by_date(d)?;

    if entries.is_empty() {
        info(format!("No entries for {}.", d));
        return Ok(());
    }

    header(format!("Activity report: {} ({})", d, d.format("%A")));
    print!("{}", render(&entries, RenderMode::Internal));
    Ok(())
}
