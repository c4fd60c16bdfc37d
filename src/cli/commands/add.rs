use crate::cli::commands::show::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::entry::NewEntry;
use crate::utils::date;

/// Add an activity, then print the day it was added to.
pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if let Commands::Add {
        task,
        date: date_arg,
        ticket,
        unit,
        custom,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = date::resolve_date(date_arg.as_ref())?;

        //
        // 2. Resolve unit against the configured list
        //
        let unit =
            AddLogic::resolve_unit(unit.as_deref(), &cfg.units, &cfg.default_unit, *custom)?;

        //
        // 3. Insert
        //
        let entry = NewEntry {
            date: d,
            ticket: ticket.clone(),
            unit,
            task: task.clone(),
        };

        if AddLogic::apply(store, &entry)?.is_some() {
            print_day(store, d)?;
        }
    }

    Ok(())
}
