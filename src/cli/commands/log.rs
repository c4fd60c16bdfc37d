use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::store::Store;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Log { print: true, last } = cmd {
        LogLogic::print_log(store, *last)?;
    }

    Ok(())
}
