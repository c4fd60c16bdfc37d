use crate::cli::commands::show::print_day;
use crate::cli::parser::Commands;
use crate::core::del::{DeleteLogic, DeleteOutcome};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        // an unparsable id never reaches the store
        let id = DeleteLogic::parse_id(id)?;

        match DeleteLogic::apply(store, id)? {
            DeleteOutcome::Deleted(entry) => {
                success(format!("Entry with ID {} deleted.", id));
                print_day(store, entry.date)?;
            }
            DeleteOutcome::NotFound(id) => {
                info(format!("No entry with ID {}, nothing deleted.", id));
            }
        }
    }

    Ok(())
}
