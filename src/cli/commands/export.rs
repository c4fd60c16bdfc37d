use crate::cli::parser::Commands;
use crate::core::export::ExportLogic;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Export {
        date: date_arg,
        format,
        file,
        force,
    } = cmd
    {
        let d = date::resolve_date(date_arg.as_ref())?;
        ExportLogic::export(store, d, *format, file.as_deref(), *force)?;
    }
    Ok(())
}
