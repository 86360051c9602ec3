use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let view = Core::reconciled_view(&mut pool, cfg)?;

        ExportLogic::export(&view, format.clone(), file, *force)?;
    }

    Ok(())
}
