use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calls::CallsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calls { client } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        CallsLogic::print_calls(&mut pool, cfg, client.as_deref())?;
    }

    Ok(())
}
