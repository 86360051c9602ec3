use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { client, status } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        queries::set_status(&pool.conn, client, status)?;
        success(format!("Status of '{}' set to '{}'", client, status.trim().to_lowercase()));
    }

    Ok(())
}
