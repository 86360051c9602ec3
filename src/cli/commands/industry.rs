use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Industry { client, label } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        queries::set_industry_override(&pool.conn, client, label)?;
        success(format!(
            "Industry of '{}' overridden to '{}'",
            client,
            label.trim()
        ));
    }

    Ok(())
}
