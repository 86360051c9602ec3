use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Call { client, note, at } = cmd {
        // Reject blank notes before touching the store; the store checks
        // again at its own boundary.
        if note.trim().is_empty() {
            return Err(AppError::EmptyNote);
        }

        let timestamp = match at {
            Some(raw) => date::parse_timestamp(raw)?,
            None => date::now(),
        };

        let mut pool = DbPool::open_ready(&cfg.database)?;
        queries::log_call(&mut pool.conn, client, note, timestamp)?;

        success(format!(
            "Call logged for '{}' at {}",
            client,
            timestamp.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(())
}
