use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::db::pool::DbPool;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigLoad)?
            );
        }

        // ---- CHECK ----
        if *check {
            let missing = crate::config::migrate::missing_config_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing configuration keys: {} (run `config --migrate`)",
                    missing.join(", ")
                ));
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            let pool = DbPool::new(&cfg.database)?;
            crate::config::migrate::migrate_add_recent_contact_days(&pool.conn)?;
            crate::config::migrate::migrate_add_updated_people_file(&pool.conn)?;
            success("Configuration migrations completed.");
        }
    }

    Ok(())
}
