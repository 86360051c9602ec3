use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::roster;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `save` command: reconcile and persist the result as the
/// updated-roster artifact. The next `load_people` reads this file, so a
/// save/load round trip reproduces the same client id set.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Save) {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let view = Core::reconciled_view(&mut pool, cfg)?;

        let artifact = Path::new(&cfg.updated_people_file);
        roster::save_people(artifact, &view)?;

        success(format!(
            "Reconciled roster ({} clients) written to {}",
            view.len(),
            artifact.display()
        ));
    }

    Ok(())
}
