use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classify::{KeywordClassifier, classify_people};
use crate::errors::AppResult;
use crate::roster;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `ingest` command: load the roster files, classify rows that
/// are still missing an industry label and optionally persist the result
/// as the updated-roster artifact.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ingest { people, save } = cmd {
        let mut rows = match people {
            Some(path) => roster::load::read_people(Path::new(path))?,
            None => roster::load_people(cfg)?,
        };
        let companies = roster::load_companies(cfg)?;

        info(format!(
            "Loaded {} clients and {} companies",
            rows.len(),
            companies.len()
        ));

        let (classified, failed) = classify_people(&mut rows, &KeywordClassifier);
        if classified > 0 {
            info(format!(
                "Classified {} clients ({} marked unclassified after failures)",
                classified, failed
            ));
        }

        if *save {
            let artifact = Path::new(&cfg.updated_people_file);
            roster::save::save_people_base(artifact, &rows)?;
            success(format!(
                "Updated roster written to {}",
                artifact.display()
            ));
        }
    }

    Ok(())
}
