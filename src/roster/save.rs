use crate::errors::AppResult;
use crate::models::client::ClientRecord;
use csv::Writer;
use std::fs;
use std::path::Path;

/// Write the updated-roster artifact. `load_people` prefers this file over
/// the original ingestion file on the next run, so round-tripping a
/// reconciled view through save + load reproduces the same client id set.
pub fn save_people(path: &Path, rows: &[ClientRecord]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["Name", "Company", "Title", "Industry", "Status"])?;

    for row in rows {
        wtr.write_record(&[
            row.name.clone(),
            row.company.clone(),
            row.title.clone().unwrap_or_default(),
            row.industry.clone().unwrap_or_default(),
            row.status.to_db_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write classified base-roster rows back out, same artifact format.
/// Used by `ingest` before any reconciled view exists.
pub fn save_people_base(path: &Path, rows: &[crate::models::client::ClientBase]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["Name", "Company", "Title", "Industry", "Status"])?;

    for row in rows {
        wtr.write_record(&[
            row.name.clone(),
            row.company.clone(),
            row.title.clone().unwrap_or_default(),
            row.industry.clone().unwrap_or_default(),
            row.status.to_db_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
