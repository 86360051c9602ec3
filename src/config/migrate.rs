use crate::db::migrate::{is_applied, mark_applied};
use crate::ui::messages::success;
use rusqlite::{Connection, Error};
use serde_yaml::Value;
use std::fs;

/// Migration that adds the `recent_contact_days` parameter to the YAML
/// config, if missing, and marks the migration as applied.
pub fn migrate_add_recent_contact_days(conn: &Connection) -> Result<(), Error> {
    let version = "20260301_0004_add_recent_contact_days";

    if is_applied(conn, version)? {
        return Ok(());
    }

    add_missing_key(version, "recent_contact_days", Value::Number(7.into()))?;

    mark_applied(conn, version)?;
    Ok(())
}

/// Migration that adds the `updated_people_file` parameter to the YAML
/// config, pointing into the data dir, if missing.
pub fn migrate_add_updated_people_file(conn: &Connection) -> Result<(), Error> {
    let version = "20260301_0005_add_updated_people_file";

    if is_applied(conn, version)? {
        return Ok(());
    }

    let default = super::Config::data_dir()
        .join("people_updated.csv")
        .to_string_lossy()
        .to_string();
    add_missing_key(version, "updated_people_file", Value::String(default))?;

    mark_applied(conn, version)?;
    Ok(())
}

/// Insert `key: value` into the YAML config when the key is absent.
/// Missing config file is a no-op: defaults already cover it.
fn add_missing_key(version: &str, key: &str, value: Value) -> Result<(), Error> {
    let conf_file = super::Config::config_file();

    if !conf_file.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&conf_file).map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to read config {:?}: {}", conf_file, e)),
        )
    })?;

    if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
        && let Some(map) = yaml.as_mapping_mut()
    {
        let ykey = Value::String(key.to_string());

        if !map.contains_key(&ykey) {
            map.insert(ykey, value);

            let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!(
                        "Failed to serialize updated config {:?}: {}",
                        conf_file, e
                    )),
                )
            })?;

            fs::write(&conf_file, serialized).map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!(
                        "Failed to write updated config {:?}: {}",
                        conf_file, e
                    )),
                )
            })?;

            success(format!(
                "Migration applied: {} — added {} parameter to config.",
                version, key
            ));
        }
    }

    Ok(())
}

/// Report which expected keys are missing from the config file.
pub fn missing_config_keys() -> std::io::Result<Vec<&'static str>> {
    let conf_file = super::Config::config_file();
    let expected = [
        "database",
        "people_file",
        "updated_people_file",
        "companies_file",
        "recent_contact_days",
        "max_column_width",
    ];

    if !conf_file.exists() {
        return Ok(expected.to_vec());
    }

    let content = fs::read_to_string(&conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| std::io::Error::other(format!("parse error: {}", e)))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in expected {
            if !map.contains_key(&Value::String(key.to_string())) {
                missing.push(key);
            }
        }
    } else {
        missing.extend(expected);
    }

    Ok(missing)
}
