use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Override store (SQLite) path.
    pub database: String,
    /// Original people ingestion file (CSV).
    pub people_file: String,
    /// Updated-roster artifact; read back in preference to `people_file`.
    #[serde(default = "default_updated_people_file")]
    pub updated_people_file: String,
    /// Companies ingestion file (CSV).
    pub companies_file: String,
    /// Window, in days, used by the "recently contacted" metric.
    #[serde(default = "default_recent_contact_days")]
    pub recent_contact_days: i64,
    /// Max rendered width for free-text columns in `list`/`calls`.
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

fn default_recent_contact_days() -> i64 {
    7
}
fn default_max_column_width() -> usize {
    60
}
fn default_updated_people_file() -> String {
    Config::data_dir()
        .join("people_updated.csv")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            people_file: Self::data_dir()
                .join("people.csv")
                .to_string_lossy()
                .to_string(),
            updated_people_file: default_updated_people_file(),
            companies_file: Self::data_dir()
                .join("companies.csv")
                .to_string_lossy()
                .to_string(),
            recent_contact_days: default_recent_contact_days(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("clienttrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".clienttrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clienttrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clienttrack.sqlite")
    }

    /// Directory holding the roster files (ingestion + updated artifact)
    pub fn data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, data directory and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        fs::create_dir_all(Self::data_dir())?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Persist the current config back to its file.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml =
            serde_yaml::to_string(self).map_err(|e| io::Error::other(e.to_string()))?;
        fs::write(Self::config_file(), yaml)
    }
}
