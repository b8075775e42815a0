use crate::core::time_converter::{OffsetlessPolicy, TimeConverter};
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{Granularity, WeekStart};
use crate::models::zone::CivilZone;
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_zone_name")]
    pub zone_name: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default)]
    pub offsetless_timestamps: OffsetlessPolicy,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub default_view: Granularity,
}

fn default_zone_name() -> String {
    "Pacific/Honolulu".to_string()
}
fn default_utc_offset() -> String {
    "-10:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            zone_name: default_zone_name(),
            utc_offset: default_utc_offset(),
            offsetless_timestamps: OffsetlessPolicy::default(),
            week_start: WeekStart::default(),
            default_view: Granularity::default(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("heliops")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".heliops")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("heliops.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("heliops.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn zone(&self) -> AppResult<CivilZone> {
        CivilZone::parse(&self.zone_name, &self.utc_offset)
    }

    pub fn converter(&self) -> AppResult<TimeConverter> {
        Ok(TimeConverter::new(self.zone()?, self.offsetless_timestamps))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => resolve_in(&dir, &name),
            None => dir.join("heliops.sqlite"),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
