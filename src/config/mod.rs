use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::{DEFAULT_TIMESTAMP_FORMAT, check_format};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const EMPLOYEES_FILE: &str = "employees.txt";
const PUNCH_FILE: &str = "punchRecords.txt";
const ACTIVITY_DB: &str = "activity.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub employees_file: String,
    pub punch_file: String,
    pub activity_db: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_seed_on_first_run")]
    pub seed_on_first_run: bool,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}
fn default_seed_on_first_run() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(&Self::config_dir())
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Default layout with every data file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let file = |name: &str| dir.join(name).to_string_lossy().to_string();
        Self {
            employees_file: file(EMPLOYEES_FILE),
            punch_file: file(PUNCH_FILE),
            activity_db: file(ACTIVITY_DB),
            timestamp_format: default_timestamp_format(),
            seed_on_first_run: default_seed_on_first_run(),
        }
    }

    /// Move every data file into `dir`, keeping the other settings.
    pub fn relocate(&mut self, dir: &Path) {
        let moved = Self::in_dir(dir);
        self.employees_file = moved.employees_file;
        self.punch_file = moved.punch_file;
        self.activity_db = moved.activity_db;
    }

    pub fn employees_path(&self) -> PathBuf {
        expand_tilde(&self.employees_file)
    }

    pub fn punch_path(&self) -> PathBuf {
        expand_tilde(&self.punch_file)
    }

    pub fn activity_db_path(&self) -> PathBuf {
        expand_tilde(&self.activity_db)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::storage(&path, e))?;
        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Settings that deserialize but cannot be used.
    pub fn validate(&self) -> AppResult<()> {
        check_format(&self.timestamp_format)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the configuration directory and file. In test mode the config
    /// file is left alone and only the returned value is used.
    pub fn init_all(data_dir: Option<&Path>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let config = Self::in_dir(data_dir.unwrap_or(&dir));

        if !is_test {
            fs::create_dir_all(&dir).map_err(|e| AppError::storage(&dir, e))?;
            let path = Self::config_file();
            fs::write(&path, config.to_yaml()?).map_err(|e| AppError::storage(&path, e))?;
        }

        Ok(config)
    }
}
