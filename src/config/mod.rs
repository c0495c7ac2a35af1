use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Application configuration, persisted as YAML in the user profile dir.
///
/// Also the department-list provider: it owns the known department names
/// and which one is current. The event log itself stays agnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub log_file: String,
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,
    #[serde(default = "default_department")]
    pub current_department: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Where this config was loaded from (and will be saved to). Set by
    /// the loader, never persisted.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

fn default_departments() -> Vec<String> {
    vec![default_department()]
}
fn default_department() -> String {
    "Default".to_string()
}
fn default_refresh_secs() -> u64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_path().to_string_lossy().to_string(),
            departments: default_departments(),
            current_department: default_department(),
            refresh_secs: default_refresh_secs(),
            config_path: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftlogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftlogger.conf")
    }

    /// Return the full path of the default event log
    pub fn log_file_path() -> PathBuf {
        Self::config_dir().join("time_log.csv")
    }

    /// Load configuration from the standard location, or return defaults
    /// if missing or unreadable (a hand-broken config never blocks the tool).
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path (the `--config` override).
    pub fn load_from(path: &Path) -> Self {
        let loaded = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_yaml::from_str::<Config>(&content).ok());

        let mut cfg = loaded.unwrap_or_default();
        cfg.config_path = Some(path.to_path_buf());
        cfg.normalize();
        cfg
    }

    /// Repair hand-edited state: the department list is never empty and the
    /// current department is always a member of it.
    pub fn normalize(&mut self) {
        if self.departments.is_empty() {
            self.departments = default_departments();
        }
        if !self.departments.contains(&self.current_department) {
            self.current_department = self.departments[0].clone();
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let path = self.config_path.clone().unwrap_or_else(Self::config_file);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration; returns the resolved config.
    pub fn init_all(
        custom_log: Option<String>,
        custom_config: Option<String>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();

        // log path: user provided or default
        let log_path = if let Some(name) = custom_log {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::log_file_path()
        };

        let config_path = custom_config
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file);

        let config = Config {
            log_file: log_path.to_string_lossy().to_string(),
            config_path: Some(config_path.clone()),
            ..Config::default()
        };

        // write config file (skipped in test mode)
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", config_path);
        }

        Ok(config)
    }
}
