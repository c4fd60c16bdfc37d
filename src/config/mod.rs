use crate::errors::{AppError, AppResult};
use crate::models::unit::{GENERAL_UNIT, default_units};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "TaetigkeitsberichtData";
const DB_FILE_NAME: &str = "taetigkeitsbericht.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub default_unit: String,
    pub units: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_unit: GENERAL_UNIT.to_string(),
            units: default_units(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Default database: `<Documents>/TaetigkeitsberichtData/taetigkeitsbericht.db`,
    /// or the config directory when there is no documents folder.
    pub fn database_file() -> PathBuf {
        dirs::document_dir()
            .map(|d| d.join(DATA_DIR_NAME))
            .unwrap_or_else(Self::config_dir)
            .join(DB_FILE_NAME)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        if cfg.units.is_empty() {
            cfg.units = default_units();
        }
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database location.
    /// `custom_db` is taken as given; the CLI resolves `--db` before calling.
    /// Returns the configuration that was written (or would be, in test mode).
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(path) => PathBuf::from(path),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str) -> PathBuf {
        let p = env::temp_dir().join(format!("{}_rworklog.conf", name));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load_from(&temp_conf("missing_cfg")).unwrap();
        assert_eq!(cfg.default_unit, GENERAL_UNIT);
        assert_eq!(cfg.units.len(), 18);
    }

    #[test]
    fn partial_file_is_completed() {
        let p = temp_conf("partial_cfg");
        fs::write(&p, "database: /tmp/x.db\nunits: []\n").unwrap();

        let cfg = Config::load_from(&p).unwrap();
        assert_eq!(cfg.database, "/tmp/x.db");
        assert_eq!(cfg.default_unit, GENERAL_UNIT);
        assert_eq!(cfg.units, default_units());
        fs::remove_file(&p).ok();
    }

    #[test]
    fn save_then_load() {
        let p = temp_conf("roundtrip_cfg");
        let cfg = Config {
            database: "/tmp/y.db".into(),
            default_unit: "FVM".into(),
            units: vec!["Allgemein".into(), "FVM".into()],
        };
        cfg.save_to(&p).unwrap();
        assert_eq!(Config::load_from(&p).unwrap(), cfg);
        fs::remove_file(&p).ok();
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let p = temp_conf("broken_cfg");
        fs::write(&p, "units: [unterminated\n").unwrap();
        assert!(matches!(Config::load_from(&p), Err(AppError::Config(_))));
        fs::remove_file(&p).ok();
    }
}
