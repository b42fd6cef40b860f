use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;
pub mod payroll;

pub use payroll::{LateCounterPolicy, PayrollConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
    #[serde(default)]
    pub payroll: PayrollConfig,
}

fn default_separator_char() -> String {
    "-".to_string()
}

fn default_show_weekday() -> String {
    "None".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
            payroll: PayrollConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpayroll")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpayroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpayroll.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rpayroll.sqlite")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files
    pub fn init_all(
        custom_db: Option<String>,
        config_path: Option<&Path>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();

        // Keep the payroll section of an existing file, if any
        let mut config = Self::load(config_path)?;

        // DB name: user provided, else the one already configured
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => PathBuf::from(&config.database),
        };
        config.database = db_path.to_string_lossy().to_string();

        // Write config file
        if !is_test {
            let conf_path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Self::config_file);
            if let Some(parent) = conf_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(&conf_path)?;
            file.write_all(config.to_yaml()?.as_bytes())?;
            println!("✅ Config file: {:?}", conf_path);
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn missing_payroll_section_uses_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.payroll, PayrollConfig::default());
        assert_eq!(cfg.separator_char, "-");
    }

    #[test]
    fn yaml_round_trip_keeps_payroll_values() {
        let mut cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        cfg.payroll.monthly_salary = Some(Decimal::from(30000));
        cfg.payroll.hourly_rate = Some(Decimal::new(15050, 2));

        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back.payroll, cfg.payroll);
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = Config::from_yaml("database: [unterminated").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
