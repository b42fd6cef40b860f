use crate::config::Config;
use crate::config::check::missing_keys;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        println!("{}", content);
        Ok(())
    }

    /// Report keys missing from the file and validate the payroll rules.
    /// Returns whether the file is complete and valid.
    pub fn check(path: &Path) -> AppResult<bool> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let missing = missing_keys(&content)?;
        if missing.is_empty() {
            success("All configuration keys are present.");
        } else {
            for key in &missing {
                warning(format!("Missing key: {} (default used)", key));
            }
        }

        let cfg = Config::from_yaml(&content)?;
        cfg.payroll.validate()?;

        if cfg.payroll.monthly_salary().is_none() && cfg.payroll.hourly_rate().is_none() {
            warning("Neither monthly_salary nor hourly_rate is set: reports will fail.");
        } else {
            success("Payroll rules are consistent.");
        }

        Ok(missing.is_empty())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(windows) {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        info(format!("Opening {} with {}", path.display(), ed));

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }
        Ok(())
    }
}
