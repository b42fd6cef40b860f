use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            if path.exists() {
                ConfigLogic::print(path)?;
            } else {
                info("Configuration file not found: showing defaults.");
                println!("{}", cfg.to_yaml()?);
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {} (run `rpayroll init`)",
                    path.display()
                )));
            }
            ConfigLogic::check(path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }

        if !*print_config && !*check && !*edit_config {
            info("Nothing to do: use --print, --check or --edit.");
        }
    }

    Ok(())
}
