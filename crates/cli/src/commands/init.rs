use anyhow::{Context, Result};
use assert_drills_core::{Config, Drills};
use serde_json::json;
use std::{env, path::Path};
use tracing::info;

use crate::display::Outcome;

/// Write the default configuration to `.assert-drills.json`
pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<Outcome> {
    let dir = match cwd {
        Some(cwd) => cwd.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let config_path = dir.join(assert_drills_core::config::CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        return Ok(Outcome::new(
            format!(
                "Config already exists at: {}\nUse --force to overwrite",
                config_path.display()
            ),
            json!({ "created": false, "path": config_path }),
        ));
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote default config to {}", config_path.display());

    Ok(Outcome::new(
        format!("Created config: {}", config_path.display()),
        json!({ "created": true, "path": config_path }),
    ))
}

pub fn show_config_command(drills: &Drills) -> Result<Outcome> {
    let value = serde_json::to_value(drills.config()).context("Failed to serialize config")?;
    let text = serde_json::to_string_pretty(&value)?;
    Ok(Outcome::new(text, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = init_command(Some(temp_dir.path()), false).unwrap();
        assert_eq!(outcome.value["created"], json!(true));

        let path = temp_dir.path().join(".assert-drills.json");
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".assert-drills.json");
        std::fs::write(&path, "{}").unwrap();

        let outcome = init_command(Some(temp_dir.path()), false).unwrap();
        assert_eq!(outcome.value["created"], json!(false));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        let outcome = init_command(Some(temp_dir.path()), true).unwrap();
        assert_eq!(outcome.value["created"], json!(true));
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_show_config() {
        let outcome = show_config_command(&Drills::default()).unwrap();
        assert_eq!(outcome.value["driving_ages"]["US"], json!(16));
        assert_eq!(outcome.value["username"]["max"], json!(15));
    }
}
