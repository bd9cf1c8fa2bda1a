use crate::{
    coupons::{Coupon, get_coupons},
    discount::DiscountCodes,
    eligibility::DrivingAges,
    error::{Error, Result},
    range::UsernamePolicy,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".assert-drills.json", "assert-drills.json"];

/// Tables the exercise functions read. Missing fields fall back to the
/// built-in values, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    pub discount_codes: DiscountCodes,
    pub coupons: Vec<Coupon>,
    pub driving_ages: DrivingAges,
    pub username: UsernamePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discount_codes: DiscountCodes::default(),
            coupons: get_coupons(),
            driving_ages: DrivingAges::default(),
            username: UsernamePolicy::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        super::validate_config(self)
    }

    /// Walk up from `start_path` to the first directory holding a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or the defaults
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No config file above {}, using defaults", start_path.display());
                Ok(Self::default())
            }
        }
    }
}
