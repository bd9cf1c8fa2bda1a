//! Facade evaluating every exercise against one configuration

use crate::{
    config::Config,
    coupons::Coupon,
    discount::DiscountError,
    eligibility::EligibilityError,
    error::Result,
    range,
    validation::{self, UserInputError},
};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Drills {
    config: Config,
}

impl Drills {
    /// Use the nearest config file above the current directory, or the defaults
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover(&cwd)
    }

    pub fn discover(start_path: &Path) -> Result<Self> {
        Ok(Self {
            config: Config::discover(start_path)?,
        })
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.config.coupons
    }

    pub fn calculate_discount(
        &self,
        price: &Value,
        code: &Value,
    ) -> std::result::Result<f64, DiscountError> {
        debug!("Calculating discount for price={price} code={code}");
        self.config.discount_codes.calculate_value(price, code)
    }

    pub fn validate_user_input(
        &self,
        username: &Value,
        age: &Value,
    ) -> std::result::Result<(), UserInputError> {
        validation::validate_user_input(username, age)
    }

    pub fn is_price_in_range(&self, price: f64, min: f64, max: f64) -> bool {
        range::is_price_in_range(price, min, max)
    }

    pub fn is_valid_username(&self, username: &str) -> bool {
        self.config.username.accepts(username)
    }

    pub fn can_drive(
        &self,
        age: u32,
        country_code: &str,
    ) -> std::result::Result<bool, EligibilityError> {
        self.config.driving_ages.can_drive(age, country_code)
    }

    pub fn can_drive_years(
        &self,
        age: f64,
        country_code: &str,
    ) -> std::result::Result<bool, EligibilityError> {
        self.config.driving_ages.can_drive_years(age, country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::UsernamePolicy;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_free_functions() {
        let drills = Drills::default();
        assert_eq!(drills.calculate_discount(&json!(10), &json!("SAVE20")), Ok(8.0));
        assert_eq!(drills.coupons().len(), 2);
        assert!(drills.is_valid_username("mosh1"));
        assert_eq!(drills.can_drive(16, "US"), Ok(true));
        assert!(drills.is_price_in_range(5.0, 0.0, 5.0));
        assert!(drills.validate_user_input(&json!("mosh"), &json!(30)).is_ok());
    }

    #[test]
    fn test_configured_tables_are_used() {
        let config = Config {
            discount_codes: [("HALF", 0.5)].into_iter().collect(),
            driving_ages: [("DE", 18)].into_iter().collect(),
            username: UsernamePolicy { min: 1, max: 3 },
            ..Default::default()
        };
        let drills = Drills::with_config(config).unwrap();

        assert_eq!(drills.calculate_discount(&json!(10), &json!("HALF")), Ok(5.0));
        assert_eq!(drills.calculate_discount(&json!(10), &json!("SAVE10")), Ok(10.0));
        assert_eq!(drills.can_drive(17, "DE"), Ok(false));
        assert_eq!(drills.can_drive(17, "US"), Err(EligibilityError::InvalidCountryCode));
        assert!(drills.is_valid_username("abc"));
        assert!(!drills.is_valid_username("abcd"));
    }

    #[test]
    fn test_with_config_rejects_invalid_tables() {
        let config = Config {
            username: UsernamePolicy { min: 5, max: 1 },
            ..Default::default()
        };
        assert!(Drills::with_config(config).is_err());
    }

    #[test]
    fn test_discover_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".assert-drills.json"),
            r#"{"discount_codes": {"TENOFF": 0.1}}"#,
        )
        .unwrap();

        let drills = Drills::discover(temp_dir.path()).unwrap();
        assert_eq!(drills.calculate_discount(&json!(10), &json!("TENOFF")), Ok(9.0));
    }
}
