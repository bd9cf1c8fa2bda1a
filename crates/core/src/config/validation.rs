//! Configuration validation for rejecting tables the exercises cannot use

use super::Config;
use crate::error::{Error, Result};

/// Check every table in `config`, reporting all problems at once
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    for (code, rate) in config.discount_codes.iter() {
        if code.is_empty() {
            issues.push("discount code must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&rate) {
            issues.push(format!("discount rate for {code} must be between 0 and 1"));
        }
    }

    for coupon in &config.coupons {
        if coupon.code.is_empty() {
            issues.push("coupon code must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&coupon.discount) {
            issues.push(format!(
                "discount for coupon {} must be between 0 and 1",
                coupon.code
            ));
        }
    }

    for (code, age) in config.driving_ages.iter() {
        if age == 0 {
            issues.push(format!("driving age for {code} must be greater than 0"));
        }
    }

    if config.username.min > config.username.max {
        issues.push(format!(
            "username min ({}) must not exceed max ({})",
            config.username.min, config.username.max
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::ConfigError(issues.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupons::Coupon;
    use crate::range::UsernamePolicy;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rates_at_both_ends_are_valid() {
        let config = Config {
            discount_codes: [("NONE", 0.0), ("ALL", 1.0)].into_iter().collect(),
            coupons: vec![Coupon::new("ZERO", 0.0), Coupon::new("FREE", 1.0)],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_coupon_discount_out_of_range() {
        let config = Config {
            coupons: vec![Coupon::new("MORE", 1.5)],
            ..Default::default()
        };
        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("discount for coupon MORE"));
    }

    #[test]
    fn test_reports_every_issue() {
        let config = Config {
            discount_codes: [("BIG", 1.5)].into_iter().collect(),
            coupons: vec![Coupon::new("", 0.3)],
            driving_ages: [("XX", 0)].into_iter().collect(),
            username: UsernamePolicy { min: 4, max: 2 },
        };

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("discount rate for BIG"));
        assert!(message.contains("coupon code must not be empty"));
        assert!(message.contains("driving age for XX"));
        assert!(message.contains("username min (4)"));
    }
}
