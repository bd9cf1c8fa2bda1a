//! Driving eligibility by country

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityError {
    #[error("Invalid country code")]
    InvalidCountryCode,
}

/// Legal driving age per country code. Lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrivingAges {
    ages: BTreeMap<String, u32>,
}

impl Default for DrivingAges {
    fn default() -> Self {
        Self::from_iter([("US", 16), ("UK", 17)])
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for DrivingAges {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            ages: iter.into_iter().map(|(code, age)| (code.into(), age)).collect(),
        }
    }
}

impl DrivingAges {
    pub fn legal_age(&self, country_code: &str) -> Option<u32> {
        self.ages.get(country_code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ages.iter().map(|(code, age)| (code.as_str(), *age))
    }

    pub fn can_drive(&self, age: u32, country_code: &str) -> Result<bool, EligibilityError> {
        self.can_drive_years(f64::from(age), country_code)
    }

    /// Same as [`can_drive`](Self::can_drive) for ages that may be fractional
    /// or negative. A negative age is never old enough.
    pub fn can_drive_years(
        &self,
        age: f64,
        country_code: &str,
    ) -> Result<bool, EligibilityError> {
        let Some(legal_age) = self.legal_age(country_code) else {
            debug!("Unknown country code {country_code:?}");
            return Err(EligibilityError::InvalidCountryCode);
        };
        Ok(age >= f64::from(legal_age))
    }
}

/// Whether someone aged `age` may drive in `country_code` (`US` or `UK`)
pub fn can_drive(age: u32, country_code: &str) -> Result<bool, EligibilityError> {
    DrivingAges::default().can_drive(age, country_code)
}
