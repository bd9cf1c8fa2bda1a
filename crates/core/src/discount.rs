//! Discount calculation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::input::{as_number, as_text};

/// Why a discount could not be calculated. The messages are the values the
/// exercise tests assert on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountError {
    #[error("Invalid price")]
    InvalidPrice,

    #[error("Invalid discount code")]
    InvalidDiscountCode,
}

/// Discount codes accepted at checkout and the fraction each takes off.
///
/// Codes are matched exactly; anything not listed takes nothing off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountCodes {
    rates: BTreeMap<String, f64>,
}

impl Default for DiscountCodes {
    fn default() -> Self {
        Self::from_iter([("SAVE10", 0.1), ("SAVE20", 0.2)])
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for DiscountCodes {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().map(|(code, rate)| (code.into(), rate)).collect(),
        }
    }
}

impl DiscountCodes {
    /// Fraction taken off by `code`, zero for unknown codes
    pub fn rate_for(&self, code: &str) -> f64 {
        self.rates.get(code).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Price after applying `code`.
    ///
    /// The price must be a finite number greater than zero.
    pub fn calculate(&self, price: f64, code: &str) -> Result<f64, DiscountError> {
        let price = check_price(price)?;
        let rate = self.rate_for(code);
        Ok(price - price * rate)
    }

    /// Same as [`calculate`](Self::calculate) over loosely typed arguments.
    ///
    /// The price is checked before the code, so a call where both are wrong
    /// reports the price.
    pub fn calculate_value(&self, price: &Value, code: &Value) -> Result<f64, DiscountError> {
        let price = as_number(price).ok_or(DiscountError::InvalidPrice)?;
        let price = check_price(price)?;
        let code = as_text(code).ok_or(DiscountError::InvalidDiscountCode)?;
        self.calculate(price, code)
    }
}

fn check_price(price: f64) -> Result<f64, DiscountError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        debug!("Rejected price {price}");
        Err(DiscountError::InvalidPrice)
    }
}

/// Price after applying `code` with the built-in codes
pub fn calculate_discount(price: f64, code: &str) -> Result<f64, DiscountError> {
    DiscountCodes::default().calculate(price, code)
}

/// Loosely typed [`calculate_discount`]
pub fn calculate_discount_value(price: &Value, code: &Value) -> Result<f64, DiscountError> {
    DiscountCodes::default().calculate_value(price, code)
}
