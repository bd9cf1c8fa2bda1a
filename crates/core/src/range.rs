//! Inclusive range checks

use serde::{Deserialize, Serialize};

/// Whether `price` lies within `[min, max]`
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

/// Accepted username length, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamePolicy {
    pub min: usize,
    pub max: usize,
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self { min: 5, max: 15 }
    }
}

impl UsernamePolicy {
    pub fn accepts(&self, username: &str) -> bool {
        let len = username.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Whether `username` is 5 to 15 characters long
pub fn is_valid_username(username: &str) -> bool {
    UsernamePolicy::default().accepts(username)
}
