//! Coupon catalogue

use serde::{Deserialize, Serialize};

/// A discount code paired with the fraction it takes off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount: f64,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount: f64) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// A coupon is well formed when it has a code and takes off a fraction
    /// strictly between nothing and everything.
    pub fn is_well_formed(&self) -> bool {
        !self.code.is_empty() && self.discount > 0.0 && self.discount < 1.0
    }
}

/// The built-in coupon catalogue
pub fn get_coupons() -> Vec<Coupon> {
    vec![
        Coupon::new("SAVE20NOW", 0.2),
        Coupon::new("DISCOUNT50OFF", 0.5),
    ]
}
