//! assert-drills - Small functions for practicing assertions and test design
//!
//! This crate provides:
//! - Exercise functions with sentinel outcomes (discounts, input validation,
//!   range checks, driving eligibility) and introductory math helpers
//! - Matchers for assertions that are neither too loose nor too tight
//! - A JSON configuration for the tables the exercises read
pub mod assertions;
pub mod config;
pub mod coupons;
pub mod discount;
pub mod drills;
pub mod eligibility;
pub mod error;
pub mod input;
pub mod intro;
pub mod range;
pub mod validation;

// Re-export commonly used types and functions
pub use error::{Error, Result};

pub use config::Config;
pub use coupons::{Coupon, get_coupons};
pub use discount::{DiscountCodes, DiscountError, calculate_discount, calculate_discount_value};
pub use drills::Drills;
pub use eligibility::{DrivingAges, EligibilityError, can_drive};
pub use intro::{calculate_average, factorial, fizz_buzz, max};
pub use range::{UsernamePolicy, is_price_in_range, is_valid_username};
pub use validation::{UserInputError, UserInputProblem, validate_user_input, validation_message};
