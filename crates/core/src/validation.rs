//! Sign-up input validation

use std::fmt;
use std::ops::RangeInclusive;

use serde_json::Value;
use thiserror::Error;

use crate::input::{as_number, as_text};

/// Message reported when every field is acceptable
pub const VALIDATION_SUCCESSFUL: &str = "Validation successful";

/// Accepted username length, in characters
pub const USERNAME_LENGTH: RangeInclusive<usize> = 3..=255;

/// Accepted age, in years
pub const AGE_RANGE: RangeInclusive<f64> = 18.0..=100.0;

/// A single field that failed validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputProblem {
    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid age")]
    InvalidAge,
}

/// Every problem found in one submission, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInputError {
    problems: Vec<UserInputProblem>,
}

impl UserInputError {
    pub fn problems(&self) -> &[UserInputProblem] {
        &self.problems
    }
}

impl fmt::Display for UserInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UserInputError {}

/// Validate a username and age pair.
///
/// The username must be a string of 3 to 255 characters and the age a number
/// from 18 to 100. All failing fields are reported together.
pub fn validate_user_input(username: &Value, age: &Value) -> Result<(), UserInputError> {
    let mut problems = Vec::new();

    let username_ok = as_text(username)
        .is_some_and(|name| USERNAME_LENGTH.contains(&name.chars().count()));
    if !username_ok {
        problems.push(UserInputProblem::InvalidUsername);
    }

    let age_ok = as_number(age).is_some_and(|age| AGE_RANGE.contains(&age));
    if !age_ok {
        problems.push(UserInputProblem::InvalidAge);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(UserInputError { problems })
    }
}

/// The message a submission produces: [`VALIDATION_SUCCESSFUL`] or the
/// combined problems.
pub fn validation_message(username: &Value, age: &Value) -> String {
    match validate_user_input(username, age) {
        Ok(()) => VALIDATION_SUCCESSFUL.to_string(),
        Err(err) => err.to_string(),
    }
}
