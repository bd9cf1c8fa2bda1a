//! Commands evaluating a single exercise function

use anyhow::{Context, Result};
use assert_drills_core::{Drills, calculate_average, factorial, fizz_buzz, input::parse_arg, max};
use serde_json::Value;
use tracing::debug;

use crate::display::Outcome;

pub fn coupons_command(drills: &Drills) -> Result<Outcome> {
    let text = drills
        .coupons()
        .iter()
        .map(|coupon| format!("{}\t{}", coupon.code, coupon.discount))
        .collect::<Vec<_>>()
        .join("\n");
    let value = serde_json::to_value(drills.coupons()).context("Failed to serialize coupons")?;
    Ok(Outcome::new(text, value))
}

pub fn discount_command(drills: &Drills, price: &str, code: &str) -> Outcome {
    let (price, code) = (parse_arg(price), parse_arg(code));
    match drills.calculate_discount(&price, &code) {
        Ok(discounted) => Outcome::number(discounted),
        Err(err) => Outcome::message(err.to_string()),
    }
}

pub fn validate_user_command(drills: &Drills, username: &str, age: &str) -> Outcome {
    let (username, age) = (parse_arg(username), parse_arg(age));
    match drills.validate_user_input(&username, &age) {
        Ok(()) => Outcome::message(assert_drills_core::validation::VALIDATION_SUCCESSFUL),
        Err(err) => {
            debug!("Rejected user input: {:?}", err.problems());
            Outcome::message(err.to_string())
        }
    }
}

pub fn price_in_range_command(drills: &Drills, price: f64, min: f64, max: f64) -> Outcome {
    Outcome::boolean(drills.is_price_in_range(price, min, max))
}

pub fn username_command(drills: &Drills, username: &str) -> Outcome {
    Outcome::boolean(drills.is_valid_username(username))
}

pub fn can_drive_command(drills: &Drills, age: f64, country: &str) -> Outcome {
    match drills.can_drive_years(age, country) {
        Ok(allowed) => Outcome::boolean(allowed),
        Err(err) => Outcome::message(err.to_string()),
    }
}

pub fn max_command(a: f64, b: f64) -> Outcome {
    Outcome::number(max(a, b))
}

pub fn fizz_buzz_command(n: i64) -> Outcome {
    Outcome::message(fizz_buzz(n))
}

pub fn average_command(numbers: &[f64]) -> Outcome {
    Outcome::number(calculate_average(numbers))
}

pub fn factorial_command(n: i64) -> Outcome {
    match factorial(n) {
        Some(result) => Outcome::new(result.to_string(), Value::from(result)),
        None => Outcome::new("undefined", Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discount_outcomes() {
        let drills = Drills::default();
        assert_eq!(discount_command(&drills, "10", "SAVE10").text, "9");
        assert_eq!(discount_command(&drills, "0", "SAVE10").text, "Invalid price");
        assert_eq!(discount_command(&drills, "abc", "SAVE10").text, "Invalid price");
        assert_eq!(
            discount_command(&drills, "10", "10").text,
            "Invalid discount code"
        );
    }

    #[test]
    fn test_validate_user_outcomes() {
        let drills = Drills::default();
        assert_eq!(
            validate_user_command(&drills, "mosh", "20").text,
            "Validation successful"
        );
        assert_eq!(
            validate_user_command(&drills, "ab", "17").text,
            "Invalid username, Invalid age"
        );
    }

    #[test]
    fn test_can_drive_outcomes() {
        let drills = Drills::default();
        assert_eq!(can_drive_command(&drills, 17.0, "UK").value, json!(true));
        assert_eq!(can_drive_command(&drills, -1.0, "US").value, json!(false));
        assert_eq!(can_drive_command(&drills, 16.5, "US").value, json!(true));
        assert_eq!(
            can_drive_command(&drills, 17.0, "FR").value,
            json!("Invalid country code")
        );
    }

    #[test]
    fn test_coupons_outcome() {
        let outcome = coupons_command(&Drills::default()).unwrap();
        assert_eq!(outcome.text, "SAVE20NOW\t0.2\nDISCOUNT50OFF\t0.5");
        assert_eq!(outcome.value[0]["code"], json!("SAVE20NOW"));
    }

    #[test]
    fn test_math_outcomes() {
        assert_eq!(max_command(1.0, 2.0).text, "2");
        assert_eq!(fizz_buzz_command(15).text, "FizzBuzz");
        assert_eq!(average_command(&[]).text, "NaN");
        assert_eq!(average_command(&[7.0, 8.0]).value, json!(7.5));
        assert_eq!(factorial_command(4).value, json!(24));
        assert_eq!(factorial_command(-1).value, Value::Null);
        assert_eq!(factorial_command(-1).text, "undefined");
    }
}
