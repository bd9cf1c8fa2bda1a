//! Introductory helpers: max, fizzBuzz, average, factorial

/// The first argument if it is strictly greater, otherwise the second
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// `FizzBuzz` for multiples of 3 and 5, `Fizz` for multiples of 3, `Buzz` for
/// multiples of 5, and the number itself otherwise.
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean of `numbers`, NaN when there are none
pub fn calculate_average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

/// `n!`, or `None` when `n` is negative or the result does not fit in a `u64`
pub fn factorial(n: i64) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
