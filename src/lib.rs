//! Shared helpers for the workspace test suites.
//!
//! A parameterized test runs one body against a table of rows. [`check_table`]
//! evaluates every row before failing, so a broken table reports all of its
//! bad rows at once instead of stopping at the first.

use std::fmt::Debug;

/// One row of a parameterized table
#[derive(Debug, Clone)]
pub struct Case<I, O> {
    pub name: &'static str,
    pub input: I,
    pub expected: O,
}

impl<I, O> Case<I, O> {
    pub const fn new(name: &'static str, input: I, expected: O) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// A row whose actual output differed from the expected one
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub name: &'static str,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Evaluate `f` on every row and return the rows that did not match
pub fn mismatches<I, O, F>(cases: &[Case<I, O>], f: F) -> Vec<Mismatch>
where
    I: Debug,
    O: Debug + PartialEq,
    F: Fn(&I) -> O,
{
    cases
        .iter()
        .filter_map(|case| {
            let actual = f(&case.input);
            (actual != case.expected).then(|| Mismatch {
                name: case.name,
                input: format!("{:?}", case.input),
                expected: format!("{:?}", case.expected),
                actual: format!("{actual:?}"),
            })
        })
        .collect()
}

/// Panic with every mismatching row if any row of `cases` fails
#[track_caller]
pub fn check_table<I, O, F>(cases: &[Case<I, O>], f: F)
where
    I: Debug,
    O: Debug + PartialEq,
    F: Fn(&I) -> O,
{
    let failed = mismatches(cases, f);
    if failed.is_empty() {
        return;
    }

    let report = failed
        .iter()
        .map(|m| {
            format!(
                "  {}: input {} expected {} got {}",
                m.name, m.input, m.expected, m.actual
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!("{} of {} cases failed:\n{report}", failed.len(), cases.len());
}
