pub mod formatter;

pub use formatter::{Outcome, format_number};
