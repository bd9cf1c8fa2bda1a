//! Configuration for the exercise tables

mod settings;
pub mod validation;

pub use settings::{CONFIG_FILE_NAMES, Config};
pub use validation::validate_config;
