use anyhow::Result;
use assert_drills_core::Drills;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    average_command, can_drive_command, coupons_command, discount_command, factorial_command,
    fizz_buzz_command, init_command, max_command, price_in_range_command, show_config_command,
    username_command, validate_user_command,
};
use crate::display::Outcome;

#[derive(Parser, Debug)]
#[command(name = "assert-drills")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Path to a config file (defaults to the nearest .assert-drills.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments taken as raw text are parsed as JSON literals first, so `10` is a
/// number and `"10"` (quoted in the shell) is a string.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the coupon catalogue
    Coupons,
    /// Price after applying a discount code
    #[command(visible_alias = "d")]
    Discount {
        #[arg(allow_hyphen_values = true)]
        price: String,
        #[arg(allow_hyphen_values = true)]
        code: String,
    },
    /// Validate a username and age pair
    ValidateUser {
        #[arg(allow_hyphen_values = true)]
        username: String,
        #[arg(allow_hyphen_values = true)]
        age: String,
    },
    /// Whether a price lies within [min, max]
    PriceInRange {
        #[arg(allow_negative_numbers = true)]
        price: f64,
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Whether a username has an accepted length
    Username { username: String },
    /// Whether someone may drive in a country
    CanDrive {
        /// Age in years; fractional and negative ages are accepted
        #[arg(allow_negative_numbers = true)]
        age: f64,
        country: String,
    },
    /// The greater of two numbers
    Max {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// FizzBuzz classification of a number
    FizzBuzz {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Arithmetic mean of the given numbers
    Average {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Factorial of a number
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Write the default configuration file
    Init {
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the configuration in effect
    ShowConfig,
}

impl Commands {
    /// Short name used in JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Coupons => "coupons",
            Commands::Discount { .. } => "discount",
            Commands::ValidateUser { .. } => "validate-user",
            Commands::PriceInRange { .. } => "price-in-range",
            Commands::Username { .. } => "username",
            Commands::CanDrive { .. } => "can-drive",
            Commands::Max { .. } => "max",
            Commands::FizzBuzz { .. } => "fizz-buzz",
            Commands::Average { .. } => "average",
            Commands::Factorial { .. } => "factorial",
            Commands::Init { .. } => "init",
            Commands::ShowConfig => "show-config",
        }
    }

    /// Execute the command
    pub fn execute(self, drills: &Drills) -> Result<Outcome> {
        match self {
            Commands::Coupons => coupons_command(drills),
            Commands::Discount { price, code } => Ok(discount_command(drills, &price, &code)),
            Commands::ValidateUser { username, age } => {
                Ok(validate_user_command(drills, &username, &age))
            }
            Commands::PriceInRange { price, min, max } => {
                Ok(price_in_range_command(drills, price, min, max))
            }
            Commands::Username { username } => Ok(username_command(drills, &username)),
            Commands::CanDrive { age, country } => Ok(can_drive_command(drills, age, &country)),
            Commands::Max { a, b } => Ok(max_command(a, b)),
            Commands::FizzBuzz { n } => Ok(fizz_buzz_command(n)),
            Commands::Average { numbers } => Ok(average_command(&numbers)),
            Commands::Factorial { n } => Ok(factorial_command(n)),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
            Commands::ShowConfig => show_config_command(drills),
        }
    }
}
