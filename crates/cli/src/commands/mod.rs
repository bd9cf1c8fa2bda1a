pub mod exercises;
pub mod init;

pub use exercises::{
    average_command, can_drive_command, coupons_command, discount_command, factorial_command,
    fizz_buzz_command, max_command, price_in_range_command, username_command,
    validate_user_command,
};
pub use init::{init_command, show_config_command};
