pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::DemoConfig;

pub use crate::app::demo::build_report;
pub use crate::app::report::{render, OutputFormat, Report};
pub use crate::core::numbers::{is_prime, sum_even_numbers};
pub use crate::core::pricing::{compute_call_cost, quote_call, zone, zones, CallQuote};
pub use crate::core::sequences::{fizz_buzz, fizz_buzz_labels, generate_fibonacci, FibonacciIter};
pub use crate::core::text::{
    is_palindrome, is_palindrome_with, AsciiNormalizer, Normalization, UnicodeNormalizer,
};
pub use crate::domain::model::{Amount, FizzBuzzLabel, Zone};
pub use crate::utils::error::{ExerciseError, Result};
