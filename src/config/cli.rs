use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "logic-exercises")]
#[command(about = "Small logic exercises with a Spanish console demo")]
pub struct CliConfig {
    /// Path to a TOML file with demo inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text, json or csv (overrides the config file)
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run every exercise with the demo inputs
    Demo,
    /// Print the first N Fibonacci numbers
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Check whether each value is prime
    Prime {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Check whether a text is a palindrome
    Palindrome {
        /// Use the ASCII-only normalization
        #[arg(long)]
        ascii: bool,
        text: String,
    },
    /// Sum the even numbers
    SumEven {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Compute the cost of an international call
    CallCost {
        #[arg(allow_negative_numbers = true)]
        zone: i64,
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Print FizzBuzz labels for 1..=N
    Fizzbuzz {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// List the registered call zones
    Zones,
}
