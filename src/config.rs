use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Median and mode of whole-number datasets, read interactively
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "poc-stats", version, long_about = None)]
pub struct Config {
    /// Line that ends the session
    #[arg(short, long, default_value = "q", value_name = "SENTINEL")]
    pub quit: String,

    /// Decimal places used when printing the median
    #[arg(short, long, default_value_t = 2)]
    pub precision: usize,

    /// Print each summary as pretty JSON instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quit: "q".to_string(),
            precision: 2,
            json: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// Log level selected by `--verbose`, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
