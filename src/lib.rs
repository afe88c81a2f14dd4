pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use calculator::{FibFuture, FibonacciCalculator, MAX_INDEX, MIN_INDEX, call_count};
pub use config::Settings;
pub use error::{FibError, FibResult};
