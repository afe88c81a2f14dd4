//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Naive asynchronous Fibonacci calculator
#[derive(Parser, Debug)]
#[command(
    name = "fibasync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Naive asynchronous Fibonacci calculator",
    long_about = "Compute fib(n) by double recursion over a two-branch async join and report how many calls it took.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  fibasync\n  fibasync 12\n  fibasync compute 25\n  fibasync init\n  FIB_DRIVER__N=7 fibasync"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Index to compute when no subcommand is given (overrides config)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub n: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a Fibonacci number
    #[command(about = "Compute fib(N) and print the invocation count")]
    Compute {
        /// Index to compute, 1..=100 (overrides config)
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: Option<i64>,
    },

    /// Initialize project
    #[command(about = "Set up .fibasync directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

impl Cli {
    /// Resolve the command to run; a bare invocation computes.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Compute { n: self.n })
    }
}
