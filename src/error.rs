//! Error types for Fibonacci computation.

use thiserror::Error;

use crate::calculator::{MAX_INDEX, MIN_INDEX};

/// Errors produced by [`FibonacciCalculator::compute`](crate::FibonacciCalculator::compute).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    #[error("Number out of range: {n} (expected {}..={})", MIN_INDEX, MAX_INDEX)]
    OutOfRange { n: i64 },
}

pub type FibResult<T> = Result<T, FibError>;
