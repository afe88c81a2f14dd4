//! Compute command.

use crate::calculator::FibonacciCalculator;
use crate::error::FibResult;

/// Format the outcome of one request the way the driver prints it.
pub fn render(n: i64, outcome: &FibResult<u128>, invocations: u64) -> String {
    match outcome {
        Ok(value) => format!("fib({n}) = {value} ({invocations} invocations)"),
        Err(e) => format!("Error: {e}"),
    }
}

/// Run compute command - compute `fib(n)` on a fresh calculator and print the result.
///
/// Failures are printed, not returned: the process exits normally either way.
pub async fn run_compute(n: i64) {
    let calculator = FibonacciCalculator::new();

    tracing::debug!(target: "fibasync::cli", "computing fib({n})");
    let outcome = calculator.compute(n).await;
    let invocations = calculator.invocations();

    match &outcome {
        Ok(value) => {
            tracing::debug!(target: "fibasync::cli", "fib({n}) = {value} after {invocations} invocations")
        }
        Err(e) => tracing::debug!(target: "fibasync::cli", "fib({n}) failed: {e}"),
    }

    println!("{}", render(n, &outcome, invocations));
}
