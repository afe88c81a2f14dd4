//! Naive asynchronous Fibonacci calculator.
//!
//! Every request fans out into two concurrently polled sub-requests
//! (`n - 1` and `n - 2`) joined with [`tokio::try_join!`], so the first
//! failure short-circuits the parent. The exponential call tree is kept on
//! purpose: the calculator is a reference for the recursion itself, and the
//! shared counter records how many times it was entered.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{FibError, FibResult};

/// Smallest index accepted by [`FibonacciCalculator::compute`].
pub const MIN_INDEX: i64 = 1;

/// Largest index accepted by [`FibonacciCalculator::compute`].
///
/// `fib(100)` still fits in a `u128`.
pub const MAX_INDEX: i64 = 100;

/// Boxed future returned by [`FibonacciCalculator::compute`].
///
/// Async recursion needs the indirection.
pub type FibFuture<'a> = Pin<Box<dyn Future<Output = FibResult<u128>> + Send + 'a>>;

/// Computes Fibonacci numbers by double recursion and counts its invocations.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct FibonacciCalculator {
    invocations: Arc<AtomicU64>,
}

impl FibonacciCalculator {
    /// Create a calculator with its counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `compute` has been entered, recursive calls included.
    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    /// Compute `fib(n)` with `fib(1) = fib(2) = 1`.
    ///
    /// The counter is bumped once when the returned future starts running,
    /// before validation, so an out-of-range request counts as one call.
    ///
    /// # Errors
    /// [`FibError::OutOfRange`] when `n` is outside `1..=100`. Errors from
    /// either branch propagate unchanged and the sum is never formed.
    pub fn compute(&self, n: i64) -> FibFuture<'_> {
        Box::pin(async move {
            self.invocations.fetch_add(1, Ordering::Relaxed);

            if !(MIN_INDEX..=MAX_INDEX).contains(&n) {
                return Err(FibError::OutOfRange { n });
            }

            if n <= 2 {
                // Resolve on a later poll, like every other outcome.
                tokio::task::yield_now().await;
                return Ok(1);
            }

            let (first, second) = tokio::try_join!(self.compute(n - 1), self.compute(n - 2))?;
            Ok(first + second)
        })
    }
}

/// Number of `compute` calls the double recursion makes for `n`.
///
/// Each leaf returns 1, so the tree for `fib(n)` has `fib(n)` leaves and
/// `fib(n) - 1` inner nodes. Returns `None` when `n` is out of range.
pub fn call_count(n: i64) -> Option<u128> {
    fibonacci_iterative(n).map(|value| 2 * value - 1)
}

fn fibonacci_iterative(n: i64) -> Option<u128> {
    if !(MIN_INDEX..=MAX_INDEX).contains(&n) {
        return None;
    }
    let (mut a, mut b) = (1u128, 1u128);
    for _ in 2..n {
        (a, b) = (b, a + b);
    }
    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_base_cases() {
        let calc = FibonacciCalculator::new();
        assert_eq!(calc.compute(1).await, Ok(1));
        assert_eq!(calc.compute(2).await, Ok(1));
        assert_eq!(calc.invocations(), 2);
    }

    #[tokio::test]
    async fn test_small_values() {
        let calc = FibonacciCalculator::new();
        assert_eq!(calc.compute(7).await, Ok(13));
        assert_eq!(calc.compute(10).await, Ok(55));
    }

    #[tokio::test]
    async fn test_out_of_range() {
        let calc = FibonacciCalculator::new();
        assert_eq!(calc.compute(0).await, Err(FibError::OutOfRange { n: 0 }));
        assert_eq!(
            calc.compute(101).await,
            Err(FibError::OutOfRange { n: 101 })
        );
        assert_eq!(calc.compute(-5).await, Err(FibError::OutOfRange { n: -5 }));
        // Rejected calls are still entries.
        assert_eq!(calc.invocations(), 3);
    }

    #[tokio::test]
    async fn test_counter_matches_recursion_tree() {
        let calc = FibonacciCalculator::new();
        calc.compute(5).await.unwrap();
        assert_eq!(calc.invocations(), 9);
        assert_eq!(call_count(5), Some(9));
    }

    #[tokio::test]
    async fn test_clones_share_counter() {
        let calc = FibonacciCalculator::new();
        let other = calc.clone();
        other.compute(4).await.unwrap();
        assert_eq!(calc.invocations(), 5);
    }

    #[test]
    fn test_future_is_lazy() {
        let calc = FibonacciCalculator::new();
        let pending = calc.compute(3);
        assert_eq!(calc.invocations(), 0);
        drop(pending);
        assert_eq!(calc.invocations(), 0);
    }

    #[test]
    fn test_call_count() {
        assert_eq!(call_count(1), Some(1));
        assert_eq!(call_count(2), Some(1));
        assert_eq!(call_count(3), Some(3));
        assert_eq!(call_count(10), Some(109));
        assert_eq!(call_count(0), None);
        assert_eq!(call_count(101), None);
    }

    #[test]
    fn test_iterative_reference_upper_bound() {
        assert_eq!(
            fibonacci_iterative(MAX_INDEX),
            Some(354_224_848_179_261_915_075)
        );
    }
}
