//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface consumed by orchestration.
//! Strategies include the naive reference, sequential Strassen, and
//! Strassen with parallel fan-out of the sub-products.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::naive::naive_multiply;
use crate::normalizer::{multiply, multiply_with_options};
use crate::options::Options;
use crate::scalar::Scalar;

/// Narrow interface for matrix multiplication strategies.
pub trait Multiplier<T: Scalar>: Send + Sync {
    /// Multiply `a` by `b`.
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Triple-loop reference multiplication.
pub struct NaiveStrategy;

impl NaiveStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Multiplier<T> for NaiveStrategy {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        naive_multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Single-threaded Strassen with padding and cropping.
pub struct StrassenStrategy;

impl StrassenStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StrassenStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Multiplier<T> for StrassenStrategy {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Strassen that runs the seven sub-products on the rayon pool once the
/// padded side reaches the configured threshold.
pub struct ParallelStrassenStrategy {
    opts: Options,
}

impl ParallelStrassenStrategy {
    #[must_use]
    pub fn new(parallel_threshold: usize) -> Self {
        Self::with_options(Options {
            parallel_threshold,
            ..Options::default()
        })
    }

    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    #[must_use]
    pub fn parallel_threshold(&self) -> usize {
        self.opts.parallel_threshold
    }
}

impl<T: Scalar> Multiplier<T> for ParallelStrassenStrategy {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        multiply_with_options(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "ParallelStrassen"
    }
}
