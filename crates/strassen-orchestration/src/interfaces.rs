//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{Matrix, MatrixError, Scalar};

/// Trait for presenting results to the user.
pub trait ResultPresenter<T: Scalar>: Send + Sync {
    /// Present a product computed by one strategy.
    fn present_result(&self, strategy: &str, product: &Matrix<T>, duration: Duration, details: bool);

    /// Present a timing comparison across strategies.
    fn present_comparison(&self, results: &[MultiplicationResult<T>]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running a single strategy.
#[derive(Debug, Clone)]
pub struct MultiplicationResult<T> {
    /// Strategy name.
    pub strategy: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix<T>, MatrixError>,
    /// Computation duration.
    pub duration: Duration,
}

impl<T> MultiplicationResult<T> {
    /// The product, if the strategy succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&Matrix<T>> {
        self.outcome.as_ref().ok()
    }
}
