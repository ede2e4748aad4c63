//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use strassen_core::{Matrix, MatrixError, Multiplier, Scalar};

use crate::interfaces::MultiplicationResult;

/// Run every multiplier over the same operands and time each one.
///
/// A single multiplier runs on the calling thread; several run concurrently
/// on the rayon pool. Results keep the order of `multipliers`.
pub fn execute_multiplications<T: Scalar>(
    multipliers: &[Arc<dyn Multiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Vec<MultiplicationResult<T>> {
    if let [multiplier] = multipliers {
        return vec![run_one(multiplier.as_ref(), a, b)];
    }

    multipliers
        .par_iter()
        .map(|multiplier| run_one(multiplier.as_ref(), a, b))
        .collect()
}

fn run_one<T: Scalar>(
    multiplier: &dyn Multiplier<T>,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> MultiplicationResult<T> {
    let start = Instant::now();
    let outcome = multiplier.multiply(a, b);
    let duration = start.elapsed();

    match &outcome {
        Ok(product) => info!(
            strategy = multiplier.name(),
            shape = %product.dimensions(),
            ?duration,
            "multiplication complete"
        ),
        Err(e) => warn!(strategy = multiplier.name(), error = %e, "multiplication failed"),
    }

    MultiplicationResult {
        strategy: multiplier.name().to_string(),
        outcome,
        duration,
    }
}

/// Cross-validate successful results against the first one.
///
/// Products must have equal shapes and agree cell by cell within the relative
/// `tolerance` (zero demands exact equality).
pub fn analyze_comparison_results<T: Scalar>(
    results: &[MultiplicationResult<T>],
    tolerance: f64,
) -> Result<(), MatrixError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.product().map(|p| (r.strategy.as_str(), p)));

    let Some((reference_name, reference)) = valid.next() else {
        return Err(MatrixError::Mismatch("no valid results".into()));
    };

    for (name, product) in valid {
        if !product.approx_eq(reference, tolerance) {
            return Err(MatrixError::Mismatch(format!(
                "{name} disagrees with {reference_name}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use strassen_core::strategy::{NaiveStrategy, ParallelStrassenStrategy, StrassenStrategy};

    fn result(name: &str, outcome: Result<Matrix<f64>, MatrixError>) -> MultiplicationResult<f64> {
        MultiplicationResult {
            strategy: name.into(),
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn execute_single_multiplier() {
        let multiplier: Arc<dyn Multiplier<i64>> = Arc::new(StrassenStrategy::new());
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let results = execute_multiplications(&[multiplier], &a, &b);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].product().unwrap().to_rows(),
            vec![vec![19, 22], vec![43, 50]]
        );
    }

    #[test]
    fn execute_all_preserves_order() {
        let multipliers: Vec<Arc<dyn Multiplier<i64>>> = vec![
            Arc::new(NaiveStrategy::new()),
            Arc::new(StrassenStrategy::new()),
            Arc::new(ParallelStrassenStrategy::new(2)),
        ];
        let a = Matrix::from_fn(9, 5, |i, j| i64::try_from(i * j).unwrap() - 7).unwrap();
        let b = Matrix::from_fn(5, 6, |i, j| i64::try_from(i + j).unwrap()).unwrap();
        let results = execute_multiplications(&multipliers, &a, &b);
        let names: Vec<&str> = results.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(names, vec!["Naive", "Strassen", "ParallelStrassen"]);
        assert!(analyze_comparison_results(&results, 0.0).is_ok());
    }

    #[test]
    fn execute_reports_errors() {
        let multiplier: Arc<dyn Multiplier<i64>> = Arc::new(StrassenStrategy::new());
        let a = Matrix::<i64>::zeros(2, 3).unwrap();
        let results = execute_multiplications(&[multiplier], &a, &a);
        assert!(matches!(
            results[0].outcome,
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            result("A", Ok(m(vec![vec![1.0, 2.0]]))),
            result("B", Ok(m(vec![vec![1.0, 2.0 + 1e-15]]))),
        ];
        assert!(analyze_comparison_results(&results, 1e-9).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![
            result("A", Ok(m(vec![vec![55.0]]))),
            result("B", Ok(m(vec![vec![56.0]]))),
        ];
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(MatrixError::Mismatch(_))
        ));
    }

    #[test]
    fn analyze_shape_mismatch_is_mismatch() {
        let results = vec![
            result("A", Ok(m(vec![vec![1.0, 2.0]]))),
            result("B", Ok(m(vec![vec![1.0], vec![2.0]]))),
        ];
        assert!(analyze_comparison_results(&results, 1.0).is_err());
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![result("A", Err(MatrixError::EmptyMatrix))];
        assert!(matches!(
            analyze_comparison_results(&results, 0.0),
            Err(MatrixError::Mismatch(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        let results: Vec<MultiplicationResult<f64>> = vec![];
        assert!(analyze_comparison_results(&results, 0.0).is_err());
    }

    #[test]
    fn analyze_mixed_valid_and_error_results() {
        let results = vec![
            result("A", Ok(m(vec![vec![3.0]]))),
            result("B", Err(MatrixError::Config("bad".into()))),
        ];
        assert!(analyze_comparison_results(&results, 0.0).is_ok());
    }
}
