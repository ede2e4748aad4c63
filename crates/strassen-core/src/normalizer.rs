//! Top-level multiplication for arbitrary compatible shapes.
//!
//! Validates the operands, zero-pads copies of both to a common
//! power-of-two square, runs the recursive engine, and crops the product
//! back to `rows(a) x cols(b)`. Inputs are only ever borrowed.

use std::borrow::Cow;

use tracing::debug;

use crate::constants::MIN_PADDED_SIZE;
use crate::engine::strassen_multiply_parallel;
use crate::error::MatrixError;
use crate::matrix::{Dimensions, Matrix};
use crate::options::Options;
use crate::scalar::Scalar;

/// Multiply `a (m x k)` by `b (k x n)` with Strassen's algorithm.
///
/// Runs single-threaded.
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    multiply_padded(a, b, usize::MAX)
}

/// Multiply with the given options, fanning out large recursion levels.
pub fn multiply_with_options<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    opts: &Options,
) -> Result<Matrix<T>, MatrixError> {
    multiply_padded(a, b, opts.parallel_threshold)
}

/// Side length of the square both operands are padded to.
///
/// The next power of two at or above every side of both operands, and never
/// below [`MIN_PADDED_SIZE`].
#[must_use]
pub fn padded_size(left: Dimensions, right: Dimensions) -> usize {
    left.max_side()
        .max(right.max_side())
        .next_power_of_two()
        .max(MIN_PADDED_SIZE)
}

fn multiply_padded<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    parallel_threshold: usize,
) -> Result<Matrix<T>, MatrixError> {
    let left = a.dimensions();
    let right = b.dimensions();
    if left.cols != right.rows {
        return Err(MatrixError::DimensionMismatch { left, right });
    }

    let size = padded_size(left, right);
    debug!(%left, %right, size, "padding operands");

    let padded_a = pad_to_square(a, size)?;
    let padded_b = pad_to_square(b, size)?;
    let product = strassen_multiply_parallel(&padded_a, &padded_b, parallel_threshold)?;

    let target = Dimensions::new(left.rows, right.cols);
    if product.dimensions() == target {
        Ok(product)
    } else {
        product.cropped(target.rows, target.cols)
    }
}

fn pad_to_square<T: Scalar>(m: &Matrix<T>, size: usize) -> Result<Cow<'_, Matrix<T>>, MatrixError> {
    if m.dimensions() == Dimensions::new(size, size) {
        Ok(Cow::Borrowed(m))
    } else {
        m.padded(size, size).map(Cow::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::naive_multiply;

    fn m(rows: Vec<Vec<i64>>) -> Matrix<i64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn padded_size_rules() {
        let d = Dimensions::new;
        assert_eq!(padded_size(d(1, 1), d(1, 1)), 2);
        assert_eq!(padded_size(d(2, 2), d(2, 2)), 2);
        assert_eq!(padded_size(d(3, 3), d(3, 3)), 4);
        assert_eq!(padded_size(d(2, 3), d(3, 2)), 4);
        assert_eq!(padded_size(d(5, 1), d(1, 9)), 16);
        assert_eq!(padded_size(d(8, 8), d(8, 8)), 8);
    }

    #[test]
    fn square_2x2() {
        let c = multiply(&m(vec![vec![1, 2], vec![3, 4]]), &m(vec![vec![5, 6], vec![7, 8]])).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn square_inputs_are_multiplied() {
        let a = m(vec![vec![2, 0], vec![0, 2]]);
        let b = m(vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(multiply(&a, &b).unwrap().to_rows(), vec![vec![2, 2], vec![2, 2]]);
    }

    #[test]
    fn ones_times_identity_3x3() {
        let ones = Matrix::from_fn(3, 3, |_, _| 1i64).unwrap();
        let id = Matrix::identity(3).unwrap();
        assert_eq!(multiply(&ones, &id).unwrap(), ones);
    }

    #[test]
    fn rectangular_2x3_by_3x2() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let b = m(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.dimensions(), Dimensions::new(2, 2));
        assert_eq!(c, naive_multiply(&a, &b).unwrap());
    }

    #[test]
    fn outer_product_shape() {
        let col = m(vec![vec![1], vec![2], vec![3]]);
        let row = m(vec![vec![4, 5, 6]]);
        let c = multiply(&col, &row).unwrap();
        assert_eq!(c.to_rows(), vec![vec![4, 5, 6], vec![8, 10, 12], vec![12, 15, 18]]);
    }

    #[test]
    fn scalar_1x1() {
        let c = multiply(&m(vec![vec![6]]), &m(vec![vec![7]])).unwrap();
        assert_eq!(c.to_rows(), vec![vec![42]]);
    }

    #[test]
    fn inner_mismatch_fails() {
        let a = Matrix::<i64>::zeros(2, 3).unwrap();
        let b = Matrix::<i64>::zeros(2, 2).unwrap();
        assert_eq!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch {
                left: Dimensions::new(2, 3),
                right: Dimensions::new(2, 2),
            })
        );
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let b = m(vec![vec![1], vec![0], vec![-1]]);
        let (a0, b0) = (a.clone(), b.clone());
        let _ = multiply(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn large_magnitude_times_identity() {
        let a = Matrix::from_fn(4, 4, |_, _| 1i32 << 30).unwrap();
        let id = Matrix::identity(4).unwrap();
        assert_eq!(naive_multiply(&a, &id).unwrap(), a);
        assert_eq!(multiply(&a, &id).unwrap(), a);
        assert_eq!(multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn extreme_cells_with_fitting_product() {
        // Quadrant sums of these cells leave i64, the product does not
        let a = Matrix::from_rows(vec![
            vec![i64::MAX, i64::MIN, 0],
            vec![i64::MIN, i64::MAX, 1],
            vec![1, 0, i64::MAX],
        ])
        .unwrap();
        let b = Matrix::from_rows(vec![vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(multiply(&a, &b).unwrap(), naive_multiply(&a, &b).unwrap());
        assert_eq!(
            multiply(&a, &b).unwrap().to_rows(),
            vec![vec![i64::MAX, 0, 0], vec![i64::MIN, 0, 1], vec![1, 0, i64::MAX]]
        );
    }

    #[test]
    fn with_options_matches_sequential() {
        let a = Matrix::from_fn(37, 21, |i, j| i64::try_from((i * 5 + j) % 13).unwrap() - 6).unwrap();
        let b = Matrix::from_fn(21, 19, |i, j| i64::try_from((i + 3 * j) % 7).unwrap() - 3).unwrap();
        let opts = Options {
            parallel_threshold: 8,
            ..Options::default()
        };
        let par = multiply_with_options(&a, &b, &opts).unwrap();
        assert_eq!(par, multiply(&a, &b).unwrap());
        assert_eq!(par, naive_multiply(&a, &b).unwrap());
    }
}
