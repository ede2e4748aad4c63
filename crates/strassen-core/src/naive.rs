//! Reference triple-loop multiplication.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Multiply `a (m x k)` by `b (k x n)` with the O(m·k·n) definition.
pub fn naive_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let inner = a.cols();
    Matrix::from_fn(a.rows(), b.cols(), |i, j| {
        (0..inner).fold(T::zero(), |acc, k| acc.cell_add(a.at(i, k).cell_mul(b.at(k, j))))
    })
}
