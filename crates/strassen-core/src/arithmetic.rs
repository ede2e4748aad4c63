//! Elementwise addition and subtraction of equal-shaped matrices.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Elementwise `a + b`.
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    zip_with(a, b, T::cell_add)
}

/// Elementwise `a - b`.
pub fn subtract<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    zip_with(a, b, T::cell_sub)
}

fn zip_with<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: impl Fn(T, T) -> T,
) -> Result<Matrix<T>, MatrixError> {
    if a.dimensions() != b.dimensions() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Matrix::from_vec(a.rows(), a.cols(), data)
}
