//! Closed-form product for the 2x2 recursion leaves.

use crate::constants::BASE_CASE_SIZE;
use crate::error::MatrixError;
use crate::matrix::{Dimensions, Matrix};
use crate::scalar::Scalar;

/// Multiply two 2x2 matrices with the textbook formula (8 multiplications).
pub fn multiply_2x2<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let leaf = Dimensions::new(BASE_CASE_SIZE, BASE_CASE_SIZE);
    if a.dimensions() != leaf || b.dimensions() != leaf {
        return Err(MatrixError::UnsupportedDimension {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let cell = |i: usize, j: usize| {
        a.at(i, 0)
            .cell_mul(b.at(0, j))
            .cell_add(a.at(i, 1).cell_mul(b.at(1, j)))
    };
    Matrix::from_vec(2, 2, vec![cell(0, 0), cell(0, 1), cell(1, 0), cell(1, 1)])
}
