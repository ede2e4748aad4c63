//! Quadrant split and merge for even-sized square matrices.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// The four equal blocks of a square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T> {
    pub top_left: Matrix<T>,
    pub top_right: Matrix<T>,
    pub bottom_left: Matrix<T>,
    pub bottom_right: Matrix<T>,
}

/// Split a square matrix with even sides into four `n/2 x n/2` blocks.
pub fn split<T: Scalar>(m: &Matrix<T>) -> Result<Quadrants<T>, MatrixError> {
    let dims = m.dimensions();
    if dims.rows % 2 != 0 || dims.cols % 2 != 0 {
        return Err(MatrixError::OddDimension(dims));
    }
    if !dims.is_square() {
        return Err(MatrixError::ShapeMismatch(format!(
            "cannot split non-square {dims} matrix"
        )));
    }

    let mid = dims.rows / 2;
    Ok(Quadrants {
        top_left: m.block(0, 0, mid, mid),
        top_right: m.block(0, mid, mid, mid),
        bottom_left: m.block(mid, 0, mid, mid),
        bottom_right: m.block(mid, mid, mid, mid),
    })
}

/// Reassemble four equal square blocks into one matrix.
///
/// `top_left ‖ top_right` forms the top half and `bottom_left ‖ bottom_right`
/// the bottom half.
pub fn merge<T: Scalar>(
    top_left: &Matrix<T>,
    top_right: &Matrix<T>,
    bottom_left: &Matrix<T>,
    bottom_right: &Matrix<T>,
) -> Result<Matrix<T>, MatrixError> {
    let dims = top_left.dimensions();
    if !dims.is_square() {
        return Err(MatrixError::ShapeMismatch(format!(
            "quadrants must be square, top-left is {dims}"
        )));
    }
    for (name, q) in [
        ("top-right", top_right),
        ("bottom-left", bottom_left),
        ("bottom-right", bottom_right),
    ] {
        if q.dimensions() != dims {
            return Err(MatrixError::ShapeMismatch(format!(
                "{name} quadrant is {}, expected {dims}",
                q.dimensions()
            )));
        }
    }

    let half = dims.rows;
    let n = half * 2;
    let mut data = Vec::with_capacity(n * n);
    for (left, right) in [(top_left, top_right), (bottom_left, bottom_right)] {
        for i in 0..half {
            data.extend_from_slice(left.row(i));
            data.extend_from_slice(right.row(i));
        }
    }
    Matrix::from_vec(n, n, data)
}

impl<T: Scalar> Quadrants<T> {
    /// Merge the blocks back into a single matrix.
    pub fn merge(&self) -> Result<Matrix<T>, MatrixError> {
        merge(
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        )
    }
}
