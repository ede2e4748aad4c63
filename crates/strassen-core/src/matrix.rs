//! Dense row-major matrix type and shape helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::scalar::Scalar;

/// Shape of a matrix as `(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn is_square(self) -> bool {
        self.rows == self.cols
    }

    /// Largest of the two sides.
    #[must_use]
    pub fn max_side(self) -> usize {
        self.rows.max(self.cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Rectangular grid of numeric cells.
///
/// Every constructor rejects zero-sized and ragged input, so a live
/// `Matrix` always has at least one row and one column and all rows share
/// the same length. Cells are stored row-major in a single buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Build a matrix from a sequence of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }

        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let Some(expected) = rows.checked_mul(cols) else {
            return Err(MatrixError::ShapeMismatch(format!(
                "{} cell count overflows usize",
                Dimensions::new(rows, cols)
            )));
        };
        if data.len() != expected {
            return Err(MatrixError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix whose cell `(i, j)` is `f(i, j)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        Ok(Self::filled_with(rows, cols, f))
    }

    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Shape constructor for callers that already guarantee non-zero sides.
    pub(crate) fn filled_with(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Current shape, computed from the matrix itself.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Cell at `(row, col)` for in-bounds indices.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Borrow row `i`. Panics when `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy the cells out as a sequence of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// Zero-padded copy with `self` in the top-left corner.
    ///
    /// The receiver is left untouched.
    pub fn padded(&self, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows < self.rows || cols < self.cols {
            return Err(MatrixError::ShapeMismatch(format!(
                "cannot pad {} down to {}",
                self.dimensions(),
                Dimensions::new(rows, cols)
            )));
        }
        Ok(Self::filled_with(rows, cols, |i, j| {
            if i < self.rows && j < self.cols {
                self.at(i, j)
            } else {
                T::zero()
            }
        }))
    }

    /// Copy of the top-left `rows x cols` block.
    pub fn cropped(&self, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if rows > self.rows || cols > self.cols {
            return Err(MatrixError::ShapeMismatch(format!(
                "cannot crop {} up to {}",
                self.dimensions(),
                Dimensions::new(rows, cols)
            )));
        }
        Ok(self.block(0, 0, rows, cols))
    }

    /// Copy of the `rows x cols` block starting at `(row, col)`.
    pub(crate) fn block(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        debug_assert!(row + rows <= self.rows && col + cols <= self.cols);
        let mut data = Vec::with_capacity(rows * cols);
        for i in row..row + rows {
            let start = i * self.cols + col;
            data.extend_from_slice(&self.data[start..start + cols]);
        }
        Self { rows, cols, data }
    }

    /// Cell-by-cell comparison with a relative tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.approx_eq(b, tolerance))
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
