//! Error type shared by every matrix operation.

use crate::matrix::Dimensions;

/// Error type for matrix construction and multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch: cannot combine {left} with {right}")]
    DimensionMismatch { left: Dimensions, right: Dimensions },

    /// A matrix with an odd side cannot be split into quadrants.
    #[error("cannot split a {0} matrix into quadrants: dimensions must be even")]
    OddDimension(Dimensions),

    /// Quadrants or recursive operands do not have the expected shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The base-case multiplier only accepts 2x2 operands.
    #[error("base case requires 2x2 operands, got {left} and {right}")]
    UnsupportedDimension { left: Dimensions, right: Dimensions },

    /// A matrix must have at least one row and one column.
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    /// A row does not have the same length as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A flat buffer does not hold exactly `rows * cols` cells.
    #[error("buffer holds {found} cells, expected {expected}")]
    DataLength { expected: usize, found: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies: {0}")]
    Mismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_display() {
        let err = MatrixError::DimensionMismatch {
            left: Dimensions::new(2, 3),
            right: Dimensions::new(2, 2),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: cannot combine 2x3 with 2x2"
        );
    }

    #[test]
    fn odd_dimension_display() {
        let err = MatrixError::OddDimension(Dimensions::new(3, 3));
        assert!(err.to_string().contains("3x3"));
    }

    #[test]
    fn ragged_rows_display() {
        let err = MatrixError::RaggedRows {
            row: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
    }

    #[test]
    fn config_display() {
        let err = MatrixError::Config("unknown strategy: foo".into());
        assert_eq!(err.to_string(), "configuration error: unknown strategy: foo");
    }
}
