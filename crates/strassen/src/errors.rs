//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Handle a multiplication error and return the appropriate exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::DimensionMismatch { .. }
        | MatrixError::EmptyMatrix
        | MatrixError::RaggedRows { .. }
        | MatrixError::DataLength { .. } => exit_codes::ERROR_INPUT,
        MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::Mismatch(_) => exit_codes::ERROR_MISMATCH,
        MatrixError::OddDimension(_)
        | MatrixError::ShapeMismatch(_)
        | MatrixError::UnsupportedDimension { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Map an application error to an exit code by inspecting its cause chain.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(matrix_err) = cause.downcast_ref::<MatrixError>() {
            return handle_error(matrix_err);
        }
        if cause.is::<serde_json::Error>() || cause.is::<std::io::Error>() {
            return exit_codes::ERROR_INPUT;
        }
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use strassen_core::Dimensions;

    #[test]
    fn error_codes() {
        let dims = Dimensions::new(2, 3);
        assert_eq!(
            handle_error(&MatrixError::DimensionMismatch { left: dims, right: dims }),
            5
        );
        assert_eq!(handle_error(&MatrixError::Mismatch("x".into())), 3);
        assert_eq!(handle_error(&MatrixError::Config("bad".into())), 4);
        assert_eq!(handle_error(&MatrixError::ShapeMismatch("odd".into())), 1);
    }

    #[test]
    fn exit_code_through_context() {
        let err = anyhow::Error::from(MatrixError::EmptyMatrix).context("operand a");
        assert_eq!(exit_code(&err), exit_codes::ERROR_INPUT);
    }

    #[test]
    fn exit_code_for_io_error() {
        let err = std::fs::read_to_string("/nonexistent/ops.json")
            .context("failed to read")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_INPUT);
    }

    #[test]
    fn exit_code_generic() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), exit_codes::ERROR_GENERIC);
    }
}
