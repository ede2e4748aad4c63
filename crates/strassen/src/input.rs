//! Operand loading from JSON documents.

use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

use strassen_core::Matrix;

/// Operand document: `{"a": [[...]], "b": [[...]]}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperandFile {
    pub a: Vec<Vec<f64>>,
    pub b: Vec<Vec<f64>>,
}

impl OperandFile {
    /// Parse an operand document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid operand document")
    }

    /// Convert both operands into matrices.
    pub fn into_matrices(self) -> Result<(Matrix<f64>, Matrix<f64>)> {
        let a = Matrix::from_rows(self.a).context("operand a")?;
        let b = Matrix::from_rows(self.b).context("operand b")?;
        Ok((a, b))
    }
}

/// Load both operands from `path`, or from stdin when the path is absent or `-`.
pub fn load_operands(path: Option<&str>) -> Result<(Matrix<f64>, Matrix<f64>)> {
    let text = match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read operands from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read operands from {path}"))?,
    };
    OperandFile::from_json(&text)?.into_matrices()
}
