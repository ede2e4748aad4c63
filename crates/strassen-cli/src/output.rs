//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use strassen_core::{Matrix, Scalar};

/// Rows shown at each end of a truncated matrix.
const PREVIEW_ROWS: usize = 4;

/// Format a matrix for display, eliding the middle rows of tall matrices
/// unless `verbose` is set.
#[must_use]
pub fn format_matrix<T: Scalar>(matrix: &Matrix<T>, verbose: bool) -> String {
    let render = |row: &[T]| {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        format!("[{}]", cells.join(", "))
    };

    let rows = matrix.rows();
    if verbose || rows <= PREVIEW_ROWS * 2 {
        return matrix.iter_rows().map(render).collect::<Vec<_>>().join("\n");
    }

    let mut lines: Vec<String> = (0..PREVIEW_ROWS).map(|i| render(matrix.row(i))).collect();
    lines.push(format!("... ({} rows omitted)", rows - PREVIEW_ROWS * 2));
    lines.extend((rows - PREVIEW_ROWS..rows).map(|i| render(matrix.row(i))));
    lines.join("\n")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// JSON document written for a product.
#[derive(Debug, Serialize)]
pub struct ProductDocument<T> {
    pub strategy: String,
    pub rows: usize,
    pub cols: usize,
    pub product: Vec<Vec<T>>,
}

impl<T: Scalar + Serialize> ProductDocument<T> {
    #[must_use]
    pub fn new(strategy: &str, product: &Matrix<T>) -> Self {
        Self {
            strategy: strategy.to_string(),
            rows: product.rows(),
            cols: product.cols(),
            product: product.to_rows(),
        }
    }
}

/// Render a product as pretty-printed JSON.
pub fn to_json<T: Scalar + Serialize>(strategy: &str, product: &Matrix<T>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ProductDocument::new(strategy, product))
}

/// Write a product to a file as JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file<T: Scalar + Serialize>(
    path: &str,
    strategy: &str,
    product: &Matrix<T>,
) -> io::Result<()> {
    let json = to_json(strategy, product)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}
