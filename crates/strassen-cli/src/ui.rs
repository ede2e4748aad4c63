//! Terminal styling for products, strategy comparisons, and errors.

use console::style;

use strassen_core::Dimensions;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Header line naming the strategy and the product shape.
#[must_use]
pub fn product_header(strategy: &str, shape: Dimensions) -> String {
    let text = format!("=== {strategy} [{shape}] ===");
    if is_color_disabled() {
        text
    } else {
        style(text).bold().cyan().to_string()
    }
}

/// `[OK]` / `[ERROR]` tag for one row of the comparison table.
#[must_use]
pub fn status_label(ok: bool) -> String {
    match (ok, is_color_disabled()) {
        (true, true) => "[OK]".to_string(),
        (false, true) => "[ERROR]".to_string(),
        (true, false) => style("[OK]").green().to_string(),
        (false, false) => style("[ERROR]").red().bold().to_string(),
    }
}

/// Report that `count` strategies produced matching products.
pub fn print_agreement(count: usize, tolerance: f64) {
    let text = if tolerance > 0.0 {
        format!("{count} strategies agree (relative tolerance {tolerance:e})")
    } else {
        format!("{count} strategies agree exactly")
    };
    println!("{} {text}", status_label(true));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", status_label(false));
}
