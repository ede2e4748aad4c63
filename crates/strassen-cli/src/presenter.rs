//! CLI result presenter.

use std::time::Duration;

use strassen_core::{Matrix, Scalar};
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_duration, format_matrix};
use crate::ui::{print_error, product_header, status_label};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl<T: Scalar> ResultPresenter<T> for CLIResultPresenter {
    fn present_result(&self, strategy: &str, product: &Matrix<T>, duration: Duration, details: bool) {
        if self.quiet {
            println!("{}", format_matrix(product, true));
            return;
        }

        println!("{}", product_header(strategy, product.dimensions()));
        println!("Duration: {}", format_duration(duration));

        if details {
            let zero = T::zero();
            let non_zero = product.as_slice().iter().filter(|&&x| x != zero).count();
            println!("Cells: {} ({non_zero} non-zero)", product.as_slice().len());
        }

        println!("{}", format_matrix(product, self.verbose));
    }

    fn present_comparison(&self, results: &[MultiplicationResult<T>]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            println!(
                "  {:<20} {:>10} {}",
                result.strategy,
                format_duration(result.duration),
                status_label(result.outcome.is_ok()),
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
