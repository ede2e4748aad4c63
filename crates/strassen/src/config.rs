//! Application configuration from CLI flags and environment.

use clap::Parser;

use strassen_core::constants::DEFAULT_TOLERANCE;
use strassen_core::options::Options;

/// Strassen-rs: multiply two matrices with Strassen's algorithm.
///
/// Operands are read as a JSON document `{"a": [[...]], "b": [[...]]}`.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// JSON file holding both operands ("-" or absent reads stdin).
    #[arg(short, long, env = "STRASSEN_INPUT")]
    pub input: Option<String>,

    /// Strategy to use: naive, strassen, parallel, or all.
    #[arg(short, long, default_value = "all")]
    pub strategy: String,

    /// Side length at or above which sub-products run in parallel (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Relative tolerance when comparing strategy results.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Output file path for the product as JSON.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the product as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Verbose output (print every row).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Multiplication options derived from the flags, with defaults applied.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            parallel_threshold: self.threshold,
            tolerance: self.tolerance,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strassen_core::constants::DEFAULT_PARALLEL_THRESHOLD;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["strassen"]).unwrap();
        assert_eq!(config.strategy, "all");
        let opts = config.options();
        assert_eq!(opts.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!((opts.tolerance - DEFAULT_TOLERANCE).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_flags() {
        let config = AppConfig::try_parse_from([
            "strassen",
            "--input",
            "ops.json",
            "--strategy",
            "parallel",
            "--threshold",
            "8",
            "--tolerance",
            "0",
            "-q",
        ])
        .unwrap();
        assert_eq!(config.input.as_deref(), Some("ops.json"));
        assert_eq!(config.strategy, "parallel");
        assert!(config.quiet);
        assert_eq!(config.options().parallel_threshold, 8);
        assert!(config.options().tolerance.abs() < f64::EPSILON);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }
}
