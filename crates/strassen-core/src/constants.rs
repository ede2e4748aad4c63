//! Constants for recursion sizes, thresholds, and process exit codes.

/// Side length at which the recursion stops and multiplies directly.
pub const BASE_CASE_SIZE: usize = 2;

/// Smallest padded side length handed to the recursive engine.
///
/// A 1x1 product still pads to 2x2 so the base case is always reachable.
pub const MIN_PADDED_SIZE: usize = BASE_CASE_SIZE;

/// Default side length at or above which the seven sub-products fan out.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128;

/// Default relative tolerance when cross-validating floating-point results.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Process exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not agree during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Operands are malformed or cannot be multiplied.
    pub const ERROR_INPUT: i32 = 5;
}
