//! # strassen-core
//!
//! Core library for Strassen-rs: divide-and-conquer matrix multiplication
//! for operands of any compatible shape. Operands are zero-padded to a
//! common power-of-two square, multiplied with seven recursive sub-products
//! per level, and the product is cropped back to `rows(a) x cols(b)`.

pub mod arithmetic;
pub mod base_case;
pub mod constants;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod naive;
pub mod normalizer;
pub mod options;
pub mod quadrant;
pub mod registry;
pub mod scalar;
pub mod strategy;

// Re-exports
pub use arithmetic::{add, subtract};
pub use base_case::multiply_2x2;
pub use constants::{exit_codes, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOLERANCE};
pub use engine::{strassen_multiply, strassen_multiply_parallel};
pub use error::MatrixError;
pub use matrix::{Dimensions, Matrix};
pub use naive::naive_multiply;
pub use normalizer::{multiply, multiply_with_options, padded_size};
pub use options::Options;
pub use quadrant::{merge, split, Quadrants};
pub use registry::{DefaultFactory, MultiplierFactory};
pub use scalar::Scalar;
pub use strategy::Multiplier;
