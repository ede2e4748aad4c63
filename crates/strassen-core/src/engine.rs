//! Recursive Strassen engine for power-of-two square operands.
//!
//! Each level splits both operands into quadrants, forms seven sub-products
//! instead of eight, and recombines them. The seven sub-products never read
//! each other's output, so above a configurable side length they are
//! computed on the rayon pool and joined before recombination. The
//! recombination order is fixed, which keeps floating-point results
//! identical between the sequential and parallel paths.

use rayon::prelude::*;
use tracing::trace;

use crate::arithmetic::{add, subtract};
use crate::base_case::multiply_2x2;
use crate::constants::BASE_CASE_SIZE;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::quadrant::{merge, split};
use crate::scalar::Scalar;

/// Multiply two `n x n` matrices where `n` is a power of two and `n >= 2`.
///
/// Runs every level sequentially.
pub fn strassen_multiply<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, MatrixError> {
    strassen_multiply_parallel(a, b, usize::MAX)
}

/// Same as [`strassen_multiply`], fanning out the seven sub-products at every
/// level whose side length is at least `parallel_threshold`.
pub fn strassen_multiply_parallel<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    parallel_threshold: usize,
) -> Result<Matrix<T>, MatrixError> {
    check_operands(a, b)?;
    recurse(a, b, parallel_threshold)
}

fn check_operands<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), MatrixError> {
    let dims = a.dimensions();
    if dims.rows < BASE_CASE_SIZE || b.dimensions().rows < BASE_CASE_SIZE {
        return Err(MatrixError::UnsupportedDimension {
            left: dims,
            right: b.dimensions(),
        });
    }
    if !dims.is_square() || b.dimensions() != dims {
        return Err(MatrixError::ShapeMismatch(format!(
            "recursive operands must be equal squares, got {dims} and {}",
            b.dimensions()
        )));
    }
    if !dims.rows.is_power_of_two() {
        return Err(MatrixError::ShapeMismatch(format!(
            "recursive operands must have a power-of-two side, got {dims}"
        )));
    }
    Ok(())
}

fn recurse<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    parallel_threshold: usize,
) -> Result<Matrix<T>, MatrixError> {
    let n = a.rows();
    if n == BASE_CASE_SIZE {
        return multiply_2x2(a, b);
    }

    let qa = split(a)?;
    let qb = split(b)?;
    let (a, b, c, d) = (&qa.top_left, &qa.top_right, &qa.bottom_left, &qa.bottom_right);
    let (e, f, g, h) = (&qb.top_left, &qb.top_right, &qb.bottom_left, &qb.bottom_right);

    let f_minus_h = subtract(f, h)?;
    let a_plus_b = add(a, b)?;
    let c_plus_d = add(c, d)?;
    let g_minus_e = subtract(g, e)?;
    let a_plus_d = add(a, d)?;
    let e_plus_h = add(e, h)?;
    let b_minus_d = subtract(b, d)?;
    let g_plus_h = add(g, h)?;
    let a_minus_c = subtract(a, c)?;
    let e_plus_f = add(e, f)?;

    let operands: [(&Matrix<T>, &Matrix<T>); 7] = [
        (a, &f_minus_h),
        (&a_plus_b, h),
        (&c_plus_d, e),
        (d, &g_minus_e),
        (&a_plus_d, &e_plus_h),
        (&b_minus_d, &g_plus_h),
        (&a_minus_c, &e_plus_f),
    ];

    let parallel = n >= parallel_threshold;
    trace!(size = n, parallel, "strassen level");

    let products: Vec<Matrix<T>> = if parallel {
        operands
            .par_iter()
            .map(|&(x, y)| recurse(x, y, parallel_threshold))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        operands
            .iter()
            .map(|&(x, y)| recurse(x, y, parallel_threshold))
            .collect::<Result<Vec<_>, _>>()?
    };

    let [t1, t2, t3, t4, t5, t6, t7] = products.as_slice() else {
        return Err(MatrixError::ShapeMismatch(format!(
            "expected 7 sub-products, got {}",
            products.len()
        )));
    };

    let top_left = add(&subtract(&add(t5, t4)?, t2)?, t6)?;
    let top_right = add(t1, t2)?;
    let bottom_left = add(t3, t4)?;
    let bottom_right = subtract(&subtract(&add(t1, t5)?, t3)?, t7)?;

    merge(&top_left, &top_right, &bottom_left, &bottom_right)
}
