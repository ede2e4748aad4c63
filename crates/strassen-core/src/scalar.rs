//! Numeric element trait accepted by every matrix operation.

use std::fmt;

use num_traits::{Num, ToPrimitive};

/// Cell type of a [`Matrix`](crate::matrix::Matrix).
///
/// Implemented for the primitive integers and `f32`/`f64`. Integer cell
/// arithmetic wraps, so a product is exact whenever it fits in the cell type,
/// even if intermediate quadrant sums do not.
pub trait Scalar:
    Num + ToPrimitive + Copy + Send + Sync + fmt::Debug + fmt::Display + 'static
{
    /// Cell sum.
    fn cell_add(self, other: Self) -> Self;

    /// Cell difference.
    fn cell_sub(self, other: Self) -> Self;

    /// Cell product.
    fn cell_mul(self, other: Self) -> Self;

    /// Compare two cells, allowing a relative `tolerance` for inexact types.
    ///
    /// A zero tolerance demands exact equality.
    fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        if self == other {
            return true;
        }
        if tolerance <= 0.0 {
            return false;
        }
        match (self.to_f64(), other.to_f64()) {
            (Some(x), Some(y)) => {
                let scale = x.abs().max(y.abs()).max(1.0);
                (x - y).abs() <= tolerance * scale
            }
            _ => false,
        }
    }
}

macro_rules! impl_wrapping_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn cell_add(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn cell_sub(self, other: Self) -> Self {
                    self.wrapping_sub(other)
                }

                #[inline]
                fn cell_mul(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn cell_add(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn cell_sub(self, other: Self) -> Self {
                    self - other
                }

                #[inline]
                fn cell_mul(self, other: Self) -> Self {
                    self * other
                }
            }
        )*
    };
}

impl_wrapping_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);
