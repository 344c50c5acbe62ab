use num::{Float, NumCast, Zero};
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// Numeric component type of a [`crate::Vector`].
///
/// Implemented for [`f32`] and [`f64`]. Distances and dot products are computed in the same type.
pub trait Primitive: Float + Zero + NumCast + AddAssign + SubAssign + MulAssign + DivAssign + Sum
                + PartialOrd + Copy + Default + Display + Debug + LowerExp + Sync + Send + 'static {
    /// Convert an observation count into this type (used as divisor when averaging).
    fn from_count(count: usize) -> Self;
}
impl Primitive for f32 {
    #[inline(always)] fn from_count(count: usize) -> Self { count as f32 }
}
impl Primitive for f64 {
    #[inline(always)] fn from_count(count: usize) -> Self { count as f64 }
}
