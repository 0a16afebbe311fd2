use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for scalar arguments of the special functions.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point arguments (`f32`, `f64`).
///
/// Required by everything in [`special`](crate::special): the evaluations
/// need `ln`, `exp`, `tan`, `floor` and IEEE infinities.
pub trait FloatScalar: Scalar + Float {
    /// Lift an `f64` constant into `Self`.
    ///
    /// Coefficient tables are stored once as full-precision `f64` literals;
    /// for `f32` this rounds to nearest.
    fn lift(c: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn lift(c: f64) -> $t { c as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
