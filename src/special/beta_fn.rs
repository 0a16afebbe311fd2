//! Beta function and log-beta via lgamma.

use crate::FloatScalar;
use super::gamma_fn::lgamma;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Computed as `exp(lbeta(a, b))`, so large arguments underflow towards
/// zero instead of forming Γ(a)·Γ(b) first.
///
/// # Example
///
/// ```
/// use ldagamma::special::beta;
///
/// // B(1, 1) = 1
/// assert!((beta(1.0_f64, 1.0) - 1.0).abs() < 1e-14);
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0_f64, 3.0) - 1.0 / 12.0).abs() < 1e-13);
/// ```
pub fn beta<T: FloatScalar>(a: T, b: T) -> T {
    lbeta(a, b).exp()
}

/// Natural logarithm of the beta function, ln B(a, b).
///
/// `lgamma(a) + lgamma(b) − lgamma(a+b)`; the log-normalizer of a
/// two-component Dirichlet. Like [`lgamma`], meaningful for a, b > 0 only.
///
/// # Example
///
/// ```
/// use ldagamma::special::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0_f64, 1.0).abs() < 1e-14);
///
/// // ln B(100, 200) stays finite where B itself is ~1e-83
/// assert!(lbeta(100.0_f64, 200.0) < -190.0);
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> T {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}
