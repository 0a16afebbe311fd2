//! Special mathematical functions.
//!
//! Provides gamma, log-gamma, digamma and beta. All functions are generic
//! over [`FloatScalar`] (f32/f64), no-std compatible, and stack-only.
//!
//! None of them validate their argument. Out-of-domain inputs (Γ or ln Γ
//! at x ≤ 0, ψ at its poles) run through the same formulas and return
//! whatever IEEE arithmetic produces there. The only explicit special value
//! is Γ(x) = +∞ for x > 171.624, where the true value overflows an f64.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x), x > 0 |
//! | [`lgamma`] | Log-gamma ln Γ(x), x > 0 |
//! | [`digamma`] | Digamma ψ(x) = d/dx ln Γ(x), any real x off the poles |
//! | [`beta`] | Beta function B(a,b) = Γ(a)Γ(b)/Γ(a+b) |
//! | [`lbeta`] | Log-beta ln B(a,b) |
//!
//! # Example
//!
//! ```
//! use ldagamma::special::{digamma, gamma, lgamma};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
//!
//! // ln Γ(1) = 0
//! assert!(lgamma(1.0_f64).abs() < 1e-14);
//!
//! // ψ(1) = −γ
//! assert!((digamma(1.0_f64) + 0.5772156649015329).abs() < 1e-12);
//! ```

mod gamma_fn;
mod digamma_fn;
mod beta_fn;


pub use gamma_fn::{gamma, lgamma};
pub use digamma_fn::digamma;
pub use beta_fn::{beta, lbeta};

/// Euler–Mascheroni constant γ.
pub(crate) const EULER_MASCHERONI: f64 = 0.577215664901532860606512090;

/// ½·ln(2π).
pub(crate) const HALF_LN_2PI: f64 = 0.91893853320467274178032973640562;

/// ζ(2) = π²/6.
pub(crate) const ZETA_2: f64 = 1.6449340668482264365;

// ---------------------------------------------------------------------------
// Region thresholds shared by gamma and lgamma
// ---------------------------------------------------------------------------

/// Below this, 1/Γ(x) is taken from its two-term power series.
pub(crate) const GAMMA_SMALL: f64 = 0.001;

/// From here on, ln Γ uses the asymptotic series and Γ = exp(ln Γ).
pub(crate) const GAMMA_ASYMPTOTIC: f64 = 12.0;

/// Γ(x) exceeds f64::MAX above this point.
pub(crate) const GAMMA_OVERFLOW: f64 = 171.624;

/// Evaluate `Σ c[i]·z^i` by Horner's rule, highest degree first.
#[inline]
pub(crate) fn horner<T: crate::FloatScalar>(coeffs: &[f64], z: T) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * z + T::lift(c))
}
