//! Gamma and log-gamma functions.
//!
//! Γ is evaluated on three regions: a power series for 1/Γ next to the
//! pole at zero, a rational minimax fit on (1, 2) carried to [0.001, 12)
//! by the recurrence, and exp(ln Γ) from Stirling's series from 12 on.

use crate::FloatScalar;
use super::{horner, EULER_MASCHERONI, GAMMA_ASYMPTOTIC, GAMMA_OVERFLOW, GAMMA_SMALL, HALF_LN_2PI};

/// Numerator coefficients of Cody's rational approximation to Γ on (1, 2).
const CODY_P: [f64; 8] = [
    -1.71618513886549492533811e+0,
    2.47656508055759199108314e+1,
    -3.79804256470945635097577e+2,
    6.29331155312818442661052e+2,
    8.66966202790413211295064e+2,
    -3.14512729688483675254357e+4,
    -3.61444134186911729807069e+4,
    6.64561438202405440627855e+4,
];

/// Denominator coefficients of Cody's rational approximation to Γ on (1, 2).
const CODY_Q: [f64; 8] = [
    -3.08402300119738975254353e+1,
    3.15350626979604161529144e+2,
    -1.01515636749021914166146e+3,
    -3.10777167157231109440444e+3,
    2.25381184209801510330112e+4,
    4.75584627752788110767815e+3,
    -1.34659959864969306392456e+5,
    -1.15132259675553483497211e+5,
];

/// Stirling series coefficients B_{2k} / (2k·(2k−1)) for k = 1..8,
/// Abramowitz & Stegun 6.1.41.
const STIRLING: [f64; 8] = [
    1.0 / 12.0,
    -1.0 / 360.0,
    1.0 / 1260.0,
    -1.0 / 1680.0,
    1.0 / 1188.0,
    -691.0 / 360360.0,
    1.0 / 156.0,
    -3617.0 / 122400.0,
];

/// Gamma function Γ(x) for x > 0.
///
/// - x < 0.001: 1/Γ(x) ≈ x·(1 + γx), relative error below 6e-7.
/// - 0.001 ≤ x < 12: Cody's degree-8 rational approximation on (1, 2),
///   shifted with Γ(x) = Γ(x+1)/x or Γ(x+n) = x·(x+1)·…·(x+n−1)·Γ(x).
/// - 12 ≤ x ≤ 171.624: exp(ln Γ(x)) from the asymptotic series.
/// - x > 171.624: +∞, since Γ(x) is not representable as an f64.
///
/// The argument is not checked. For x ≤ 0 the small-x series is applied
/// as is, which is meaningless away from the pole.
///
/// # Example
///
/// ```
/// use ldagamma::special::gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
///
/// // Γ(0.5) = √π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-13);
///
/// // Saturates instead of overflowing
/// assert_eq!(gamma(172.0_f64), f64::INFINITY);
/// ```
pub fn gamma<T: FloatScalar>(x: T) -> T {
    let one = T::one();

    if x < T::lift(GAMMA_SMALL) {
        return one / (x * (one + T::lift(EULER_MASCHERONI) * x));
    }

    if x < T::lift(GAMMA_ASYMPTOTIC) {
        return gamma_rational(x);
    }

    if x > T::lift(GAMMA_OVERFLOW) {
        return T::infinity();
    }
    lgamma_stirling(x).exp()
}

/// Γ(x) on [0.001, 12) from the rational fit on (1, 2).
pub(super) fn gamma_rational<T: FloatScalar>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();

    // Move the argument into (1, 2); the shift is undone below.
    let below_one = x < one;
    let (mut y, shift) = if below_one {
        (x + one, zero)
    } else {
        let n = x.floor() - one;
        (x - n, n)
    };

    let z = y - one;
    let mut num = zero;
    let mut den = one;
    for (&p, &q) in CODY_P.iter().zip(CODY_Q.iter()) {
        num = (num + T::lift(p)) * z;
        den = den * z + T::lift(q);
    }
    let mut result = num / den + one;

    if below_one {
        // Γ(x) = Γ(x+1)/x, and z is x after the round trip through y
        return result / z;
    }

    let mut k = zero;
    while k < shift {
        result = result * y;
        y = y + one;
        k = k + one;
    }
    result
}

/// Natural logarithm of the gamma function, ln Γ(x), for x > 0.
///
/// Below 12 this is ln|Γ(x)| with Γ from [`gamma`]; from 12 on it is
/// Stirling's series with eight correction terms (A&S 6.1.41), good to
/// 11–12 significant figures or better.
///
/// The absolute value means that for x ≤ 0, where Γ itself is not
/// meaningful, the result is the log of whatever [`gamma`] returned,
/// sign discarded. Callers that need a defined result must keep x > 0.
///
/// # Example
///
/// ```
/// use ldagamma::special::lgamma;
///
/// // ln Γ(1) = 0
/// assert!(lgamma(1.0_f64).abs() < 1e-14);
///
/// // ln Γ(100) from the asymptotic series
/// let val = lgamma(100.0_f64);
/// assert!((val - 359.1342053695754).abs() < 1e-8);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    if x < T::lift(GAMMA_ASYMPTOTIC) {
        return gamma(x).abs().ln();
    }
    lgamma_stirling(x)
}

/// (x − ½)·ln x − x + ½·ln 2π + Σ c_k / x^(2k−1).
pub(super) fn lgamma_stirling<T: FloatScalar>(x: T) -> T {
    let half = T::lift(0.5);
    let z = (x * x).recip();
    let sum = horner(&STIRLING, z);
    (x - half) * x.ln() - x + T::lift(HALF_LN_2PI) + sum / x
}
