//! Cross-checks against the `libm` crate as an independent reference.

use ldagamma::{digamma, gamma, lgamma};

/// Deterministic sample grid over (lo, hi), including irrational-ish steps.
fn grid(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / n as f64;
    (0..n).map(move |i| lo + step * (i as f64 + 0.318309886183791))
}

fn assert_rel(a: f64, b: f64, tol: f64, what: &str) {
    let rel = ((a - b) / b).abs();
    assert!(rel <= tol, "{what}: {a} vs {b}, rel = {rel}, tol = {tol}");
}

// ── ln Γ ─────────────────────────────────────────────────────────────

#[test]
fn lgamma_asymptotic_region_matches_reference() {
    for x in grid(12.0, 171.6, 2000) {
        assert_rel(lgamma(x), libm::lgamma(x), 1e-10, &format!("lgamma({x})"));
    }
}

#[test]
fn lgamma_beyond_gamma_overflow_matches_reference() {
    for &x in &[200.0_f64, 1e3, 1e5, 1e8] {
        assert_rel(lgamma(x), libm::lgamma(x), 1e-10, &format!("lgamma({x})"));
    }
}

#[test]
fn lgamma_core_region_matches_reference() {
    // Skip the zeros of ln Γ at 1 and 2, where relative error is meaningless
    for x in grid(0.001, 12.0, 2000) {
        let reference = libm::lgamma(x);
        if reference.abs() < 0.1 {
            continue;
        }
        assert_rel(lgamma(x), reference, 1e-6, &format!("lgamma({x})"));
    }
}

#[test]
fn lgamma_near_pole_matches_reference() {
    for &x in &[1e-9_f64, 1e-6, 1e-4, 9.99e-4] {
        assert_rel(lgamma(x), libm::lgamma(x), 1e-6, &format!("lgamma({x})"));
    }
}

// ── Γ ────────────────────────────────────────────────────────────────

#[test]
fn gamma_matches_reference() {
    for x in grid(0.001, 12.0, 1000) {
        assert_rel(gamma(x), libm::tgamma(x), 1e-12, &format!("gamma({x})"));
    }
    for x in grid(12.0, 171.6, 1000) {
        assert_rel(gamma(x), libm::tgamma(x), 1e-11, &format!("gamma({x})"));
    }
}

#[test]
fn gamma_small_series_error_bound() {
    for x in grid(1e-7, 0.001, 500) {
        assert_rel(gamma(x), libm::tgamma(x), 7e-7, &format!("gamma({x})"));
    }
}

#[test]
fn exp_lgamma_is_gamma() {
    for x in grid(0.001, 171.624, 3000) {
        assert_rel(lgamma(x).exp(), gamma(x), 1e-12, &format!("exp(lgamma({x}))"));
    }
}

#[test]
fn gamma_overflow_boundary() {
    assert_eq!(gamma(172.0_f64), f64::INFINITY);
    let g = gamma(171.0_f64);
    assert!(g.is_finite());
    assert_rel(g, libm::tgamma(171.0), 1e-12, "gamma(171)");
}

// ── ψ ────────────────────────────────────────────────────────────────

#[test]
fn digamma_is_derivative_of_reference_lgamma() {
    // Central difference of the reference ln Γ
    let h = 1e-5;
    for x in grid(0.5, 40.0, 200) {
        let numerical = (libm::lgamma(x + h) - libm::lgamma(x - h)) / (2.0 * h);
        let tol = 1e-7 * (1.0 + digamma(x).abs());
        assert!(
            (digamma(x) - numerical).abs() < tol,
            "digamma({x}) = {} vs {numerical}",
            digamma(x)
        );
    }
}

#[test]
fn digamma_recurrence_over_grid() {
    for x in grid(-6.0, 60.0, 600) {
        if (x - x.round()).abs() < 1e-3 {
            continue;
        }
        let lhs = digamma(x + 1.0);
        let rhs = digamma(x) + 1.0 / x;
        assert!(
            (lhs - rhs).abs() < 1e-11 * (1.0 + lhs.abs()),
            "recurrence at {x}: {lhs} vs {rhs}"
        );
    }
}

#[test]
fn digamma_reflection_over_grid() {
    let pi = core::f64::consts::PI;
    for x in grid(-5.0, 5.0, 400) {
        if (x - x.round()).abs() < 1e-2 {
            continue;
        }
        let lhs = digamma(1.0 - x) - digamma(x);
        let rhs = pi / (pi * x).tan();
        assert!(
            (lhs - rhs).abs() < 1e-10 * (1.0 + rhs.abs()),
            "reflection at {x}: {lhs} vs {rhs}"
        );
    }
}

#[test]
fn digamma_closed_forms() {
    let euler = 0.5772156649015329_f64;
    assert!((digamma(1.0_f64) + euler).abs() < 1e-12);
    // ψ(1/4) = −γ − π/2 − 3 ln 2
    let expected = -euler - core::f64::consts::FRAC_PI_2 - 3.0 * 2.0_f64.ln();
    assert!((digamma(0.25_f64) - expected).abs() < 1e-12);
}
