//! # ldagamma
//!
//! Gamma, log-gamma and digamma of a real argument, as consumed by
//! Dirichlet/Bayesian inference code (collapsed Gibbs LDA, variational
//! Dirichlet updates). Pure Rust, no-std compatible, no heap allocation,
//! and no dependence on the platform's `lgamma`/`tgamma`.
//!
//! ## Quick start
//!
//! ```
//! use ldagamma::{digamma, lgamma};
//!
//! // ln Γ(0.5) = ln √π
//! assert!((lgamma(0.5_f64) - 0.5723649429247001).abs() < 1e-13);
//!
//! // ψ(x+1) = ψ(x) + 1/x
//! let x = 3.7_f64;
//! assert!((digamma(x + 1.0) - digamma(x) - 1.0 / x).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — [`gamma`], [`lgamma`], [`digamma`], [`beta`], [`lbeta`].
//!   Every function is a pure map `T -> T` for `T` in {`f32`, `f64`}: no
//!   validation, no error values, and the only explicit sentinel is
//!   Γ(x) = +∞ above 171.624.
//!
//! - [`traits`] — [`FloatScalar`], the element trait the functions are
//!   generic over.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;
pub mod traits;

pub use special::{beta, digamma, gamma, lbeta, lgamma};
pub use traits::{FloatScalar, Scalar};
