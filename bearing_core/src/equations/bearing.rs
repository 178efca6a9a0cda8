//! # Bearing Capacity Factors
//!
//! Drained bearing capacity factors per EN 1997-1 Annex D, D.4.
//!
//! ```text
//! N_q = e^(π·tan φ) · tan²(45° + φ/2)
//! N_c = (N_q - 1) · cot φ
//! N_γ = 2 · (N_q - 1) · tan φ
//! ```
//!
//! All functions take φ in radians and assume `0 < φ < π/2`; the
//! calculation pipeline rejects φ = 0 before calling them. `N_q` must be
//! computed first since the other two factors depend on it.

use std::f64::consts::{FRAC_PI_4, PI};

/// Overburden factor N_q = e^(π·tan φ)·tan²(45° + φ/2)
///
/// ```rust
/// use bearing_core::equations::bearing_factor_nq;
///
/// // tan²(60°) = 3 for φ = 30°
/// let nq = bearing_factor_nq(30f64.to_radians());
/// assert!((nq - 18.401).abs() < 1e-3);
/// ```
#[inline]
pub fn bearing_factor_nq(phi: f64) -> f64 {
    (PI * phi.tan()).exp() * (FRAC_PI_4 + phi / 2.0).tan().powi(2)
}

/// Cohesion factor N_c = (N_q - 1)/tan φ
#[inline]
pub fn bearing_factor_nc(nq: f64, phi: f64) -> f64 {
    (nq - 1.0) / phi.tan()
}

/// Self-weight factor N_γ = 2(N_q - 1)·tan φ
#[inline]
pub fn bearing_factor_ngamma(nq: f64, phi: f64) -> f64 {
    2.0 * (nq - 1.0) * phi.tan()
}
