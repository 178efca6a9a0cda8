//! # Shape Factors
//!
//! Drained shape factors for a rectangular effective footing
//! (EN 1997-1 Annex D, D.4), written in terms of the effective aspect
//! ratio B'/L'.
//!
//! ```text
//! s_γ = 1 - 0.3·(B'/L')
//! s_q = 1 + (B'/L')·sin φ
//! ```
//!
//! Two forms of s_c are provided; see [`cohesion_shape_factor_literal`].

/// Self-weight shape factor s_γ = 1 - 0.3·(B'/L')
#[inline]
pub fn shape_factor_gamma(effective_width: f64, effective_length: f64) -> f64 {
    1.0 - 0.3 * (effective_width / effective_length)
}

/// Overburden shape factor s_q = 1 + (B'/L')·sin φ
#[inline]
pub fn shape_factor_q(effective_width: f64, effective_length: f64, phi: f64) -> f64 {
    1.0 + (effective_width / effective_length) * phi.sin()
}

/// Cohesion shape factor s_c = s_q·(N_q - 1)/(N_q - 1).
///
/// This is the form the reference calculation sheet uses. It reduces to
/// `s_q` whenever `N_q != 1`. The caller guarantees `N_q != 1`.
#[inline]
pub fn cohesion_shape_factor_literal(sq: f64, nq: f64) -> f64 {
    sq * (nq - 1.0) / (nq - 1.0)
}

/// Cohesion shape factor s_c = (s_q·N_q - 1)/(N_q - 1), EN 1997-1 D.4.
#[inline]
pub fn cohesion_shape_factor_ec7(sq: f64, nq: f64) -> f64 {
    (sq * nq - 1.0) / (nq - 1.0)
}
