//! # Eccentricity and Effective Area
//!
//! Load eccentricity reduces the nominal footing to an effective rectangle
//! centred on the resultant (EN 1997-1 Annex D, D.1).
//!
//! ```text
//!        ┌──────────── B ────────────┐
//!        │      ┌───── B' ─────┐     │
//!        │      │      ●       │     │   ● = resultant of V
//!        │      └──────────────┘     │
//!        └───────────────────────────┘
//!               B' = B - 2·e_B
//! ```
//!
//! ## Notation
//!
//! - `M_L` = moment about the L axis (causes eccentricity across B)
//! - `M_B` = moment about the B axis (causes eccentricity across L)
//! - `V` = vertical load
//! - `e_B`, `e_L` = eccentricities
//! - `B'`, `L'`, `A'` = effective width, length and area

use crate::units::{KiloNewtonMeters, KiloNewtons, Meters};

/// Eccentricity e = M / V.
///
/// The caller guarantees `V != 0`.
///
/// ```rust
/// use bearing_core::equations::eccentricity;
///
/// assert!((eccentricity(200.0, 1000.0) - 0.2).abs() < 1e-12);
/// ```
#[inline]
pub fn eccentricity(moment: f64, vertical_load: f64) -> f64 {
    (KiloNewtonMeters(moment) / KiloNewtons(vertical_load)).value()
}

/// Effective dimension B' = B - 2e with the signed eccentricity.
///
/// A negative moment gives B' > B.
#[inline]
pub fn effective_dimension(nominal: f64, eccentricity: f64) -> f64 {
    (Meters(nominal) - Meters(eccentricity) * 2.0).value()
}

/// Effective dimension B' = B - 2|e|, reducing the footing for a moment of either sign.
#[inline]
pub fn effective_dimension_abs(nominal: f64, eccentricity: f64) -> f64 {
    effective_dimension(nominal, eccentricity.abs())
}

/// Effective area A' = B'·L'
#[inline]
pub fn effective_area(effective_width: f64, effective_length: f64) -> f64 {
    (Meters(effective_width) * Meters(effective_length)).value()
}
