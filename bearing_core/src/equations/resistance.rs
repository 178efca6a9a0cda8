//! # Bearing Resistance
//!
//! Drained design bearing resistance per unit effective area and total
//! resistance (EN 1997-1 Annex D, D.4):
//!
//! ```text
//! q_r = ½·γ·B'·N_γ·s_γ·i_γ  +  c·N_c·s_c·i_c  +  q·N_q·s_q·i_q
//! R   = q_r · A'
//! ```

use crate::units::{KiloPascals, SquareMeters};

/// Self-weight term ½·γ·B'·N_γ·s_γ·i_γ (kPa)
#[inline]
pub fn self_weight_term(unit_weight: f64, effective_width: f64, ngamma: f64, sgamma: f64, igamma: f64) -> f64 {
    0.5 * unit_weight * effective_width * ngamma * sgamma * igamma
}

/// Cohesion term c·N_c·s_c·i_c (kPa)
#[inline]
pub fn cohesion_term(cohesion: f64, nc: f64, sc: f64, ic: f64) -> f64 {
    cohesion * nc * sc * ic
}

/// Overburden term q·N_q·s_q·i_q (kPa)
#[inline]
pub fn overburden_term(overburden: f64, nq: f64, sq: f64, iq: f64) -> f64 {
    overburden * nq * sq * iq
}

/// Ultimate bearing pressure q_r as the sum of the three terms (kPa)
#[inline]
pub fn bearing_pressure(self_weight_term: f64, cohesion_term: f64, overburden_term: f64) -> f64 {
    (KiloPascals(self_weight_term) + KiloPascals(cohesion_term) + KiloPascals(overburden_term)).value()
}

/// Total resistance R = q_r·A' (kN)
#[inline]
pub fn total_resistance(bearing_pressure: f64, effective_area: f64) -> f64 {
    (KiloPascals(bearing_pressure) * SquareMeters(effective_area)).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms() {
        // ½ × 20 × 1.0 × 10 × 1 × 1
        assert_eq!(self_weight_term(20.0, 1.0, 10.0, 1.0, 1.0), 100.0);
        assert_eq!(cohesion_term(0.0, 30.0, 1.5, 0.9), 0.0);
        assert_eq!(overburden_term(10.0, 2.0, 1.5, 0.5), 15.0);
    }

    #[test]
    fn test_bearing_pressure_sums_terms() {
        // Reference footing: cohesionless, so the middle term vanishes
        let q_r = bearing_pressure(116.492313, 0.0, 708.574918);
        assert!((q_r - 825.067231).abs() < 1e-9);
    }

    #[test]
    fn test_total_resistance() {
        assert!((total_resistance(100.0, 0.77) - 77.0).abs() < 1e-9);
    }
}
