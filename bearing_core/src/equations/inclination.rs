//! # Load Inclination
//!
//! Load-direction exponent and drained inclination factors
//! (EN 1997-1 Annex D, D.4).
//!
//! ```text
//! m_B = (2 + B'/L') / (1 + B'/L')      H acts along B
//! m_L = (2 + L'/B') / (1 + L'/B')      H acts along L
//!
//! D   = V + A'·c·cot φ
//! i_q = (1 - H/D)^m
//! i_γ = (1 - H/D)^(m+1)
//! i_c = i_q - (1 - i_q)/(N_c·tan φ)
//! ```
//!
//! The pipeline verifies `1 - H/D > 0` before evaluating the powers.

/// Exponent m_B for horizontal load acting along the B direction
#[inline]
pub fn load_direction_exponent_b(effective_width: f64, effective_length: f64) -> f64 {
    let ratio = effective_width / effective_length;
    (2.0 + ratio) / (1.0 + ratio)
}

/// Exponent m_L for horizontal load acting along the L direction
#[inline]
pub fn load_direction_exponent_l(effective_width: f64, effective_length: f64) -> f64 {
    let ratio = effective_length / effective_width;
    (2.0 + ratio) / (1.0 + ratio)
}

/// Denominator D = V + A'·c/tan φ of the load ratio H/D
#[inline]
pub fn inclination_denominator(vertical_load: f64, effective_area: f64, cohesion: f64, phi: f64) -> f64 {
    vertical_load + effective_area * cohesion / phi.tan()
}

/// Base of the inclination powers, 1 - H/D
#[inline]
pub fn inclination_base(horizontal_load: f64, denominator: f64) -> f64 {
    1.0 - horizontal_load / denominator
}

/// Overburden inclination factor i_q = base^m
#[inline]
pub fn inclination_factor_q(base: f64, m: f64) -> f64 {
    base.powf(m)
}

/// Self-weight inclination factor i_γ = base^(m+1)
#[inline]
pub fn inclination_factor_gamma(base: f64, m: f64) -> f64 {
    base.powf(m + 1.0)
}

/// Cohesion inclination factor i_c = i_q - (1 - i_q)/(N_c·tan φ)
#[inline]
pub fn inclination_factor_c(iq: f64, nc: f64, phi: f64) -> f64 {
    iq - (1.0 - iq) / (nc * phi.tan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_square_footing() {
        assert!((load_direction_exponent_b(1.0, 1.0) - 1.5).abs() < 1e-12);
        assert!((load_direction_exponent_l(1.0, 1.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_exponent_reference_footing() {
        assert!((load_direction_exponent_b(1.1, 0.7) - 1.388_889).abs() < 1e-6);
        assert!((load_direction_exponent_l(1.1, 0.7) - 1.611_111).abs() < 1e-6);
    }

    #[test]
    fn test_exponent_bounds() {
        // m stays within (1, 2) for any positive aspect ratio
        for ratio in [0.01, 0.5, 1.0, 3.0, 100.0] {
            let m = load_direction_exponent_b(ratio, 1.0);
            assert!(m > 1.0 && m < 2.0);
        }
    }

    #[test]
    fn test_denominator_without_cohesion() {
        assert_eq!(inclination_denominator(1000.0, 0.77, 0.0, 0.5), 1000.0);
    }

    #[test]
    fn test_vertical_load_gives_unit_factors() {
        let base = inclination_base(0.0, 1000.0);
        assert_eq!(inclination_factor_q(base, 1.4), 1.0);
        assert_eq!(inclination_factor_gamma(base, 1.4), 1.0);
        assert_eq!(inclination_factor_c(1.0, 30.0, 0.5), 1.0);
    }

    #[test]
    fn test_reference_inclination() {
        let m = load_direction_exponent_b(1.1, 0.7);
        let base = inclination_base(1.2, 1000.0);
        assert!((inclination_factor_q(base, m) - 0.998_334).abs() < 1e-6);
        assert!((inclination_factor_gamma(base, m) - 0.997_136).abs() < 1e-6);
    }
}
