//! # Bearing Capacity Calculation
//!
//! Ultimate bearing capacity of a rectangular shallow foundation under
//! eccentric, inclined load, per EN 1997-1 Annex D (drained).
//!
//! ## Pipeline
//!
//! ```text
//! input ─► effective geometry ─► N_q, N_c, N_γ ─► s_γ, s_q, s_c
//!                 │                    │
//!                 └──► m ──────────────┴─► i_γ, i_q, i_c ─► q_r, R
//! ```
//!
//! Every stage either produces its values or halts the calculation with a
//! [`CalcError`]; no partial result is ever returned.
//!
//! ## Assumptions
//!
//! - Drained, characteristic values (no partial factors)
//! - Horizontal base and ground surface
//! - No depth factors
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::calculations::bearing_capacity::{calculate, FoundationInput};
//!
//! let input = FoundationInput::reference();
//! let result = calculate(&input).expect("reference footing is valid");
//!
//! assert!((result.effective_width_m - 1.1).abs() < 1e-9);
//! assert_eq!(result.resistance_kn, result.bearing_pressure_kpa * result.effective_area_m2);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::equations::{self, Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::settings::{CalculationSettings, CohesionShapeFactor, EccentricityConvention, LoadDirection};
use crate::units::{Degrees, Radians};

/// Input parameters for a shallow foundation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "unit_weight_kn_m3": 20.0,
///   "width_m": 1.5,
///   "length_m": 1.0,
///   "horizontal_load_kn": 1.2,
///   "vertical_load_kn": 1000.0,
///   "cohesion_kpa": 0.0,
///   "friction_angle_deg": 30.0,
///   "overburden_kpa": 21.6,
///   "moment_about_l_knm": 200.0,
///   "moment_about_b_knm": 150.0,
///   "settings": { "load_direction": "AlongB", "cohesion_shape_factor": "Literal" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationInput {
    /// User label for this footing (e.g., "F-1", "Column C3 pad")
    #[serde(default)]
    pub label: String,

    /// Soil unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Nominal footing width B (m)
    pub width_m: f64,

    /// Nominal footing length L (m)
    pub length_m: f64,

    /// Horizontal load H (kN), magnitude
    pub horizontal_load_kn: f64,

    /// Vertical load V (kN)
    pub vertical_load_kn: f64,

    /// Effective cohesion c (kPa)
    pub cohesion_kpa: f64,

    /// Effective angle of internal friction φ (degrees)
    pub friction_angle_deg: f64,

    /// Effective overburden pressure q at foundation level (kPa)
    pub overburden_kpa: f64,

    /// Moment about the L axis M_L (kN·m); shifts the resultant across B
    pub moment_about_l_knm: f64,

    /// Moment about the B axis M_B (kN·m); shifts the resultant across L
    pub moment_about_b_knm: f64,

    /// Formula-variant settings
    #[serde(default)]
    pub settings: CalculationSettings,
}

impl Default for FoundationInput {
    fn default() -> Self {
        FoundationInput::reference()
    }
}

impl FoundationInput {
    /// The reference footing from the calculation sheet: a 1.5 m × 1.0 m pad
    /// on φ = 30° sand under V = 1000 kN with moments about both axes.
    pub fn reference() -> Self {
        FoundationInput {
            label: "F-1".to_string(),
            unit_weight_kn_m3: 20.0,
            width_m: 1.5,
            length_m: 1.0,
            horizontal_load_kn: 1.2,
            vertical_load_kn: 1000.0,
            cohesion_kpa: 0.0,
            friction_angle_deg: 30.0,
            overburden_kpa: 21.6,
            moment_about_l_knm: 200.0,
            moment_about_b_knm: 150.0,
            settings: CalculationSettings::default(),
        }
    }

    /// Builder-style override of the load direction
    pub fn with_load_direction(mut self, direction: LoadDirection) -> Self {
        self.settings.load_direction = direction;
        self
    }

    /// Builder-style override of the eccentricity sign convention
    pub fn with_eccentricity(mut self, convention: EccentricityConvention) -> Self {
        self.settings.eccentricity = convention;
        self
    }

    /// Builder-style override of the cohesion shape factor variant
    pub fn with_cohesion_shape_factor(mut self, variant: CohesionShapeFactor) -> Self {
        self.settings.cohesion_shape_factor = variant;
        self
    }

    /// Validate input ranges.
    ///
    /// `V = 0` and `φ = 0` pass validation on purpose: they are reported as
    /// [`CalcError::NumericDomain`] by the stage that would divide by them.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("unit_weight_kn_m3", self.unit_weight_kn_m3),
            ("width_m", self.width_m),
            ("length_m", self.length_m),
            ("horizontal_load_kn", self.horizontal_load_kn),
            ("vertical_load_kn", self.vertical_load_kn),
            ("cohesion_kpa", self.cohesion_kpa),
            ("friction_angle_deg", self.friction_angle_deg),
            ("overburden_kpa", self.overburden_kpa),
            ("moment_about_l_knm", self.moment_about_l_knm),
            ("moment_about_b_knm", self.moment_about_b_knm),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
        }

        if self.unit_weight_kn_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "unit_weight_kn_m3",
                self.unit_weight_kn_m3.to_string(),
                "Unit weight must be positive",
            ));
        }
        if self.width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_m",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.horizontal_load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "horizontal_load_kn",
                self.horizontal_load_kn.to_string(),
                "Horizontal load is a magnitude; select its axis with the load direction setting",
            ));
        }
        if self.vertical_load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "vertical_load_kn",
                self.vertical_load_kn.to_string(),
                "Vertical load cannot be negative (uplift)",
            ));
        }
        if self.cohesion_kpa < 0.0 {
            return Err(CalcError::invalid_input(
                "cohesion_kpa",
                self.cohesion_kpa.to_string(),
                "Cohesion cannot be negative",
            ));
        }
        if self.friction_angle_deg < 0.0 || self.friction_angle_deg >= 90.0 {
            return Err(CalcError::invalid_input(
                "friction_angle_deg",
                self.friction_angle_deg.to_string(),
                "Friction angle must be between 0° and 90°",
            ));
        }
        if self.overburden_kpa < 0.0 {
            return Err(CalcError::invalid_input(
                "overburden_kpa",
                self.overburden_kpa.to_string(),
                "Overburden pressure cannot be negative",
            ));
        }
        Ok(())
    }

    /// Friction angle in radians
    pub fn friction_angle(&self) -> Radians {
        Degrees(self.friction_angle_deg).into()
    }
}

/// Effective footing geometry after the eccentricity reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveGeometry {
    /// Eccentricity across B, e_B = M_L/V (m)
    pub e_b_m: f64,
    /// Eccentricity across L, e_L = M_B/V (m)
    pub e_l_m: f64,
    /// B' (m)
    pub effective_width_m: f64,
    /// L' (m)
    pub effective_length_m: f64,
    /// A' = B'·L' (m²)
    pub effective_area_m2: f64,
}

impl EffectiveGeometry {
    /// Effective aspect ratio B'/L'
    pub fn aspect_ratio(&self) -> f64 {
        self.effective_width_m / self.effective_length_m
    }
}

/// Bearing capacity factors N_q, N_c, N_γ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingFactors {
    pub nq: f64,
    pub nc: f64,
    pub ngamma: f64,
}

/// Shape factors s_γ, s_q, s_c.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeFactors {
    pub sgamma: f64,
    pub sq: f64,
    pub sc: f64,
}

/// Inclination factors i_γ, i_q, i_c and the quantities they derive from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclinationFactors {
    /// D = V + A'·c/tan φ (kN)
    pub denominator_kn: f64,
    /// H/D
    pub load_ratio: f64,
    pub igamma: f64,
    pub iq: f64,
    pub ic: f64,
}

/// Results from the bearing capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "effective_width_m": 1.1,
///   "effective_length_m": 0.7,
///   "effective_area_m2": 0.77,
///   "nq": 18.40,
///   "bearing_pressure_kpa": 825.07,
///   "resistance_kn": 635.30
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacityResult {
    // === Effective Area ===
    /// Eccentricity across B (m)
    pub e_b_m: f64,
    /// Eccentricity across L (m)
    pub e_l_m: f64,
    /// Effective width B' (m)
    pub effective_width_m: f64,
    /// Effective length L' (m)
    pub effective_length_m: f64,
    /// Effective area A' (m²)
    pub effective_area_m2: f64,

    // === Bearing Capacity Factors ===
    /// Friction angle used in the formulas (rad)
    pub friction_angle_rad: f64,
    pub nq: f64,
    pub nc: f64,
    pub ngamma: f64,

    // === Shape Factors ===
    pub sgamma: f64,
    pub sq: f64,
    pub sc: f64,

    // === Inclination ===
    /// Load-direction exponent m
    pub m: f64,
    /// H/D with D = V + A'·c/tan φ
    pub load_ratio: f64,
    pub igamma: f64,
    pub iq: f64,
    pub ic: f64,

    // === Resistance ===
    /// ½·γ·B'·N_γ·s_γ·i_γ (kPa)
    pub self_weight_term_kpa: f64,
    /// c·N_c·s_c·i_c (kPa)
    pub cohesion_term_kpa: f64,
    /// q·N_q·s_q·i_q (kPa)
    pub overburden_term_kpa: f64,
    /// Ultimate bearing pressure q_r (kPa)
    pub bearing_pressure_kpa: f64,
    /// Ultimate resistance R = q_r·A' (kN)
    pub resistance_kn: f64,

    // === Provenance ===
    /// Settings the result was computed with
    pub settings: CalculationSettings,
    /// Equations applied, in order
    pub equations: EquationTracker,
}

impl BearingCapacityResult {
    /// Ratio R / V. Values below 1.0 mean the applied load exceeds the
    /// ultimate resistance. This is an informational ratio, not a
    /// limit-state check.
    pub fn resistance_ratio(&self, vertical_load_kn: f64) -> f64 {
        self.resistance_kn / vertical_load_kn
    }
}

/// Reduce the nominal footing to its effective dimensions.
///
/// # Errors
///
/// * [`CalcError::NumericDomain`] if `V = 0`
/// * [`CalcError::InvalidGeometry`] if `B' <= 0` or `L' <= 0`
pub fn effective_geometry(input: &FoundationInput) -> CalcResult<EffectiveGeometry> {
    let v = input.vertical_load_kn;
    if v == 0.0 {
        return Err(CalcError::numeric_domain(
            "V",
            v,
            "Vertical load is zero; eccentricity M/V is undefined",
        ));
    }

    let e_b_m = equations::eccentricity(input.moment_about_l_knm, v);
    let e_l_m = equations::eccentricity(input.moment_about_b_knm, v);
    let reduce: fn(f64, f64) -> f64 = match input.settings.eccentricity {
        EccentricityConvention::Signed => equations::effective_dimension,
        EccentricityConvention::Absolute => equations::effective_dimension_abs,
    };
    let effective_width_m = reduce(input.width_m, e_b_m);
    let effective_length_m = reduce(input.length_m, e_l_m);

    if effective_width_m <= 0.0 || effective_length_m <= 0.0 {
        warn!(
            "{}: resultant outside effective zone (B' = {:.3} m, L' = {:.3} m)",
            input.label, effective_width_m, effective_length_m
        );
        return Err(CalcError::invalid_geometry(e_b_m, e_l_m, effective_width_m, effective_length_m));
    }

    Ok(EffectiveGeometry {
        e_b_m,
        e_l_m,
        effective_width_m,
        effective_length_m,
        effective_area_m2: equations::effective_area(effective_width_m, effective_length_m),
    })
}

/// Compute N_q, N_c, N_γ for a friction angle.
///
/// # Errors
///
/// * [`CalcError::NumericDomain`] if `tan φ` is not positive (φ = 0),
///   N_q overflows, or φ is so small that N_q rounds to 1 or below
pub fn bearing_factors(phi: Radians) -> CalcResult<BearingFactors> {
    let tan_phi = phi.0.tan();
    if tan_phi <= 0.0 || !tan_phi.is_finite() {
        return Err(CalcError::numeric_domain(
            "tan(phi)",
            tan_phi,
            "N_c = (N_q - 1)/tan(phi) requires 0 < phi < 90°",
        ));
    }

    let nq = equations::bearing_factor_nq(phi.0);
    if !nq.is_finite() {
        return Err(CalcError::numeric_domain("N_q", nq, "N_q overflows for phi this close to 90°"));
    }
    if nq <= 1.0 {
        return Err(CalcError::numeric_domain(
            "N_q - 1",
            nq - 1.0,
            "N_q - 1 is lost to rounding for phi this close to 0°",
        ));
    }

    Ok(BearingFactors {
        nq,
        nc: equations::bearing_factor_nc(nq, phi.0),
        ngamma: equations::bearing_factor_ngamma(nq, phi.0),
    })
}

/// Compute s_γ, s_q, s_c.
///
/// # Errors
///
/// * [`CalcError::NumericDomain`] if `N_q <= 1`
pub fn shape_factors(
    geometry: &EffectiveGeometry,
    phi: Radians,
    nq: f64,
    variant: CohesionShapeFactor,
) -> CalcResult<ShapeFactors> {
    if nq <= 1.0 {
        return Err(CalcError::numeric_domain("N_q - 1", nq - 1.0, "s_c divides by N_q - 1"));
    }

    let b = geometry.effective_width_m;
    let l = geometry.effective_length_m;
    let sq = equations::shape_factor_q(b, l, phi.0);
    let sc = match variant {
        CohesionShapeFactor::Literal => equations::cohesion_shape_factor_literal(sq, nq),
        CohesionShapeFactor::Ec7 => equations::cohesion_shape_factor_ec7(sq, nq),
    };

    Ok(ShapeFactors {
        sgamma: equations::shape_factor_gamma(b, l),
        sq,
        sc,
    })
}

/// Load-direction exponent m for the selected axis.
pub fn load_direction_exponent(geometry: &EffectiveGeometry, direction: LoadDirection) -> f64 {
    let b = geometry.effective_width_m;
    let l = geometry.effective_length_m;
    match direction {
        LoadDirection::AlongB => equations::load_direction_exponent_b(b, l),
        LoadDirection::AlongL => equations::load_direction_exponent_l(b, l),
    }
}

/// Compute i_γ, i_q, i_c.
///
/// # Errors
///
/// * [`CalcError::NumericDomain`] if `D <= 0` or `1 - H/D <= 0`; the
///   fractional powers are never evaluated on a non-positive base
pub fn inclination_factors(
    input: &FoundationInput,
    geometry: &EffectiveGeometry,
    phi: Radians,
    factors: &BearingFactors,
    m: f64,
) -> CalcResult<InclinationFactors> {
    let denominator_kn = equations::inclination_denominator(
        input.vertical_load_kn,
        geometry.effective_area_m2,
        input.cohesion_kpa,
        phi.0,
    );
    if denominator_kn <= 0.0 || denominator_kn.is_nan() {
        return Err(CalcError::numeric_domain(
            "V + A'c/tan(phi)",
            denominator_kn,
            "Load ratio H/D requires a positive denominator",
        ));
    }

    let base = equations::inclination_base(input.horizontal_load_kn, denominator_kn);
    if base <= 0.0 || base.is_nan() {
        warn!("{}: H/D = {:.4} leaves no inclined-load capacity", input.label, 1.0 - base);
        return Err(CalcError::numeric_domain(
            "1 - H/D",
            base,
            "Fractional power of a non-positive base; horizontal load too large for the vertical load",
        ));
    }

    let iq = equations::inclination_factor_q(base, m);
    Ok(InclinationFactors {
        denominator_kn,
        load_ratio: 1.0 - base,
        igamma: equations::inclination_factor_gamma(base, m),
        iq,
        ic: equations::inclination_factor_c(iq, factors.nc, phi.0),
    })
}

/// Calculate the ultimate bearing pressure and resistance.
///
/// This is a pure function: identical inputs give bit-identical results.
///
/// # Arguments
///
/// * `input` - Footing geometry, loads, soil parameters and settings
///
/// # Returns
///
/// * `Ok(BearingCapacityResult)` - Every intermediate plus q_r and R
/// * `Err(CalcError)` - The first failure; nothing downstream is computed
///
/// # Example
///
/// ```rust
/// use bearing_core::calculations::bearing_capacity::{calculate, FoundationInput};
/// use bearing_core::CalcError;
///
/// let mut input = FoundationInput::reference();
/// input.moment_about_l_knm = 800.0;
///
/// match calculate(&input) {
///     Err(CalcError::InvalidGeometry { effective_width_m, .. }) => {
///         assert!((effective_width_m + 0.1).abs() < 1e-9);
///     }
///     other => panic!("expected invalid geometry, got {other:?}"),
/// }
/// ```
pub fn calculate(input: &FoundationInput) -> CalcResult<BearingCapacityResult> {
    input.validate()?;

    let settings = input.settings;
    let phi = input.friction_angle();
    let mut tracker = EquationTracker::new();

    // === Effective Area ===
    let geometry = effective_geometry(input)?;
    tracker.record(Equation::Eccentricity, "e_B = M_L/V, e_L = M_B/V");
    tracker.record(
        match settings.eccentricity {
            EccentricityConvention::Signed => Equation::EffectiveDimensions,
            EccentricityConvention::Absolute => Equation::EffectiveDimensionsAbsolute,
        },
        settings.eccentricity.display_name(),
    );
    tracker.record(Equation::EffectiveArea, "A'");
    debug!(
        "{}: B' = {:.4} m, L' = {:.4} m, A' = {:.4} m²",
        input.label, geometry.effective_width_m, geometry.effective_length_m, geometry.effective_area_m2
    );

    // === Bearing Capacity Factors ===
    let factors = bearing_factors(phi)?;
    let phi_context = format!("phi = {:.2}°", input.friction_angle_deg);
    tracker.record(Equation::BearingFactorNq, phi_context.clone());
    tracker.record(Equation::BearingFactorNc, phi_context.clone());
    tracker.record(Equation::BearingFactorNgamma, phi_context);
    debug!(
        "{}: N_q = {:.4}, N_c = {:.4}, N_γ = {:.4}",
        input.label, factors.nq, factors.nc, factors.ngamma
    );

    // === Shape Factors ===
    let shape = shape_factors(&geometry, phi, factors.nq, settings.cohesion_shape_factor)?;
    let ratio_context = format!("B'/L' = {:.4}", geometry.aspect_ratio());
    tracker.record(Equation::ShapeFactorGamma, ratio_context.clone());
    tracker.record(Equation::ShapeFactorQ, ratio_context.clone());
    tracker.record(
        match settings.cohesion_shape_factor {
            CohesionShapeFactor::Literal => Equation::ShapeFactorCLiteral,
            CohesionShapeFactor::Ec7 => Equation::ShapeFactorCEc7,
        },
        ratio_context,
    );

    // === Inclination ===
    let m = load_direction_exponent(&geometry, settings.load_direction);
    tracker.record(
        match settings.load_direction {
            LoadDirection::AlongB => Equation::LoadDirectionExponentB,
            LoadDirection::AlongL => Equation::LoadDirectionExponentL,
        },
        settings.load_direction.display_name(),
    );

    let inclination = inclination_factors(input, &geometry, phi, &factors, m)?;
    let load_context = format!("H/D = {:.4}", inclination.load_ratio);
    tracker.record(Equation::InclinationFactorQ, load_context.clone());
    tracker.record(Equation::InclinationFactorGamma, load_context.clone());
    tracker.record(Equation::InclinationFactorC, load_context);
    debug!(
        "{}: m = {:.4}, i_γ = {:.4}, i_q = {:.4}, i_c = {:.4}",
        input.label, m, inclination.igamma, inclination.iq, inclination.ic
    );

    // === Resistance ===
    let self_weight_term_kpa = equations::self_weight_term(
        input.unit_weight_kn_m3,
        geometry.effective_width_m,
        factors.ngamma,
        shape.sgamma,
        inclination.igamma,
    );
    let cohesion_term_kpa = equations::cohesion_term(input.cohesion_kpa, factors.nc, shape.sc, inclination.ic);
    let overburden_term_kpa = equations::overburden_term(input.overburden_kpa, factors.nq, shape.sq, inclination.iq);
    let bearing_pressure_kpa = equations::bearing_pressure(self_weight_term_kpa, cohesion_term_kpa, overburden_term_kpa);
    let resistance_kn = equations::total_resistance(bearing_pressure_kpa, geometry.effective_area_m2);
    tracker.record(Equation::DrainedBearingResistance, "q_r");
    tracker.record(Equation::TotalResistance, "R");

    if !bearing_pressure_kpa.is_finite() || !resistance_kn.is_finite() {
        return Err(CalcError::numeric_domain(
            "q_r",
            bearing_pressure_kpa,
            "Bearing pressure is not a finite number",
        ));
    }
    debug!("{}: q_r = {:.2} kPa, R = {:.2} kN", input.label, bearing_pressure_kpa, resistance_kn);

    Ok(BearingCapacityResult {
        e_b_m: geometry.e_b_m,
        e_l_m: geometry.e_l_m,
        effective_width_m: geometry.effective_width_m,
        effective_length_m: geometry.effective_length_m,
        effective_area_m2: geometry.effective_area_m2,
        friction_angle_rad: phi.0,
        nq: factors.nq,
        nc: factors.nc,
        ngamma: factors.ngamma,
        sgamma: shape.sgamma,
        sq: shape.sq,
        sc: shape.sc,
        m,
        load_ratio: inclination.load_ratio,
        igamma: inclination.igamma,
        iq: inclination.iq,
        ic: inclination.ic,
        self_weight_term_kpa,
        cohesion_term_kpa,
        overburden_term_kpa,
        bearing_pressure_kpa,
        resistance_kn,
        settings,
        equations: tracker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cohesive_footing() -> FoundationInput {
        FoundationInput {
            label: "Clayey sand".to_string(),
            horizontal_load_kn: 50.0,
            cohesion_kpa: 10.0,
            friction_angle_deg: 25.0,
            ..FoundationInput::reference()
        }
    }

    #[test]
    fn test_reference_effective_geometry() {
        let geometry = effective_geometry(&FoundationInput::reference()).unwrap();
        assert_relative_eq!(geometry.e_b_m, 0.2, epsilon = 1e-12);
        assert_relative_eq!(geometry.e_l_m, 0.15, epsilon = 1e-12);
        assert_relative_eq!(geometry.effective_width_m, 1.1, epsilon = 1e-12);
        assert_relative_eq!(geometry.effective_length_m, 0.7, epsilon = 1e-12);
        assert_relative_eq!(geometry.effective_area_m2, 0.77, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_calculation() {
        let result = calculate(&FoundationInput::reference()).unwrap();

        assert_relative_eq!(result.nq, 18.401_122, epsilon = 1e-5);
        assert_relative_eq!(result.nc, 30.139_628, epsilon = 1e-5);
        assert_relative_eq!(result.ngamma, 20.093_085, epsilon = 1e-5);
        assert_relative_eq!(result.sgamma, 0.528_571, epsilon = 1e-6);
        assert_relative_eq!(result.sq, 1.785_714, epsilon = 1e-6);
        assert_relative_eq!(result.sc, result.sq, epsilon = 1e-12);
        assert_relative_eq!(result.m, 1.388_889, epsilon = 1e-6);
        assert_relative_eq!(result.igamma, 0.997_136, epsilon = 1e-6);
        assert_relative_eq!(result.iq, 0.998_334, epsilon = 1e-6);
        assert_relative_eq!(result.ic, 0.998_238, epsilon = 1e-6);

        assert_relative_eq!(result.self_weight_term_kpa, 116.492_313, epsilon = 1e-4);
        assert_eq!(result.cohesion_term_kpa, 0.0);
        assert_relative_eq!(result.overburden_term_kpa, 708.574_918, epsilon = 1e-4);
        assert_relative_eq!(result.bearing_pressure_kpa, 825.067_231, epsilon = 1e-4);
        assert_relative_eq!(result.resistance_kn, 635.301_768, epsilon = 1e-4);
        assert_eq!(result.resistance_kn, result.bearing_pressure_kpa * result.effective_area_m2);
        assert_relative_eq!(result.resistance_ratio(1000.0), 0.635_302, epsilon = 1e-6);
    }

    #[test]
    fn test_cohesive_soil() {
        let result = calculate(&cohesive_footing()).unwrap();

        // D = V + A'c/tan φ exceeds V when c > 0
        assert_relative_eq!(result.load_ratio, 50.0 / 1016.512_703, epsilon = 1e-8);
        assert_relative_eq!(result.nq, 10.662_142, epsilon = 1e-5);
        assert_relative_eq!(result.ic, 0.925_342, epsilon = 1e-6);
        assert_relative_eq!(result.cohesion_term_kpa, 319.070_105, epsilon = 1e-4);
        assert_relative_eq!(result.bearing_pressure_kpa, 722.835_664, epsilon = 1e-4);
        assert_relative_eq!(result.resistance_kn, 556.583_462, epsilon = 1e-4);
    }

    #[test]
    fn test_ec7_cohesion_shape_factor() {
        let input = cohesive_footing().with_cohesion_shape_factor(CohesionShapeFactor::Ec7);
        let result = calculate(&input).unwrap();

        assert_relative_eq!(result.sc, 1.732_848, epsilon = 1e-6);
        assert!(result.sc > result.sq);
        assert_relative_eq!(result.bearing_pressure_kpa, 736.014_359, epsilon = 1e-4);
        assert!(result.equations.unique_equations().contains(&Equation::ShapeFactorCEc7));
        assert!(!result.equations.unique_equations().contains(&Equation::ShapeFactorCLiteral));
    }

    #[test]
    fn test_load_along_l() {
        let input = FoundationInput::reference().with_load_direction(LoadDirection::AlongL);
        let result = calculate(&input).unwrap();

        // m_L = (2 + L'/B')/(1 + L'/B')
        assert_relative_eq!(result.m, 1.611_111, epsilon = 1e-6);
        assert_relative_eq!(result.bearing_pressure_kpa, 824.847_111, epsilon = 1e-4);
        assert_eq!(result.settings.load_direction, LoadDirection::AlongL);
    }

    #[test]
    fn test_concentric_vertical_load() {
        let input = FoundationInput {
            horizontal_load_kn: 0.0,
            moment_about_l_knm: 0.0,
            moment_about_b_knm: 0.0,
            ..FoundationInput::reference()
        };
        let result = calculate(&input).unwrap();

        assert_eq!(result.effective_width_m, 1.5);
        assert_eq!(result.effective_length_m, 1.0);
        assert_eq!(result.iq, 1.0);
        assert_eq!(result.igamma, 1.0);
        assert_relative_eq!(result.m, 1.4, epsilon = 1e-12);
        assert_relative_eq!(result.resistance_kn, 1_291.995_559, epsilon = 1e-4);
    }

    #[test]
    fn test_invalid_geometry_halts() {
        let mut input = FoundationInput::reference();
        input.moment_about_l_knm = 800.0;

        let err = calculate(&input).unwrap_err();
        match err {
            CalcError::InvalidGeometry {
                e_b_m,
                e_l_m,
                effective_width_m,
                effective_length_m,
            } => {
                assert_relative_eq!(e_b_m, 0.8, epsilon = 1e-12);
                assert_relative_eq!(e_l_m, 0.15, epsilon = 1e-12);
                assert_relative_eq!(effective_width_m, -0.1, epsilon = 1e-12);
                assert_relative_eq!(effective_length_m, 0.7, epsilon = 1e-12);
            }
            other => panic!("expected InvalidGeometry, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_moment_signed_convention() {
        let mut input = FoundationInput::reference();
        input.moment_about_l_knm = -200.0;

        let signed = calculate(&input).unwrap();
        assert_relative_eq!(signed.e_b_m, -0.2, epsilon = 1e-12);
        assert_relative_eq!(signed.effective_width_m, 1.9, epsilon = 1e-12);
        assert!(signed.equations.unique_equations().contains(&Equation::EffectiveDimensions));

        let absolute = calculate(&input.with_eccentricity(EccentricityConvention::Absolute)).unwrap();
        assert_relative_eq!(absolute.e_b_m, -0.2, epsilon = 1e-12);
        assert_relative_eq!(absolute.effective_width_m, 1.1, epsilon = 1e-12);
        assert!(absolute
            .equations
            .unique_equations()
            .contains(&Equation::EffectiveDimensionsAbsolute));
    }

    #[test]
    fn test_positive_moments_agree_across_conventions() {
        let signed = calculate(&FoundationInput::reference()).unwrap();
        let absolute =
            calculate(&FoundationInput::reference().with_eccentricity(EccentricityConvention::Absolute)).unwrap();
        assert_eq!(signed.bearing_pressure_kpa, absolute.bearing_pressure_kpa);
    }

    #[test]
    fn test_vanishing_friction_angle_rejects_rounded_nq() {
        for exponent in 1..=300 {
            let phi_deg = 10f64.powi(-exponent);
            match bearing_factors(Degrees(phi_deg).into()) {
                Ok(factors) => {
                    assert!(factors.nq > 1.0, "N_q = {} at phi = {phi_deg:e}°", factors.nq);
                    assert!(factors.nc > 0.0, "N_c = {} at phi = {phi_deg:e}°", factors.nc);
                }
                Err(CalcError::NumericDomain { quantity, .. }) => assert_eq!(quantity, "N_q - 1"),
                Err(other) => panic!("unexpected error at phi = {phi_deg:e}°: {other:?}"),
            }
        }
        assert!(bearing_factors(Degrees(1e-300).into()).is_err());
    }

    #[test]
    fn test_zero_effective_length_is_invalid() {
        let mut input = FoundationInput::reference();
        input.moment_about_b_knm = 500.0; // e_L = 0.5, L' = 0.0
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_zero_vertical_load() {
        let mut input = FoundationInput::reference();
        input.vertical_load_kn = 0.0;
        match calculate(&input).unwrap_err() {
            CalcError::NumericDomain { quantity, .. } => assert_eq!(quantity, "V"),
            other => panic!("expected NumericDomain, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_friction_angle() {
        let mut input = FoundationInput::reference();
        input.friction_angle_deg = 0.0;
        match calculate(&input).unwrap_err() {
            CalcError::NumericDomain { quantity, value, .. } => {
                assert_eq!(quantity, "tan(phi)");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected NumericDomain, got {other:?}"),
        }
    }

    #[test]
    fn test_horizontal_equals_vertical() {
        let mut input = FoundationInput::reference();
        input.horizontal_load_kn = input.vertical_load_kn;
        match calculate(&input).unwrap_err() {
            CalcError::NumericDomain { quantity, value, .. } => {
                assert_eq!(quantity, "1 - H/D");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected NumericDomain, got {other:?}"),
        }
    }

    #[test]
    fn test_validation() {
        let cases: [(fn(&mut FoundationInput), &str); 7] = [
            (|i| i.unit_weight_kn_m3 = 0.0, "unit_weight_kn_m3"),
            (|i| i.width_m = -1.0, "width_m"),
            (|i| i.length_m = 0.0, "length_m"),
            (|i| i.horizontal_load_kn = -1.0, "horizontal_load_kn"),
            (|i| i.cohesion_kpa = -5.0, "cohesion_kpa"),
            (|i| i.friction_angle_deg = 90.0, "friction_angle_deg"),
            (|i| i.overburden_kpa = f64::NAN, "overburden_kpa"),
        ];

        for (mutate, expected_field) in cases {
            let mut input = FoundationInput::reference();
            mutate(&mut input);
            match input.validate().unwrap_err() {
                CalcError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_equations_recorded_in_order() {
        let result = calculate(&FoundationInput::reference()).unwrap();
        let used = result.equations.unique_equations();
        assert_eq!(used.first(), Some(&Equation::Eccentricity));
        assert_eq!(used.last(), Some(&Equation::TotalResistance));
        assert!(used.contains(&Equation::LoadDirectionExponentB));
        assert!(used.contains(&Equation::ShapeFactorCLiteral));
        assert_eq!(used.len(), 15);
    }

    #[test]
    fn test_serialization() {
        let input = cohesive_footing();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: FoundationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"bearing_pressure_kpa\""));
        assert!(json.contains("\"equations\""));
    }
}
