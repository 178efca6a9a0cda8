//! # Calculation Settings
//!
//! Options that select between formula variants. They travel with the
//! input (`FoundationInput::settings`) so a JSON input file fully
//! determines the result.
//!
//! ```rust
//! use bearing_core::settings::{CalculationSettings, CohesionShapeFactor, EccentricityConvention, LoadDirection};
//!
//! let settings: CalculationSettings = serde_json::from_str(r#"{"load_direction": "AlongL"}"#).unwrap();
//! assert_eq!(settings.load_direction, LoadDirection::AlongL);
//! assert_eq!(settings.cohesion_shape_factor, CohesionShapeFactor::Literal);
//! assert_eq!(settings.eccentricity, EccentricityConvention::Signed);
//! ```

use serde::{Deserialize, Serialize};

/// Axis along which the horizontal load H acts.
///
/// Selects the load-direction exponent `m` used by the inclination factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadDirection {
    /// H parallel to the effective width B': m = (2 + B'/L')/(1 + B'/L')
    #[default]
    AlongB,

    /// H parallel to the effective length L': m = (2 + L'/B')/(1 + L'/B')
    AlongL,
}

impl LoadDirection {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadDirection::AlongB => "H along B (m_B)",
            LoadDirection::AlongL => "H along L (m_L)",
        }
    }
}

impl std::fmt::Display for LoadDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Formula used for the cohesion shape factor s_c.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CohesionShapeFactor {
    /// s_c = s_q·(N_q - 1)/(N_q - 1), which equals s_q.
    ///
    /// Matches the reference calculation sheet.
    #[default]
    Literal,

    /// s_c = (s_q·N_q - 1)/(N_q - 1), EN 1997-1 D.4
    Ec7,
}

impl CohesionShapeFactor {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CohesionShapeFactor::Literal => "s_c = s_q(N_q-1)/(N_q-1)",
            CohesionShapeFactor::Ec7 => "s_c = (s_q N_q - 1)/(N_q - 1)",
        }
    }
}

impl std::fmt::Display for CohesionShapeFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the eccentricity reduces the nominal footing dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EccentricityConvention {
    /// B' = B - 2·e_B with the signed eccentricity; a negative moment widens B'
    #[default]
    Signed,

    /// B' = B - 2·|e_B|; a moment of either sign reduces B'
    Absolute,
}

impl EccentricityConvention {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            EccentricityConvention::Signed => "B' = B - 2e",
            EccentricityConvention::Absolute => "B' = B - 2|e|",
        }
    }
}

impl std::fmt::Display for EccentricityConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Formula-variant settings for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    /// Axis of the horizontal load
    pub load_direction: LoadDirection,

    /// Cohesion shape factor variant
    pub cohesion_shape_factor: CohesionShapeFactor,

    /// Sign convention of the effective-dimension reduction
    pub eccentricity: EccentricityConvention,
}
