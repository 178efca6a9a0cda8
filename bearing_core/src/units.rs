//! # Unit Types
//!
//! Type-safe wrappers for the fixed SI unit set used by the bearing
//! calculation. These remain lightweight `f64` newtypes that serialize as
//! bare numbers.
//!
//! ## SI Units
//!
//! - Length: metres (m), area: square metres (m²)
//! - Force: kilonewtons (kN), moment: kilonewton-metres (kN·m)
//! - Stress/pressure: kilopascals (kPa = kN/m²)
//! - Unit weight: kilonewtons per cubic metre (kN/m³)
//! - Angle: degrees at the boundary, radians inside the formulas
//!
//! No other unit systems are supported.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::units::{Degrees, KiloNewtonMeters, KiloNewtons, Meters, Radians};
//!
//! let phi: Radians = Degrees(180.0).into();
//! assert!((phi.0 - std::f64::consts::PI).abs() < 1e-12);
//!
//! // Eccentricity e = M / V
//! let e: Meters = KiloNewtonMeters(200.0) / KiloNewtons(1000.0);
//! assert!((e.0 - 0.2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Area
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Force and Moment
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl Div<KiloNewtons> for KiloNewtonMeters {
    type Output = Meters;
    fn div(self, rhs: KiloNewtons) -> Meters {
        Meters(self.0 / rhs.0)
    }
}

// ============================================================================
// Pressure and Unit Weight
// ============================================================================

/// Pressure or stress in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

/// Unit weight in kilonewtons per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCubicMeter(pub f64);

impl Mul<SquareMeters> for KiloPascals {
    type Output = KiloNewtons;
    fn mul(self, rhs: SquareMeters) -> KiloNewtons {
        KiloNewtons(self.0 * rhs.0)
    }
}

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Display
// ============================================================================

macro_rules! impl_display {
    ($type:ty, $suffix:expr) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, $suffix),
                    None => write!(f, "{} {}", self.0, $suffix),
                }
            }
        }
    };
}

impl_display!(Meters, "m");
impl_display!(SquareMeters, "m²");
impl_display!(KiloNewtons, "kN");
impl_display!(KiloNewtonMeters, "kN·m");
impl_display!(KiloPascals, "kPa");
impl_display!(KnPerCubicMeter, "kN/m³");
impl_display!(Degrees, "°");
impl_display!(Radians, "rad");

// ============================================================================
// Arithmetic used by the effective-area and resistance equations
// ============================================================================

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl Add for KiloPascals {
    type Output = KiloPascals;
    fn add(self, rhs: KiloPascals) -> KiloPascals {
        KiloPascals(self.0 + rhs.0)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Meters, SquareMeters, KiloNewtons, KiloPascals);
