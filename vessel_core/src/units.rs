//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the design code mixes.
//! They are plain f64 newtypes that serialize as bare numbers.
//!
//! ## Unit System
//!
//! - Length: millimeters (mm) throughout
//! - Pressure: bar at the input boundary, MPa (N/mm²) inside the formulas
//! - Volume: cubic millimeters internally, litres for reporting
//! - Angle: radians internally, degrees for reporting
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::units::{Bar, MegaPascal};
//!
//! let p: MegaPascal = Bar(3.0).into();
//! assert!((p.0 - 0.3).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Pressure / Stress Units
// ============================================================================

/// Pressure in bar
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bar(pub f64);

/// Pressure or stress in MPa (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascal(pub f64);

/// 1 bar = 0.1 MPa
impl From<Bar> for MegaPascal {
    fn from(bar: Bar) -> Self {
        MegaPascal(bar.0 / 10.0)
    }
}

impl From<MegaPascal> for Bar {
    fn from(mpa: MegaPascal) -> Self {
        Bar(mpa.0 * 10.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in litres (dm³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<CubicMillimeters> for Liters {
    fn from(mm3: CubicMillimeters) -> Self {
        Liters(mm3.0 / 1.0e6)
    }
}

impl From<Liters> for CubicMillimeters {
    fn from(l: Liters) -> Self {
        CubicMillimeters(l.0 * 1.0e6)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Bar);
impl_arithmetic!(MegaPascal);
impl_arithmetic!(CubicMillimeters);
impl_arithmetic!(Liters);
impl_arithmetic!(Radians);
impl_arithmetic!(Degrees);
