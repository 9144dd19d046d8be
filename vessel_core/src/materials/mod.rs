//! # Materials
//!
//! Material grades and the allowable design stress lookup.
//!
//! The thickness calculation never looks stresses up itself: it is handed an
//! [`AllowableStress`] implementation. The built-in [`StressTable`] covers the
//! grades shipped with the crate, and any closure of the form
//! `Fn(MaterialGrade, f64) -> CalcResult<f64>` can stand in for it.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::errors::CalcResult;
//! use vessel_core::materials::{default_stress_table, AllowableStress, MaterialGrade};
//!
//! let f = default_stress_table()
//!     .allowable_stress(MaterialGrade::X2CrNiMo17_12_2, 100.0)
//!     .unwrap();
//! assert_eq!(f, 120.0);
//!
//! // A custom lookup is just a closure
//! let fixed = |_grade: MaterialGrade, _t: f64| -> CalcResult<f64> { Ok(150.0) };
//! assert_eq!(fixed.allowable_stress(MaterialGrade::X2CrNiMo17_12_2, 20.0).unwrap(), 150.0);
//! ```

pub mod stress_table;

pub use stress_table::{default_stress_table, StressEntry, StressTable, EN13445_STRESS_TABLE};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Pressure-vessel steel grades, tagged by EN material number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialGrade {
    /// X2CrNiMo17-12-2, austenitic stainless (AISI 316L)
    #[serde(rename = "1.4404")]
    X2CrNiMo17_12_2,
}

impl MaterialGrade {
    /// All grades for UI selection
    pub const ALL: [MaterialGrade; 1] = [MaterialGrade::X2CrNiMo17_12_2];

    /// EN material number (e.g., "1.4404")
    pub fn number(&self) -> &'static str {
        match self {
            MaterialGrade::X2CrNiMo17_12_2 => "1.4404",
        }
    }

    /// EN steel name (e.g., "X2CrNiMo17-12-2")
    pub fn designation(&self) -> &'static str {
        match self {
            MaterialGrade::X2CrNiMo17_12_2 => "X2CrNiMo17-12-2",
        }
    }

    /// Parse from material number, steel name or common AISI alias
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_'], "-").as_str() {
            "1.4404" | "14404" | "X2CRNIMO17-12-2" | "316L" | "AISI-316L" => {
                Ok(MaterialGrade::X2CrNiMo17_12_2)
            }
            _ => Err(CalcError::invalid_input(
                "material_grade",
                s,
                "Unknown material grade",
            )),
        }
    }
}

impl Default for MaterialGrade {
    fn default() -> Self {
        MaterialGrade::X2CrNiMo17_12_2
    }
}

impl std::fmt::Display for MaterialGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.designation())
    }
}

/// Source of nominal design stresses f (MPa) by grade and temperature.
///
/// Implementations return `CalcError::UnsupportedMaterial` when the pair is
/// not covered; they must never fall back to a guessed value.
pub trait AllowableStress {
    /// Nominal design stress in MPa for `grade` at `temperature_c` (°C).
    fn allowable_stress(&self, grade: MaterialGrade, temperature_c: f64) -> CalcResult<f64>;
}

impl<F> AllowableStress for F
where
    F: Fn(MaterialGrade, f64) -> CalcResult<f64>,
{
    fn allowable_stress(&self, grade: MaterialGrade, temperature_c: f64) -> CalcResult<f64> {
        self(grade, temperature_c)
    }
}
