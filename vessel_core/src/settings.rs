//! # Design Settings
//!
//! Workspace-wide defaults for the design calculation and its reports.
//! Settings are plain JSON; every field is optional and falls back to its
//! default.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "design_code": "EN 13445-3",
//!   "plate_step_mm": 0.5,
//!   "profile_points": 100,
//!   "default_weld_coefficient": 1.0,
//!   "default_allowance_mm": 1.0
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json(r#"{ "plate_step_mm": 1.0 }"#).unwrap();
//! assert_eq!(settings.plate_step_mm, 1.0);
//! assert_eq!(settings.profile_points, 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Smallest commercial plate increment (mm). Configured steps must be a
/// whole multiple of it so nominal thicknesses stay on the 0.5 mm grid.
pub const BASE_PLATE_STEP_MM: f64 = 0.5;

/// Defaults and rounding rules for a design run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Design code label shown in reports
    pub design_code: String,

    /// Commercial plate thickness step for the nominal thickness (mm)
    pub plate_step_mm: f64,

    /// Default number of samples for head profiles
    pub profile_points: usize,

    /// Weld joint coefficient z used when an input does not give one
    pub default_weld_coefficient: f64,

    /// Corrosion + manufacturing allowance c used when an input does not give one (mm)
    pub default_allowance_mm: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            design_code: "EN 13445-3".to_string(),
            plate_step_mm: BASE_PLATE_STEP_MM,
            profile_points: 100,
            default_weld_coefficient: 1.0,
            default_allowance_mm: 1.0,
        }
    }
}

impl DesignSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate ranges.
    pub fn validate(&self) -> CalcResult<()> {
        let steps = self.plate_step_mm / BASE_PLATE_STEP_MM;
        if !self.plate_step_mm.is_finite() || self.plate_step_mm <= 0.0 || steps.fract() != 0.0 {
            return Err(CalcError::invalid_input(
                "plate_step_mm",
                self.plate_step_mm.to_string(),
                "Plate step must be a positive multiple of 0.5 mm",
            ));
        }
        if self.profile_points < 2 {
            return Err(CalcError::invalid_input(
                "profile_points",
                self.profile_points.to_string(),
                "Profile needs at least 2 points",
            ));
        }
        if !(self.default_weld_coefficient > 0.0 && self.default_weld_coefficient <= 1.0) {
            return Err(CalcError::invalid_input(
                "default_weld_coefficient",
                self.default_weld_coefficient.to_string(),
                "Weld joint coefficient must be in (0, 1]",
            ));
        }
        if !self.default_allowance_mm.is_finite() || self.default_allowance_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "default_allowance_mm",
                self.default_allowance_mm.to_string(),
                "Allowance cannot be negative",
            ));
        }
        Ok(())
    }
}
