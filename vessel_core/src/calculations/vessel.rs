//! # Vessel Wall Thickness Design
//!
//! Required wall thickness of a cylindrical pressure vessel closed by two
//! Klöpper heads, after EN 13445-3 (simplified).
//!
//! ## Assumptions
//!
//! - Internal pressure only
//! - Heads are Klöpper type (DIN 28011) on the internal diameter:
//!   R_i = D_i, r_i = 0.1·D_i
//! - Shell and heads share one material, weld coefficient and allowance
//! - Nominal thickness is the governing required thickness rounded up to the
//!   next commercial plate step (0.5 mm by default)
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::calculations::vessel::{design_vessel, VesselDesignInput};
//! use vessel_core::materials::{default_stress_table, MaterialGrade};
//!
//! let input = VesselDesignInput::new(1200, 3000, 3.0, 100.0, MaterialGrade::X2CrNiMo17_12_2);
//! let result = design_vessel(&input, default_stress_table()).unwrap();
//!
//! assert_eq!(result.allowable_stress_mpa, 120.0);
//! assert!((result.shell_required_mm - 2.50).abs() < 0.01);
//! assert!((result.head_required_mm - 3.31).abs() < 0.01);
//! assert_eq!(result.nominal_mm, 3.5);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::equations::{
    cylindrical_shell_thickness, head_stress_factor, round_up_to_step, torispherical_head_thickness,
};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{HeadPreset, HeadShape};
use crate::materials::{AllowableStress, MaterialGrade};
use crate::settings::DesignSettings;
use crate::units::{Bar, CubicMillimeters, Liters, MegaPascal};

/// Input parameters for a vessel design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "internal_diameter_mm": 1200,
///   "shell_length_mm": 3000,
///   "design_pressure_bar": 3.0,
///   "design_temperature_c": 100.0,
///   "material_grade": "1.4404",
///   "z": 1.0,
///   "c": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDesignInput {
    /// Internal diameter D_i in mm
    pub internal_diameter_mm: u32,

    /// Cylindrical shell length L in mm (heads excluded)
    pub shell_length_mm: u32,

    /// Design pressure in bar (gauge)
    pub design_pressure_bar: f64,

    /// Design temperature in °C
    #[serde(default = "default_temperature")]
    pub design_temperature_c: f64,

    /// Material of shell and heads
    #[serde(default)]
    pub material_grade: MaterialGrade,

    /// Weld joint coefficient z (1.0 for full NDT)
    #[serde(default = "default_weld_coefficient")]
    pub z: f64,

    /// Total allowance c = corrosion + manufacturing tolerance, in mm
    #[serde(default = "default_allowance")]
    pub c: f64,
}

fn default_temperature() -> f64 {
    100.0
}

fn default_weld_coefficient() -> f64 {
    1.0
}

fn default_allowance() -> f64 {
    1.0
}

impl VesselDesignInput {
    /// Create an input with z = 1.0 and c = 1.0 mm.
    pub fn new(
        internal_diameter_mm: u32,
        shell_length_mm: u32,
        design_pressure_bar: f64,
        design_temperature_c: f64,
        material_grade: MaterialGrade,
    ) -> Self {
        VesselDesignInput {
            internal_diameter_mm,
            shell_length_mm,
            design_pressure_bar,
            design_temperature_c,
            material_grade,
            z: default_weld_coefficient(),
            c: default_allowance(),
        }
    }

    /// Take z and c from the given settings.
    pub fn with_settings_defaults(mut self, settings: &DesignSettings) -> Self {
        self.z = settings.default_weld_coefficient;
        self.c = settings.default_allowance_mm;
        self
    }

    /// Set the weld joint coefficient z.
    pub fn with_weld_coefficient(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Set the total allowance c (mm).
    pub fn with_allowance(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.internal_diameter_mm == 0 {
            return Err(CalcError::invalid_input(
                "internal_diameter_mm",
                "0",
                "Internal diameter must be positive",
            ));
        }
        if self.shell_length_mm == 0 {
            return Err(CalcError::invalid_input(
                "shell_length_mm",
                "0",
                "Shell length must be positive",
            ));
        }
        if !self.design_pressure_bar.is_finite() || self.design_pressure_bar <= 0.0 {
            return Err(CalcError::invalid_input(
                "design_pressure_bar",
                self.design_pressure_bar.to_string(),
                "Design pressure must be positive",
            ));
        }
        if !self.design_temperature_c.is_finite() {
            return Err(CalcError::invalid_input(
                "design_temperature_c",
                self.design_temperature_c.to_string(),
                "Design temperature must be finite",
            ));
        }
        if !(self.z > 0.0 && self.z <= 1.0) {
            return Err(CalcError::invalid_input(
                "z",
                self.z.to_string(),
                "Weld joint coefficient must be in (0, 1]",
            ));
        }
        if !self.c.is_finite() || self.c < 0.0 {
            return Err(CalcError::invalid_input(
                "c",
                self.c.to_string(),
                "Allowance cannot be negative",
            ));
        }
        Ok(())
    }

    /// Internal diameter D_i (mm)
    pub fn internal_diameter(&self) -> f64 {
        f64::from(self.internal_diameter_mm)
    }

    /// Design pressure P in MPa (1 bar = 0.1 MPa)
    pub fn design_pressure_mpa(&self) -> f64 {
        MegaPascal::from(Bar(self.design_pressure_bar)).value()
    }

    /// Inside crown radius R_i of the Klöpper heads (= D_i)
    pub fn crown_radius_mm(&self) -> f64 {
        HeadPreset::Kloepper.alpha1() * self.internal_diameter()
    }

    /// Inside knuckle radius r_i of the Klöpper heads (= 0.1·D_i)
    pub fn knuckle_radius_mm(&self) -> f64 {
        HeadPreset::Kloepper.alpha2() * self.internal_diameter()
    }

    /// Internal contour of the heads
    pub fn head_shape(&self) -> CalcResult<HeadShape> {
        HeadShape::kloepper(self.internal_diameter())
    }
}

/// Results from a vessel design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "allowable_stress_mpa": 120.0,
///   "design_pressure_mpa": 0.3,
///   "stress_factor_m": 1.5406,
///   "shell_required_mm": 2.5019,
///   "head_required_mm": 3.3124,
///   "nominal_mm": 3.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Nominal design stress f (MPa)
    pub allowable_stress_mpa: f64,

    /// Design pressure P (MPa)
    pub design_pressure_mpa: f64,

    /// Knuckle stress concentration factor M
    pub stress_factor_m: f64,

    /// Required shell thickness e + c (mm)
    pub shell_required_mm: f64,

    /// Required head thickness e + c (mm)
    pub head_required_mm: f64,

    /// Nominal plate thickness (mm), a whole number of plate steps
    pub nominal_mm: f64,
}

impl DesignResult {
    /// Larger of the two required thicknesses
    pub fn governing_required_mm(&self) -> f64 {
        self.shell_required_mm.max(self.head_required_mm)
    }

    /// Component that sets the nominal thickness
    pub fn governing(&self) -> &'static str {
        if self.head_required_mm >= self.shell_required_mm {
            "head"
        } else {
            "shell"
        }
    }
}

/// Design shell and heads with the default settings (0.5 mm plate step).
///
/// # Arguments
///
/// * `input` - Vessel parameters
/// * `stress` - Design stress source, consulted once
///
/// # Returns
///
/// * `Ok(DesignResult)` - Required and nominal thicknesses
/// * `Err(CalcError::InvalidInput)` - Input out of range
/// * `Err(CalcError::UnsupportedMaterial)` - No stress for grade/temperature
/// * `Err(CalcError::InfeasibleDesign)` - Pressure too high for the material
pub fn design_vessel<S>(input: &VesselDesignInput, stress: &S) -> CalcResult<DesignResult>
where
    S: AllowableStress + ?Sized,
{
    design_vessel_with_settings(input, stress, &DesignSettings::default())
}

/// Design shell and heads, rounding to `settings.plate_step_mm`.
pub fn design_vessel_with_settings<S>(
    input: &VesselDesignInput,
    stress: &S,
    settings: &DesignSettings,
) -> CalcResult<DesignResult>
where
    S: AllowableStress + ?Sized,
{
    input.validate()?;
    settings.validate()?;

    let f = stress.allowable_stress(input.material_grade, input.design_temperature_c)?;
    let p = input.design_pressure_mpa();
    let crown = input.crown_radius_mm();
    let knuckle = input.knuckle_radius_mm();

    let shell_required_mm = cylindrical_shell_thickness(p, input.internal_diameter(), f, input.z)? + input.c;
    let head_required_mm = torispherical_head_thickness(p, crown, knuckle, f, input.z)? + input.c;

    let nominal_mm = round_up_to_step(shell_required_mm.max(head_required_mm), settings.plate_step_mm);

    Ok(DesignResult {
        allowable_stress_mpa: f,
        design_pressure_mpa: p,
        stress_factor_m: head_stress_factor(crown, knuckle),
        shell_required_mm,
        head_required_mm,
        nominal_mm,
    })
}

/// Internal volumes of the vessel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselCapacity {
    /// Cylindrical shell volume (mm³)
    pub shell_volume_mm3: f64,

    /// Volume of one head, straight flange excluded (mm³)
    pub head_volume_mm3: f64,

    /// Shell plus both heads (mm³)
    pub total_volume_mm3: f64,
}

impl VesselCapacity {
    /// Total volume in litres
    pub fn total_volume_l(&self) -> f64 {
        Liters::from(CubicMillimeters(self.total_volume_mm3)).value()
    }
}

/// Internal volume of shell and both heads.
///
/// ```rust
/// use vessel_core::calculations::vessel::{vessel_capacity, VesselDesignInput};
/// use vessel_core::materials::MaterialGrade;
///
/// let input = VesselDesignInput::new(1000, 2000, 3.0, 20.0, MaterialGrade::X2CrNiMo17_12_2);
/// let capacity = vessel_capacity(&input).unwrap();
/// assert!((capacity.total_volume_l() - 1768.73).abs() < 0.01);
/// ```
pub fn vessel_capacity(input: &VesselDesignInput) -> CalcResult<VesselCapacity> {
    input.validate()?;

    let d = input.internal_diameter();
    let shell_volume_mm3 = PI * d * d / 4.0 * f64::from(input.shell_length_mm);
    let head_volume_mm3 = input.head_shape()?.volume();

    Ok(VesselCapacity {
        shell_volume_mm3,
        head_volume_mm3,
        total_volume_mm3: shell_volume_mm3 + 2.0 * head_volume_mm3,
    })
}
