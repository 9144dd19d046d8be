//! # Pressure Vessel Wall Thickness Equations
//!
//! Required wall thickness of cylindrical shells and torispherical heads under
//! internal pressure, after EN 13445-3 (simplified).
//!
//! ## Nomenclature
//!
//! - P = design pressure (MPa)
//! - D_i = internal shell diameter (mm)
//! - R_i = inside crown radius (mm)
//! - r_i = inside knuckle radius (mm)
//! - f = nominal design stress (MPa)
//! - z = weld joint coefficient (-)
//! - M = stress concentration factor of the knuckle (-)
//!
//! Returned thicknesses exclude the corrosion/manufacturing allowance c.
//!
//! ## References
//!
//! - EN 13445-3 Clause 7.4.2: Cylindrical shells
//! - EN 13445-3 Clause 7.5.3: Torispherical ends

use crate::errors::{CalcError, CalcResult};

/// Minimum thickness of a cylindrical shell under internal pressure.
///
/// ```text
/// e = P·D_i / (2·f·z - P)
/// ```
///
/// # Errors
///
/// `CalcError::InfeasibleDesign` when `2·f·z - P ≤ 0`: no finite wall can
/// carry the pressure.
///
/// # Example
///
/// ```rust
/// use vessel_core::equations::cylindrical_shell_thickness;
///
/// let e = cylindrical_shell_thickness(0.3, 1200.0, 120.0, 1.0).unwrap();
/// assert!((e - 1.5019).abs() < 1e-4);
/// ```
pub fn cylindrical_shell_thickness(p_mpa: f64, d_i_mm: f64, f_mpa: f64, z: f64) -> CalcResult<f64> {
    let denominator = 2.0 * f_mpa * z - p_mpa;
    if denominator <= 0.0 {
        return Err(CalcError::infeasible_design(
            "shell",
            format!(
                "2·f·z - P = {:.4} MPa is non-positive (f = {} MPa, z = {}, P = {} MPa)",
                denominator, f_mpa, z, p_mpa
            ),
        ));
    }
    Ok(p_mpa * d_i_mm / denominator)
}

/// Knuckle stress concentration factor.
///
/// ```text
/// M = 0.25·(3 + √(R_i / r_i))
/// ```
///
/// For a Klöpper head (R_i/r_i = 10), M ≈ 1.5406.
pub fn head_stress_factor(crown_radius_mm: f64, knuckle_radius_mm: f64) -> f64 {
    0.25 * (3.0 + (crown_radius_mm / knuckle_radius_mm).sqrt())
}

/// Minimum thickness of a torispherical head under internal pressure.
///
/// ```text
/// e = P·R_i·M / (2·f·z - P·(M - 1))
/// ```
///
/// # Errors
///
/// `CalcError::InfeasibleDesign` when `2·f·z - P·(M - 1) ≤ 0`.
pub fn torispherical_head_thickness(
    p_mpa: f64,
    crown_radius_mm: f64,
    knuckle_radius_mm: f64,
    f_mpa: f64,
    z: f64,
) -> CalcResult<f64> {
    let m = head_stress_factor(crown_radius_mm, knuckle_radius_mm);
    let denominator = 2.0 * f_mpa * z - p_mpa * (m - 1.0);
    if denominator <= 0.0 {
        return Err(CalcError::infeasible_design(
            "head",
            format!(
                "2·f·z - P·(M - 1) = {:.4} MPa is non-positive (f = {} MPa, z = {}, P = {} MPa, M = {:.4})",
                denominator, f_mpa, z, p_mpa, m
            ),
        ));
    }
    Ok(p_mpa * crown_radius_mm * m / denominator)
}

/// Round a thickness up to the next commercial plate step.
///
/// ```text
/// e_n = ⌈e / step⌉·step
/// ```
///
/// Values already on a step are kept.
pub fn round_up_to_step(thickness_mm: f64, step_mm: f64) -> f64 {
    (thickness_mm / step_mm).ceil() * step_mm
}
