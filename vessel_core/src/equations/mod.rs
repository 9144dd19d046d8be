//! # Design Equations
//!
//! The code formulas used by the thickness calculation, kept in one place so
//! they can be checked line by line against the standard.
//!
//! ## Modules
//!
//! - [`pressure_vessel`] - Shell and torispherical head thickness (EN 13445-3)
//!
//! ## Conventions
//!
//! - Pressure and stress in MPa (N/mm²), lengths in mm
//! - Internal (gauge) pressure positive
//! - Thicknesses are minimum values before allowances and rounding
//!
//! ## References
//!
//! - EN 13445-3: Unfired pressure vessels - Part 3: Design
//! - DIN 28011: Torispherical heads (Klöpper type)
//! - DIN 28013: Torispherical heads (Korbbogen type)

pub mod pressure_vessel;

pub use pressure_vessel::{
    cylindrical_shell_thickness,
    head_stress_factor,
    round_up_to_step,
    torispherical_head_thickness,
};
