//! # vessel_core - Pressure Vessel Design Engine
//!
//! `vessel_core` computes the internal contour of torispherical heads and the
//! required wall thickness of a cylindrical vessel closed by two Klöpper heads.
//! All inputs and outputs are JSON-serializable and every failure is a
//! structured [`CalcError`].
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No I/O**: The core never prints, logs or reads files
//!
//! ## Quick Start
//!
//! ```rust
//! use vessel_core::{design_vessel, HeadShape, VesselDesignInput};
//! use vessel_core::materials::{default_stress_table, MaterialGrade};
//!
//! let head = HeadShape::kloepper(1000.0).unwrap();
//! assert!((head.internal_height() - 193.77).abs() < 0.01);
//!
//! let input = VesselDesignInput::new(1200, 3000, 3.0, 100.0, MaterialGrade::X2CrNiMo17_12_2);
//! let result = design_vessel(&input, default_stress_table()).unwrap();
//! assert_eq!(result.nominal_mm, 3.5);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Torispherical head contour, profile sampling, volume
//! - [`equations`] - EN 13445-3 thickness formulas
//! - [`calculations`] - Vessel design and capacity
//! - [`materials`] - Material grades and allowable stress lookup
//! - [`settings`] - Plate step and input defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{design_vessel, vessel_capacity, DesignResult, VesselCapacity, VesselDesignInput};
pub use errors::{CalcError, CalcResult};
pub use geometry::{HeadPreset, HeadShape, ProfilePoints};
pub use settings::DesignSettings;
