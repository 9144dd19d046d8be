//! # Vessel Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function taking the input and returning `CalcResult<*Result>`
//!
//! ## Available Calculations
//!
//! - [`vessel`] - Shell and head wall thickness, vessel capacity

pub mod vessel;

pub use vessel::{
    design_vessel,
    design_vessel_with_settings,
    vessel_capacity,
    DesignResult,
    VesselCapacity,
    VesselDesignInput,
};
