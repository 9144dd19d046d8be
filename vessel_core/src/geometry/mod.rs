//! # Head Geometry
//!
//! Closed-form geometry of torispherical vessel heads: transition angle, arc
//! centers, transition point, sampled contour and enclosed volume. Everything
//! is derived from one diameter and two shape factors; nothing is iterated.
//!
//! ## Modules
//!
//! - [`torispherical`] - [`HeadShape`], [`HeadPreset`] and [`ArcSegment`]
//! - [`profile`] - lazy contour sampling ([`ProfilePoints`])
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::geometry::{HeadPreset, HeadShape};
//!
//! let head = HeadPreset::Korbbogen.shape(1000.0).unwrap();
//! let contour: Vec<(f64, f64)> = head.profile(100).collect();
//!
//! assert_eq!(contour.len(), 100);
//! assert!(head.volume() > 0.0);
//! ```

pub mod profile;
pub mod torispherical;

pub use profile::ProfilePoints;
pub use torispherical::{ArcSegment, HeadPreset, HeadShape, HeadShapeInput};
