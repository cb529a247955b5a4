//! # PlotKit Core
//!
//! Core types for the PlotKit toolpath engine: 2D geometry in machine
//! coordinates, machine profiles with bounds validation, unit handling,
//! and the shared error type.

pub mod error;
pub mod geometry;
pub mod profile;
pub mod units;

pub use error::{PlotError, Result};
pub use geometry::{Geometry, PathSegment, Point, Winding};
pub use profile::MachineProfile;
pub use units::MeasurementSystem;
