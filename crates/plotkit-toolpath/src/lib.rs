//! # PlotKit Toolpath
//!
//! Turns PlotKit geometry into machine-safe G-code for pen plotters.
//!
//! ## Pipeline
//!
//! ```text
//! [Geometry] + MachineProfile
//!   └── PathPlanner      (bounds check, ordering, pen sequencing)
//!         └── MotionPlan
//!               └── optimizer   (redundant command removal)
//!                     └── GcodeEmitter  (formatting, defensive bounds re-check)
//!                           └── ExportPipeline  (all-or-nothing file write)
//! ```
//!
//! The whole pipeline is a synchronous pure transformation until the final
//! write; it is safe to run on a worker thread as one atomic unit of work.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plotkit_core::{Geometry, MachineProfile, Point};
//! use plotkit_toolpath::ExportPipeline;
//!
//! let profile = MachineProfile::default();
//! let square = Geometry::polyline(&[
//!     Point::new(20.0, 20.0),
//!     Point::new(80.0, 20.0),
//!     Point::new(80.0, 80.0),
//!     Point::new(20.0, 80.0),
//!     Point::new(20.0, 20.0),
//! ])?;
//!
//! let pipeline = ExportPipeline::default();
//! let bytes = pipeline.export(&[square], &profile, "square.gcode".as_ref())?;
//! ```

pub mod emitter;
pub mod export;
pub mod motion;
pub mod optimizer;
pub mod planner;

pub use emitter::GcodeEmitter;
pub use export::ExportPipeline;
pub use motion::{MotionCommand, MotionPlan};
pub use planner::{OrderingStrategy, PathPlanner, PlannerConfig};
