//! Error handling for PlotKit.
//!
//! One unified error type covers the whole pipeline: geometry construction,
//! profile validation, planning, emission, and the final file write. All
//! variants use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::geometry::Point;

/// Main error type for PlotKit operations.
#[derive(Error, Debug)]
pub enum PlotError {
    /// No geometry was supplied to the planner.
    #[error("no geometry to plot")]
    EmptyInput,

    /// A coordinate falls outside the safe plot area.
    ///
    /// `index` names the offending geometry in the input sequence when the
    /// planner raises this, and the offending motion command when the
    /// emitter's bounds re-check raises it.
    #[error(
        "point ({x:.3}, {y:.3}) at index {index} lies outside the safe plot area",
        x = .point.x,
        y = .point.y
    )]
    OutOfBounds {
        /// The offending coordinate, in millimeters.
        point: Point,
        /// Source geometry index (planner) or command index (emitter).
        index: usize,
    },

    /// Consecutive segments of a geometry do not join up.
    #[error("geometry is not contiguous at segment {segment}")]
    DiscontiguousGeometry {
        /// Index of the first segment that fails to connect.
        segment: usize,
    },

    /// The machine profile fails validation.
    #[error("invalid machine profile: {reason}")]
    InvalidProfile {
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// A motion command variant the emitter does not understand.
    ///
    /// Unreachable while the command set stays a closed enum matched
    /// exhaustively; kept as the contract for callers that extend the
    /// plan format.
    #[error("unsupported motion command: {command}")]
    UnsupportedCommand {
        /// Debug rendering of the unrecognized command.
        command: String,
    },

    /// Destination write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`PlotError`].
pub type Result<T> = std::result::Result<T, PlotError>;
