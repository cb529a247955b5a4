//! Machine profiles: bed geometry, pen heights, and feed limits.
//!
//! A profile is an explicit value passed by reference into every planning
//! and emission call; there is no process-wide machine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::geometry::Point;
use crate::units::MeasurementSystem;

/// Smallest accepted bed dimension in mm.
pub const MIN_DIMENSION: f64 = 0.1;
/// Largest accepted bed dimension in mm.
pub const MAX_DIMENSION: f64 = 1000.0;
/// Smallest accepted feed rate in mm/min.
pub const MIN_FEED_RATE: f64 = 1.0;
/// Largest accepted feed rate in mm/min.
pub const MAX_FEED_RATE: f64 = 5000.0;

/// Physical description of a pen plotter.
///
/// All lengths are stored in millimeters regardless of the `units`
/// selection; `units` only affects how the emitter formats output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineProfile {
    /// Bed width in mm (X axis).
    pub bed_width: f64,
    /// Bed height in mm (Y axis).
    pub bed_height: f64,
    /// Drawing feed rate in mm/min.
    pub feed_rate: f64,
    /// Hard ceiling for any emitted feed rate, mm/min.
    pub max_feed_rate: f64,
    /// Z position with the pen raised.
    pub pen_up_z: f64,
    /// Z position with the pen on the paper.
    pub pen_down_z: f64,
    /// Inset from the bed edges outside which motion is disallowed.
    pub safe_margin: f64,
    /// Unit system used for emitted G-code.
    pub units: MeasurementSystem,
    /// Park position for the start and end of a job. Must lie inside the
    /// safe area. Kept last so TOML serialization sees scalar fields first.
    pub home: Point,
}

impl Default for MachineProfile {
    fn default() -> Self {
        Self {
            bed_width: 200.0,
            bed_height: 200.0,
            feed_rate: 1000.0,
            max_feed_rate: 5000.0,
            pen_up_z: 1.0,
            pen_down_z: 0.0,
            safe_margin: 5.0,
            units: MeasurementSystem::Metric,
            home: Point::new(5.0, 5.0),
        }
    }
}

impl MachineProfile {
    /// True iff `point` lies inside the safe plot area:
    /// `margin <= x <= width - margin` and `margin <= y <= height - margin`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.safe_margin
            && point.x <= self.bed_width - self.safe_margin
            && point.y >= self.safe_margin
            && point.y <= self.bed_height - self.safe_margin
    }

    /// Validates the profile's internal consistency.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("bed width", self.bed_width), ("bed height", self.bed_height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(invalid(format!(
                    "{} must be between {} and {} mm",
                    name, MIN_DIMENSION, MAX_DIMENSION
                )));
            }
        }

        for (name, value) in [
            ("feed rate", self.feed_rate),
            ("max feed rate", self.max_feed_rate),
        ] {
            if !(MIN_FEED_RATE..=MAX_FEED_RATE).contains(&value) {
                return Err(invalid(format!(
                    "{} must be between {} and {} mm/min",
                    name, MIN_FEED_RATE, MAX_FEED_RATE
                )));
            }
        }

        if self.feed_rate > self.max_feed_rate {
            return Err(invalid(format!(
                "feed rate {} exceeds max feed rate {}",
                self.feed_rate, self.max_feed_rate
            )));
        }

        if self.pen_down_z >= self.pen_up_z {
            return Err(invalid(
                "pen down position must be below pen up position".to_string(),
            ));
        }

        if self.safe_margin < 0.0 {
            return Err(invalid("safe margin must not be negative".to_string()));
        }

        if self.safe_margin * 2.0 >= self.bed_width.min(self.bed_height) {
            return Err(invalid(
                "safe margin leaves no drawable area".to_string(),
            ));
        }

        if !self.contains(self.home) {
            return Err(invalid(
                "home position lies outside the safe area".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> PlotError {
    PlotError::InvalidProfile { reason }
}
