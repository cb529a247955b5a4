//! Unit handling for emitted G-code.
//!
//! Profiles and geometry store lengths in millimeters throughout; the
//! Imperial selection only changes how the emitter formats output (and the
//! `G20`/`G21` declaration). Conversion happens at formatting time so
//! planning never accumulates rounding error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system for emitted G-code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// G-code units declaration for the system (`G21` mm, `G20` inches).
pub fn unit_declaration(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "G21",
        MeasurementSystem::Imperial => "G20",
    }
}

/// Format a length stored in mm for output in the given system.
///
/// Fixed 3 decimal places, `.` separator regardless of locale.
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.3}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / MM_PER_INCH),
    }
}

/// Format a feed rate stored in mm/min for the given system, no decimals.
pub fn format_feed_rate(value_mm_per_min: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.0}", value_mm_per_min),
        MeasurementSystem::Imperial => format!("{:.0}", value_mm_per_min / MM_PER_INCH),
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
