//! Export pipeline: plan, optimize, emit, write.

use std::fs;
use std::io::Write;
use std::path::Path;

use plotkit_core::{Geometry, MachineProfile, Result};
use tracing::{debug, info};

use crate::emitter::GcodeEmitter;
use crate::optimizer;
use crate::planner::{PathPlanner, PlannerConfig};

/// End-to-end pipeline from geometry to a G-code file.
///
/// Serialization happens fully in memory; the destination is only touched
/// once the whole program has been generated, so a failed export never
/// creates or truncates the file.
#[derive(Debug, Clone, Default)]
pub struct ExportPipeline {
    planner: PathPlanner,
    emitter: GcodeEmitter,
}

impl ExportPipeline {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            planner: PathPlanner::new(config),
            emitter: GcodeEmitter::new(),
        }
    }

    /// Generates the full G-code program in memory.
    pub fn generate(&self, geometries: &[Geometry], profile: &MachineProfile) -> Result<String> {
        let plan = self.planner.plan(geometries, profile)?;
        let plan = optimizer::optimize(&plan);
        debug!(commands = plan.len(), "optimized motion plan");
        self.emitter.emit(&plan, profile)
    }

    /// Writes the generated program to `destination`, returning the number
    /// of bytes written.
    pub fn export(
        &self,
        geometries: &[Geometry],
        profile: &MachineProfile,
        destination: &Path,
    ) -> Result<u64> {
        let gcode = self.generate(geometries, profile)?;
        fs::write(destination, &gcode)?;
        info!(
            geometries = geometries.len(),
            bytes = gcode.len(),
            path = %destination.display(),
            "exported G-code"
        );
        Ok(gcode.len() as u64)
    }

    /// Streams the generated program into `writer`, returning the number of
    /// bytes written. The writer is only touched after generation succeeds.
    pub fn export_to_writer<W: Write>(
        &self,
        geometries: &[Geometry],
        profile: &MachineProfile,
        writer: &mut W,
    ) -> Result<u64> {
        let gcode = self.generate(geometries, profile)?;
        writer.write_all(gcode.as_bytes())?;
        Ok(gcode.len() as u64)
    }
}
