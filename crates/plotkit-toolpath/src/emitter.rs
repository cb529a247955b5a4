//! G-code emission from motion plans.
//!
//! Output is deterministic: fixed decimal precision, `.` separators, no
//! timestamps. Identical inputs produce identical bytes, so exported files
//! diff cleanly.

use plotkit_core::units;
use plotkit_core::{MachineProfile, PlotError, Point, Result};

use crate::motion::{MotionCommand, MotionPlan};

/// Serializes a motion plan into G-code text.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcodeEmitter;

impl GcodeEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Emits the full program: header, one line per command, footer.
    ///
    /// Every X/Y coordinate is re-checked against the profile bounds before
    /// it is written. The planner already guarantees bounds, so a failure
    /// here means the plan was assembled by hand or a planner bug slipped
    /// through; either way nothing unsafe reaches the output.
    pub fn emit(&self, plan: &MotionPlan, profile: &MachineProfile) -> Result<String> {
        let system = profile.units;
        let mut gcode = String::new();
        gcode.push_str(&self.header(plan, profile));

        for (index, command) in plan.commands().iter().enumerate() {
            match *command {
                MotionCommand::PenUp => {
                    gcode.push_str(&format!(
                        "G0 Z{}\n",
                        units::format_length(profile.pen_up_z, system)
                    ));
                }
                MotionCommand::PenDown => {
                    gcode.push_str(&format!(
                        "G1 Z{} F{}\n",
                        units::format_length(profile.pen_down_z, system),
                        units::format_feed_rate(profile.feed_rate, system)
                    ));
                }
                MotionCommand::MoveTo { point, rapid } => {
                    check_bounds(point, index, profile)?;
                    if rapid {
                        gcode.push_str(&format!(
                            "G0 X{} Y{}\n",
                            units::format_length(point.x, system),
                            units::format_length(point.y, system)
                        ));
                    } else {
                        gcode.push_str(&format!(
                            "G1 X{} Y{} F{}\n",
                            units::format_length(point.x, system),
                            units::format_length(point.y, system),
                            units::format_feed_rate(profile.feed_rate, system)
                        ));
                    }
                }
                MotionCommand::DrawTo { point, feed_rate } => {
                    check_bounds(point, index, profile)?;
                    let feed = feed_rate.min(profile.max_feed_rate);
                    gcode.push_str(&format!(
                        "G1 X{} Y{} F{}\n",
                        units::format_length(point.x, system),
                        units::format_length(point.y, system),
                        units::format_feed_rate(feed, system)
                    ));
                }
            }
        }

        gcode.push_str(&self.footer(profile));
        Ok(gcode)
    }

    fn header(&self, plan: &MotionPlan, profile: &MachineProfile) -> String {
        let system = profile.units;
        let label = units::unit_label(system);
        let mut gcode = String::new();

        gcode.push_str("; PlotKit pen plotter G-code\n");
        gcode.push_str(&format!(
            "; Bed: {} x {} {}\n",
            units::format_length(profile.bed_width, system),
            units::format_length(profile.bed_height, system),
            label
        ));
        gcode.push_str(&format!(
            "; Feed rate: {} {}/min\n",
            units::format_feed_rate(profile.feed_rate, system),
            label
        ));
        gcode.push_str(&format!(
            "; Pen up Z: {} / pen down Z: {}\n",
            units::format_length(profile.pen_up_z, system),
            units::format_length(profile.pen_down_z, system)
        ));
        gcode.push_str(&format!(
            "; Draw length: {} {}\n",
            units::format_length(plan.draw_length(), system),
            label
        ));
        gcode.push_str(&format!(
            "; Travel length: {} {}\n",
            units::format_length(plan.travel_length(), system),
            label
        ));
        gcode.push('\n');

        gcode.push_str(&format!(
            "{} ; Units: {}\n",
            units::unit_declaration(system),
            label
        ));
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str("G17 ; XY plane\n");
        gcode.push('\n');
        gcode
    }

    fn footer(&self, profile: &MachineProfile) -> String {
        let system = profile.units;
        let mut gcode = String::new();
        gcode.push('\n');
        gcode.push_str(&format!(
            "G0 Z{} ; Raise pen\n",
            units::format_length(profile.pen_up_z, system)
        ));
        gcode.push_str(&format!(
            "G0 X{} Y{} ; Park\n",
            units::format_length(profile.home.x, system),
            units::format_length(profile.home.y, system)
        ));
        gcode.push_str("M30 ; End of program\n");
        gcode
    }
}

fn check_bounds(point: Point, index: usize, profile: &MachineProfile) -> Result<()> {
    if profile.contains(point) {
        Ok(())
    } else {
        Err(PlotError::OutOfBounds { point, index })
    }
}
