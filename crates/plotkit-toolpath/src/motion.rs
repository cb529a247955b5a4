//! Motion plans: the ordered command sequence a plotter executes.

use plotkit_core::Point;

/// A single machine instruction in a motion plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCommand {
    /// Reposition without drawing.
    MoveTo { point: Point, rapid: bool },
    /// Draw a straight stroke to `point` at `feed_rate` mm/min.
    DrawTo { point: Point, feed_rate: f64 },
    /// Raise the pen.
    PenUp,
    /// Lower the pen onto the paper.
    PenDown,
}

/// Ordered sequence of motion commands for one plot job.
///
/// Created fresh per export by the planner; never mutated after planning.
/// Every `DrawTo` is preceded (since the last `PenUp`) by a `PenDown`, and
/// no commanded point lies outside the profile's safe area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionPlan {
    commands: Vec<MotionCommand>,
}

impl MotionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an externally assembled command sequence.
    pub fn from_commands(commands: Vec<MotionCommand>) -> Self {
        Self { commands }
    }

    pub(crate) fn push(&mut self, command: MotionCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[MotionCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total pen-down drawing distance in mm.
    pub fn draw_length(&self) -> f64 {
        self.lengths().0
    }

    /// Total pen-up travel distance in mm.
    pub fn travel_length(&self) -> f64 {
        self.lengths().1
    }

    fn lengths(&self) -> (f64, f64) {
        let mut draw = 0.0;
        let mut travel = 0.0;
        let mut position: Option<Point> = None;
        for command in &self.commands {
            match command {
                MotionCommand::MoveTo { point, .. } => {
                    if let Some(last) = position {
                        travel += last.distance_to(point);
                    }
                    position = Some(*point);
                }
                MotionCommand::DrawTo { point, .. } => {
                    if let Some(last) = position {
                        draw += last.distance_to(point);
                    }
                    position = Some(*point);
                }
                MotionCommand::PenUp | MotionCommand::PenDown => {}
            }
        }
        (draw, travel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_track_pen_state() {
        let plan = MotionPlan::from_commands(vec![
            MotionCommand::PenUp,
            MotionCommand::MoveTo {
                point: Point::new(10.0, 0.0),
                rapid: true,
            },
            MotionCommand::PenDown,
            MotionCommand::DrawTo {
                point: Point::new(10.0, 40.0),
                feed_rate: 1000.0,
            },
            MotionCommand::PenUp,
            MotionCommand::MoveTo {
                point: Point::new(40.0, 40.0),
                rapid: true,
            },
        ]);
        assert_eq!(plan.draw_length(), 40.0);
        assert_eq!(plan.travel_length(), 30.0);
    }

    #[test]
    fn test_empty_plan_lengths() {
        let plan = MotionPlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.draw_length(), 0.0);
        assert_eq!(plan.travel_length(), 0.0);
    }
}
