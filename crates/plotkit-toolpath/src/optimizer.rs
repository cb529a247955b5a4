//! Motion plan cleanup.
//!
//! Removes commands that make the machine dwell without doing work:
//! repeated pen-state changes and zero-length moves. Degenerate inputs
//! (an embedded reposition to the current pen position) otherwise produce
//! a pointless lift-travel-drop sequence in the output.

use plotkit_core::Point;

use crate::motion::{MotionCommand, MotionPlan};

/// Distance below which a move is considered zero-length, mm.
const ZERO_TRAVEL: f64 = 1e-6;

/// Returns a cleaned copy of `plan` with redundant commands removed.
///
/// Command order is preserved; a plan that opens and closes with `PenUp`
/// still does afterwards.
pub fn optimize(plan: &MotionPlan) -> MotionPlan {
    let mut commands: Vec<MotionCommand> = Vec::with_capacity(plan.len());
    let mut position: Option<Point> = None;

    for &command in plan.commands() {
        match command {
            MotionCommand::MoveTo { point, .. } | MotionCommand::DrawTo { point, .. } => {
                if position.is_some_and(|last| last.distance_to(&point) < ZERO_TRAVEL) {
                    continue;
                }
                position = Some(point);
                commands.push(command);
            }
            MotionCommand::PenUp | MotionCommand::PenDown => {
                if commands.last() == Some(&command) {
                    continue;
                }
                commands.push(command);
            }
        }
    }

    MotionPlan::from_commands(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_to(x: f64, y: f64) -> MotionCommand {
        MotionCommand::MoveTo {
            point: Point::new(x, y),
            rapid: true,
        }
    }

    fn draw_to(x: f64, y: f64) -> MotionCommand {
        MotionCommand::DrawTo {
            point: Point::new(x, y),
            feed_rate: 1000.0,
        }
    }

    #[test]
    fn test_zero_length_travel_removed() {
        let plan = MotionPlan::from_commands(vec![
            MotionCommand::PenUp,
            move_to(10.0, 10.0),
            MotionCommand::PenDown,
            draw_to(20.0, 10.0),
            MotionCommand::PenUp,
            move_to(20.0, 10.0), // travel to where the pen already is
            MotionCommand::PenDown,
            draw_to(30.0, 10.0),
            MotionCommand::PenUp,
        ]);

        let optimized = optimize(&plan);
        let travels = optimized
            .commands()
            .iter()
            .filter(|c| matches!(c, MotionCommand::MoveTo { .. }))
            .count();
        assert_eq!(travels, 1);
    }

    #[test]
    fn test_duplicate_pen_commands_collapse() {
        let plan = MotionPlan::from_commands(vec![
            MotionCommand::PenUp,
            MotionCommand::PenUp,
            move_to(10.0, 10.0),
            MotionCommand::PenDown,
            MotionCommand::PenDown,
            draw_to(20.0, 10.0),
            MotionCommand::PenUp,
        ]);

        let optimized = optimize(&plan);
        assert_eq!(
            optimized.commands(),
            &[
                MotionCommand::PenUp,
                move_to(10.0, 10.0),
                MotionCommand::PenDown,
                draw_to(20.0, 10.0),
                MotionCommand::PenUp,
            ]
        );
    }

    #[test]
    fn test_dropped_travel_cascades_into_pen_collapse() {
        // PenUp, zero-length travel, PenUp again: the travel drop makes the
        // two lifts adjacent and the second one goes too.
        let plan = MotionPlan::from_commands(vec![
            move_to(10.0, 10.0),
            MotionCommand::PenUp,
            move_to(10.0, 10.0),
            MotionCommand::PenUp,
            move_to(50.0, 50.0),
        ]);

        let optimized = optimize(&plan);
        assert_eq!(
            optimized.commands(),
            &[
                move_to(10.0, 10.0),
                MotionCommand::PenUp,
                move_to(50.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_minimal_plan_unchanged() {
        let plan = MotionPlan::from_commands(vec![
            MotionCommand::PenUp,
            move_to(10.0, 10.0),
            MotionCommand::PenDown,
            draw_to(190.0, 190.0),
            MotionCommand::PenUp,
            move_to(5.0, 5.0),
        ]);
        assert_eq!(optimize(&plan), plan);
    }
}
