use plotkit_core::{Geometry, MachineProfile, Point};
use plotkit_toolpath::{MotionCommand, PathPlanner};
use proptest::prelude::*;

fn in_bounds_point() -> impl Strategy<Value = Point> {
    (5.0f64..=195.0, 5.0f64..=195.0).prop_map(|(x, y)| Point::new(x, y))
}

fn polyline() -> impl Strategy<Value = Geometry> {
    proptest::collection::vec(in_bounds_point(), 2..8)
        .prop_map(|points| Geometry::polyline(&points).unwrap())
}

proptest! {
    #[test]
    fn planned_points_stay_in_bounds(
        geometries in proptest::collection::vec(polyline(), 1..5)
    ) {
        let profile = MachineProfile::default();
        let plan = PathPlanner::default().plan(&geometries, &profile).unwrap();

        for command in plan.commands() {
            if let MotionCommand::MoveTo { point, .. }
                | MotionCommand::DrawTo { point, .. } = command
            {
                prop_assert!(profile.contains(*point));
            }
        }
    }

    #[test]
    fn plans_are_deterministic(
        geometries in proptest::collection::vec(polyline(), 1..5)
    ) {
        let profile = MachineProfile::default();
        let planner = PathPlanner::default();
        prop_assert_eq!(
            planner.plan(&geometries, &profile).unwrap(),
            planner.plan(&geometries, &profile).unwrap()
        );
    }

    #[test]
    fn every_pen_drop_is_closed_by_a_lift(
        geometries in proptest::collection::vec(polyline(), 1..5)
    ) {
        let profile = MachineProfile::default();
        let plan = PathPlanner::default().plan(&geometries, &profile).unwrap();
        let commands = plan.commands();

        let ups = commands
            .iter()
            .filter(|c| matches!(c, MotionCommand::PenUp))
            .count();
        let downs = commands
            .iter()
            .filter(|c| matches!(c, MotionCommand::PenDown))
            .count();

        // Plans open with a lift and close every drop, so lifts lead by one.
        prop_assert_eq!(ups, downs + 1);
        prop_assert_eq!(commands.first(), Some(&MotionCommand::PenUp));

        // No drawing while the pen is up.
        let mut down = false;
        for command in commands {
            match command {
                MotionCommand::PenDown => down = true,
                MotionCommand::PenUp => down = false,
                MotionCommand::DrawTo { .. } => prop_assert!(down),
                MotionCommand::MoveTo { .. } => {}
            }
        }
    }
}
