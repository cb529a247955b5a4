//! Path planning: bounds validation, geometry ordering, pen sequencing.

use plotkit_core::{Geometry, MachineProfile, PlotError, Point, Result};
use tracing::debug;

use crate::motion::{MotionCommand, MotionPlan};

/// How the planner orders geometries before sequencing strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingStrategy {
    /// Visit geometries exactly in input order.
    Preserve,
    /// Greedy nearest-entry-point ordering to cut pen-up travel.
    NearestNeighbor,
}

impl Default for OrderingStrategy {
    fn default() -> Self {
        Self::NearestNeighbor
    }
}

/// Planner tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub ordering: OrderingStrategy,
    /// Maximum chord length when flattening arcs, mm.
    pub arc_segment_length: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ordering: OrderingStrategy::NearestNeighbor,
            arc_segment_length: 0.5,
        }
    }
}

/// Turns geometries into an ordered, bounds-checked motion plan.
#[derive(Debug, Clone, Default)]
pub struct PathPlanner {
    config: PlannerConfig,
}

impl PathPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Plans pen motion for `geometries` on the machine described by
    /// `profile`.
    ///
    /// Bounds are checked up front, before any reordering, so the index in
    /// an [`PlotError::OutOfBounds`] always refers to the input sequence.
    /// Coordinates are carried at full precision; rounding happens only in
    /// the emitter.
    pub fn plan(&self, geometries: &[Geometry], profile: &MachineProfile) -> Result<MotionPlan> {
        profile.validate()?;

        // Arcs become chords here, so the bounds check below covers arc
        // interiors and not just endpoints.
        let flattened: Vec<Vec<Vec<Point>>> = geometries
            .iter()
            .map(|g| g.strokes(self.config.arc_segment_length))
            .collect();

        if flattened.iter().all(|strokes| strokes.is_empty()) {
            return Err(PlotError::EmptyInput);
        }

        for (index, strokes) in flattened.iter().enumerate() {
            for stroke in strokes {
                for point in stroke {
                    if !profile.contains(*point) {
                        return Err(PlotError::OutOfBounds {
                            point: *point,
                            index,
                        });
                    }
                }
            }
        }

        let order = match self.config.ordering {
            OrderingStrategy::Preserve => (0..flattened.len()).collect(),
            OrderingStrategy::NearestNeighbor => nearest_neighbor_order(&flattened, profile.home),
        };

        let mut plan = MotionPlan::new();
        plan.push(MotionCommand::PenUp);
        for &index in &order {
            for stroke in &flattened[index] {
                plan.push(MotionCommand::MoveTo {
                    point: stroke[0],
                    rapid: true,
                });
                plan.push(MotionCommand::PenDown);
                for point in &stroke[1..] {
                    plan.push(MotionCommand::DrawTo {
                        point: *point,
                        feed_rate: profile.feed_rate,
                    });
                }
                plan.push(MotionCommand::PenUp);
            }
        }
        plan.push(MotionCommand::MoveTo {
            point: profile.home,
            rapid: true,
        });

        debug!(
            geometries = geometries.len(),
            commands = plan.len(),
            "motion plan built"
        );
        Ok(plan)
    }
}

/// Greedy nearest-entry ordering starting from `start`.
///
/// Ties go to the earlier input index, so the result is stable and the same
/// inputs always produce the same order. Distances use unrounded
/// coordinates.
fn nearest_neighbor_order(flattened: &[Vec<Vec<Point>>], start: Point) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..flattened.len())
        .filter(|&i| !flattened[i].is_empty())
        .collect();
    let mut order = Vec::with_capacity(remaining.len());
    let mut position = start;

    while !remaining.is_empty() {
        let mut best_slot = 0;
        let mut best_distance = f64::INFINITY;
        for (slot, &index) in remaining.iter().enumerate() {
            let entry = flattened[index][0][0];
            let distance = position.distance_to(&entry);
            if distance < best_distance {
                best_slot = slot;
                best_distance = distance;
            }
        }

        let index = remaining.remove(best_slot);
        let exit = flattened[index]
            .last()
            .and_then(|stroke| stroke.last())
            .copied();
        if let Some(exit) = exit {
            position = exit;
        }
        order.push(index);
    }
    order
}
