//! Geometric primitives for plotter toolpaths.
//!
//! External collaborators (drawing surface, text outliner, image tracer)
//! hand the engine [`Geometry`] values: ordered runs of line, arc, and
//! pen-lift segments in machine coordinates. Everything here is an
//! immutable value; transformations produce new values.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{PlotError, Result};

/// Tolerance for deciding that two points coincide, in mm.
const JOIN_EPSILON: f64 = 1e-6;

/// A 2D point in machine coordinates (millimeters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Arc winding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// One element of a drawable path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Straight drawing stroke.
    Line { start: Point, end: Point },
    /// Circular drawing stroke. Angles are in radians measured from the
    /// positive X axis; equal start and end angles describe a full circle.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        winding: Winding,
    },
    /// Non-drawing transition: lift the pen and continue at `point`.
    MoveTo { point: Point },
}

impl PathSegment {
    /// Position where the pen enters this segment.
    pub fn start_point(&self) -> Point {
        match self {
            PathSegment::Line { start, .. } => *start,
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                ..
            } => point_on_circle(*center, *radius, *start_angle),
            PathSegment::MoveTo { point } => *point,
        }
    }

    /// Position where the pen leaves this segment.
    pub fn end_point(&self) -> Point {
        match self {
            PathSegment::Line { end, .. } => *end,
            PathSegment::Arc {
                center,
                radius,
                end_angle,
                ..
            } => point_on_circle(*center, *radius, *end_angle),
            PathSegment::MoveTo { point } => *point,
        }
    }
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// One continuous drawable shape: a letter stroke, a traced contour, a
/// freehand path.
///
/// Consecutive segments are contiguous (the end of segment `i` coincides
/// with the start of segment `i + 1`), except immediately after a
/// [`PathSegment::MoveTo`]. The constructor enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    segments: Vec<PathSegment>,
}

impl Geometry {
    /// Creates a geometry, checking the contiguity invariant.
    pub fn new(segments: Vec<PathSegment>) -> Result<Self> {
        for (i, pair) in segments.windows(2).enumerate() {
            if matches!(pair[0], PathSegment::MoveTo { .. }) {
                continue;
            }
            let end = pair[0].end_point();
            let start = pair[1].start_point();
            if end.distance_to(&start) > JOIN_EPSILON {
                return Err(PlotError::DiscontiguousGeometry { segment: i + 1 });
            }
        }
        Ok(Self { segments })
    }

    /// Creates a geometry from a chain of points joined by lines.
    pub fn polyline(points: &[Point]) -> Result<Self> {
        let segments = points
            .windows(2)
            .map(|pair| PathSegment::Line {
                start: pair[0],
                end: pair[1],
            })
            .collect();
        Self::new(segments)
    }

    /// The segments making up this geometry.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flattens the geometry into pen strokes: maximal runs of points the
    /// pen draws through without lifting. Embedded `MoveTo` segments split
    /// strokes; arcs become chords no longer than `max_arc_chord`.
    ///
    /// Strokes of fewer than two points (a trailing reposition, an empty
    /// geometry) are dropped.
    pub fn strokes(&self, max_arc_chord: f64) -> Vec<Vec<Point>> {
        let mut strokes: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();

        for segment in &self.segments {
            match segment {
                PathSegment::MoveTo { point } => {
                    close_stroke(&mut strokes, &mut current);
                    current.push(*point);
                }
                PathSegment::Line { start, end } => {
                    begin_at(&mut strokes, &mut current, *start);
                    current.push(*end);
                }
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    winding,
                } => {
                    begin_at(&mut strokes, &mut current, segment.start_point());
                    flatten_arc(
                        *center,
                        *radius,
                        *start_angle,
                        *end_angle,
                        *winding,
                        max_arc_chord,
                        &mut current,
                    );
                }
            }
        }
        close_stroke(&mut strokes, &mut current);
        strokes
    }
}

/// Finishes the current stroke, keeping it only if the pen actually drew.
fn close_stroke(strokes: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if current.len() > 1 {
        strokes.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Ensures the current stroke continues from `start`. A segment that does
/// not continue from the pen position begins a new stroke.
fn begin_at(strokes: &mut Vec<Vec<Point>>, current: &mut Vec<Point>, start: Point) {
    match current.last() {
        Some(last) if last.distance_to(&start) <= JOIN_EPSILON => {}
        Some(_) => {
            close_stroke(strokes, current);
            current.push(start);
        }
        None => current.push(start),
    }
}

/// Expands an arc into chord endpoints, appended to `out`. The arc's start
/// point is expected to be in `out` already.
fn flatten_arc(
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    winding: Winding,
    max_chord: f64,
    out: &mut Vec<Point>,
) {
    let mut sweep = end_angle - start_angle;
    match winding {
        Winding::Clockwise if sweep >= 0.0 => sweep -= TAU,
        Winding::CounterClockwise if sweep <= 0.0 => sweep += TAU,
        _ => {}
    }

    let arc_length = sweep.abs() * radius;
    let chords = ((arc_length / max_chord.max(JOIN_EPSILON)).ceil() as usize).max(1);

    for i in 1..=chords {
        let fraction = i as f64 / chords as f64;
        let angle = start_angle + sweep * fraction;
        out.push(point_on_circle(center, radius, angle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_polyline_is_contiguous() {
        let geometry = Geometry::polyline(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
        .unwrap();
        assert_eq!(geometry.segments().len(), 2);
    }

    #[test]
    fn test_disjoint_segments_rejected() {
        let result = Geometry::new(vec![
            PathSegment::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
            PathSegment::Line {
                start: Point::new(20.0, 0.0),
                end: Point::new(30.0, 0.0),
            },
        ]);
        assert!(matches!(
            result,
            Err(PlotError::DiscontiguousGeometry { segment: 1 })
        ));
    }

    #[test]
    fn test_move_to_exempt_from_contiguity() {
        let geometry = Geometry::new(vec![
            PathSegment::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
            PathSegment::MoveTo {
                point: Point::new(50.0, 50.0),
            },
            PathSegment::Line {
                start: Point::new(50.0, 50.0),
                end: Point::new(60.0, 50.0),
            },
        ])
        .unwrap();
        assert_eq!(geometry.segments().len(), 3);
    }

    #[test]
    fn test_strokes_split_at_move_to() {
        let geometry = Geometry::new(vec![
            PathSegment::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
            PathSegment::MoveTo {
                point: Point::new(50.0, 50.0),
            },
            PathSegment::Line {
                start: Point::new(50.0, 50.0),
                end: Point::new(60.0, 50.0),
            },
        ])
        .unwrap();

        let strokes = geometry.strokes(0.5);
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0], vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(
            strokes[1],
            vec![Point::new(50.0, 50.0), Point::new(60.0, 50.0)]
        );
    }

    #[test]
    fn test_trailing_move_to_draws_nothing() {
        let geometry = Geometry::new(vec![
            PathSegment::Line {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
            },
            PathSegment::MoveTo {
                point: Point::new(50.0, 50.0),
            },
        ])
        .unwrap();
        assert_eq!(geometry.strokes(0.5).len(), 1);
    }

    #[test]
    fn test_arc_endpoints() {
        let arc = PathSegment::Arc {
            center: Point::new(10.0, 10.0),
            radius: 5.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            winding: Winding::CounterClockwise,
        };
        let start = arc.start_point();
        let end = arc.end_point();
        assert!((start.x - 15.0).abs() < 1e-9);
        assert!((start.y - 10.0).abs() < 1e-9);
        assert!((end.x - 10.0).abs() < 1e-9);
        assert!((end.y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_flattening_stays_on_circle() {
        let center = Point::new(50.0, 50.0);
        let geometry = Geometry::new(vec![PathSegment::Arc {
            center,
            radius: 20.0,
            start_angle: 0.0,
            end_angle: PI,
            winding: Winding::CounterClockwise,
        }])
        .unwrap();

        let strokes = geometry.strokes(0.5);
        assert_eq!(strokes.len(), 1);
        let stroke = &strokes[0];
        // Half circle of radius 20 at 0.5mm chords needs at least 125 points.
        assert!(stroke.len() > 100);
        for point in stroke {
            assert!((point.distance_to(&center) - 20.0).abs() < 1e-9);
        }
        let last = stroke.last().unwrap();
        assert!((last.x - 30.0).abs() < 1e-9);
        assert!((last.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_circle_when_angles_equal() {
        let geometry = Geometry::new(vec![PathSegment::Arc {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_angle: 0.0,
            end_angle: 0.0,
            winding: Winding::Clockwise,
        }])
        .unwrap();

        let strokes = geometry.strokes(0.5);
        let stroke = &strokes[0];
        let first = stroke.first().unwrap();
        let last = stroke.last().unwrap();
        assert!(first.distance_to(last) < 1e-9);
        // A degenerate arc would collapse to a single chord.
        assert!(stroke.len() > 3);
    }

    #[test]
    fn test_clockwise_arc_sweeps_negative() {
        let geometry = Geometry::new(vec![PathSegment::Arc {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_angle: FRAC_PI_2,
            end_angle: 0.0,
            winding: Winding::Clockwise,
        }])
        .unwrap();

        let strokes = geometry.strokes(0.5);
        let stroke = &strokes[0];
        // Quarter turn clockwise from (0, 10) down to (10, 0).
        assert!(stroke.len() < 50);
        assert!((stroke.last().unwrap().x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_geometry_has_no_strokes() {
        let geometry = Geometry::new(Vec::new()).unwrap();
        assert!(geometry.is_empty());
        assert!(geometry.strokes(0.5).is_empty());
    }
}
