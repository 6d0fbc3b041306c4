//! Geometry metrics for closed paths
//!
//! Bounding box, signed area, and point containment, each handling both
//! straight and curved segments. Arcs need care in all three: their true
//! extrema may sit between the endpoints, their area contribution includes a
//! circular-segment term beyond the chord, and ray casting must walk the
//! curve rather than the chord.

use super::types::{ArcSeg, ClosedPath, PathSegment, Point};

/// Arc radii below this contribute no area
const DEGENERATE_RADIUS: f64 = 1e-12;

impl ClosedPath {
    /// Axis-aligned bounding box as (min, max)
    ///
    /// Includes every segment endpoint plus, for each arc, the cardinal-angle
    /// points (0°/90°/180°/270°) that fall within the arc's sweep.
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        let mut include = |p: Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for seg in &self.segments {
            match seg {
                PathSegment::Line(line) => {
                    include(line.start);
                    include(line.end);
                }
                PathSegment::Arc(arc) => {
                    include(arc.start_point);
                    include(arc.end_point);
                    for p in arc_cardinal_points(arc) {
                        include(p);
                    }
                }
            }
        }

        if min_x > max_x {
            // No segments at all
            return (Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        }
        (Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Signed area, positive for counter-clockwise winding
    ///
    /// Shoelace over each segment's chord, plus a circular-segment correction
    /// for every arc. With no arcs this reduces to the plain shoelace formula.
    pub fn signed_area(&self) -> f64 {
        let mut cross_sum = 0.0;
        let mut arc_correction = 0.0;

        for seg in &self.segments {
            match seg {
                PathSegment::Line(line) => {
                    cross_sum += line.start.x * line.end.y - line.end.x * line.start.y;
                }
                PathSegment::Arc(arc) => {
                    cross_sum += arc.start_point.x * arc.end_point.y
                        - arc.end_point.x * arc.start_point.y;
                    arc_correction += arc_chord_area(arc);
                }
            }
        }

        cross_sum / 2.0 + arc_correction
    }

    /// Test whether a point lies inside the path, by +x ray casting
    pub fn contains(&self, point: Point) -> bool {
        let mut crossings = 0usize;

        for seg in &self.segments {
            match seg {
                PathSegment::Line(line) => {
                    crossings += ray_crosses_edge(
                        point,
                        (line.start.x, line.start.y),
                        (line.end.x, line.end.y),
                    );
                }
                PathSegment::Arc(arc) => {
                    crossings += ray_crosses_arc(point, arc);
                }
            }
        }

        crossings % 2 == 1
    }
}

/// Cardinal-angle extreme points lying on the arc
fn arc_cardinal_points(arc: &ArcSeg) -> Vec<Point> {
    let start = arc.start_angle.rem_euclid(360.0);
    let end = arc.end_angle.rem_euclid(360.0);

    let mut points = Vec::new();
    for angle in [0.0f64, 90.0, 180.0, 270.0] {
        if angle_in_span(angle, start, end) {
            let rad = angle.to_radians();
            points.push(Point::new(
                arc.center.x + arc.radius * rad.cos(),
                arc.center.y + arc.radius * rad.sin(),
            ));
        }
    }
    points
}

/// Check whether an angle lies within the CCW span from start to end
///
/// All angles normalized to [0, 360). A span with start > end wraps through 0.
fn angle_in_span(angle: f64, start: f64, end: f64) -> bool {
    let angle = angle.rem_euclid(360.0);
    if start <= end {
        start <= angle && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

/// Signed area between an arc and its chord
///
/// The sweep is normalized to (-180°, 180°], so a reversed arc contributes
/// with opposite sign.
fn arc_chord_area(arc: &ArcSeg) -> f64 {
    if arc.radius < DEGENERATE_RADIUS {
        return 0.0;
    }

    let mut sweep = (arc.end_angle - arc.start_angle).rem_euclid(360.0);
    if sweep > 180.0 {
        sweep -= 360.0;
    }
    let theta = sweep.to_radians();

    arc.radius * arc.radius * (theta - theta.sin()) / 2.0
}

/// Count +x ray crossings against one straight edge
///
/// The y-range test is half-open so a crossing exactly at a shared vertex is
/// counted once, not twice.
fn ray_crosses_edge(point: Point, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> usize {
    if (y1 <= point.y && point.y < y2) || (y2 <= point.y && point.y < y1) {
        let t = (point.y - y1) / (y2 - y1);
        let x_intersect = x1 + t * (x2 - x1);
        if x_intersect > point.x {
            return 1;
        }
    }
    0
}

/// Count +x ray crossings against an arc, approximated as equal-angle chords
fn ray_crosses_arc(point: Point, arc: &ArcSeg) -> usize {
    let sweep = arc.end_angle - arc.start_angle;
    let num_steps = ((sweep.abs() / 5.0) as usize).max(8);

    let mut crossings = 0;
    let mut prev = arc_point_at(arc, arc.start_angle);
    for i in 1..=num_steps {
        let t = i as f64 / num_steps as f64;
        let next = arc_point_at(arc, arc.start_angle + t * sweep);
        crossings += ray_crosses_edge(point, prev, next);
        prev = next;
    }
    crossings
}

fn arc_point_at(arc: &ArcSeg, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (
        arc.center.x + arc.radius * rad.cos(),
        arc.center.y + arc.radius * rad.sin(),
    )
}
