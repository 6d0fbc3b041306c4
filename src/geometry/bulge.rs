//! Bulge-encoded curve conversion
//!
//! Compact polyline records encode an arc between consecutive vertices as a
//! "bulge": the tangent of one quarter of the arc's included angle. This
//! module expands that encoding into explicit line/arc segments. The same
//! routine converts the boundary curves found inside filled-region records.

use super::types::{ArcSeg, ClosedPath, LineSeg, PathSegment, Point};

/// Bulges below this magnitude are treated as straight edges
const BULGE_EPS: f64 = 1e-10;

/// Chords below this length produce a zero-radius placeholder arc
const CHORD_EPS: f64 = 1e-12;

/// Convert a closed vertex+bulge polyline into a closed path
///
/// Vertex `i` pairs with vertex `(i + 1) % n`, so the wrap-around edge is
/// included. A missing bulge entry reads as 0 (straight edge).
pub fn polyline_to_path(points: &[Point], bulges: &[f64], layer: &str) -> ClosedPath {
    let n = points.len();
    let mut segments = Vec::with_capacity(n);

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let bulge = bulges.get(i).copied().unwrap_or(0.0);

        if bulge.abs() < BULGE_EPS {
            segments.push(PathSegment::Line(LineSeg { start: p1, end: p2 }));
        } else {
            segments.push(PathSegment::Arc(bulge_to_arc(p1, p2, bulge)));
        }
    }

    ClosedPath {
        segments,
        source_layer: layer.to_string(),
    }
}

/// Convert a bulge value between two points to an arc segment
///
/// Positive bulge sweeps counter-clockwise from `p1` to `p2`, negative
/// clockwise. A degenerate chord yields a zero-radius arc rather than an
/// error; it contributes no geometry downstream.
pub fn bulge_to_arc(p1: Point, p2: Point, bulge: f64) -> ArcSeg {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let chord = dx.hypot(dy);

    if chord < CHORD_EPS {
        return ArcSeg {
            center: p1,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
            start_point: p1,
            end_point: p2,
        };
    }

    // Sagitta and radius from the bulge definition
    let s = bulge * chord / 2.0;
    let radius = ((chord * chord / 4.0 + s * s) / (2.0 * s)).abs();

    let mx = (p1.x + p2.x) / 2.0;
    let my = (p1.y + p2.y) / 2.0;

    // Unit normal to the chord, pointing left of p1 -> p2
    let nx = -dy / chord;
    let ny = dx / chord;

    // The center sits on the normal through the chord midpoint
    let d = radius - s.abs();
    let (cx, cy) = if bulge > 0.0 {
        (mx + d * nx, my + d * ny)
    } else {
        (mx - d * nx, my - d * ny)
    };

    let center = Point::new(cx, cy);
    let start_angle = (p1.y - cy).atan2(p1.x - cx).to_degrees();
    let end_angle = (p2.y - cy).atan2(p2.x - cx).to_degrees();

    ArcSeg {
        center,
        radius,
        start_angle,
        end_angle,
        start_point: p1,
        end_point: p2,
    }
}
