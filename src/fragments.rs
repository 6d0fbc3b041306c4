//! Raw fragment records from the upstream CAD parser
//!
//! The upstream parser hands over plain typed records: line endpoint pairs,
//! arc descriptors, compact bulge-encoded polylines, circles, text, and
//! filled regions, each tagged with its source-layer name. Coordinates are
//! expected in millimeters; `FragmentSet::scaled` applies the unit resolver's
//! factor when the source used something else.

use serde::Serialize;

use crate::geometry::{ArcSeg, Circle, Point, Text};

/// A raw LINE fragment
#[derive(Debug, Clone, Serialize)]
pub struct RawLine {
    pub start: Point,
    pub end: Point,
    pub layer: String,
}

/// A raw ARC fragment, angles in degrees
#[derive(Debug, Clone, Serialize)]
pub struct RawArc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub layer: String,
}

impl RawArc {
    /// Expand into an arc segment with explicit endpoints
    pub fn to_segment(&self) -> ArcSeg {
        ArcSeg::from_center_angles(self.center, self.radius, self.start_angle, self.end_angle)
    }
}

/// A raw polyline in vertex+bulge encoding
///
/// `bulges[i]` belongs to the edge from vertex `i` to vertex `i + 1`
/// (wrapping for a closed figure). Open polylines are skipped by the
/// conversion pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct RawPolyline {
    pub points: Vec<Point>,
    pub bulges: Vec<f64>,
    pub closed: bool,
    pub layer: String,
}

/// A raw filled-region record with bulge-encoded boundary curves
#[derive(Debug, Clone, Serialize)]
pub struct RawRegion {
    pub boundaries: Vec<RawPolyline>,
    pub is_solid: bool,
    pub layer: String,
}

/// Everything one conversion run operates on
///
/// The assembler needs global visibility of all fragments to build its
/// adjacency index, so the set is fully materialized before processing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FragmentSet {
    pub lines: Vec<RawLine>,
    pub arcs: Vec<RawArc>,
    pub polylines: Vec<RawPolyline>,
    pub circles: Vec<Circle>,
    pub texts: Vec<Text>,
    pub regions: Vec<RawRegion>,
}

impl FragmentSet {
    /// A copy with every coordinate and length multiplied by `factor`
    ///
    /// Bulge values and angles are dimensionless and unchanged.
    pub fn scaled(&self, factor: f64) -> FragmentSet {
        let scale_pt = |p: Point| Point::new(p.x * factor, p.y * factor);
        let scale_poly = |poly: &RawPolyline| RawPolyline {
            points: poly.points.iter().map(|&p| scale_pt(p)).collect(),
            bulges: poly.bulges.clone(),
            closed: poly.closed,
            layer: poly.layer.clone(),
        };

        FragmentSet {
            lines: self
                .lines
                .iter()
                .map(|line| RawLine {
                    start: scale_pt(line.start),
                    end: scale_pt(line.end),
                    layer: line.layer.clone(),
                })
                .collect(),
            arcs: self
                .arcs
                .iter()
                .map(|arc| RawArc {
                    center: scale_pt(arc.center),
                    radius: arc.radius * factor,
                    start_angle: arc.start_angle,
                    end_angle: arc.end_angle,
                    layer: arc.layer.clone(),
                })
                .collect(),
            polylines: self.polylines.iter().map(&scale_poly).collect(),
            circles: self
                .circles
                .iter()
                .map(|circle| Circle {
                    center: scale_pt(circle.center),
                    radius: circle.radius * factor,
                    layer: circle.layer.clone(),
                })
                .collect(),
            texts: self
                .texts
                .iter()
                .map(|text| Text {
                    content: text.content.clone(),
                    position: scale_pt(text.position),
                    height: text.height * factor,
                    rotation: text.rotation,
                    layer: text.layer.clone(),
                })
                .collect(),
            regions: self
                .regions
                .iter()
                .map(|region| RawRegion {
                    boundaries: region.boundaries.iter().map(&scale_poly).collect(),
                    is_solid: region.is_solid,
                    layer: region.layer.clone(),
                })
                .collect(),
        }
    }

    /// True when the set holds no fragments of any kind
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.arcs.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.regions.is_empty()
    }
}
