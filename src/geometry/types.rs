//! Core geometry types for board import
//!
//! This module contains the fundamental geometric primitives used throughout
//! the crate: points, line/arc path segments, closed paths, circles, and text.

use serde::Serialize;

/// A 2D point in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A directed straight segment
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LineSeg {
    pub start: Point,
    pub end: Point,
}

/// A circular arc segment
///
/// Angles are in degrees; the sweep runs counter-clockwise from `start_angle`
/// to `end_angle`. The endpoints are stored explicitly so that chain assembly
/// never has to recompute them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArcSeg {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub start_point: Point,
    pub end_point: Point,
}

impl ArcSeg {
    /// Build an arc from center/radius/angles, deriving the endpoints
    pub fn from_center_angles(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        let sp = Point::new(
            center.x + radius * start_angle.to_radians().cos(),
            center.y + radius * start_angle.to_radians().sin(),
        );
        let ep = Point::new(
            center.x + radius * end_angle.to_radians().cos(),
            center.y + radius * end_angle.to_radians().sin(),
        );
        ArcSeg {
            center,
            radius,
            start_angle,
            end_angle,
            start_point: sp,
            end_point: ep,
        }
    }
}

/// A segment of a path: either straight or curved
///
/// The two interpretations are mutually exclusive; every consumer matches
/// exhaustively on this enum.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum PathSegment {
    Line(LineSeg),
    Arc(ArcSeg),
}

impl PathSegment {
    /// Start point of the segment in traversal direction
    pub fn start(&self) -> Point {
        match self {
            PathSegment::Line(line) => line.start,
            PathSegment::Arc(arc) => arc.start_point,
        }
    }

    /// End point of the segment in traversal direction
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Line(line) => line.end,
            PathSegment::Arc(arc) => arc.end_point,
        }
    }

    /// The same segment traversed in the opposite direction
    pub fn reversed(&self) -> PathSegment {
        match self {
            PathSegment::Line(line) => PathSegment::Line(LineSeg {
                start: line.end,
                end: line.start,
            }),
            PathSegment::Arc(arc) => PathSegment::Arc(ArcSeg {
                center: arc.center,
                radius: arc.radius,
                start_angle: arc.end_angle,
                end_angle: arc.start_angle,
                start_point: arc.end_point,
                end_point: arc.start_point,
            }),
        }
    }
}

/// A closed path assembled from line/arc segments
///
/// Each segment's end coincides (within the assembly tolerance) with the next
/// segment's start, and the last segment closes back onto the first.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedPath {
    pub segments: Vec<PathSegment>,
    /// Originating layer name, the primary classification signal
    pub source_layer: String,
}

/// A full circle, always treated as a standalone feature
#[derive(Debug, Clone, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub layer: String,
}

/// A text annotation, passed through classification uninterpreted
#[derive(Debug, Clone, Serialize)]
pub struct Text {
    pub content: String,
    pub position: Point,
    pub height: f64,
    pub rotation: f64, // degrees
    pub layer: String,
}
