//! Geometry module for board import
//!
//! Geometric primitives for reconstructed board contours, conversion of
//! bulge-encoded curves, and the metrics (bounding box, signed area,
//! containment) that classification relies on.
//!
//! # Submodules
//! - `types` - Core geometric primitives (Point, PathSegment, ClosedPath, ...)
//! - `bulge` - Vertex+bulge curve conversion into explicit segments
//! - `metrics` - Bounding box, signed area, and containment for closed paths

mod bulge;
mod metrics;
mod types;

// Re-export all public types
pub use types::{ArcSeg, Circle, ClosedPath, LineSeg, PathSegment, Point, Text};

pub use bulge::{bulge_to_arc, polyline_to_path};
