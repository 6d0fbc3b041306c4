//! Board geometry reconstruction from mechanical CAD exports
//!
//! Mechanical CAD pipelines export a board drawing as unordered, disconnected
//! curve fragments. This crate reassembles those fragments into coherent
//! closed contours and classifies them (together with isolated circles) into
//! the semantic roles board-design tooling needs: outline, cutouts, mounting
//! holes, keepouts, and solder-mask openings.
//!
//! The processing chain:
//! 1. The upstream parser fills a [`FragmentSet`] with typed records.
//! 2. [`take_inventory`] summarizes it; the inventory extent feeds
//!    [`resolve_unit_scale`], and the caller scales the set to mm.
//! 3. [`classify_fragments`] assembles closed paths per layer and routes
//!    every path and circle to its role, either through an explicit
//!    [`RoleMap`] or through layer-name heuristics plus nesting tests.
//!
//! The core is purely computational: no I/O, no shared state, and every
//! malformed-geometry case degrades to a defined value instead of an error.

pub mod assemble;
pub mod classify;
pub mod fragments;
pub mod geometry;
pub mod inventory;
pub mod units;

pub use assemble::{assemble_closed_paths, DEFAULT_TOLERANCE};
pub use classify::{
    classify_fragments, match_layer_role, role_map_from_json, BoardRole, ClassifiedEntities,
    Region, RoleMap,
};
pub use fragments::{FragmentSet, RawArc, RawLine, RawPolyline, RawRegion};
pub use geometry::{
    bulge_to_arc, polyline_to_path, ArcSeg, Circle, ClosedPath, LineSeg, PathSegment, Point, Text,
};
pub use inventory::{take_inventory, Inventory};
pub use units::{resolve_unit_scale, Unit};
