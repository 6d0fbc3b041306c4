//! Role classification for assembled board geometry
//!
//! Assigns every reconstructed contour and isolated circle a board-design
//! role: outline, cutout, mounting hole, keepout, or solder-mask opening.
//! Routing uses an explicit layer-to-role mapping when one is supplied and
//! falls back to layer-name heuristics plus nesting tests otherwise.
//!
//! # Submodules
//! - `heuristics` - Layer-keyword matching and nesting-based classification

mod heuristics;

pub use heuristics::match_layer_role;

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assemble::{assemble_closed_paths, DEFAULT_TOLERANCE};
use crate::fragments::FragmentSet;
use crate::geometry::{polyline_to_path, ArcSeg, Circle, ClosedPath, Point, Text};

/// Board-design role a layer can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardRole {
    Outline,
    Cutout,
    Hole,
    Keepout,
    Soldermask,
    Annotation,
}

/// Explicit layer-name to role mapping, in caller-supplied order
pub type RoleMap = IndexMap<String, BoardRole>;

/// Parse a role map from a JSON object like `{"OUTER_PROFILES": "outline"}`
pub fn role_map_from_json(json: &str) -> anyhow::Result<RoleMap> {
    serde_json::from_str(json).context("invalid layer role map")
}

/// A filled region carried through classification uninterpreted
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub boundaries: Vec<ClosedPath>,
    pub is_solid: bool,
    pub layer: String,
}

/// Board geometry classified by role
///
/// Every input path and circle lands in exactly one list; nothing is
/// duplicated or lost. At most one path is the outline.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedEntities {
    pub outline: Option<ClosedPath>,
    pub cutouts: Vec<ClosedPath>,
    pub holes: Vec<Circle>,
    pub keepouts: Vec<ClosedPath>,
    pub soldermask_openings: Vec<ClosedPath>,
    pub texts: Vec<Text>,
    pub regions: Vec<Region>,
    pub unclassified_paths: Vec<ClosedPath>,
    pub unclassified_circles: Vec<Circle>,
    /// The factor the caller applied to convert source units to mm
    pub unit_scale: f64,
}

impl ClassifiedEntities {
    pub fn new(unit_scale: f64) -> Self {
        ClassifiedEntities {
            outline: None,
            cutouts: Vec::new(),
            holes: Vec::new(),
            keepouts: Vec::new(),
            soldermask_openings: Vec::new(),
            texts: Vec::new(),
            regions: Vec::new(),
            unclassified_paths: Vec::new(),
            unclassified_circles: Vec::new(),
            unit_scale,
        }
    }
}

/// Assemble a fragment set into closed paths and classify everything
///
/// Lines and arcs are assembled into loops per source layer; pre-closed
/// polylines convert directly. Open polylines are skipped. The fragments are
/// expected already scaled to mm; `unit_scale` is only recorded in the
/// result.
pub fn classify_fragments(
    fragments: &FragmentSet,
    role_map: Option<&RoleMap>,
    unit_scale: f64,
) -> ClassifiedEntities {
    // Group loose segments by layer; the assembler works one layer at a time
    let mut layer_lines: IndexMap<String, Vec<(Point, Point)>> = IndexMap::new();
    let mut layer_arcs: IndexMap<String, Vec<ArcSeg>> = IndexMap::new();

    for line in &fragments.lines {
        layer_lines
            .entry(line.layer.clone())
            .or_default()
            .push((line.start, line.end));
    }
    for arc in &fragments.arcs {
        layer_arcs
            .entry(arc.layer.clone())
            .or_default()
            .push(arc.to_segment());
    }

    let mut paths: Vec<ClosedPath> = Vec::new();
    let empty_lines: Vec<(Point, Point)> = Vec::new();
    let empty_arcs: Vec<ArcSeg> = Vec::new();

    let mut layers: Vec<&String> = layer_lines.keys().collect();
    for layer in layer_arcs.keys() {
        if !layer_lines.contains_key(layer) {
            layers.push(layer);
        }
    }

    for layer in layers {
        let lines = layer_lines.get(layer).unwrap_or(&empty_lines);
        let arcs = layer_arcs.get(layer).unwrap_or(&empty_arcs);
        paths.extend(assemble_closed_paths(lines, arcs, DEFAULT_TOLERANCE, layer));
    }

    for poly in &fragments.polylines {
        if poly.closed {
            paths.push(polyline_to_path(&poly.points, &poly.bulges, &poly.layer));
        }
    }

    let regions: Vec<Region> = fragments
        .regions
        .iter()
        .map(|raw| Region {
            boundaries: raw
                .boundaries
                .iter()
                .map(|b| polyline_to_path(&b.points, &b.bulges, &raw.layer))
                .collect(),
            is_solid: raw.is_solid,
            layer: raw.layer.clone(),
        })
        .collect();

    let circles = fragments.circles.clone();
    let texts = fragments.texts.clone();

    match role_map {
        Some(map) => classify_with_map(paths, circles, texts, regions, map, unit_scale),
        None => heuristics::classify_heuristic(paths, circles, texts, regions, unit_scale),
    }
}

/// Classify using an explicit layer-to-role mapping
///
/// Labels absent from the map fall through to unclassified; map entries that
/// match no real layer are simply inert.
fn classify_with_map(
    paths: Vec<ClosedPath>,
    circles: Vec<Circle>,
    texts: Vec<Text>,
    regions: Vec<Region>,
    map: &RoleMap,
    unit_scale: f64,
) -> ClassifiedEntities {
    let mut result = ClassifiedEntities::new(unit_scale);
    let mut outline_candidates: Vec<ClosedPath> = Vec::new();

    for path in paths {
        match map.get(&path.source_layer) {
            Some(BoardRole::Outline) => outline_candidates.push(path),
            Some(BoardRole::Cutout) => result.cutouts.push(path),
            Some(BoardRole::Keepout) => result.keepouts.push(path),
            Some(BoardRole::Soldermask) => result.soldermask_openings.push(path),
            // Hole and Annotation are not path roles
            Some(BoardRole::Hole) | Some(BoardRole::Annotation) | None => {
                result.unclassified_paths.push(path)
            }
        }
    }

    let (outline, demoted) = pick_outline(outline_candidates);
    result.outline = outline;
    result.unclassified_paths.extend(demoted);

    for circle in circles {
        match map.get(&circle.layer) {
            Some(BoardRole::Hole) => result.holes.push(circle),
            _ => result.unclassified_circles.push(circle),
        }
    }

    result.texts = texts;
    result.regions = regions;
    result
}

/// Choose the outline among candidates: greatest absolute area wins
///
/// Returns the winner and the demoted remainder. Only one outline may exist.
pub(crate) fn pick_outline(mut candidates: Vec<ClosedPath>) -> (Option<ClosedPath>, Vec<ClosedPath>) {
    if candidates.is_empty() {
        return (None, candidates);
    }

    let mut best_idx = 0;
    let mut best_area = f64::MIN;
    for (i, path) in candidates.iter().enumerate() {
        let area = path.signed_area().abs();
        if area > best_area {
            best_area = area;
            best_idx = i;
        }
    }

    let winner = candidates.remove(best_idx);
    (Some(winner), candidates)
}
