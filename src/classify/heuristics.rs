//! Layer-name heuristics and nesting-based classification
//!
//! When no explicit role mapping is supplied, layer names are matched against
//! keyword lists, the board outline is taken to be the largest contour, and
//! everything still unresolved is classified by whether it nests inside that
//! outline.

use crate::geometry::{Circle, ClosedPath, Point, Text};

use super::{pick_outline, BoardRole, ClassifiedEntities, Region};

/// Layer-name substrings, checked lower-cased, that imply a role
const OUTLINE_KEYWORDS: &[&str] = &["outline", "board", "boundary", "profile", "edge", "border"];
const CUTOUT_KEYWORDS: &[&str] = &["cutout", "route", "rout", "slot"];
const HOLE_KEYWORDS: &[&str] = &["hole", "drill", "mount"];
const KEEPOUT_KEYWORDS: &[&str] = &["keepout", "keep-out", "keep_out", "restrict"];
const SOLDERMASK_KEYWORDS: &[&str] = &["mask", "soldermask", "solder"];
const ANNOTATION_KEYWORDS: &[&str] = &["dim", "dimension", "note", "text", "anno"];

/// Guess a role from a layer name, or None when no keyword matches
pub fn match_layer_role(layer: &str) -> Option<BoardRole> {
    let lower = layer.to_lowercase();
    let hits = |keywords: &[&str]| keywords.iter().any(|&kw| lower.contains(kw));

    if hits(OUTLINE_KEYWORDS) {
        Some(BoardRole::Outline)
    } else if hits(CUTOUT_KEYWORDS) {
        Some(BoardRole::Cutout)
    } else if hits(HOLE_KEYWORDS) {
        Some(BoardRole::Hole)
    } else if hits(KEEPOUT_KEYWORDS) {
        Some(BoardRole::Keepout)
    } else if hits(SOLDERMASK_KEYWORDS) {
        Some(BoardRole::Soldermask)
    } else if hits(ANNOTATION_KEYWORDS) {
        Some(BoardRole::Annotation)
    } else {
        None
    }
}

/// Classify by layer-name keywords, then by nesting against the outline
pub(crate) fn classify_heuristic(
    paths: Vec<ClosedPath>,
    circles: Vec<Circle>,
    texts: Vec<Text>,
    regions: Vec<Region>,
    unit_scale: f64,
) -> ClassifiedEntities {
    let mut result = ClassifiedEntities::new(unit_scale);

    let mut outline_candidates: Vec<ClosedPath> = Vec::new();
    let mut unresolved_paths: Vec<ClosedPath> = Vec::new();
    let mut unresolved_circles: Vec<Circle> = Vec::new();

    for path in paths {
        match match_layer_role(&path.source_layer) {
            Some(BoardRole::Outline) => outline_candidates.push(path),
            Some(BoardRole::Cutout) => result.cutouts.push(path),
            Some(BoardRole::Keepout) => result.keepouts.push(path),
            Some(BoardRole::Soldermask) => result.soldermask_openings.push(path),
            // A "hole" or annotation keyword says nothing about a contour
            _ => unresolved_paths.push(path),
        }
    }

    for circle in circles {
        match match_layer_role(&circle.layer) {
            Some(BoardRole::Hole) => result.holes.push(circle),
            _ => unresolved_circles.push(circle),
        }
    }

    if !outline_candidates.is_empty() {
        let (outline, demoted) = pick_outline(outline_candidates);
        result.outline = outline;
        result.unclassified_paths.extend(demoted);
    } else if !unresolved_paths.is_empty() {
        // A board always has exactly one largest contour: promote it to
        // outline even without a matching layer name
        let mut largest_idx = 0;
        let mut largest_area = f64::MIN;
        for (i, path) in unresolved_paths.iter().enumerate() {
            let area = path.signed_area().abs();
            if area > largest_area {
                largest_area = area;
                largest_idx = i;
            }
        }
        result.outline = Some(unresolved_paths.remove(largest_idx));
    }

    if let Some(outline) = result.outline.clone() {
        // Whatever nests inside the outline is material removed from the
        // board; whatever lies outside we cannot name
        for path in unresolved_paths {
            let (min, max) = path.bounding_box();
            let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
            if outline.contains(center) {
                result.cutouts.push(path);
            } else {
                result.unclassified_paths.push(path);
            }
        }
        for circle in unresolved_circles {
            if outline.contains(circle.center) {
                result.holes.push(circle);
            } else {
                result.unclassified_circles.push(circle);
            }
        }
    } else {
        result.unclassified_paths.extend(unresolved_paths);
        result.unclassified_circles.extend(unresolved_circles);
    }

    result.texts = texts;
    result.regions = regions;
    result
}
