//! Contour assembly from disconnected segments
//!
//! Mechanical CAD exports often deliver a board outline as an unordered bag
//! of LINE and ARC fragments that merely share endpoints. This module indexes
//! those endpoints on a tolerance grid and walks the index to recover maximal
//! closed loops. Fragments that never close into a loop are dropped.

use std::collections::HashMap;

use crate::geometry::{ArcSeg, ClosedPath, LineSeg, PathSegment, Point};

/// Default endpoint matching tolerance in mm
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Grid cell key for tolerance-based endpoint matching
type GridKey = (i64, i64);

/// Adjacency index: grid cell -> (segment index, touches at its start?)
type Adjacency = HashMap<GridKey, Vec<(usize, bool)>>;

/// Quantize a point to its grid cell
///
/// Ties round to the even cell, so an endpoint exactly half a tolerance away
/// still lands with its neighbor.
fn point_key(p: Point, grid_inv: f64) -> GridKey {
    (
        (p.x * grid_inv).round_ties_even() as i64,
        (p.y * grid_inv).round_ties_even() as i64,
    )
}

/// Assemble disconnected line/arc fragments into closed paths
///
/// Two endpoints are considered coincident when they quantize to the same
/// grid cell at the given tolerance. Every returned path has at least two
/// segments; fragments that dead-end stay available for other walks and are
/// silently excluded if no walk ever closes over them.
pub fn assemble_closed_paths(
    lines: &[(Point, Point)],
    arcs: &[ArcSeg],
    tolerance: f64,
    source_layer: &str,
) -> Vec<ClosedPath> {
    let grid_inv = (1.0 / tolerance).round();

    // Arena of segments; the adjacency index holds plain indices into it
    let mut segments: Vec<PathSegment> = Vec::with_capacity(lines.len() + arcs.len());
    for &(start, end) in lines {
        segments.push(PathSegment::Line(LineSeg { start, end }));
    }
    for arc in arcs {
        segments.push(PathSegment::Arc(*arc));
    }

    if segments.is_empty() {
        return vec![];
    }

    let mut adjacency: Adjacency = HashMap::new();
    for (i, seg) in segments.iter().enumerate() {
        adjacency
            .entry(point_key(seg.start(), grid_inv))
            .or_default()
            .push((i, true));
        adjacency
            .entry(point_key(seg.end(), grid_inv))
            .or_default()
            .push((i, false));
    }

    let mut used = vec![false; segments.len()];
    let mut paths = Vec::new();

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        if let Some(loop_segments) = walk_loop(&segments, &adjacency, &mut used, start_idx, grid_inv)
        {
            paths.push(ClosedPath {
                segments: loop_segments,
                source_layer: source_layer.to_string(),
            });
        }
    }

    paths
}

/// Walk from a starting segment, chaining head-to-tail until the loop closes
///
/// Returns the oriented segments of the loop, or None. On a dead end every
/// segment consumed by this attempt is released again so a walk from another
/// starting segment can still claim it. The walk is bounded by the total
/// segment count, which guarantees termination even when more than two
/// segments meet at one point (the first unused match is taken).
fn walk_loop(
    segments: &[PathSegment],
    adjacency: &Adjacency,
    used: &mut [bool],
    start_idx: usize,
    grid_inv: f64,
) -> Option<Vec<PathSegment>> {
    let seed = segments[start_idx];
    let loop_start_key = point_key(seed.start(), grid_inv);

    // (arena index, segment oriented in traversal direction)
    let mut chain: Vec<(usize, PathSegment)> = vec![(start_idx, seed)];
    used[start_idx] = true;
    let mut current_key = point_key(seed.end(), grid_inv);

    let max_steps = segments.len();
    for _ in 0..max_steps {
        if current_key == loop_start_key && chain.len() > 1 {
            return Some(chain.into_iter().map(|(_, seg)| seg).collect());
        }

        let Some((next_idx, entering_at_start)) = find_next(adjacency, used, current_key) else {
            // Dead end: release this attempt's segments
            for &(idx, _) in &chain {
                used[idx] = false;
            }
            return None;
        };

        used[next_idx] = true;
        let seg = if entering_at_start {
            segments[next_idx]
        } else {
            // Entered at the far end: flip so the chain stays head-to-tail
            segments[next_idx].reversed()
        };
        current_key = point_key(seg.end(), grid_inv);
        chain.push((next_idx, seg));
    }

    // Step bound exhausted on a malformed input
    None
}

/// First unused segment touching the given grid cell
fn find_next(adjacency: &Adjacency, used: &[bool], key: GridKey) -> Option<(usize, bool)> {
    adjacency
        .get(&key)?
        .iter()
        .find(|&&(idx, _)| !used[idx])
        .copied()
}
