//! Fragment inventory
//!
//! Summarizes a fragment set before conversion: how many fragments sit on
//! which layer, how many of each kind there are, and the raw bounding box.
//! The box's larger axis feeds the unit resolver's magnitude heuristic.

use indexmap::IndexMap;
use serde::Serialize;

use crate::fragments::FragmentSet;
use crate::geometry::Point;

/// Summary of a fragment set, serializable for tooling output
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    /// Fragment count per source layer, in first-seen order
    pub layers: IndexMap<String, usize>,
    /// Fragment count per kind ("line", "arc", ...)
    pub kinds: IndexMap<String, usize>,
    /// Raw bounding box over all geometric fragments, None without geometry
    pub bounding_box: Option<(Point, Point)>,
}

impl Inventory {
    /// Largest bounding-box axis, 0 when there is no geometry
    pub fn extent(&self) -> f64 {
        match self.bounding_box {
            Some((min, max)) => (max.x - min.x).max(max.y - min.y),
            None => 0.0,
        }
    }
}

/// Count fragments per layer and kind and compute the raw bounding box
pub fn take_inventory(fragments: &FragmentSet) -> Inventory {
    let mut layers: IndexMap<String, usize> = IndexMap::new();
    let mut kinds: IndexMap<String, usize> = IndexMap::new();
    let mut bounds = BoundsAcc::new();

    let mut count = |layer: &str, kind: &str| {
        *layers.entry(layer.to_string()).or_insert(0) += 1;
        *kinds.entry(kind.to_string()).or_insert(0) += 1;
    };

    for line in &fragments.lines {
        count(&line.layer, "line");
        bounds.include(line.start);
        bounds.include(line.end);
    }
    for arc in &fragments.arcs {
        count(&arc.layer, "arc");
        // Conservative: the full circle around the arc's center
        bounds.include_disc(arc.center, arc.radius);
    }
    for poly in &fragments.polylines {
        count(&poly.layer, "polyline");
        for &p in &poly.points {
            bounds.include(p);
        }
    }
    for circle in &fragments.circles {
        count(&circle.layer, "circle");
        bounds.include_disc(circle.center, circle.radius);
    }
    for text in &fragments.texts {
        count(&text.layer, "text");
    }
    for region in &fragments.regions {
        count(&region.layer, "region");
        for boundary in &region.boundaries {
            for &p in &boundary.points {
                bounds.include(p);
            }
        }
    }

    Inventory {
        layers,
        kinds,
        bounding_box: bounds.finish(),
    }
}

/// Running min/max accumulator
struct BoundsAcc {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    any: bool,
}

impl BoundsAcc {
    fn new() -> Self {
        BoundsAcc {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
            any: false,
        }
    }

    fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
        self.any = true;
    }

    fn include_disc(&mut self, center: Point, radius: f64) {
        let r = radius.abs();
        self.include(Point::new(center.x - r, center.y - r));
        self.include(Point::new(center.x + r, center.y + r));
    }

    fn finish(self) -> Option<(Point, Point)> {
        if self.any {
            Some((
                Point::new(self.min_x, self.min_y),
                Point::new(self.max_x, self.max_y),
            ))
        } else {
            None
        }
    }
}
