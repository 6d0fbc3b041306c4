// Tests for role classification, both explicit-map and heuristic modes
use dxf_board::{
    classify_fragments, match_layer_role, role_map_from_json, BoardRole, Circle, FragmentSet,
    Point, RawLine, Text,
};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Push the four edges of a rectangle as loose line fragments
fn push_rect(set: &mut FragmentSet, x0: f64, y0: f64, x1: f64, y1: f64, layer: &str) {
    let corners = [
        (pt(x0, y0), pt(x1, y0)),
        (pt(x1, y0), pt(x1, y1)),
        (pt(x1, y1), pt(x0, y1)),
        (pt(x0, y1), pt(x0, y0)),
    ];
    for (start, end) in corners {
        set.lines.push(RawLine {
            start,
            end,
            layer: layer.to_string(),
        });
    }
}

#[test]
fn test_outline_with_nested_cutouts() {
    // A big rectangle plus four small loops fully inside it, everything on a
    // neutral layer: the largest contour is promoted to outline and the
    // nested loops become cutouts
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "geom");
    push_rect(&mut set, 10.0, 10.0, 20.0, 20.0, "geom");
    push_rect(&mut set, 30.0, 10.0, 40.0, 20.0, "geom");
    push_rect(&mut set, 50.0, 10.0, 60.0, 20.0, "geom");
    push_rect(&mut set, 70.0, 10.0, 80.0, 20.0, "geom");

    let result = classify_fragments(&set, None, 1.0);

    assert!(result.outline.is_some(), "largest contour becomes the outline");
    assert_eq!(result.outline.as_ref().unwrap().segments.len(), 4);
    assert_eq!(result.cutouts.len(), 4, "nested loops are cutouts");
    assert_eq!(result.unclassified_paths.len(), 0);
}

#[test]
fn test_outline_keyword_wins_over_promotion() {
    // The outline layer name matches even though the contour is smaller
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 50.0, 50.0, "Board_Outline");
    push_rect(&mut set, 100.0, 100.0, 400.0, 400.0, "geom");

    let result = classify_fragments(&set, None, 1.0);

    let outline = result.outline.expect("keyword-matched outline");
    assert_eq!(outline.source_layer, "Board_Outline");
    // The big neutral contour is outside the outline, so it stays unnamed
    assert_eq!(result.unclassified_paths.len(), 1);
}

#[test]
fn test_heuristic_circles_inside_and_outside() {
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "profile");
    set.circles.push(Circle {
        center: pt(50.0, 40.0),
        radius: 1.6,
        layer: "geom".to_string(),
    });
    set.circles.push(Circle {
        center: pt(200.0, 40.0),
        radius: 1.6,
        layer: "geom".to_string(),
    });

    let result = classify_fragments(&set, None, 1.0);

    assert_eq!(result.holes.len(), 1, "circle inside the outline is a hole");
    assert_eq!(
        result.unclassified_circles.len(),
        1,
        "circle outside the outline stays unclassified"
    );
}

#[test]
fn test_hole_keyword_beats_nesting() {
    // A circle on a drill layer is a hole even outside the outline
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "outline");
    set.circles.push(Circle {
        center: pt(500.0, 500.0),
        radius: 1.0,
        layer: "DRILL_TOOL".to_string(),
    });

    let result = classify_fragments(&set, None, 1.0);
    assert_eq!(result.holes.len(), 1);
    assert!(result.unclassified_circles.is_empty());
}

#[test]
fn test_keepout_and_soldermask_keywords() {
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "outline");
    push_rect(&mut set, 10.0, 10.0, 20.0, 20.0, "KEEPOUT_TOP");
    push_rect(&mut set, 30.0, 10.0, 40.0, 20.0, "SolderMask");

    let result = classify_fragments(&set, None, 1.0);
    assert_eq!(result.keepouts.len(), 1);
    assert_eq!(result.soldermask_openings.len(), 1);
    assert!(result.cutouts.is_empty());
}

#[test]
fn test_explicit_map_routing() {
    let map = role_map_from_json(
        r#"{"EDGE_CUTS": "outline", "INTERIOR": "hole", "MILLING": "cutout"}"#,
    )
    .expect("valid role map");

    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "EDGE_CUTS");
    push_rect(&mut set, 10.0, 10.0, 20.0, 20.0, "MILLING");
    set.circles.push(Circle {
        center: pt(50.0, 40.0),
        radius: 1.1,
        layer: "INTERIOR".to_string(),
    });
    set.circles.push(Circle {
        center: pt(55.0, 40.0),
        radius: 1.1,
        layer: "SOMEWHERE_ELSE".to_string(),
    });

    let result = classify_fragments(&set, Some(&map), 1.0);

    assert!(result.outline.is_some());
    assert_eq!(result.cutouts.len(), 1);
    assert_eq!(result.holes.len(), 1);
    assert_eq!(
        result.unclassified_circles.len(),
        1,
        "unmapped layers fall through to unclassified"
    );
}

#[test]
fn test_explicit_map_no_nesting_fallback() {
    // With an explicit map there is no geometry-based fallback: an unmapped
    // path stays unclassified even when it nests inside the outline
    let map = role_map_from_json(r#"{"EDGE_CUTS": "outline"}"#).unwrap();

    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "EDGE_CUTS");
    push_rect(&mut set, 10.0, 10.0, 20.0, 20.0, "MYSTERY");

    let result = classify_fragments(&set, Some(&map), 1.0);
    assert_eq!(result.cutouts.len(), 0);
    assert_eq!(result.unclassified_paths.len(), 1);
}

#[test]
fn test_largest_outline_candidate_wins() {
    let map = role_map_from_json(r#"{"A": "outline", "B": "outline"}"#).unwrap();

    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 10.0, 10.0, "A");
    push_rect(&mut set, 0.0, 0.0, 200.0, 200.0, "B");

    let result = classify_fragments(&set, Some(&map), 1.0);

    let outline = result.outline.expect("an outline is chosen");
    assert_eq!(outline.source_layer, "B", "greater |area| wins");
    assert_eq!(
        result.unclassified_paths.len(),
        1,
        "the losing candidate is demoted, not dropped"
    );
    assert_eq!(result.unclassified_paths[0].source_layer, "A");
}

#[test]
fn test_heuristic_outline_demotion() {
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 10.0, 10.0, "outline_aux");
    push_rect(&mut set, 0.0, 0.0, 200.0, 200.0, "outline_main");

    let result = classify_fragments(&set, None, 1.0);
    assert_eq!(
        result.outline.as_ref().unwrap().source_layer,
        "outline_main"
    );
    assert_eq!(result.unclassified_paths.len(), 1);
}

#[test]
fn test_no_outline_leaves_everything_unclassified() {
    // Only a circle on a neutral layer: nothing to nest against
    let mut set = FragmentSet::default();
    set.circles.push(Circle {
        center: pt(0.0, 0.0),
        radius: 2.0,
        layer: "geom".to_string(),
    });

    let result = classify_fragments(&set, None, 1.0);
    assert!(result.outline.is_none());
    assert_eq!(result.unclassified_circles.len(), 1);
}

#[test]
fn test_empty_input_is_not_an_error() {
    let result = classify_fragments(&FragmentSet::default(), None, 1.0);
    assert!(result.outline.is_none());
    assert!(result.cutouts.is_empty());
    assert!(result.holes.is_empty());
    assert!(result.unclassified_paths.is_empty());
}

#[test]
fn test_texts_pass_through() {
    let mut set = FragmentSet::default();
    push_rect(&mut set, 0.0, 0.0, 100.0, 80.0, "outline");
    set.texts.push(Text {
        content: "REV A".to_string(),
        position: pt(5.0, 5.0),
        height: 1.5,
        rotation: 0.0,
        layer: "notes".to_string(),
    });

    let result = classify_fragments(&set, None, 1.0);
    assert_eq!(result.texts.len(), 1);
    assert_eq!(result.texts[0].content, "REV A");
}

#[test]
fn test_layer_keyword_matching() {
    assert_eq!(match_layer_role("Board_Outline"), Some(BoardRole::Outline));
    assert_eq!(match_layer_role("EDGE.CUTS"), Some(BoardRole::Outline));
    assert_eq!(match_layer_role("ROUTE_SLOTS"), Some(BoardRole::Cutout));
    assert_eq!(match_layer_role("MountingHoles"), Some(BoardRole::Hole));
    assert_eq!(match_layer_role("keep-out"), Some(BoardRole::Keepout));
    assert_eq!(match_layer_role("TOP_MASK"), Some(BoardRole::Soldermask));
    assert_eq!(match_layer_role("Dimensions"), Some(BoardRole::Annotation));
    assert_eq!(match_layer_role("L1"), None);
}

#[test]
fn test_role_map_rejects_unknown_role() {
    let err = role_map_from_json(r#"{"EDGE": "fancy"}"#);
    assert!(err.is_err(), "unknown role names must be rejected");
}
