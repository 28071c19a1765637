use crate::test_utils::{build, entry};
use crate::{
    parse, BorderSlot, LayoutError, LayoutWarning, NodeKind, NodeVariant, Unit, UnitKind,
};
use serde_json::json;

fn child_names(tree: &crate::LayoutTree, id: crate::NodeId) -> Vec<String> {
    tree.node(id)
        .children()
        .iter()
        .map(|&c| tree.node(c).name().to_string())
        .collect()
}

#[test]
fn test_bare_name_is_an_element() {
    let tree = build(json!("sidebar"));
    let root = tree.node(tree.root());
    assert_eq!(root.kind(), NodeKind::Element);
    assert_eq!(root.name(), "sidebar");
    assert!(tree.warnings().is_empty());
}

#[test]
fn test_dispatch_by_type() {
    for (kind, expected) in [
        ("element", NodeKind::Element),
        ("border", NodeKind::Border),
        ("layer", NodeKind::Layer),
    ] {
        let tree = build(json!({ "type": kind }));
        assert_eq!(tree.node(tree.root()).kind(), expected);
    }
    let tree = build(json!({ "type": "grid", "rows": 2 }));
    assert_eq!(tree.node(tree.root()).kind(), NodeKind::Grid);
}

#[test]
fn test_common_fields() {
    let tree = build(json!({
        "type": "layer",
        "name": "root",
        "preferredWidth": "50%",
        "preferredHeight": 120,
        "insets": ["1", "2px", "3", "4%"],
        "gap": ["5", "6%"]
    }));
    let node = tree.node(tree.root());
    assert_eq!(node.name(), "root");
    assert_eq!(node.preferred_width(), Unit::percent(50.0));
    assert_eq!(node.preferred_height(), Unit::px(120.0));
    assert_eq!(node.insets().left, Unit::px(1.0));
    assert_eq!(node.insets().top, Unit::px(2.0));
    assert_eq!(node.insets().right, Unit::px(3.0));
    assert_eq!(node.insets().bottom.kind(), UnitKind::Percent);
    assert_eq!(node.gap().horizontal, Unit::px(5.0));
    assert_eq!(node.gap().vertical, Unit::percent(6.0));
}

#[test]
fn test_range_expansion_in_order() {
    let tree = build(json!({ "type": "layer", "elements": ["pre", "elem[1-4]", "post"] }));
    assert_eq!(
        child_names(&tree, tree.root()),
        vec!["pre", "elem1", "elem2", "elem3", "elem4", "post"]
    );
    for &child in tree.node(tree.root()).children() {
        assert_eq!(tree.node(child).parent(), Some(tree.root()));
        assert_eq!(tree.node(child).kind(), NodeKind::Element);
    }
    assert!(tree.warnings().is_empty());
}

#[test]
fn test_descending_range_expands_to_nothing() {
    let tree = build(json!({ "type": "layer", "elements": ["e[3-1]"] }));
    assert!(tree.node(tree.root()).children().is_empty());
    assert!(tree.warnings().is_empty());
}

#[test]
fn test_malformed_range_falls_back_to_literal() {
    let tree = build(json!({ "type": "layer", "elements": ["elem[1]", "cell[a-b]"] }));
    assert_eq!(child_names(&tree, tree.root()), vec!["elem[1]", "cell[a-b]"]);
    assert_eq!(
        tree.warnings(),
        &[
            LayoutWarning::MalformedRange {
                pattern: "elem[1]".to_string()
            },
            LayoutWarning::MalformedRange {
                pattern: "cell[a-b]".to_string()
            },
        ]
    );
}

#[test]
fn test_unknown_child_type_is_dropped() {
    let tree = build(json!({
        "type": "layer",
        "elements": [{ "type": "bogus", "name": "x" }, "a"]
    }));
    assert_eq!(child_names(&tree, tree.root()), vec!["a"]);
    assert_eq!(
        tree.warnings(),
        &[LayoutWarning::UnknownNodeType {
            kind: "bogus".to_string()
        }]
    );
}

#[test]
fn test_unknown_root_type_is_an_error() {
    let result = parse(&entry(json!({ "type": "bogus" })));
    assert_eq!(
        result.unwrap_err(),
        LayoutError::UnknownRootType("bogus".to_string())
    );
}

#[test]
fn test_wrong_arity_keeps_present_values() {
    let tree = build(json!({
        "type": "element",
        "name": "e",
        "insets": ["10", "20"],
        "gap": ["7"]
    }));
    let node = tree.node(tree.root());
    assert_eq!(node.insets().left, Unit::px(10.0));
    assert_eq!(node.insets().top, Unit::px(20.0));
    assert_eq!(node.insets().right, Unit::new());
    assert_eq!(node.insets().bottom, Unit::new());
    assert_eq!(node.gap().horizontal, Unit::px(7.0));
    assert_eq!(node.gap().vertical, Unit::new());
    assert_eq!(
        tree.warnings(),
        &[
            LayoutWarning::InsetsArity {
                name: "e".to_string(),
                found: 2
            },
            LayoutWarning::GapArity {
                name: "e".to_string(),
                found: 1
            },
        ]
    );
}

#[test]
fn test_border_slots_alias_children() {
    let tree = build(json!({
        "type": "border",
        "elements": ["extra"],
        "top": "t",
        "left": { "type": "element", "name": "l" },
        "center": { "type": "layer", "name": "c" }
    }));
    let root = tree.root();
    // Elements first, then slots in parse order: left, right, bottom, top, center.
    assert_eq!(child_names(&tree, root), vec!["extra", "l", "t", "c"]);

    let NodeVariant::Border(border) = *tree.node(root).variant() else {
        panic!("root should be a border");
    };
    assert_eq!(border.slot(BorderSlot::Top), tree.find("t"));
    assert_eq!(border.slot(BorderSlot::Left), tree.find("l"));
    assert_eq!(border.slot(BorderSlot::Center), tree.find("c"));
    assert_eq!(border.slot(BorderSlot::Right), None);
    assert_eq!(border.slot(BorderSlot::Bottom), None);
    for &child in tree.node(root).children() {
        assert_eq!(tree.node(child).parent(), Some(root));
    }
}

#[test]
fn test_grid_axis_selection() {
    let tree = build(json!({ "type": "grid", "rows": 3 }));
    let NodeVariant::Grid(grid) = *tree.node(tree.root()).variant() else {
        panic!("root should be a grid");
    };
    assert!(grid.along_rows());
    assert_eq!(grid.fixed_axis_count().get(), 3);

    let tree = build(json!({ "type": "grid", "columns": 4 }));
    let NodeVariant::Grid(grid) = *tree.node(tree.root()).variant() else {
        panic!("root should be a grid");
    };
    assert!(!grid.along_rows());
    assert_eq!(grid.fixed_axis_count().get(), 4);
}

#[test]
fn test_grid_with_both_axes_uses_columns() {
    let tree = build(json!({ "type": "grid", "name": "g", "rows": 2, "columns": 5 }));
    let NodeVariant::Grid(grid) = *tree.node(tree.root()).variant() else {
        panic!("root should be a grid");
    };
    assert!(!grid.along_rows());
    assert_eq!(grid.fixed_axis_count().get(), 5);
    assert_eq!(
        tree.warnings(),
        &[LayoutWarning::GridAxisConflict {
            name: "g".to_string()
        }]
    );
}

#[test]
fn test_grid_without_axis_aborts_parse() {
    let result = parse(&entry(json!({ "type": "grid" })));
    assert!(matches!(result, Err(LayoutError::GridAxisMissing { .. })));

    let result = parse(&entry(json!({ "type": "grid", "name": "g", "columns": 0 })));
    assert_eq!(
        result.unwrap_err(),
        LayoutError::GridAxisMissing {
            name: "g".to_string()
        }
    );
}

#[test]
fn test_nested_grid_failure_aborts_whole_parse() {
    let result = parse(&entry(json!({
        "type": "border",
        "top": "header",
        "center": { "type": "layer", "elements": [{ "type": "grid", "name": "inner" }] }
    })));
    assert_eq!(
        result.unwrap_err(),
        LayoutError::GridAxisMissing {
            name: "inner".to_string()
        }
    );
}

#[test]
fn test_add_element_to_border_slot() {
    let mut tree = build(json!({ "type": "border", "center": "c" }));
    let root = tree.root();

    let added = tree.add_element(root, "header", Some("top")).unwrap();
    let header = added.expect("a known slot keeps the element");
    assert_eq!(tree.node(header).parent(), Some(root));

    let NodeVariant::Border(border) = *tree.node(root).variant() else {
        panic!("root should be a border");
    };
    assert_eq!(border.slot(BorderSlot::Top), Some(header));
    assert_eq!(child_names(&tree, root), vec!["c", "header"]);
}

#[test]
fn test_add_element_with_unknown_constraint_is_dropped() {
    let mut tree = build(json!({ "type": "border", "center": "c" }));
    let root = tree.root();

    assert_eq!(tree.add_element(root, "x", Some("middle")).unwrap(), None);
    assert_eq!(tree.add_element(root, "y", None).unwrap(), None);
    assert_eq!(child_names(&tree, root), vec!["c"]);
    assert_eq!(tree.find("x"), None);
    assert_eq!(
        tree.warnings(),
        &[
            LayoutWarning::UnknownBorderConstraint {
                constraint: "middle".to_string()
            },
            LayoutWarning::UnknownBorderConstraint {
                constraint: String::new()
            },
        ]
    );
}

#[test]
fn test_add_element_to_layer_ignores_constraint() {
    let mut tree = build(json!({ "type": "layer" }));
    let root = tree.root();
    let descriptor = crate::NodeDescriptor::new("grid")
        .with_name("g")
        .with_elements(["a", "b"]);
    let grid_descriptor = descriptor.clone().with_columns(2);

    let added = tree.add_element(root, grid_descriptor, Some("top")).unwrap();
    assert_eq!(added, tree.find("g"));
    assert_eq!(child_names(&tree, root), vec!["g"]);

    let failed = tree.add_element(root, descriptor, None);
    assert!(matches!(failed, Err(LayoutError::GridAxisMissing { .. })));
}

#[test]
fn test_add_element_to_missing_parent() {
    let mut tree = build(json!("only"));
    let bogus = crate::NodeId(99);
    assert_eq!(
        tree.add_element(bogus, "x", None).unwrap_err(),
        LayoutError::UnknownNode(99)
    );
}

#[test]
#[should_panic]
fn test_foreign_node_id_panics_on_direct_access() {
    let mut tree = build(json!("only"));
    tree.set_bounds(crate::NodeId(99), 0.0, 0.0, 1.0, 1.0);
}

#[test]
fn test_foreign_node_id_is_none_through_get() {
    let tree = build(json!("only"));
    assert!(tree.get(crate::NodeId(99)).is_none());
    assert!(tree.get(tree.root()).is_some());
}

#[test]
fn test_entry_without_type_is_dropped() {
    let tree = build(json!({ "type": "layer", "elements": ["a", { "name": "b" }] }));
    assert_eq!(child_names(&tree, tree.root()), vec!["a"]);
    assert_eq!(
        tree.warnings(),
        &[LayoutWarning::UnknownNodeType {
            kind: String::new()
        }]
    );
}

#[test]
fn test_non_object_entry_is_dropped() {
    let tree = build(json!({ "type": "layer", "elements": ["a", 5, null] }));
    assert_eq!(child_names(&tree, tree.root()), vec!["a"]);
    assert_eq!(
        tree.warnings(),
        &[
            LayoutWarning::UnknownNodeType {
                kind: "5".to_string()
            },
            LayoutWarning::UnknownNodeType {
                kind: "null".to_string()
            },
        ]
    );
}

#[test]
fn test_non_string_type_is_dropped() {
    let tree = build(json!({
        "type": "border",
        "top": { "type": 7, "name": "t" },
        "center": "c"
    }));
    assert_eq!(child_names(&tree, tree.root()), vec!["c"]);
    assert_eq!(
        tree.warnings(),
        &[LayoutWarning::UnknownNodeType {
            kind: "7".to_string()
        }]
    );
}

#[test]
fn test_elements_not_an_array() {
    let tree = build(json!({ "type": "layer", "name": "l", "elements": "a" }));
    assert!(tree.node(tree.root()).children().is_empty());
    assert_eq!(
        tree.warnings(),
        &[LayoutWarning::ElementsNotArray {
            name: "l".to_string()
        }]
    );
}

#[test]
fn test_root_without_type_is_an_error() {
    let result = parse(&entry(json!({ "name": "x" })));
    assert_eq!(result.unwrap_err(), LayoutError::UnknownRootType(String::new()));

    let result = parse(&entry(json!(42)));
    assert_eq!(result.unwrap_err(), LayoutError::UnknownRootType("42".to_string()));
}

#[test]
fn test_oversized_range_is_truncated() {
    let tree = build(json!({ "type": "layer", "elements": ["a[0-99999999999]"] }));
    let children = tree.node(tree.root()).children();
    assert_eq!(children.len(), crate::builder::MAX_RANGE_LEN as usize);
    assert_eq!(tree.node(children[0]).name(), "a0");
    assert_eq!(tree.node(*children.last().unwrap()).name(), "a9999");
    assert_eq!(
        tree.warnings(),
        &[LayoutWarning::RangeTooLarge {
            pattern: "a[0-99999999999]".to_string(),
            limit: crate::builder::MAX_RANGE_LEN,
        }]
    );
}

#[test]
fn test_range_at_the_limit_is_not_truncated() {
    let tree = build(json!({ "type": "layer", "elements": ["a[1-10000]"] }));
    assert_eq!(tree.node(tree.root()).children().len(), 10_000);
    assert!(tree.warnings().is_empty());
}
