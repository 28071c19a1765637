use crate::builder::parse;
use crate::descriptor::ElementEntry;
use crate::tree::LayoutTree;
use liquid_types::geometry::Rect;
use serde_json::Value;

/// Deserializes a `json!` descriptor the way hosts hand them in.
pub fn entry(value: Value) -> ElementEntry {
    serde_json::from_value(value).expect("descriptor JSON should deserialize")
}

pub fn build(value: Value) -> LayoutTree {
    parse(&entry(value)).expect("descriptor should parse")
}

/// Builds the tree and lays it out with the root at `(0, 0, w, h)`.
pub fn laid_out(value: Value, w: f32, h: f32) -> LayoutTree {
    let mut tree = build(value);
    tree.layout(0.0, 0.0, w, h);
    tree
}

pub fn bounds_of(tree: &LayoutTree, name: &str) -> Rect {
    let id = tree
        .find(name)
        .unwrap_or_else(|| panic!("no node named '{name}'"));
    tree.node(id).bounds().to_rect()
}

pub fn assert_rect(actual: Rect, x: f32, y: f32, w: f32, h: f32) {
    let expected = Rect::new(x, y, w, h);
    let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
    assert!(
        close(actual.x, x) && close(actual.y, y) && close(actual.w, w) && close(actual.h, h),
        "expected {expected:?}, got {actual:?}"
    );
}
