use liquid::{BorderSlot, NodeDescriptor};
use serde_json::{Value, json};

/// An application window: toolbar, status bar, a padded sidebar and a grid
/// of six tiles in the centre.
pub fn dashboard() -> Value {
    json!({
        "type": "border",
        "name": "window",
        "gap": ["4", "4"],
        "top": { "type": "element", "name": "toolbar", "preferredHeight": "40px" },
        "bottom": { "type": "element", "name": "status", "preferredHeight": 20 },
        "left": {
            "type": "layer",
            "name": "sidebar",
            "preferredWidth": "25%",
            "insets": ["8", "8", "8", "8"],
            "elements": ["nav"]
        },
        "center": {
            "type": "grid",
            "name": "tiles",
            "columns": 3,
            "gap": ["10", "10"],
            "elements": ["tile[1-6]"]
        }
    })
}

pub fn dashboard_descriptor() -> NodeDescriptor {
    serde_json::from_value(dashboard()).expect("dashboard fixture should deserialize")
}

/// A row of `count` equal columns separated by a percentage gap.
pub fn column_strip(count: u32, gap: &str) -> NodeDescriptor {
    NodeDescriptor::new("grid")
        .with_columns(count)
        .with_gap(gap, "0")
        .with_elements([format!("elem[1-{count}]")])
}

/// A border with just a header of fixed height above a centre.
pub fn header_and_body(header_height: &str) -> NodeDescriptor {
    NodeDescriptor::new("border")
        .with_gap("0", "0")
        .with_slot(
            BorderSlot::Top,
            NodeDescriptor::element("header").with_preferred_size(0, header_height),
        )
        .with_slot(BorderSlot::Center, "body")
}
