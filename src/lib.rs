//! Resolves a declarative tree of rectangular regions into absolute bounds.
//!
//! ```
//! use serde_json::json;
//!
//! let descriptor = serde_json::from_value(json!({
//!     "type": "border",
//!     "top": { "type": "element", "name": "toolbar", "preferredHeight": "40px" },
//!     "center": { "type": "grid", "columns": 2, "elements": ["cell[1-4]"] }
//! }))
//! .unwrap();
//!
//! let result = liquid::resolve(800.0, 600.0, &descriptor).unwrap();
//! assert_eq!(result["toolbar"].h, 40.0);
//! assert_eq!(result["cell2"].x, 400.0);
//! ```

pub mod error;

pub use error::LiquidError;

pub use liquid_layout::{
    BorderNode, BorderSlot, Dimension, ElementEntry, ElementList, ElementNode, Gap, GridNode, GridTracks,
    Insets, LayerNode, LayoutConfig, LayoutEngine, LayoutError, LayoutNode, LayoutResult,
    LayoutTree, LayoutVariant, LayoutWarning, NodeDescriptor, NodeId, NodeKind, NodeVariant,
    Painter, Point, Rect, Rectangle, SvgPainter, Unit, UnitKind, UnitValue, parse,
};
pub use liquid_style::StyleParseError;

/// Lays out `descriptor` in a `width` x `height` root at the origin and
/// returns the rectangle of every named region.
pub fn resolve(
    width: f32,
    height: f32,
    descriptor: &NodeDescriptor,
) -> Result<LayoutResult, LayoutError> {
    resolve_with_config(&LayoutConfig::default(), width, height, descriptor)
}

pub fn resolve_with_config(
    config: &LayoutConfig,
    width: f32,
    height: f32,
    descriptor: &NodeDescriptor,
) -> Result<LayoutResult, LayoutError> {
    let entry = ElementEntry::from(descriptor.clone());
    LayoutEngine::new(*config).resolve(width, height, &entry)
}

/// Like [`resolve`], for a descriptor still in JSON form. A bare JSON string
/// is accepted as a single named element.
pub fn resolve_json(width: f32, height: f32, json: &str) -> Result<LayoutResult, LiquidError> {
    let entry: ElementEntry = serde_json::from_str(json)?;
    Ok(LayoutEngine::default().resolve(width, height, &entry)?)
}
