use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Grid layout '{name}' must define a non-zero number of rows or columns.")]
    GridAxisMissing { name: String },
    #[error("Unknown layout type at the root: '{0}'.")]
    UnknownRootType(String),
    #[error("Node {0} does not belong to this layout tree.")]
    UnknownNode(usize),
    #[error("Layout rejected in strict mode: {0}")]
    Rejected(LayoutWarning),
}

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub(crate) mod engine;
pub mod interface;
pub mod node_kind;
pub mod nodes;
pub mod output;
pub mod painting;
pub mod tree;

pub use self::builder::{parse, TreeBuilder, MAX_RANGE_LEN};
pub use self::config::LayoutConfig;
pub use self::descriptor::{ElementEntry, ElementList, NodeDescriptor};
pub use self::diagnostics::LayoutWarning;
pub use self::engine::LayoutEngine;
pub use self::interface::{LayoutVariant, NodeVariant};
pub use self::node_kind::NodeKind;
pub use self::nodes::{BorderNode, BorderSlot, ElementNode, GridNode, GridTracks, LayerNode};
pub use self::output::LayoutResult;
pub use self::painting::{Painter, SvgPainter};
pub use self::tree::{LayoutNode, LayoutTree, NodeId};

// Re-export the value types nodes are built from to prevent type mismatches
pub use liquid_style::{Gap, Insets, Unit, UnitKind, UnitValue};
pub use liquid_types::geometry::{Dimension, Point, Rect, Rectangle};

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod test_utils;
