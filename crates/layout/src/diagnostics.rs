//! Recoverable problems found while building a layout tree.
//!
//! Each one is logged through `log::warn!` and kept on the tree, so hosts can
//! inspect them without installing a logger.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    /// The node was dropped from its parent.
    #[error("unknown layout type: '{kind}'")]
    UnknownNodeType { kind: String },
    #[error("wrong defined insets on '{name}': expected 4 values, got {found}")]
    InsetsArity { name: String, found: usize },
    #[error("wrong defined gap on '{name}': expected 2 values, got {found}")]
    GapArity { name: String, found: usize },
    /// The pattern was used verbatim as a single element name.
    #[error("wrong pattern for element by name: '{pattern}'")]
    MalformedRange { pattern: String },
    /// The element was dropped.
    #[error("wrong border layout constraint: '{constraint}'")]
    UnknownBorderConstraint { constraint: String },
    /// Only the first `limit` names were created.
    #[error("range pattern '{pattern}' expands to more than {limit} elements, truncating")]
    RangeTooLarge { pattern: String, limit: i64 },
    /// The node keeps no children from it.
    #[error("layout elements block is not an array on '{name}'")]
    ElementsNotArray { name: String },
    #[error("grid '{name}' defines both rows and columns, using columns")]
    GridAxisConflict { name: String },
}

pub(crate) fn report(warnings: &mut Vec<LayoutWarning>, warning: LayoutWarning) {
    log::warn!("{}", warning);
    warnings.push(warning);
}
