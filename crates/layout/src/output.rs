//! Output types from the layout engine.
//!
//! A laid-out tree is flattened into a name to rectangle mapping. Anonymous
//! nodes are skipped; when two nodes share a name, the later one in pre-order
//! wins.

use crate::tree::LayoutTree;
use liquid_types::geometry::Rect;
use std::collections::HashMap;

/// Final rectangles of every named node.
pub type LayoutResult = HashMap<String, Rect>;

impl LayoutTree {
    /// Collects the current bounds of every named node reachable from the
    /// root.
    pub fn enumerate_layout(&self) -> LayoutResult {
        let mut result = LayoutResult::new();
        for id in self.descendants(self.root()) {
            let node = self.node(id);
            if node.name().is_empty() {
                continue;
            }
            if result
                .insert(node.name().to_string(), node.bounds().to_rect())
                .is_some()
            {
                log::debug!("Duplicate layout name '{}', keeping the later node", node.name());
            }
        }
        result
    }
}
