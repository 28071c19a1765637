use crate::LayoutError;
use crate::builder;
use crate::config::LayoutConfig;
use crate::descriptor::ElementEntry;
use crate::output::LayoutResult;
use crate::tree::{LayoutTree, NodeId};
use liquid_types::geometry::Dimension;

impl LayoutTree {
    /// Phase 1: the size the subtree at `id` wants, given the bounds currently
    /// assigned to it and its parent.
    pub fn measure(&mut self, id: NodeId) -> Dimension {
        let variant = self.node(id).variant;
        variant.measure(self, id)
    }

    /// Phase 2: lays out the children of `id` inside its current bounds.
    pub fn arrange(&mut self, id: NodeId) {
        let variant = self.node(id).variant;
        variant.arrange(self, id)
    }

    /// Runs a full pass with the root placed at `(x, y, w, h)`.
    ///
    /// Bounds left over from a previous pass are cleared first, so laying out
    /// the same tree twice gives identical rectangles.
    pub fn layout(&mut self, x: f32, y: f32, w: f32, h: f32) {
        for node in &mut self.nodes {
            node.bounds.set_empty();
        }

        let root = self.root;
        self.set_bounds(root, x, y, w, h);
        self.measure(root);
        self.arrange(root);
    }
}

/// Builds trees from descriptors and lays them out with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Parses `entry`. In strict mode the first recoverable problem is
    /// returned as [`LayoutError::Rejected`].
    pub fn build_tree(&self, entry: &ElementEntry) -> Result<LayoutTree, LayoutError> {
        let tree = builder::parse(entry)?;
        if self.config.strict {
            if let Some(warning) = tree.warnings().first() {
                return Err(LayoutError::Rejected(warning.clone()));
            }
        }
        Ok(tree)
    }

    /// Parses `entry`, lays it out in a `width` x `height` root and collects
    /// the rectangle of every named node.
    pub fn resolve(
        &self,
        width: f32,
        height: f32,
        entry: &ElementEntry,
    ) -> Result<LayoutResult, LayoutError> {
        let mut tree = self.build_tree(entry)?;
        let origin = self.config.origin;
        log::debug!(
            "Laying out {} nodes in {}x{} at ({}, {})",
            tree.len(),
            width,
            height,
            origin.x,
            origin.y
        );
        tree.layout(origin.x, origin.y, width, height);
        Ok(tree.enumerate_layout())
    }
}
