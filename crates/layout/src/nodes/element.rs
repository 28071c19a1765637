use crate::LayoutError;
use crate::builder::TreeBuilder;
use crate::descriptor::NodeDescriptor;
use crate::interface::LayoutVariant;
use crate::tree::{LayoutTree, NodeId};
use liquid_types::geometry::Dimension;

/// A plain region. Its `elements`, if any, are kept in the tree but never
/// arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementNode;

impl LayoutVariant for ElementNode {
    fn parse(
        _descriptor: &NodeDescriptor,
        _builder: &mut TreeBuilder<'_>,
        _id: NodeId,
    ) -> Result<Self, LayoutError> {
        Ok(ElementNode)
    }

    fn measure(&self, tree: &mut LayoutTree, id: NodeId) -> Dimension {
        let mut size = tree.preferred_size(id);
        let insets = tree.insets_size(id);
        size.width += insets.width;
        size.height += insets.height;
        size
    }

    /// Shrinks the node by its total insets and re-centres what is left. The
    /// origin moves by half the total on each axis, even for one-sided insets.
    fn arrange(&self, tree: &mut LayoutTree, id: NodeId) {
        let insets = tree.insets_size(id);
        let b = *tree.node(id).bounds();
        tree.set_bounds(
            id,
            b.x() + insets.width / 2.0,
            b.y() + insets.height / 2.0,
            b.width() - insets.width,
            b.height() - insets.height,
        );
    }
}
