use crate::LayoutError;
use crate::builder::TreeBuilder;
use crate::descriptor::NodeDescriptor;
use crate::interface::LayoutVariant;
use crate::tree::{LayoutTree, NodeId};
use liquid_types::geometry::Dimension;

/// Stacks every child on the same interior rectangle. Declaration order only
/// affects traversal order, there is no z-order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerNode;

impl LayoutVariant for LayerNode {
    fn parse(
        _descriptor: &NodeDescriptor,
        _builder: &mut TreeBuilder<'_>,
        _id: NodeId,
    ) -> Result<Self, LayoutError> {
        Ok(LayerNode)
    }

    fn measure(&self, tree: &mut LayoutTree, id: NodeId) -> Dimension {
        let node = tree.node(id);
        let bounds = *node.bounds();
        let mut size = Dimension::new(
            node.preferred_width().resolve(bounds.width()),
            node.preferred_height().resolve(bounds.height()),
        );
        let insets = tree.insets_size(id);
        size.width += insets.width;
        size.height += insets.height;

        let preferred = tree.preferred_size(id);
        size.width = size.width.max(preferred.width);
        size.height = size.height.max(preferred.height);
        size
    }

    fn arrange(&self, tree: &mut LayoutTree, id: NodeId) {
        let interior = tree.interior(id);
        let children = tree.node(id).children().to_vec();
        for child in children {
            tree.set_bounds(
                child,
                interior.x(),
                interior.y(),
                interior.width(),
                interior.height(),
            );
            tree.arrange(child);
        }
    }
}
