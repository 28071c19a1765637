use crate::LayoutError;
use crate::builder::TreeBuilder;
use crate::descriptor::NodeDescriptor;
use crate::node_kind::NodeKind;
use crate::nodes::{BorderNode, ElementNode, GridNode, LayerNode};
use crate::tree::{LayoutTree, NodeId};
use liquid_types::geometry::Dimension;
use std::fmt::Debug;

/// The capability every node variant implements.
///
/// Variant state is small and `Copy`; the engine copies it out of the arena
/// before calling in, so implementations get the whole tree mutably and
/// address their own node through `id`.
pub trait LayoutVariant: Debug + Copy {
    /// Builds the variant from its descriptor. The common fields (insets, gap,
    /// preferred size, name, `elements`) are already applied to `id`.
    fn parse(
        descriptor: &NodeDescriptor,
        builder: &mut TreeBuilder<'_>,
        id: NodeId,
    ) -> Result<Self, LayoutError>;

    /// Phase 1: how much space the subtree at `id` wants.
    fn measure(&self, tree: &mut LayoutTree, id: NodeId) -> Dimension;

    /// Phase 2: assigns child bounds from the bounds already given to `id`,
    /// then recurses.
    fn arrange(&self, tree: &mut LayoutTree, id: NodeId);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeVariant {
    Element(ElementNode),
    Border(BorderNode),
    Grid(GridNode),
    Layer(LayerNode),
}

impl NodeVariant {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeVariant::Element(_) => NodeKind::Element,
            NodeVariant::Border(_) => NodeKind::Border,
            NodeVariant::Grid(_) => NodeKind::Grid,
            NodeVariant::Layer(_) => NodeKind::Layer,
        }
    }

    pub(crate) fn parse(
        kind: NodeKind,
        descriptor: &NodeDescriptor,
        builder: &mut TreeBuilder<'_>,
        id: NodeId,
    ) -> Result<Self, LayoutError> {
        Ok(match kind {
            NodeKind::Element => NodeVariant::Element(ElementNode::parse(descriptor, builder, id)?),
            NodeKind::Border => NodeVariant::Border(BorderNode::parse(descriptor, builder, id)?),
            NodeKind::Grid => NodeVariant::Grid(GridNode::parse(descriptor, builder, id)?),
            NodeKind::Layer => NodeVariant::Layer(LayerNode::parse(descriptor, builder, id)?),
        })
    }

    pub(crate) fn measure(&self, tree: &mut LayoutTree, id: NodeId) -> Dimension {
        match self {
            NodeVariant::Element(n) => n.measure(tree, id),
            NodeVariant::Border(n) => n.measure(tree, id),
            NodeVariant::Grid(n) => n.measure(tree, id),
            NodeVariant::Layer(n) => n.measure(tree, id),
        }
    }

    pub(crate) fn arrange(&self, tree: &mut LayoutTree, id: NodeId) {
        match self {
            NodeVariant::Element(n) => n.arrange(tree, id),
            NodeVariant::Border(n) => n.arrange(tree, id),
            NodeVariant::Grid(n) => n.arrange(tree, id),
            NodeVariant::Layer(n) => n.arrange(tree, id),
        }
    }
}
