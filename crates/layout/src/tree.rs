//! The layout tree: an arena of nodes addressed by [`NodeId`].
//!
//! Ownership runs root to leaves through `children`. The `parent` link is a
//! plain index used only to resolve a child's percentage preferred size
//! against its parent's bounds.
use crate::LayoutError;
use crate::builder::TreeBuilder;
use crate::descriptor::ElementEntry;
use crate::diagnostics::{self, LayoutWarning};
use crate::interface::NodeVariant;
use crate::node_kind::NodeKind;
use crate::nodes::BorderSlot;
use liquid_style::{Gap, Insets, Unit, UnitValue};
use liquid_types::geometry::{Dimension, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub(crate) variant: NodeVariant,
    pub(crate) name: String,
    pub(crate) preferred_width: Unit,
    pub(crate) preferred_height: Unit,
    pub(crate) insets: Insets,
    pub(crate) gap: Gap,
    pub(crate) bounds: Rectangle,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl LayoutNode {
    pub(crate) fn new(variant: NodeVariant, parent: Option<NodeId>) -> Self {
        Self {
            variant,
            name: String::new(),
            preferred_width: Unit::new(),
            preferred_height: Unit::new(),
            insets: Insets::default(),
            gap: Gap::default(),
            bounds: Rectangle::default(),
            children: Vec::new(),
            parent,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.variant.kind()
    }

    pub fn variant(&self) -> &NodeVariant {
        &self.variant
    }

    /// The node name; empty for anonymous nodes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn insets(&self) -> &Insets {
        &self.insets
    }

    pub fn gap(&self) -> &Gap {
        &self.gap
    }

    pub fn preferred_width(&self) -> Unit {
        self.preferred_width
    }

    pub fn preferred_height(&self) -> Unit {
        self.preferred_height
    }
}

#[derive(Debug, Clone)]
pub struct LayoutTree {
    pub(crate) nodes: Vec<LayoutNode>,
    pub(crate) root: NodeId,
    pub(crate) warnings: Vec<LayoutWarning>,
}

impl LayoutTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// # Panics
    ///
    /// When `id` was not issued by this tree. Use [`LayoutTree::get`] for ids
    /// of unknown origin.
    pub fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the arena, including ones dropped by
    /// [`LayoutTree::add_element`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recoverable problems recorded while building or extending the tree.
    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Finds the first node, in pre-order, with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .find(|&id| self.node(id).name == name)
    }

    /// Pre-order walk of the subtree rooted at `id`, `id` included.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Moves and resizes `id`. Like the other per-node mutators, panics when
    /// `id` was not issued by this tree.
    pub fn set_bounds(&mut self, id: NodeId, x: f32, y: f32, w: f32, h: f32) {
        self.node_mut(id).bounds.set(x, y, w, h);
    }

    /// Panics when `id` was not issued by this tree.
    pub fn set_size(&mut self, id: NodeId, w: f32, h: f32) {
        self.node_mut(id).bounds.set_size(w, h);
    }

    pub fn set_preferred_size(&mut self, id: NodeId, w: impl Into<UnitValue>, h: impl Into<UnitValue>) {
        let node = self.node_mut(id);
        node.preferred_width.set_value(w);
        node.preferred_height.set_value(h);
    }

    /// Parses `entry` and attaches it under `parent`.
    ///
    /// A border parent needs a slot constraint (`top`, `bottom`, `left`,
    /// `right` or `center`); with a missing or unknown one the element is
    /// dropped and a warning recorded. Other parents ignore the constraint.
    pub fn add_element(
        &mut self,
        parent: NodeId,
        entry: impl Into<ElementEntry>,
        constraint: Option<&str>,
    ) -> Result<Option<NodeId>, LayoutError> {
        if self.get(parent).is_none() {
            return Err(LayoutError::UnknownNode(parent.0));
        }

        let entry = entry.into();
        let child = TreeBuilder::new(&mut self.nodes, &mut self.warnings)
            .build_entry(&entry, Some(parent))?;
        let Some(child) = child else {
            return Ok(None);
        };

        let variant = self.node(parent).variant;
        if let NodeVariant::Border(mut border) = variant {
            let Some(slot) = constraint.and_then(BorderSlot::from_constraint) else {
                diagnostics::report(
                    &mut self.warnings,
                    LayoutWarning::UnknownBorderConstraint {
                        constraint: constraint.unwrap_or_default().to_string(),
                    },
                );
                self.node_mut(child).parent = None;
                return Ok(None);
            };
            border.install(slot, child);
            self.node_mut(parent).variant = NodeVariant::Border(border);
        }

        self.node_mut(parent).children.push(child);
        Ok(Some(child))
    }

    /// Preferred-size hints of `id`, percentages taken from the parent's
    /// bounds (or the node's own bounds for the root).
    pub fn preferred_size(&self, id: NodeId) -> Dimension {
        let node = self.node(id);
        let reference = node
            .parent
            .map(|p| self.node(p).bounds)
            .unwrap_or(node.bounds);
        Dimension::new(
            node.preferred_width.resolve(reference.width()),
            node.preferred_height.resolve(reference.height()),
        )
    }

    /// Total insets of `id` per axis, resolved against its own bounds.
    pub fn insets_size(&self, id: NodeId) -> Dimension {
        let node = self.node(id);
        Dimension::new(
            node.insets.horizontal(node.bounds.width()),
            node.insets.vertical(node.bounds.height()),
        )
    }

    /// The bounds of `id` reduced by its insets.
    pub fn interior(&self, id: NodeId) -> Rectangle {
        let node = self.node(id);
        let b = node.bounds;
        let left = node.insets.left.resolve(b.width());
        let top = node.insets.top.resolve(b.height());
        let right = node.insets.right.resolve(b.width());
        let bottom = node.insets.bottom.resolve(b.height());
        Rectangle::new(
            b.x() + left,
            b.y() + top,
            b.width() - left - right,
            b.height() - top - bottom,
        )
    }

    /// `(horizontal, vertical)` gap of `id`, resolved against its own bounds.
    pub fn resolved_gap(&self, id: NodeId) -> (f32, f32) {
        let node = self.node(id);
        (
            node.gap.horizontal.resolve(node.bounds.width()),
            node.gap.vertical.resolve(node.bounds.height()),
        )
    }
}

/// Pre-order iterator over a subtree. See [`LayoutTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a LayoutTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(id)
    }
}
