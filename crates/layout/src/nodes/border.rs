//! Border layout: up to five regions around a centre.
//!
//! ```text
//! +----------------------------+
//! |            TOP             |
//! +------+-------------+-------+
//! | LEFT |   CENTER    | RIGHT |
//! +------+-------------+-------+
//! |           BOTTOM           |
//! +----------------------------+
//! ```
//!
//! Edge regions take their measured extent, so they need preferred-size
//! hints. The centre gets whatever is left.
use crate::LayoutError;
use crate::builder::TreeBuilder;
use crate::descriptor::{ElementEntry, NodeDescriptor};
use crate::interface::LayoutVariant;
use crate::tree::{LayoutTree, NodeId};
use liquid_types::geometry::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSlot {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl BorderSlot {
    pub fn from_constraint(constraint: &str) -> Option<Self> {
        match constraint {
            "top" => Some(BorderSlot::Top),
            "bottom" => Some(BorderSlot::Bottom),
            "left" => Some(BorderSlot::Left),
            "right" => Some(BorderSlot::Right),
            "center" => Some(BorderSlot::Center),
            _ => None,
        }
    }
}

/// Slot references. Each one aliases an entry of the border's children.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderNode {
    pub top: Option<NodeId>,
    pub bottom: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub center: Option<NodeId>,
}

impl BorderNode {
    pub fn slot(&self, slot: BorderSlot) -> Option<NodeId> {
        match slot {
            BorderSlot::Top => self.top,
            BorderSlot::Bottom => self.bottom,
            BorderSlot::Left => self.left,
            BorderSlot::Right => self.right,
            BorderSlot::Center => self.center,
        }
    }

    pub(crate) fn install(&mut self, slot: BorderSlot, id: NodeId) {
        let target = match slot {
            BorderSlot::Top => &mut self.top,
            BorderSlot::Bottom => &mut self.bottom,
            BorderSlot::Left => &mut self.left,
            BorderSlot::Right => &mut self.right,
            BorderSlot::Center => &mut self.center,
        };
        *target = Some(id);
    }

    fn parse_slot(
        &mut self,
        slot: BorderSlot,
        entry: Option<&ElementEntry>,
        builder: &mut TreeBuilder<'_>,
        id: NodeId,
    ) -> Result<(), LayoutError> {
        if let Some(entry) = entry {
            if let Some(child) = builder.add_child(id, entry)? {
                self.install(slot, child);
            }
        }
        Ok(())
    }
}

impl LayoutVariant for BorderNode {
    fn parse(
        descriptor: &NodeDescriptor,
        builder: &mut TreeBuilder<'_>,
        id: NodeId,
    ) -> Result<Self, LayoutError> {
        let mut border = BorderNode::default();
        border.parse_slot(BorderSlot::Left, descriptor.left.as_deref(), builder, id)?;
        border.parse_slot(BorderSlot::Right, descriptor.right.as_deref(), builder, id)?;
        border.parse_slot(BorderSlot::Bottom, descriptor.bottom.as_deref(), builder, id)?;
        border.parse_slot(BorderSlot::Top, descriptor.top.as_deref(), builder, id)?;
        border.parse_slot(BorderSlot::Center, descriptor.center.as_deref(), builder, id)?;
        Ok(border)
    }

    fn measure(&self, tree: &mut LayoutTree, id: NodeId) -> Dimension {
        let (h_gap, v_gap) = tree.resolved_gap(id);
        let mut size = Dimension::zero();

        for (slot, gap) in [(self.left, h_gap), (self.right, h_gap), (self.center, 0.0)] {
            if let Some(child) = slot {
                let d = tree.measure(child);
                size.width += d.width + gap;
                size.height = size.height.max(d.height);
            }
        }
        for slot in [self.top, self.bottom] {
            if let Some(child) = slot {
                let d = tree.measure(child);
                size.height += d.height + v_gap;
                size.width = size.width.max(d.width);
            }
        }

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
        let (h_gap, v_gap) = tree.resolved_gap(id);

        let mut left = interior.x();
        let mut top = interior.y();
        let mut right = interior.x1();
        let mut bottom = interior.y1();

        if let Some(child) = self.top {
            let current = tree.node(child).bounds().height();
            tree.set_size(child, right - left, current);
            let d = tree.measure(child);
            tree.set_bounds(child, left, top, right - left, d.height);
            tree.arrange(child);
            top += d.height + v_gap;
        }
        if let Some(child) = self.bottom {
            let current = tree.node(child).bounds().height();
            tree.set_size(child, right - left, current);
            let height = tree.measure(child).height.min(bottom - top);
            tree.set_bounds(child, left, bottom - height, right - left, height);
            tree.arrange(child);
            bottom -= height + v_gap;
        }
        if let Some(child) = self.right {
            let current = tree.node(child).bounds().width();
            tree.set_size(child, current, bottom - top);
            let d = tree.measure(child);
            tree.set_bounds(child, right - d.width, top, d.width, bottom - top);
            tree.arrange(child);
            right -= d.width + h_gap;
        }
        if let Some(child) = self.left {
            let current = tree.node(child).bounds().width();
            tree.set_size(child, current, bottom - top);
            let width = tree.measure(child).width.min(right - left);
            tree.set_bounds(child, left, top, width, bottom - top);
            tree.arrange(child);
            left += width + h_gap;
        }
        if let Some(child) = self.center {
            tree.set_bounds(child, left, top, right - left, bottom - top);
            tree.arrange(child);
        }
    }
}
