//! Padding and inter-child spacing.
//!
//! Both are expressed in [`Unit`]s, so percentages are resolved late, against
//! the bounds of the node that owns them.
use crate::unit::Unit;

/// Internal padding of a layout node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub left: Unit,
    pub top: Unit,
    pub right: Unit,
    pub bottom: Unit,
}

impl Insets {
    pub fn new(left: Unit, top: Unit, right: Unit, bottom: Unit) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn all(value: Unit) -> Self {
        Self::new(value, value, value, value)
    }

    /// `left + right`, percentages taken from `reference_width`.
    pub fn horizontal(&self, reference_width: f32) -> f32 {
        self.left.resolve(reference_width) + self.right.resolve(reference_width)
    }

    /// `top + bottom`, percentages taken from `reference_height`.
    pub fn vertical(&self, reference_height: f32) -> f32 {
        self.top.resolve(reference_height) + self.bottom.resolve(reference_height)
    }
}

/// Separation between adjacent children.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gap {
    pub horizontal: Unit,
    pub vertical: Unit,
}

impl Gap {
    pub fn new(horizontal: Unit, vertical: Unit) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}
