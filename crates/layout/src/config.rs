use liquid_types::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Where the root rectangle is placed. Every resolved rectangle is in the
    /// same coordinate space.
    ///
    /// Defaults to `(0, 0)`.
    pub origin: Point,
    /// Fail with the first recoverable descriptor problem instead of laying
    /// out a tree that dropped or reinterpreted part of its input.
    ///
    /// Defaults to `false`.
    pub strict: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            strict: false,
        }
    }
}
