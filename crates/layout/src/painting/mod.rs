//! Debug painting of a laid-out tree.
//!
//! Layout itself never draws. Hosts that want to look at the computed
//! rectangles hand a [`Painter`] to [`LayoutTree::paint`].

use crate::tree::LayoutTree;
use std::fmt::Write;

/// Something that can outline a rectangle.
pub trait Painter {
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

impl LayoutTree {
    /// Strokes the bounds of every node reachable from the root, in pre-order.
    pub fn paint(&self, painter: &mut dyn Painter) {
        for id in self.descendants(self.root()) {
            let b = self.node(id).bounds();
            painter.stroke_rect(b.x(), b.y(), b.width(), b.height());
        }
    }
}

/// Collects rectangle outlines into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgPainter {
    width: f32,
    height: f32,
    body: String,
    stroke: String,
}

impl SvgPainter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            stroke: "black".to_string(),
        }
    }

    /// Any SVG paint value, e.g. `"#ff0000"`.
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn finish(self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = String::with_capacity(self.body.len() + 160);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        let _ = write!(out, "<g fill=\"none\" stroke=\"{}\">", self.stroke);
        out.push_str(&self.body);
        out.push_str("</g></svg>");
        out
    }
}

impl Painter for SvgPainter {
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let _ = write!(
            self.body,
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\"/>"
        );
    }
}
