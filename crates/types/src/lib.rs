pub mod geometry;

pub use geometry::{Dimension, Point, Rect, Rectangle};
