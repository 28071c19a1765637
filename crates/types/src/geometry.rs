use serde::{Deserialize, Serialize};

/// A width/height pair. Used for preferred sizes flowing up the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn set(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The plain rectangle record handed back to callers of the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// A mutable rectangle carrying its far edges.
///
/// `x1` and `y1` are always `x + w` and `y + h`. The fields are private so every
/// mutation goes through a method that recomputes them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    x1: f32,
    y1: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            x1: x + w,
            y1: y + h,
        }
    }

    pub fn set(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        *self = Self::new(x, y, w, h);
        self
    }

    pub fn set_size(&mut self, w: f32, h: f32) -> &mut Self {
        self.set(self.x, self.y, w, h)
    }

    pub fn set_width(&mut self, w: f32) -> &mut Self {
        self.set(self.x, self.y, w, self.h)
    }

    pub fn set_height(&mut self, h: f32) -> &mut Self {
        self.set(self.x, self.y, self.w, h)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.w
    }

    pub fn height(&self) -> f32 {
        self.h
    }

    pub fn x1(&self) -> f32 {
        self.x1
    }

    pub fn y1(&self) -> f32 {
        self.y1
    }

    pub fn size(&self) -> Dimension {
        Dimension::new(self.w, self.h)
    }

    pub fn intersects_with(&self, r: &Rectangle) -> bool {
        self.intersects(r.x, r.y, r.w, r.h)
    }

    /// Half-open overlap test against the rectangle `(x, y, w, h)`.
    pub fn intersects(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        if self.x1 < x || self.y1 < y {
            return false;
        }
        if self.x >= x + w || self.y >= y + h {
            return false;
        }
        true
    }

    /// Clamps this rectangle to its overlap with `r`, or empties it when they
    /// do not intersect.
    pub fn intersect_with(&mut self, r: &Rectangle) -> &mut Self {
        if !self.intersects_with(r) {
            self.set_empty();
            return self;
        }

        let x = self.x.max(r.x);
        let y = self.y.max(r.y);
        let x1 = self.x1.min(r.x1);
        let y1 = self.y1.min(r.y1);
        self.set(x, y, x1 - x, y1 - y)
    }

    pub fn set_empty(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }

    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.set(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Divides every coordinate by the given extents, mapping the rectangle
    /// into a unit space.
    pub fn normalize_by(&mut self, w: f32, h: f32) -> &mut Self {
        self.set(self.x / w, self.y / h, self.w / w, self.h / h)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.contains_xy(p.x, p.y)
    }

    pub fn contains_xy(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x < self.x1 && y < self.y1
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        r.to_rect()
    }
}
