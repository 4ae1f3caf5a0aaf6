// File: crates/graph-core/src/geometry.rs
// Summary: Plot rectangle and the data-to-pixel mapping inside it.

use crate::axis::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Linear map from axis ranges onto a pixel rectangle (y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    rect: RectI32,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Projection {
    pub fn new(rect: RectI32, x: &Axis, y: &Axis) -> Self {
        Self { rect, x_min: x.min, x_span: x.span(), y_min: y.min, y_span: y.span() }
    }

    #[inline]
    pub fn sx(&self, x: f64) -> f32 {
        self.rect.left as f32 + ((x - self.x_min) / self.x_span) as f32 * self.rect.width() as f32
    }

    #[inline]
    pub fn sy(&self, y: f64) -> f32 {
        self.rect.bottom as f32 - ((y - self.y_min) / self.y_span) as f32 * self.rect.height() as f32
    }
}
