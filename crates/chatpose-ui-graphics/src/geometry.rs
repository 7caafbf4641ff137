//! Geometric primitives: Point, Size, Rect, EdgeInsets

use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean length of the vector from the origin to this point.
    pub fn distance(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Axis-aligned rectangle stored as origin + size.
///
/// Anchors are supplied by hosts as left/top/right/bottom edges, so the
/// edge accessors and [`Rect::from_ltrb`] are the usual way in and out.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Shrinks the rectangle by `insets` on each edge. Width and height never
    /// go negative; an over-inset rectangle collapses onto its left/top edge.
    pub fn deflate(&self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    /// Returns true when `other` lies entirely inside this rectangle.
    /// `epsilon` absorbs float rounding on the shared edges.
    pub fn contains_rect(&self, other: &Rect, epsilon: f32) -> bool {
        other.left() >= self.left() - epsilon
            && other.top() >= self.top() - epsilon
            && other.right() <= self.right() + epsilon
            && other.bottom() <= self.bottom() + epsilon
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub const fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }

    /// Edge-wise maximum of two inset sets.
    pub fn max(&self, other: EdgeInsets) -> Self {
        Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for EdgeInsets {
    fn add_assign(&mut self, rhs: Self) {
        self.left += rhs.left;
        self.top += rhs.top;
        self.right += rhs.right;
        self.bottom += rhs.bottom;
    }
}

/// Clamps `value` into `[min, max]` without panicking when the band is
/// inverted. An inverted band (`max < min`) resolves to `min`.
pub fn coerce_in(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_round_trip_through_ltrb() {
        let rect = Rect::from_ltrb(20.0, 500.0, 220.0, 560.0);
        assert_eq!(rect.left(), 20.0);
        assert_eq!(rect.top(), 500.0);
        assert_eq!(rect.right(), 220.0);
        assert_eq!(rect.bottom(), 560.0);
        assert_eq!(rect.center(), Point::new(120.0, 530.0));
    }

    #[test]
    fn deflate_never_produces_negative_size() {
        let rect = Rect::new(0.0, 0.0, 40.0, 30.0);
        let shrunk = rect.deflate(EdgeInsets::uniform(25.0));
        assert_eq!(shrunk.width, 0.0);
        assert_eq!(shrunk.height, 0.0);
        assert_eq!(shrunk.origin(), Point::new(25.0, 25.0));
    }

    #[test]
    fn coerce_in_resolves_inverted_band_to_min() {
        assert_eq!(coerce_in(5.0, 0.0, 10.0), 5.0);
        assert_eq!(coerce_in(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(coerce_in(15.0, 0.0, 10.0), 10.0);
        assert_eq!(coerce_in(15.0, 16.0, 10.0), 16.0);
    }

    #[test]
    fn edge_insets_max_is_edge_wise() {
        let a = EdgeInsets::from_components(1.0, 10.0, 3.0, 40.0);
        let b = EdgeInsets::from_components(2.0, 5.0, 3.0, 100.0);
        assert_eq!(a.max(b), EdgeInsets::from_components(2.0, 10.0, 3.0, 100.0));
    }

    #[test]
    fn contains_rect_respects_epsilon() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0), 0.0));
        assert!(!outer.contains_rect(&Rect::new(0.0, 0.0, 100.01, 100.0), 0.0));
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.01, 100.0), 0.05));
    }
}
