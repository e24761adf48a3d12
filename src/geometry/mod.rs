//! Geometric primitives in page space.
//!
//! All coordinates are top-down: the origin is the top-left corner of the
//! page and `y` grows towards the bottom edge, so "bottom half" means
//! `y >= height / 2`.

use serde::{Deserialize, Serialize};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page space.
///
/// A rectangle with non-positive width or height is *empty*. Empty
/// rectangles are the identity for [`Rect::union`] and never intersect
/// anything, so degenerate span boxes can be folded in without special cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimension_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points `(x0, y0)` and `(x1, y1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimension_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.x, 10.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// The empty rectangle.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Check if this rectangle overlaps another with positive area.
    ///
    /// Touching edges do not count, and an empty rectangle intersects nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimension_oxide::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let r2 = Rect::new(50.0, 50.0, 100.0, 100.0);
    /// let r3 = Rect::new(100.0, 0.0, 10.0, 10.0);
    ///
    /// assert!(r1.intersects(&r2));
    /// assert!(!r1.intersects(&r3));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both. An empty operand is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimension_oxide::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = Rect::new(25.0, 25.0, 50.0, 50.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.right(), 75.0);
    /// assert_eq!(union.bottom(), 75.0);
    /// assert_eq!(r1.union(&Rect::empty()), r1);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }

    /// Grow the rectangle by `padding` on every side, then clamp it to
    /// `[0, max_x] × [0, max_y]`.
    pub fn padded_within(&self, padding: f32, max_x: f32, max_y: f32) -> Rect {
        let x0 = (self.left() - padding).max(0.0);
        let y0 = (self.top() - padding).max(0.0);
        let x1 = (self.right() + padding).min(max_x);
        let y1 = (self.bottom() + padding).min(max_y);
        Rect::from_points(x0, y0, x1, y1)
    }

}

impl Default for Rect {
    fn default() -> Self {
        Self::empty()
    }
}

/// Union of a sequence of rectangles; empty input gives the empty rectangle.
pub fn union_all<'a, I>(rects: I) -> Rect
where
    I: IntoIterator<Item = &'a Rect>,
{
    rects.into_iter().fold(Rect::empty(), |acc, r| acc.union(r))
}
