//! Geometry primitives: [`Point`], [`Rect`] and [`Segment`].
//!
//! Coordinates are real-valued. Boxes are closed rectangles, so a point lying
//! on the border between two boxes is contained in both.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        distance(self, other)
    }

    /// Midpoint of the segment between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        (self + other) / 2.0
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned closed box `[min_x, max_x] × [min_y, max_y]`.
///
/// Field order follows the usual mesh notation `(min_x, max_x, min_y, max_y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Rect {
    /// Create a new box from its x and y bounds, swapping each pair if needed
    /// so that `min ≤ max` on both axes.
    #[inline]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        // `f64::min` would drop a NaN bound; comparisons keep it.
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Width of the box.
    #[inline]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    #[inline]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Area of the box.
    #[inline]
    pub fn area(self) -> f64 {
        self.width() * self.height()
    }

    /// Whether all four bounds are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
    }

    /// Whether `p` lies inside the box or on its border.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Center of the box.
    #[inline]
    pub fn midpoint(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the interiors of the two boxes intersect.
    ///
    /// Boxes that only share a border do not overlap.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.min_x.max(other.min_x) < self.max_x.min(other.max_x)
            && self.min_y.max(other.min_y) < self.max_y.min(other.max_y)
    }

    /// Shared border segments with `other`. See [`shared_edges`].
    #[inline]
    pub fn shared_edges(self, other: Rect) -> SharedEdges {
        shared_edges(self, other)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{} × {}..{}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A straight segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point {
        self.a.midpoint(self.b)
    }

    /// Length of the segment.
    #[inline]
    pub fn length(self) -> f64 {
        distance(self.a, self.b)
    }
}

// ---------------------------------------------------------------------------
// Shared edges
// ---------------------------------------------------------------------------

/// The border shared by two touching boxes.
///
/// A well-formed adjacency has exactly one edge. At most one field is ever
/// set: a vertical contact with positive overlap leaves no room for a
/// horizontal one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SharedEdges {
    /// Segment on a vertical line `x = c` (boxes side by side).
    pub vertical: Option<Segment>,
    /// Segment on a horizontal line `y = c` (boxes stacked).
    pub horizontal: Option<Segment>,
}

impl SharedEdges {
    /// The first shared edge, vertical before horizontal.
    #[inline]
    pub fn first(&self) -> Option<Segment> {
        self.vertical.or(self.horizontal)
    }

    /// Iterate over the shared edges.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertical.iter().chain(self.horizontal.iter()).copied()
    }

    /// Number of shared edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertical.is_some() as usize + self.horizontal.is_some() as usize
    }

    /// Whether the boxes share no edge of positive length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the edge segments shared by two boxes.
///
/// Boxes share a vertical edge when one's `max_x` equals the other's `min_x`,
/// and a horizontal edge when one's `max_y` equals the other's `min_y`. The
/// segment is the overlap of the two boxes on the other axis and is only
/// reported when it has strictly positive length, so corner contacts do not
/// count. Bounds are compared exactly.
pub fn shared_edges(a: Rect, b: Rect) -> SharedEdges {
    let mut edges = SharedEdges::default();

    let x = if a.max_x == b.min_x {
        Some(a.max_x)
    } else if b.max_x == a.min_x {
        Some(b.max_x)
    } else {
        None
    };
    if let Some(x) = x {
        let lo = a.min_y.max(b.min_y);
        let hi = a.max_y.min(b.max_y);
        if hi > lo {
            edges.vertical = Some(Segment::new(Point::new(x, lo), Point::new(x, hi)));
        }
    }

    let y = if a.max_y == b.min_y {
        Some(a.max_y)
    } else if b.max_y == a.min_y {
        Some(b.max_y)
    } else {
        None
    };
    if let Some(y) = y {
        let lo = a.min_x.max(b.min_x);
        let hi = a.max_x.min(b.max_x);
        if hi > lo {
            edges.horizontal = Some(Segment::new(Point::new(lo, y), Point::new(hi, y)));
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(b - a, Point::new(2.0, 2.0));
        assert_eq!(a * 3.0, Point::new(3.0, 6.0));
        assert_eq!(b / 2.0, Point::new(1.5, 2.0));
    }

    #[test]
    fn euclidean_distance() {
        assert_eq!(distance(Point::ZERO, Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::new(1.0, 1.0).distance(Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn rect_auto_canonicalize() {
        let r = Rect::new(3.0, 0.0, 2.0, -1.0);
        assert_eq!(r, Rect::new(0.0, 3.0, -1.0, 2.0));
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 3.0);
        assert_eq!(r.area(), 9.0);
    }

    #[test]
    fn rect_new_keeps_nan_bounds() {
        let r = Rect::new(0.0, f64::NAN, 0.0, 1.0);
        assert!(r.min_x.is_nan() || r.max_x.is_nan());
        assert!(!r.is_finite());
        assert!(!Rect::new(0.0, 1.0, f64::NAN, 1.0).is_finite());
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(0.0, 1.0, 0.0, 1.0);
        assert!(r.contains(Point::new(0.5, 0.5)));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(1.0, 1.0)));
        assert!(r.contains(Point::new(1.0, 0.3)));
        assert!(!r.contains(Point::new(1.01, 0.5)));
        assert!(!r.contains(Point::new(0.5, -0.01)));
    }

    #[test]
    fn rect_midpoint() {
        assert_eq!(Rect::new(0.0, 10.0, 0.0, 10.0).midpoint(), Point::new(5.0, 5.0));
        assert_eq!(Rect::new(1.0, 2.0, 0.0, 1.0).midpoint(), Point::new(1.5, 0.5));
    }

    #[test]
    fn rect_overlaps_ignores_touching() {
        let a = Rect::new(0.0, 2.0, 0.0, 2.0);
        assert!(a.overlaps(Rect::new(1.0, 3.0, 1.0, 3.0)));
        assert!(!a.overlaps(Rect::new(2.0, 3.0, 0.0, 2.0)));
        assert!(!a.overlaps(Rect::new(5.0, 6.0, 5.0, 6.0)));
    }

    #[test]
    fn shared_vertical_edge() {
        let a = Rect::new(0.0, 1.0, 0.0, 1.0);
        let b = Rect::new(1.0, 2.0, 0.0, 1.0);
        let e = shared_edges(a, b);
        assert_eq!(e.len(), 1);
        let seg = e.vertical.unwrap();
        assert_eq!(seg, Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0)));
        assert_eq!(seg.midpoint(), Point::new(1.0, 0.5));
        // Order of the arguments does not matter.
        assert_eq!(shared_edges(b, a), e);
    }

    #[test]
    fn shared_horizontal_edge_partial_overlap() {
        let a = Rect::new(0.0, 4.0, 0.0, 2.0);
        let b = Rect::new(3.0, 10.0, 2.0, 5.0);
        let e = shared_edges(a, b);
        assert!(e.vertical.is_none());
        let seg = e.horizontal.unwrap();
        assert_eq!(seg, Segment::new(Point::new(3.0, 2.0), Point::new(4.0, 2.0)));
        assert_eq!(seg.length(), 1.0);
        assert_eq!(e.first(), Some(seg));
    }

    #[test]
    fn corner_touch_is_not_an_edge() {
        let a = Rect::new(0.0, 1.0, 0.0, 1.0);
        let b = Rect::new(1.0, 2.0, 1.0, 2.0);
        assert!(shared_edges(a, b).is_empty());
    }

    #[test]
    fn separated_boxes_share_nothing() {
        let a = Rect::new(0.0, 1.0, 0.0, 1.0);
        let b = Rect::new(3.0, 4.0, 0.0, 1.0);
        let e = shared_edges(a, b);
        assert!(e.is_empty());
        assert_eq!(e.iter().count(), 0);
        assert_eq!(e.first(), None);
    }

    #[test]
    fn degenerate_boxes() {
        // A zero-size box on the corner of a unit box.
        let a = Rect::new(0.0, 2.0, 0.0, 2.0);
        let b = Rect::new(2.0, 2.0, 2.0, 2.0);
        assert!(shared_edges(a, b).is_empty());

        let thin = Rect::new(1.0, 1.0, 0.0, 1.0);
        let left = Rect::new(0.0, 1.0, 0.0, 1.0);
        let e = shared_edges(left, thin);
        assert!(e.vertical.is_some());
        assert!(e.horizontal.is_none());
    }
}
