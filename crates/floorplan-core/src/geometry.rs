//! Geometric primitives for floor plan layout.
//!
//! This module provides the geometric types used to position rooms, walls and
//! labels, and to compute the bounding boxes of floors.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in plan space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Plan coordinates follow SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A room declared `at (x, y)` has its top-left corner at that point. Units
//! are whatever the source uses (typically meters); nothing is scaled.

/// A 2D point representing a position in plan coordinate space.
///
/// # Examples
///
/// ```
/// # use floorplan_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point (vector addition)
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns the point halfway between this point and `other`
    pub fn midpoint(self, other: Point) -> Self {
        self.lerp(other, 0.5)
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`.
    pub fn lerp(self, other: Point, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Creates a bounds with this point as the top-left corner
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Width and height of a rectangular area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the smaller of the two dimensions
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Returns true when both dimensions are strictly positive
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// Width and height are stored next to the corners, so bounds built from a
/// room's position and size report exactly those values back instead of
/// `max - min`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new bounds of `size` centered on `center`
    pub fn new_from_center(center: Point, size: Size) -> Self {
        Self::new_from_top_left(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns true when the bounds are wider than they are tall
    pub fn is_horizontal(self) -> bool {
        self.width() > self.height()
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use floorplan_core::geometry::{Bounds, Point, Size};
    /// let kitchen = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(4.0, 3.0));
    /// let hall = Bounds::new_from_top_left(Point::new(4.0, 1.0), Size::new(2.0, 5.0));
    ///
    /// let floor = kitchen.merge(&hall);
    /// assert_eq!(floor.min_x(), 0.0);
    /// assert_eq!(floor.min_y(), 0.0);
    /// assert_eq!(floor.width(), 6.0);
    /// assert_eq!(floor.height(), 6.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        let min_x = self.min_x.min(other.min_x);
        let min_y = self.min_y.min(other.min_y);
        let max_x = self.max_x.max(other.max_x);
        let max_y = self.max_y.max(other.max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}
