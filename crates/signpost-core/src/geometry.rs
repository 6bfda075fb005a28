//! Geometric primitives for tooltip placement.
//!
//! This module provides the value types the placement solver and the
//! presentation layer exchange: positions, sizes, rectangles and insets.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in screen space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides (safe areas, button insets)
//!
//! # Coordinate System
//!
//! Signpost uses screen coordinates, consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the screen at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use crate::error::GeometryError;

/// A 2D point representing a position in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true when both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns a point shifted by `dx` and `dy`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use signpost_core::geometry::Point;
    /// let apex = Point::new(100.0, 50.0);
    /// let corner = apex.offset(-8.0, 8.0);
    /// assert_eq!(corner, Point::new(92.0, 58.0));
    /// ```
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Checks that both dimensions are finite and non-negative.
    ///
    /// `what` names the value in the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for NaN or infinite dimensions and
    /// [`GeometryError::Negative`] for negative ones.
    pub fn validate(self, what: &'static str) -> Result<(), GeometryError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(GeometryError::NonFinite { what });
        }
        if self.width < 0.0 {
            return Err(GeometryError::Negative {
                what,
                value: self.width,
            });
        }
        if self.height < 0.0 {
            return Err(GeometryError::Negative {
                what,
                value: self.height,
            });
        }
        Ok(())
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
///
/// Anchors, screens and dialogs are all expressed as `Bounds`.
///
/// # Examples
///
/// ```
/// # use signpost_core::geometry::Bounds;
/// let anchor = Bounds::new(300.0, 400.0, 40.0, 40.0);
/// assert_eq!(anchor.max_x(), 340.0);
/// assert_eq!(anchor.mid_y(), 420.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from the top-left corner coordinates and the extent
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x, top_left.y, size.width, size.height)
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the horizontal center of the bounds
    pub fn mid_x(self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Returns the vertical center of the bounds
    pub fn mid_y(self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
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
            width: self.width(),
            height: self.height(),
        }
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Grows the bounds towards the top-left by `amount`.
    ///
    /// The origin moves up and left by `amount` while the extent grows by the
    /// same amount, so the bottom-right corner stays where it was.
    ///
    /// # Examples
    ///
    /// ```
    /// # use signpost_core::geometry::Bounds;
    /// let grown = Bounds::new(10.0, 10.0, 40.0, 40.0).grow_top_left(1.0);
    /// assert_eq!(grown.min_x(), 9.0);
    /// assert_eq!(grown.max_x(), 50.0);
    /// ```
    pub fn grow_top_left(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            ..*self
        }
    }

    /// Returns true if `point` lies inside or on the edge of the bounds
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Checks that the bounds have finite coordinates and a non-negative extent.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] or [`GeometryError::Negative`]
    /// naming `what`.
    pub fn validate(self, what: &'static str) -> Result<(), GeometryError> {
        if !self.min_point().is_finite() || !self.max_x.is_finite() || !self.max_y.is_finite() {
            return Err(GeometryError::NonFinite { what });
        }
        self.to_size().validate(what)
    }
}

/// Represents spacing around an element (padding, safe area, button insets)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates insets with one value for top/bottom and one for left/right
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }

    /// Checks that every side is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] naming `what` for the first offending side.
    pub fn validate(self, what: &'static str) -> Result<(), GeometryError> {
        for value in [self.top, self.right, self.bottom, self.left] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { what });
            }
            if value < 0.0 {
                return Err(GeometryError::Negative { what, value });
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, w, h))
    }

    fn check_grow_preserves_far_corner(b: Bounds, amount: f32) -> Result<(), TestCaseError> {
        let grown = b.grow_top_left(amount);
        prop_assert!(approx_eq!(f32, grown.max_x(), b.max_x()));
        prop_assert!(approx_eq!(f32, grown.max_y(), b.max_y()));
        prop_assert!(approx_eq!(f32, grown.width(), b.width() + amount, epsilon = 0.001));
        Ok(())
    }

    proptest! {
        #[test]
        fn grow_top_left_preserves_far_corner(b in bounds_strategy(), amount in 0.0f32..4.0) {
            check_grow_preserves_far_corner(b, amount)?;
        }
    }
}
