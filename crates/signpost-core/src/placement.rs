//! Anchor-relative placement of the tooltip dialog.
//!
//! Given the anchor rectangle, the dialog size, the screen bounds and a
//! [`PlacementConfig`], [`solve`] picks one of four sides of the anchor,
//! computes the dialog origin and builds the triangular pointer that connects
//! the dialog edge to the anchor.
//!
//! # Side selection
//!
//! Sides are tried in a fixed order and the first one with enough clearance
//! wins. [`Side`] is named after the direction the pointer points:
//!
//! ```text
//!   1. Right   dialog left of the anchor     [dialog]▶ anchor
//!   2. Left    dialog right of the anchor    anchor ◀[dialog]
//!   3. Bottom  dialog above the anchor       [dialog] / ▼ / anchor
//!   4. Top     dialog below the anchor       anchor / ▲ / [dialog]   (fallback)
//! ```
//!
//! Horizontal placements are preferred over vertical ones. The order is not
//! configurable.
//!
//! # Example
//!
//! ```
//! # use signpost_core::{geometry::{Bounds, Size}, placement::{self, PlacementConfig, Side}};
//! let anchor = Bounds::new(300.0, 400.0, 40.0, 40.0);
//! let screen = Bounds::new(0.0, 0.0, 375.0, 812.0);
//! let result = placement::solve(anchor, Size::new(200.0, 100.0), screen, &PlacementConfig::default());
//!
//! assert_eq!(result.side(), Side::Right);
//! assert_eq!(result.dialog_origin().x(), 92.0);
//! ```

use std::fmt;

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    error::{GeometryError, check_non_negative},
    geometry::{Bounds, Point, Size},
};

/// Geometry settings shared by sizing and placement.
///
/// All fields fall back to their defaults when deserialized from a partial
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    /// Height of the pointer triangle; its base is twice as wide.
    arrow_height: f32,

    /// Corner radius of the dialog.
    corner_radius: f32,

    /// Margin kept from the screen edges and from the anchor.
    tooltip_view_inset: f32,

    /// Extra top margin, typically the safe-area top.
    top_inset: f32,

    /// Extra bottom margin, typically the safe-area bottom.
    bottom_inset: f32,

    /// Growth applied to the anchor's top-left before placing.
    anchor_nudge: f32,

    /// Share of the screen width the dialog may occupy.
    max_width_ratio: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            arrow_height: 8.0,
            corner_radius: 8.0,
            tooltip_view_inset: 16.0,
            top_inset: 0.0,
            bottom_inset: 0.0,
            anchor_nudge: 0.0,
            max_width_ratio: 0.7,
        }
    }
}

impl PlacementConfig {
    pub fn with_arrow_height(mut self, arrow_height: f32) -> Self {
        self.arrow_height = arrow_height;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_tooltip_view_inset(mut self, inset: f32) -> Self {
        self.tooltip_view_inset = inset;
        self
    }

    /// Sets the extra top and bottom margins, usually the safe-area insets.
    pub fn with_safe_area(mut self, top: f32, bottom: f32) -> Self {
        self.top_inset = top;
        self.bottom_inset = bottom;
        self
    }

    pub fn with_anchor_nudge(mut self, nudge: f32) -> Self {
        self.anchor_nudge = nudge;
        self
    }

    /// Enables the one-unit anchor nudge used to hide anti-aliasing seams
    /// between the pointer apex and the anchor.
    pub fn with_anti_alias_nudge(self) -> Self {
        self.with_anchor_nudge(crate::anchor::ANTI_ALIAS_NUDGE)
    }

    pub fn with_max_width_ratio(mut self, ratio: f32) -> Self {
        self.max_width_ratio = ratio;
        self
    }

    pub fn arrow_height(&self) -> f32 {
        self.arrow_height
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn tooltip_view_inset(&self) -> f32 {
        self.tooltip_view_inset
    }

    pub fn top_inset(&self) -> f32 {
        self.top_inset
    }

    pub fn bottom_inset(&self) -> f32 {
        self.bottom_inset
    }

    pub fn anchor_nudge(&self) -> f32 {
        self.anchor_nudge
    }

    pub fn max_width_ratio(&self) -> f32 {
        self.max_width_ratio
    }

    /// Screen-edge margin plus the extra top margin.
    pub fn min_top_inset(&self) -> f32 {
        self.tooltip_view_inset + self.top_inset
    }

    /// Screen-edge margin plus the extra bottom margin.
    pub fn min_bottom_inset(&self) -> f32 {
        self.tooltip_view_inset + self.bottom_inset
    }

    /// Narrowest dialog that can still host the pointer and a corner.
    pub fn min_width(&self) -> f32 {
        self.arrow_height + self.corner_radius
    }

    /// Shortest dialog that can host the pointer with margins around it.
    pub fn min_height(&self) -> f32 {
        self.arrow_height * 2.0 + self.tooltip_view_inset * 2.0
    }

    /// Checks every field against its documented range.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] for non-finite or negative values, a
    /// non-positive arrow height, or a width ratio outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.arrow_height.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "arrow height",
            });
        }
        if self.arrow_height <= 0.0 {
            return Err(GeometryError::NonPositiveArrow(self.arrow_height));
        }
        check_non_negative("corner radius", self.corner_radius)?;
        check_non_negative("tooltip view inset", self.tooltip_view_inset)?;
        check_non_negative("top inset", self.top_inset)?;
        check_non_negative("bottom inset", self.bottom_inset)?;
        check_non_negative("anchor nudge", self.anchor_nudge)?;
        if !(self.max_width_ratio > 0.0 && self.max_width_ratio <= 1.0) {
            return Err(GeometryError::InvalidRatio(self.max_width_ratio));
        }
        Ok(())
    }
}

/// The direction the pointer points from the dialog towards the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Dialog left of the anchor.
    Right,
    /// Dialog right of the anchor.
    Left,
    /// Dialog above the anchor.
    Bottom,
    /// Dialog below the anchor. Used when no other side has clearance.
    Top,
}

/// Where the dialog sits relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPosition {
    LeftOfAnchor,
    RightOfAnchor,
    AboveAnchor,
    BelowAnchor,
}

impl Side {
    /// All sides in the order they are tried.
    pub const PRIORITY: [Side; 4] = [Side::Right, Side::Left, Side::Bottom, Side::Top];

    /// Returns where the dialog sits for this side.
    pub fn dialog_position(self) -> DialogPosition {
        match self {
            Self::Right => DialogPosition::LeftOfAnchor,
            Self::Left => DialogPosition::RightOfAnchor,
            Self::Bottom => DialogPosition::AboveAnchor,
            Self::Top => DialogPosition::BelowAnchor,
        }
    }

    /// Returns true for the two sides that place the dialog beside the anchor.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Top => "top",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The pointer polygon.
///
/// The first and last vertices lie on the dialog edge, the middle vertex is
/// the apex touching the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle([Point; 3]);

impl Triangle {
    pub fn new(base_start: Point, apex: Point, base_end: Point) -> Self {
        Self([base_start, apex, base_end])
    }

    /// Returns the vertices in path order.
    pub fn points(&self) -> [Point; 3] {
        self.0
    }

    /// Returns the tip of the pointer.
    pub fn apex(&self) -> Point {
        self.0[1]
    }

    /// Returns the two vertices on the dialog edge.
    pub fn base(&self) -> (Point, Point) {
        (self.0[0], self.0[2])
    }

    /// Returns the triangle moved by `offset`.
    pub fn translate(&self, offset: Point) -> Self {
        Self(self.0.map(|point| point.offset(offset.x(), offset.y())))
    }

    /// Returns the vertices followed by the first one again, closing the
    /// outline.
    pub fn closed_path(&self) -> [Point; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[0]]
    }
}

/// Output of one placement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    side: Side,
    dialog_origin: Point,
    dialog_size: Size,
    arrow: Triangle,
}

impl PlacementResult {
    pub fn side(&self) -> Side {
        self.side
    }

    /// Top-left corner of the dialog in screen coordinates.
    pub fn dialog_origin(&self) -> Point {
        self.dialog_origin
    }

    pub fn dialog_size(&self) -> Size {
        self.dialog_size
    }

    pub fn arrow(&self) -> Triangle {
        self.arrow
    }

    pub fn dialog_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.dialog_origin, self.dialog_size)
    }

    /// Returns true if the dialog crosses the far edges of `screen`.
    ///
    /// Placement only floors the origin against the near edges, so a wide
    /// dialog next to the right or bottom edge can extend past the screen.
    pub fn overflows(&self, screen: Bounds) -> bool {
        let dialog = self.dialog_bounds();
        dialog.max_x() > screen.max_x() || dialog.max_y() > screen.max_y()
    }
}

/// Computes the placement, panicking on malformed input.
///
/// See [`try_solve`] for the checked variant.
///
/// # Panics
///
/// Panics if any input is non-finite or has a negative extent, or if the
/// configuration is out of range.
pub fn solve(
    anchor: Bounds,
    content: Size,
    screen: Bounds,
    config: &PlacementConfig,
) -> PlacementResult {
    match try_solve(anchor, content, screen, config) {
        Ok(result) => result,
        Err(err) => panic!("tooltip placement precondition violated: {err}"),
    }
}

/// Computes the placement after validating every input.
///
/// The screen need not start at the origin; anchor, screen and result share
/// one coordinate space.
///
/// # Errors
///
/// Returns a [`GeometryError`] describing the first violated precondition.
pub fn try_solve(
    anchor: Bounds,
    content: Size,
    screen: Bounds,
    config: &PlacementConfig,
) -> Result<PlacementResult, GeometryError> {
    anchor.validate("anchor")?;
    content.validate("content size")?;
    screen.validate("screen")?;
    config.validate()?;

    trace!(anchor:?, content:?, screen:?; "Solving tooltip placement");

    // Solve relative to the screen's top-left, then map back.
    let offset = screen.min_point();
    let anchor = anchor
        .translate(Point::new(-offset.x(), -offset.y()))
        .grow_top_left(config.anchor_nudge);
    let extent = screen.to_size();

    let side = choose_side(anchor, content, extent, config);
    let dialog_origin =
        dialog_origin(side, anchor, content, extent, config).offset(offset.x(), offset.y());
    let arrow = arrow_polygon(side, anchor, config.arrow_height).translate(offset);

    debug!(side = side.name(), origin:? = dialog_origin; "Tooltip placed");

    Ok(PlacementResult {
        side,
        dialog_origin,
        dialog_size: content,
        arrow,
    })
}

/// Returns the first side in [`Side::PRIORITY`] with enough clearance.
fn choose_side(anchor: Bounds, content: Size, screen: Size, config: &PlacementConfig) -> Side {
    let arrow = config.arrow_height;
    let inset = config.tooltip_view_inset;

    if anchor.min_x() - content.width() - arrow - inset > 0.0 {
        Side::Right
    } else if anchor.max_x() + content.width() + arrow + inset < screen.width() {
        Side::Left
    } else if anchor.min_y() - content.height() - arrow - config.min_bottom_inset() > 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

fn dialog_origin(
    side: Side,
    anchor: Bounds,
    content: Size,
    screen: Size,
    config: &PlacementConfig,
) -> Point {
    let arrow = config.arrow_height;
    let inset = config.tooltip_view_inset;
    let (width, height) = (content.width(), content.height());

    match side {
        Side::Right | Side::Left => {
            let bottom_space = (screen.height() - height - anchor.mid_y()).max(0.0);
            let y = screen.height() - (bottom_space + height) - inset * 2.0;
            let x = match side {
                Side::Right => anchor.min_x() - (arrow + width),
                _ => anchor.max_x() + arrow,
            };
            Point::new(x, y.max(inset))
        }
        Side::Bottom | Side::Top => {
            let right_space = (screen.width() - width - anchor.mid_x()).max(0.0);
            let x = screen.width() - right_space - width - inset * 2.0;
            let y = match side {
                Side::Bottom => anchor.min_y() - height - arrow,
                _ => anchor.max_y() + arrow,
            };
            Point::new(x.max(inset), y)
        }
    }
}

fn arrow_polygon(side: Side, anchor: Bounds, arrow: f32) -> Triangle {
    match side {
        Side::Right => {
            let apex = Point::new(anchor.min_x(), anchor.mid_y());
            Triangle::new(apex.offset(-arrow, -arrow), apex, apex.offset(-arrow, arrow))
        }
        Side::Left => {
            let apex = Point::new(anchor.max_x(), anchor.mid_y());
            Triangle::new(apex.offset(arrow, -arrow), apex, apex.offset(arrow, arrow))
        }
        Side::Bottom => {
            let apex = Point::new(anchor.mid_x(), anchor.min_y());
            Triangle::new(apex.offset(-arrow, -arrow), apex, apex.offset(arrow, -arrow))
        }
        Side::Top => {
            let apex = Point::new(anchor.mid_x(), anchor.max_y());
            Triangle::new(apex.offset(-arrow, arrow), apex, apex.offset(arrow, arrow))
        }
    }
}
