//! The element a tooltip points at.
//!
//! Hosts resolve the anchor from a live element's on-screen frame, or pass a
//! literal rectangle. When the element cannot be resolved the anchor is
//! [`Anchor::Unresolved`], which placement treats as a zero rectangle at the
//! screen origin.

use log::warn;

use crate::geometry::Bounds;

/// Nudge applied by the richer widget family so the arrow apex overlaps the
/// anchor edge instead of leaving a hairline seam.
pub const ANTI_ALIAS_NUDGE: f32 = 1.0;

/// Screen rectangle of the element the tooltip points at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Anchor {
    /// A resolved anchor rectangle in screen coordinates.
    Bounds(Bounds),
    /// The element could not be resolved to a screen position.
    #[default]
    Unresolved,
}

impl Anchor {
    /// Creates a resolved anchor from top-left coordinates and extent.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Bounds(Bounds::new(x, y, width, height))
    }

    /// Returns true when the anchor has no known position.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    /// Returns the anchor rectangle used for placement.
    ///
    /// An unresolved anchor falls back to an all-zero rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use signpost_core::{anchor::Anchor, geometry::Bounds};
    /// assert_eq!(Anchor::Unresolved.resolve(), Bounds::default());
    /// assert_eq!(Anchor::new(1.0, 2.0, 3.0, 4.0).resolve(), Bounds::new(1.0, 2.0, 3.0, 4.0));
    /// ```
    pub fn resolve(&self) -> Bounds {
        match self {
            Self::Bounds(bounds) => *bounds,
            Self::Unresolved => {
                warn!("Anchor is unresolved, placing tooltip against the screen origin");
                Bounds::default()
            }
        }
    }
}

impl From<Bounds> for Anchor {
    fn from(bounds: Bounds) -> Self {
        Self::Bounds(bounds)
    }
}

impl From<Option<Bounds>> for Anchor {
    fn from(bounds: Option<Bounds>) -> Self {
        bounds.map_or(Self::Unresolved, Self::Bounds)
    }
}
