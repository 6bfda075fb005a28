//! The dimming layer behind the dialog.
//!
//! The backdrop covers the whole screen in translucent black. Highlighted
//! elements are cut out of it so they stay visible next to the tooltip; the
//! renderer fills the screen outline together with every highlight outline
//! using the even-odd rule.

use log::debug;

use signpost_core::{
    GeometryError,
    geometry::{Bounds, Point},
};

/// A hole punched into the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    bounds: Bounds,
    corner_radius: f32,
}

impl Highlight {
    /// Creates a square-cornered highlight.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            corner_radius: 0.0,
        }
    }

    /// Rounds the highlight corners, matching the highlighted element's shape.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Corner radius, limited to half the shorter side.
    pub fn corner_radius(&self) -> f32 {
        let limit = self.bounds.width().min(self.bounds.height()) / 2.0;
        self.corner_radius.min(limit).max(0.0)
    }
}

impl From<Bounds> for Highlight {
    fn from(bounds: Bounds) -> Self {
        Self::new(bounds)
    }
}

/// Screen-sized dim layer with optional highlight holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    screen: Bounds,
    alpha: f32,
    highlights: Vec<Highlight>,
}

impl Backdrop {
    /// Creates a backdrop covering `screen`, dimmed to `alpha`.
    pub fn new(screen: Bounds, alpha: f32) -> Self {
        Self {
            screen,
            alpha,
            highlights: Vec::new(),
        }
    }

    /// Punches the given highlights into the backdrop.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if a highlight rectangle is malformed.
    pub fn with_highlights(
        mut self,
        highlights: impl IntoIterator<Item = Highlight>,
    ) -> Result<Self, GeometryError> {
        for highlight in highlights {
            highlight.bounds.validate("highlight")?;
            self.highlights.push(highlight);
        }
        debug!(holes = self.highlights.len(); "Backdrop highlights applied");
        Ok(self)
    }

    pub fn screen(&self) -> Bounds {
        self.screen
    }

    /// Opacity of the black fill.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Returns true when the backdrop must be drawn as a path with holes
    /// instead of a plain rectangle.
    pub fn has_holes(&self) -> bool {
        !self.highlights.is_empty()
    }

    /// Returns true if `point` falls on the dimmed area, outside every
    /// highlight.
    pub fn is_dimmed_at(&self, point: Point) -> bool {
        self.screen.contains_point(point)
            && !self
                .highlights
                .iter()
                .any(|highlight| highlight.bounds.contains_point(point))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn screen() -> Bounds {
        Bounds::new(0.0, 0.0, 375.0, 812.0)
    }

    #[test]
    fn test_plain_backdrop() {
        let backdrop = Backdrop::new(screen(), 0.3);
        assert!(!backdrop.has_holes());
        assert_approx_eq!(f32, backdrop.alpha(), 0.3);
        assert!(backdrop.is_dimmed_at(Point::new(10.0, 10.0)));
        assert!(!backdrop.is_dimmed_at(Point::new(400.0, 10.0)));
    }

    #[test]
    fn test_highlight_is_not_dimmed() {
        let backdrop = Backdrop::new(screen(), 0.3)
            .with_highlights([Highlight::new(Bounds::new(100.0, 100.0, 50.0, 50.0))])
            .unwrap();

        assert!(backdrop.has_holes());
        assert!(!backdrop.is_dimmed_at(Point::new(120.0, 120.0)));
        assert!(backdrop.is_dimmed_at(Point::new(90.0, 120.0)));
    }

    #[test]
    fn test_corner_radius_is_limited() {
        let highlight =
            Highlight::new(Bounds::new(0.0, 0.0, 40.0, 20.0)).with_corner_radius(30.0);
        assert_approx_eq!(f32, highlight.corner_radius(), 10.0);
    }

    #[test]
    fn test_malformed_highlight_rejected() {
        let result = Backdrop::new(screen(), 0.3)
            .with_highlights([Highlight::new(Bounds::new(f32::NAN, 0.0, 10.0, 10.0))]);
        assert!(result.is_err());
    }
}
