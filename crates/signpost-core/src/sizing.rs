//! Tooltip width from content, and dialog size clamped to the screen.
//!
//! [`tooltip_width`] derives the width the content asks for. The host then
//! lays out its rows at that width to get a content height, and
//! [`dialog_size`] clamps both values to what the screen allows before the
//! placement solver runs.

use log::debug;

use crate::{
    content::ContentItem,
    geometry::{Bounds, Size},
    placement::PlacementConfig,
};

/// Returns the tooltip width requested by `items`.
///
/// The widest item wins, floored at `arrow_height + corner_radius` and
/// rounded up to a whole unit. An empty list yields the floor.
///
/// # Examples
///
/// ```
/// # use signpost_core::{placement::PlacementConfig, sizing::tooltip_width};
/// assert_eq!(tooltip_width(&[], &PlacementConfig::default()), 16.0);
/// ```
pub fn tooltip_width(items: &[ContentItem], config: &PlacementConfig) -> f32 {
    let widest = items
        .iter()
        .map(ContentItem::content_width)
        .fold(0.0_f32, f32::max);
    widest.max(config.min_width()).ceil()
}

/// Clamps the requested dialog size to the screen.
///
/// The width is capped at `screen.width * max_width_ratio`. The height is
/// capped by the space between the top and bottom insets and floored at
/// [`PlacementConfig::min_height`], so the floor wins on very short screens.
pub fn dialog_size(
    tooltip_width: f32,
    content_height: f32,
    screen: Bounds,
    config: &PlacementConfig,
) -> Size {
    let width = tooltip_width.min(screen.width() * config.max_width_ratio());
    let max_height = screen.height() - config.min_top_inset() - config.min_bottom_inset();
    let height = content_height.min(max_height).max(config.min_height());

    debug!(width, height, content_height; "Dialog size clamped");

    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::content::{ActionItem, ActionsItem, ImageItem, TextItem};

    fn screen() -> Bounds {
        Bounds::new(0.0, 0.0, 375.0, 812.0)
    }

    #[test]
    fn test_empty_items_yield_floor() {
        assert_approx_eq!(f32, tooltip_width(&[], &PlacementConfig::default()), 16.0);
    }

    #[test]
    fn test_floor_follows_config() {
        let config = PlacementConfig::default()
            .with_arrow_height(10.5)
            .with_corner_radius(12.0);
        assert_approx_eq!(f32, tooltip_width(&[], &config), 23.0);
    }

    #[test]
    fn test_widest_item_wins() {
        let items = vec![
            ContentItem::from(TextItem::new("short", 40.0)),
            ContentItem::from(ImageItem::new(Size::new(150.0, 90.0))),
            ContentItem::from(ActionsItem::new(ActionItem::new("OK", 20.0))),
        ];
        assert_approx_eq!(f32, tooltip_width(&items, &PlacementConfig::default()), 182.0);
    }

    #[test]
    fn test_width_rounds_up() {
        let items = vec![ContentItem::from(TextItem::new("x", 100.2))];
        assert_approx_eq!(f32, tooltip_width(&items, &PlacementConfig::default()), 133.0);
    }

    #[test]
    fn test_dialog_width_capped_at_ratio() {
        let size = dialog_size(400.0, 100.0, screen(), &PlacementConfig::default());
        assert_approx_eq!(f32, size.width(), 262.5);
        assert_approx_eq!(f32, size.height(), 100.0);
    }

    #[test]
    fn test_dialog_height_capped_by_insets() {
        let config = PlacementConfig::default().with_safe_area(47.0, 34.0);
        let size = dialog_size(200.0, 2000.0, screen(), &config);
        // 812 - 63 - 50
        assert_approx_eq!(f32, size.height(), 699.0);
    }

    #[test]
    fn test_dialog_height_floored() {
        let size = dialog_size(200.0, 10.0, screen(), &PlacementConfig::default());
        assert_approx_eq!(f32, size.height(), 48.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::content::{ImageItem, TextItem};

    fn config_strategy() -> impl Strategy<Value = PlacementConfig> {
        (0.5f32..40.0, 0.0f32..40.0).prop_map(|(arrow, radius)| {
            PlacementConfig::default()
                .with_arrow_height(arrow)
                .with_corner_radius(radius)
        })
    }

    fn widths_strategy() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(0.0f32..600.0, 0..8)
    }

    fn items_from(widths: &[f32]) -> Vec<ContentItem> {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                if index % 2 == 0 {
                    ContentItem::from(TextItem::new("row", *width))
                } else {
                    ContentItem::from(ImageItem::new(Size::new(*width, 10.0)))
                }
            })
            .collect()
    }

    fn check_width_floor(widths: Vec<f32>, config: PlacementConfig) -> Result<(), TestCaseError> {
        let width = tooltip_width(&items_from(&widths), &config);
        prop_assert!(width >= config.arrow_height() + config.corner_radius());
        prop_assert_eq!(width, width.ceil());
        Ok(())
    }

    fn check_width_monotonic(
        widths: Vec<f32>,
        index: prop::sample::Index,
        growth: f32,
    ) -> Result<(), TestCaseError> {
        prop_assume!(!widths.is_empty());
        let config = PlacementConfig::default();
        let before = tooltip_width(&items_from(&widths), &config);

        let mut grown = widths.clone();
        let slot = index.index(grown.len());
        grown[slot] += growth;
        let after = tooltip_width(&items_from(&grown), &config);

        prop_assert!(after >= before, "{after} < {before}");
        Ok(())
    }

    fn check_dialog_size_bounds(
        width: f32,
        height: f32,
        screen_height: f32,
    ) -> Result<(), TestCaseError> {
        let config = PlacementConfig::default();
        let screen = Bounds::new(0.0, 0.0, 375.0, screen_height);
        let size = dialog_size(width, height, screen, &config);
        prop_assert!(size.width() <= screen.width() * config.max_width_ratio());
        prop_assert!(size.height() >= config.min_height());
        Ok(())
    }

    proptest! {
        #[test]
        fn width_never_below_floor(widths in widths_strategy(), config in config_strategy()) {
            check_width_floor(widths, config)?;
        }

        #[test]
        fn width_is_monotonic(
            widths in widths_strategy(),
            index in any::<prop::sample::Index>(),
            growth in 0.0f32..200.0,
        ) {
            check_width_monotonic(widths, index, growth)?;
        }

        #[test]
        fn dialog_size_respects_limits(
            width in 0.0f32..1000.0,
            height in 0.0f32..2000.0,
            screen_height in 100.0f32..1500.0,
        ) {
            check_dialog_size_bounds(width, height, screen_height)?;
        }
    }
}
