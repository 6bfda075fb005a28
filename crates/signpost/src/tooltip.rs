//! The tooltip description supplied by the host.

use signpost_core::{
    anchor::Anchor,
    content::{ActionItem, ContentItem},
    geometry::{Bounds, Size},
    placement::PlacementConfig,
};

use crate::backdrop::Highlight;

/// A button pinned to the top-left of the screen, outside the dialog.
///
/// Typically used for a "Skip" action in multi-step tours. Tapping it runs
/// its handler; it does not dismiss the tooltip on its own.
#[derive(Debug, Clone)]
pub struct TopAction {
    action: ActionItem,
}

impl TopAction {
    pub fn new(action: ActionItem) -> Self {
        Self { action }
    }

    pub fn action(&self) -> &ActionItem {
        &self.action
    }

    /// Frame of the button on screen.
    ///
    /// The button sits at the tooltip view inset from the left edge, just
    /// below the top safe area, sized to its title.
    pub fn frame(&self, screen: Bounds, config: &PlacementConfig, line_height: f32) -> Bounds {
        let size = Size::new(
            self.action.content_width(),
            self.action.insets().vertical_sum() + line_height,
        );
        Bounds::new(
            screen.min_x() + config.tooltip_view_inset(),
            screen.min_y() + config.min_top_inset(),
            size.width(),
            size.height(),
        )
    }

    /// Runs the button handler, if any.
    pub fn invoke(&self) {
        if let Some(handler) = self.action.handler() {
            handler.invoke();
        }
    }
}

/// Everything needed to present one tooltip.
///
/// # Examples
///
/// ```
/// # use signpost::{Tooltip, anchor::Anchor, content::TextItem};
/// let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
///     .with_item(TextItem::new("Tap to continue", 120.0))
///     .with_closable(true);
/// assert_eq!(tooltip.items().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    anchor: Anchor,
    items: Vec<ContentItem>,
    highlights: Vec<Highlight>,
    closable: Option<bool>,
    top_action: Option<TopAction>,
}

impl Tooltip {
    /// Creates an empty tooltip pointing at `anchor`.
    pub fn new(anchor: impl Into<Anchor>) -> Self {
        Self {
            anchor: anchor.into(),
            ..Self::default()
        }
    }

    /// Appends a content row.
    pub fn with_item(mut self, item: impl Into<ContentItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends several content rows.
    pub fn with_items(mut self, items: impl IntoIterator<Item = ContentItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Punches a highlight hole into the backdrop.
    pub fn with_highlight(mut self, highlight: impl Into<Highlight>) -> Self {
        self.highlights.push(highlight.into());
        self
    }

    /// Overrides the configured close button setting for this tooltip.
    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    pub fn with_top_action(mut self, top_action: TopAction) -> Self {
        self.top_action = Some(top_action);
        self
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// The per-tooltip close button override, if set.
    pub fn closable(&self) -> Option<bool> {
        self.closable
    }

    pub fn top_action(&self) -> Option<&TopAction> {
        self.top_action.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use float_cmp::assert_approx_eq;

    use signpost_core::content::{ActionHandler, TextItem};

    use super::*;

    #[test]
    fn test_top_action_frame_below_safe_area() {
        let top = TopAction::new(ActionItem::new("Skip", 30.0));
        let config = PlacementConfig::default().with_safe_area(47.0, 34.0);
        let frame = top.frame(Bounds::new(0.0, 0.0, 375.0, 812.0), &config, 20.0);

        assert_eq!(frame, Bounds::new(16.0, 63.0, 62.0, 36.0));
    }

    #[test]
    fn test_top_action_invokes_handler() {
        let taps = Rc::new(Cell::new(0));
        let counter = Rc::clone(&taps);
        let top = TopAction::new(
            ActionItem::new("Skip", 30.0)
                .with_handler(ActionHandler::new(move || counter.set(counter.get() + 1))),
        );

        top.invoke();
        top.invoke();
        assert_eq!(taps.get(), 2);
    }

    #[test]
    fn test_tooltip_builder_methods() {
        let tooltip = Tooltip::new(Anchor::Unresolved)
            .with_item(TextItem::new("a", 10.0))
            .with_items([ContentItem::from(TextItem::new("b", 20.0))])
            .with_highlight(Bounds::new(0.0, 0.0, 10.0, 10.0));

        assert!(tooltip.anchor().is_unresolved());
        assert_eq!(tooltip.items().len(), 2);
        assert_eq!(tooltip.highlights().len(), 1);
        assert_eq!(tooltip.closable(), None);
        assert!(tooltip.top_action().is_none());
        assert_approx_eq!(f32, tooltip.items()[1].content_width(), 52.0);
    }
}
