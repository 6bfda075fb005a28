//! Row layout inside the dialog.
//!
//! Content items are stacked top to bottom, optionally below a close button
//! header. The stacked height becomes the content height that
//! [`signpost_core::sizing::dialog_size`] clamps, and the recorded frames
//! drive rendering and hit testing.
//!
//! All frames are relative to the dialog's top-left corner.

use log::debug;

use signpost_core::{
    content::{ActionsAlignment, ActionsItem, ContentItem, ImageItem, TextItem},
    geometry::{Bounds, Point},
};

/// Height of the close button header, and the side of the close button.
pub const CLOSE_HEADER_HEIGHT: f32 = 32.0;

/// Vertical padding above and below a text row.
pub const TEXT_ROW_PADDING: f32 = 8.0;

/// Vertical padding above and below image and action rows.
pub const BLOCK_ROW_PADDING: f32 = 16.0;

/// What a row holds, with the frames of its parts.
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// The close header with its trailing close button.
    CloseButton(Bounds),
    /// A text block with an optional leading icon.
    Text {
        icon: Option<Bounds>,
        text: Bounds,
        lines: usize,
    },
    /// An image frame.
    Image(Bounds),
    /// One frame per action button, in declaration order.
    Actions(Vec<Bounds>),
}

/// A laid-out row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFrame {
    item: Option<usize>,
    bounds: Bounds,
    content: RowContent,
}

impl RowFrame {
    /// Index into the tooltip items, or `None` for the close header.
    pub fn item(&self) -> Option<usize> {
        self.item
    }

    /// The full row, spanning the dialog width.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn content(&self) -> &RowContent {
        &self.content
    }
}

/// The stacked rows of one tooltip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentLayout {
    width: f32,
    rows: Vec<RowFrame>,
}

impl ContentLayout {
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Total height of all rows.
    pub fn height(&self) -> f32 {
        self.rows.last().map_or(0.0, |row| row.bounds.max_y())
    }

    pub fn rows(&self) -> &[RowFrame] {
        &self.rows
    }

    /// Returns the close button frame when the header is present.
    pub fn close_button(&self) -> Option<Bounds> {
        self.rows.iter().find_map(|row| match row.content {
            RowContent::CloseButton(bounds) => Some(bounds),
            _ => None,
        })
    }

    /// Returns `(item index, action index)` of the button under `point`.
    pub fn action_at(&self, point: Point) -> Option<(usize, usize)> {
        self.rows.iter().find_map(|row| {
            let (Some(item), RowContent::Actions(buttons)) = (row.item, &row.content) else {
                return None;
            };
            buttons
                .iter()
                .position(|button| button.contains_point(point))
                .map(|action| (item, action))
        })
    }
}

/// Stacks content rows at a given dialog width.
///
/// # Examples
///
/// ```
/// # use signpost::layout::{RowLayout, CLOSE_HEADER_HEIGHT};
/// let layout = RowLayout::new(16.0).with_close_header(true).layout(&[], 200.0);
/// assert_eq!(layout.height(), CLOSE_HEADER_HEIGHT);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RowLayout {
    line_height: f32,
    close_header: bool,
}

impl RowLayout {
    /// Creates a row layout for labels of the given line height.
    pub fn new(line_height: f32) -> Self {
        Self {
            line_height,
            close_header: false,
        }
    }

    /// Adds the close button header above the rows.
    pub fn with_close_header(mut self, close_header: bool) -> Self {
        self.close_header = close_header;
        self
    }

    /// Lays out `items` at `width`.
    pub fn layout(&self, items: &[ContentItem], width: f32) -> ContentLayout {
        let mut rows = Vec::with_capacity(items.len() + 1);
        let mut y = 0.0;

        if self.close_header {
            let bounds = Bounds::new(0.0, y, width, CLOSE_HEADER_HEIGHT);
            let button = Bounds::new(
                width - CLOSE_HEADER_HEIGHT,
                y,
                CLOSE_HEADER_HEIGHT,
                CLOSE_HEADER_HEIGHT,
            );
            rows.push(RowFrame {
                item: None,
                bounds,
                content: RowContent::CloseButton(button),
            });
            y += CLOSE_HEADER_HEIGHT;
        }

        for (index, item) in items.iter().enumerate() {
            let (height, content) = match item {
                ContentItem::Text(text) => self.text_row(text, width, y),
                ContentItem::Image(image) => Self::image_row(image, width, y),
                ContentItem::Actions(actions) => self.actions_row(actions, width, y),
            };
            rows.push(RowFrame {
                item: Some(index),
                bounds: Bounds::new(0.0, y, width, height),
                content,
            });
            y += height;
        }

        debug!(rows = rows.len(), width, height = y; "Content rows laid out");

        ContentLayout { width, rows }
    }

    fn text_row(&self, item: &TextItem, width: f32, y: f32) -> (f32, RowContent) {
        let spacing = item.spacing();
        let top = y + TEXT_ROW_PADDING;

        let (icon, text_x) = match item.icon() {
            Some(icon) => (
                Some(Bounds::new(spacing, top, icon.size(), icon.size())),
                spacing + icon.size() + spacing,
            ),
            None => (None, spacing),
        };
        let icon_height = item.icon().map_or(0.0, |icon| icon.size());

        let available = (width - text_x - spacing).max(0.0);
        let explicit_lines = item.text().lines().count().max(1);
        // A wrapped line holds at least one character.
        let max_lines = item.text().chars().count().max(1);
        let wrapped_lines = if available > 0.0 {
            ((item.text_width() / available).ceil() as usize).min(max_lines)
        } else {
            1
        };
        let lines = explicit_lines.max(wrapped_lines);

        let text_height = self.line_height * lines as f32;
        let text = Bounds::new(text_x, top, item.text_width().min(available), text_height);
        let height = text_height.max(icon_height) + 2.0 * TEXT_ROW_PADDING;

        (height, RowContent::Text { icon, text, lines })
    }

    fn image_row(item: &ImageItem, width: f32, y: f32) -> (f32, RowContent) {
        let size = item.size();
        let available = (width - 2.0 * item.spacing()).max(0.0);
        let image_width = size.width().min(available);
        let x = (width - image_width) / 2.0;

        let frame = Bounds::new(x, y + BLOCK_ROW_PADDING, image_width, size.height());
        (
            size.height() + 2.0 * BLOCK_ROW_PADDING,
            RowContent::Image(frame),
        )
    }

    fn actions_row(&self, item: &ActionsItem, width: f32, y: f32) -> (f32, RowContent) {
        let spacing = item.spacing();
        let widths: Vec<f32> = item.actions().map(|action| action.content_width()).collect();
        let heights: Vec<f32> = item
            .actions()
            .map(|action| action.insets().vertical_sum() + self.line_height)
            .collect();

        let gap = if widths.get(1).is_some_and(|second| *second > 0.0) {
            spacing
        } else {
            0.0
        };
        let total: f32 = widths.iter().sum::<f32>() + gap;

        let mut x = match item.alignment() {
            ActionsAlignment::Leading => spacing,
            ActionsAlignment::Center => (width - total) / 2.0,
            ActionsAlignment::Trailing => width - spacing - total,
        };

        let top = y + BLOCK_ROW_PADDING;
        let mut buttons = Vec::with_capacity(widths.len());
        for (button_width, button_height) in widths.iter().zip(&heights) {
            buttons.push(Bounds::new(x, top, *button_width, *button_height));
            x += button_width + gap;
        }

        let button_height = heights.iter().copied().fold(0.0_f32, f32::max);
        (
            button_height + 2.0 * BLOCK_ROW_PADDING,
            RowContent::Actions(buttons),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use signpost_core::{
        content::{ActionItem, Icon},
        geometry::Size,
    };

    use super::*;

    const LINE: f32 = 20.0;

    fn text_bounds(row: &RowFrame) -> (Option<Bounds>, Bounds, usize) {
        match row.content() {
            RowContent::Text { icon, text, lines } => (*icon, *text, *lines),
            other => panic!("expected text row, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_layout() {
        let layout = RowLayout::new(LINE).layout(&[], 200.0);
        assert!(layout.rows().is_empty());
        assert_approx_eq!(f32, layout.height(), 0.0);
        assert!(layout.close_button().is_none());
    }

    #[test]
    fn test_close_header_comes_first() {
        let items = vec![ContentItem::from(TextItem::new("Hello", 50.0))];
        let layout = RowLayout::new(LINE)
            .with_close_header(true)
            .layout(&items, 200.0);

        assert_eq!(layout.rows().len(), 2);
        assert_eq!(layout.rows()[0].item(), None);
        assert_eq!(
            layout.close_button(),
            Some(Bounds::new(168.0, 0.0, 32.0, 32.0))
        );
        assert_approx_eq!(f32, layout.rows()[1].bounds().min_y(), 32.0);
        assert_approx_eq!(f32, layout.height(), 32.0 + LINE + 16.0);
    }

    #[test]
    fn test_single_line_text_row() {
        let items = vec![ContentItem::from(TextItem::new("Hello", 50.0))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);

        let (icon, text, lines) = text_bounds(&layout.rows()[0]);
        assert!(icon.is_none());
        assert_eq!(lines, 1);
        assert_eq!(text, Bounds::new(16.0, 8.0, 50.0, LINE));
        assert_approx_eq!(f32, layout.height(), 36.0);
    }

    #[test]
    fn test_text_wraps_at_available_width() {
        let items = vec![ContentItem::from(TextItem::new("long", 300.0))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);

        let (_, text, lines) = text_bounds(&layout.rows()[0]);
        // 300 / (200 - 32) rounds up to 2 lines
        assert_eq!(lines, 2);
        assert_approx_eq!(f32, text.width(), 168.0);
        assert_approx_eq!(f32, layout.height(), 2.0 * LINE + 16.0);
    }

    #[test]
    fn test_wrapping_bounded_by_text_length() {
        let items = vec![ContentItem::from(TextItem::new("hello world", 1.0e15))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);

        let (_, text, lines) = text_bounds(&layout.rows()[0]);
        assert_eq!(lines, 11);
        assert_approx_eq!(f32, text.width(), 168.0);
        assert_approx_eq!(f32, layout.height(), 11.0 * LINE + 16.0);
    }

    #[test]
    fn test_explicit_newlines_count_as_lines() {
        let items = vec![ContentItem::from(TextItem::new("a\nb\nc", 10.0))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);

        let (_, _, lines) = text_bounds(&layout.rows()[0]);
        assert_eq!(lines, 3);
    }

    #[test]
    fn test_icon_shifts_text_and_sets_minimum_height() {
        let item = TextItem::new("", 0.0).with_icon(Icon::new("info").with_size(30.0));
        let layout = RowLayout::new(LINE).layout(&[ContentItem::from(item)], 200.0);

        let (icon, text, _) = text_bounds(&layout.rows()[0]);
        assert_eq!(icon, Some(Bounds::new(16.0, 8.0, 30.0, 30.0)));
        assert_approx_eq!(f32, text.min_x(), 62.0);
        assert_approx_eq!(f32, layout.height(), 46.0);
    }

    #[test]
    fn test_image_row_is_centered() {
        let items = vec![ContentItem::from(ImageItem::new(Size::new(100.0, 60.0)))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);

        assert_eq!(
            layout.rows()[0].content(),
            &RowContent::Image(Bounds::new(50.0, 16.0, 100.0, 60.0))
        );
        assert_approx_eq!(f32, layout.height(), 92.0);
    }

    #[test]
    fn test_image_narrowed_to_row() {
        let items = vec![ContentItem::from(ImageItem::new(Size::new(500.0, 60.0)))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);

        let RowContent::Image(frame) = layout.rows()[0].content() else {
            panic!("expected image row");
        };
        assert_approx_eq!(f32, frame.width(), 168.0);
        assert_approx_eq!(f32, frame.min_x(), 16.0);
    }

    #[test]
    fn test_actions_alignment() {
        let actions = ActionsItem::new(ActionItem::new("OK", 20.0))
            .with_second(ActionItem::new("Cancel", 48.0));
        // widths 52 and 80, gap 16, total 148
        let cases = [
            (ActionsAlignment::Leading, 16.0),
            (ActionsAlignment::Center, 26.0),
            (ActionsAlignment::Trailing, 36.0),
        ];

        for (alignment, expected_x) in cases {
            let items = vec![ContentItem::from(actions.clone().with_alignment(alignment))];
            let layout = RowLayout::new(LINE).layout(&items, 200.0);

            let RowContent::Actions(buttons) = layout.rows()[0].content() else {
                panic!("expected actions row");
            };
            assert_eq!(buttons.len(), 2);
            assert_approx_eq!(f32, buttons[0].min_x(), expected_x);
            assert_approx_eq!(f32, buttons[1].min_x(), expected_x + 52.0 + 16.0);
            assert_approx_eq!(f32, buttons[0].height(), 16.0 + LINE);
        }
    }

    #[test]
    fn test_actions_row_height() {
        let items = vec![ContentItem::from(ActionsItem::new(ActionItem::new("OK", 20.0)))];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);
        // 32 padding + 16 insets + one line
        assert_approx_eq!(f32, layout.height(), 68.0);
    }

    #[test]
    fn test_action_hit_testing() {
        let items = vec![
            ContentItem::from(TextItem::new("Hello", 50.0)),
            ContentItem::from(
                ActionsItem::new(ActionItem::new("OK", 20.0))
                    .with_second(ActionItem::new("Later", 40.0)),
            ),
        ];
        let layout = RowLayout::new(LINE).layout(&items, 200.0);
        // actions row starts at 36, buttons at 52
        assert_eq!(layout.action_at(Point::new(20.0, 60.0)), Some((1, 0)));
        assert_eq!(layout.action_at(Point::new(90.0, 60.0)), Some((1, 1)));
        assert_eq!(layout.action_at(Point::new(75.0, 60.0)), None);
        assert_eq!(layout.action_at(Point::new(20.0, 10.0)), None);
    }
}
