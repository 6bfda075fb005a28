//! Tooltip content items and their intrinsic widths.
//!
//! A tooltip is a vertical list of rows. Each row is a [`ContentItem`]: a text
//! line with an optional leading icon, an image, or a row of one or two action
//! buttons. The host measures text and supplies the intrinsic widths; each
//! item then reports the width it needs via [`ContentItem::content_width`].
//!
//! # Example
//!
//! ```
//! # use signpost_core::content::{ActionItem, ActionsItem, ContentItem, Icon, TextItem};
//! let items = vec![
//!     ContentItem::Text(TextItem::new("Tap to sync", 90.0).with_icon(Icon::new("sync"))),
//!     ContentItem::Actions(ActionsItem::new(ActionItem::new("OK", 20.0))),
//! ];
//! // 90 + 2 * 16 + 20 + 16
//! assert_eq!(items[0].content_width(), 158.0);
//! // 16 + 16 + 20, plus 2 * 16 edge spacing
//! assert_eq!(items[1].content_width(), 84.0);
//! ```

use std::{fmt, rc::Rc};

use crate::{
    color::Color,
    error::{GeometryError, check_non_negative},
    geometry::{Insets, Size},
};

/// Spacing used by every item kind unless overridden.
pub const DEFAULT_SPACING: f32 = 16.0;

/// Default edge length of a text row's leading icon.
pub const DEFAULT_ICON_SIZE: f32 = 20.0;

/// Default corner radius of an action button.
pub const DEFAULT_ACTION_CORNER_RADIUS: f32 = 8.0;

/// Opaque callback attached to an action button.
///
/// The placement core never calls it. The presentation layer invokes it at
/// most once per user tap.
#[derive(Clone)]
pub struct ActionHandler(Rc<dyn Fn()>);

impl ActionHandler {
    pub fn new(handler: impl Fn() + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionHandler")
    }
}

/// A leading icon on a text row.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    name: String,
    size: f32,
}

impl Icon {
    /// Creates an icon with the default edge length.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
        }
    }

    /// Sets the icon's edge length (builder style).
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// A text row with an optional leading icon.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    text: String,
    text_width: f32,
    icon: Option<Icon>,
    spacing: f32,
}

impl TextItem {
    /// Creates a text row from its label and measured intrinsic width.
    pub fn new(text: impl Into<String>, text_width: f32) -> Self {
        Self {
            text: text.into(),
            text_width,
            icon: None,
            spacing: DEFAULT_SPACING,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_width(&self) -> f32 {
        self.text_width
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Text width plus edge spacing, plus the icon and its gap when present.
    pub fn content_width(&self) -> f32 {
        let mut width = self.text_width + self.spacing * 2.0;
        if let Some(icon) = &self.icon {
            width += icon.size + self.spacing;
        }
        width
    }
}

/// An image row.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    source: Option<String>,
    size: Size,
    spacing: f32,
}

impl ImageItem {
    pub fn new(size: Size) -> Self {
        Self {
            source: None,
            size,
            spacing: DEFAULT_SPACING,
        }
    }

    /// Sets the image reference the renderer links to.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn content_width(&self) -> f32 {
        self.size.width() + self.spacing * 2.0
    }
}

/// Horizontal placement of the buttons inside an actions row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionsAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// A single button inside an actions row.
#[derive(Debug, Clone)]
pub struct ActionItem {
    title: String,
    title_width: f32,
    insets: Insets,
    corner_radius: f32,
    background: Option<Color>,
    handler: Option<ActionHandler>,
}

impl ActionItem {
    /// Creates a button from its title and measured intrinsic title width.
    pub fn new(title: impl Into<String>, title_width: f32) -> Self {
        Self {
            title: title.into(),
            title_width,
            insets: Insets::symmetric(8.0, 16.0),
            corner_radius: DEFAULT_ACTION_CORNER_RADIUS,
            background: None,
            handler: None,
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_handler(mut self, handler: ActionHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_width(&self) -> f32 {
        self.title_width
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Button fill; `None` renders a transparent button.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn handler(&self) -> Option<&ActionHandler> {
        self.handler.as_ref()
    }

    /// Title width plus the left and right content insets.
    pub fn content_width(&self) -> f32 {
        self.insets.left() + self.insets.right() + self.title_width
    }

    /// Checks the button's measurements.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] for a negative or non-finite title width,
    /// corner radius or inset.
    pub fn validate(&self) -> Result<(), GeometryError> {
        check_non_negative("action title width", self.title_width)?;
        check_non_negative("action corner radius", self.corner_radius)?;
        self.insets.validate("action insets")
    }
}

/// A row of one or two action buttons.
#[derive(Debug, Clone)]
pub struct ActionsItem {
    first: ActionItem,
    second: Option<ActionItem>,
    alignment: ActionsAlignment,
    spacing: f32,
}

impl ActionsItem {
    pub fn new(first: ActionItem) -> Self {
        Self {
            first,
            second: None,
            alignment: ActionsAlignment::default(),
            spacing: DEFAULT_SPACING,
        }
    }

    pub fn with_second(mut self, second: ActionItem) -> Self {
        self.second = Some(second);
        self
    }

    pub fn with_alignment(mut self, alignment: ActionsAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn first(&self) -> &ActionItem {
        &self.first
    }

    pub fn second(&self) -> Option<&ActionItem> {
        self.second.as_ref()
    }

    /// Iterates over the present buttons in display order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionItem> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    pub fn alignment(&self) -> ActionsAlignment {
        self.alignment
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Both buttons plus edge spacing. The gap between the buttons only
    /// counts when the second button has a positive width.
    pub fn content_width(&self) -> f32 {
        let second_width = self.second.as_ref().map_or(0.0, ActionItem::content_width);
        let mut width = self.first.content_width() + second_width + self.spacing * 2.0;
        if second_width > 0.0 {
            width += self.spacing;
        }
        width
    }
}

/// One row of tooltip content.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Text(TextItem),
    Image(ImageItem),
    Actions(ActionsItem),
}

impl ContentItem {
    /// Returns the width this row needs to render without clipping.
    pub fn content_width(&self) -> f32 {
        match self {
            Self::Text(item) => item.content_width(),
            Self::Image(item) => item.content_width(),
            Self::Actions(item) => item.content_width(),
        }
    }

    /// Returns a short name of the item kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Actions(_) => "actions",
        }
    }

    /// Checks that every measured width and spacing is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first [`GeometryError`] found.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            Self::Text(item) => {
                check_non_negative("text width", item.text_width)?;
                check_non_negative("text spacing", item.spacing)?;
                if let Some(icon) = &item.icon {
                    check_non_negative("icon size", icon.size)?;
                }
                Ok(())
            }
            Self::Image(item) => {
                item.size.validate("image size")?;
                check_non_negative("image spacing", item.spacing)
            }
            Self::Actions(item) => {
                check_non_negative("actions spacing", item.spacing)?;
                item.actions().try_for_each(ActionItem::validate)
            }
        }
    }
}

impl From<TextItem> for ContentItem {
    fn from(item: TextItem) -> Self {
        Self::Text(item)
    }
}

impl From<ImageItem> for ContentItem {
    fn from(item: ImageItem) -> Self {
        Self::Image(item)
    }
}

impl From<ActionsItem> for ContentItem {
    fn from(item: ActionsItem) -> Self {
        Self::Actions(item)
    }
}
