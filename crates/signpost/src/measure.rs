//! Text measurement for labels.
//!
//! Content sizing needs the intrinsic width of every label. Hosts that lay
//! out text themselves pass widths directly; everything else goes through
//! [`measure`], which shapes the string with cosmic-text.
//!
//! # Example
//!
//! ```
//! # use signpost::measure::{TextStyle, measure};
//! let style = TextStyle::new("sans-serif", 14);
//! let size = measure("Tap here to continue", &style);
//! assert!(size.height() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, trace};

use signpost_core::geometry::Size;

use crate::config::StyleConfig;

/// Font settings for measured labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    font_family: String,
    font_size: u16,
}

impl TextStyle {
    /// Creates a text style from a font family and a size in points.
    pub fn new(font_family: impl Into<String>, font_size: u16) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Font size converted from points to pixels at standard DPI.
    pub fn font_size_px(&self) -> f32 {
        self.font_size as f32 * 1.33
    }

    /// Height of one line of text.
    pub fn line_height(&self) -> f32 {
        self.font_size_px() * 1.15
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}

impl From<&StyleConfig> for TextStyle {
    fn from(style: &StyleConfig) -> Self {
        Self::new(style.font_family(), style.font_size())
    }
}

/// Measures `text` rendered with `style`.
///
/// The width is the widest line and the height is one line height per line.
/// Empty text measures as zero.
pub fn measure(text: &str, style: &TextStyle) -> Size {
    TEXT_MANAGER
        .get_or_init(TextManager::new)
        .calculate_text_size(text, style)
}

/// Holds the shared [`FontSystem`]; loading system fonts is expensive, so
/// it is created once and reused.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = style.font_size_px();
        let metrics = Metrics::new(font_size_px, style.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(style.font_family()));

        // Unbounded so lines only break at explicit newlines.
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            // No fonts available, estimate from the character count.
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height * text.lines().count().max(1) as f32;
        } else {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        trace!(text, width = max_width, height = total_height; "Measured text");

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_line_height_from_points() {
        let style = TextStyle::new("sans-serif", 20);
        assert_approx_eq!(f32, style.font_size_px(), 26.6, epsilon = 0.001);
        assert_approx_eq!(f32, style.line_height(), 30.59, epsilon = 0.001);
    }

    #[test]
    fn test_style_from_config() {
        let style = TextStyle::from(&StyleConfig::default().with_font("serif", 18));
        assert_eq!(style.font_family(), "serif");
        assert_eq!(style.font_size(), 18);
    }

    #[test]
    fn test_empty_text_is_zero() {
        let size = measure("", &TextStyle::default());
        assert!(size.is_zero());
    }

    #[test]
    fn test_longer_text_is_wider() {
        let style = TextStyle::default();
        let short = measure("Next", &style);
        let long = measure("Next step of the onboarding tour", &style);

        assert!(short.width() > 0.0);
        assert!(long.width() > short.width());
        assert_approx_eq!(f32, short.height(), style.line_height());
    }

    #[test]
    fn test_newlines_add_height() {
        let style = TextStyle::default();
        let size = measure("first\nsecond", &style);
        assert_approx_eq!(f32, size.height(), style.line_height() * 2.0);
    }
}
