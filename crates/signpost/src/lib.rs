//! Signpost - Anchor-relative tooltips with a dimmed backdrop.
//!
//! Sizing, placement, transitions and SVG rendering for tooltips that point
//! at an element on screen. The pure geometry lives in `signpost-core`; this
//! crate turns it into a presentation a host can draw, animate and hit-test.

pub mod backdrop;
pub mod config;
pub mod dismissal;
pub mod export;
pub mod layout;
pub mod measure;
pub mod presentation;
pub mod transition;

mod error;
mod tooltip;

pub use signpost_core::{GeometryError, anchor, color, content, geometry, placement, sizing};

pub use error::SignpostError;
pub use presentation::Presentation;
pub use tooltip::{Tooltip, TopAction};

use log::{debug, info, trace};

use signpost_core::geometry::Bounds;

use backdrop::Backdrop;
use config::AppConfig;
use export::Exporter;
use layout::RowLayout;
use measure::TextStyle;
use transition::Transition;

/// Builder for laying out and rendering tooltips.
///
/// # Examples
///
/// ```rust
/// use signpost::{Tooltip, TooltipBuilder, anchor::Anchor, config::AppConfig};
/// use signpost::{content::TextItem, geometry::Bounds, placement::Side};
///
/// let builder = TooltipBuilder::new(AppConfig::default());
/// let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
///     .with_item(TextItem::new("Your profile lives here", 150.0));
///
/// let presentation = builder
///     .layout(&tooltip, Bounds::new(0.0, 0.0, 375.0, 812.0))
///     .expect("Failed to lay out");
/// assert_eq!(presentation.placement().side(), Side::Right);
///
/// let svg = builder.render_svg(&presentation).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct TooltipBuilder {
    config: AppConfig,
}

impl TooltipBuilder {
    /// Create a new tooltip builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Placement, style and behavior settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out a tooltip on `screen`.
    ///
    /// Computes the tooltip width from its items, stacks the rows at the
    /// screen-clamped width, clamps the resulting height, places the dialog
    /// around the anchor and builds the backdrop.
    ///
    /// # Arguments
    ///
    /// * `tooltip` - The anchor, content rows, highlights and top action
    /// * `screen` - The screen rectangle the tooltip is presented on
    ///
    /// # Errors
    ///
    /// Returns `SignpostError` for an invalid configuration or malformed
    /// geometry in the screen, anchor, items, top action or highlights.
    pub fn layout(&self, tooltip: &Tooltip, screen: Bounds) -> Result<Presentation, SignpostError> {
        self.config.validate()?;
        screen.validate("screen")?;
        for item in tooltip.items() {
            item.validate()?;
        }
        if let Some(top_action) = tooltip.top_action() {
            top_action.action().validate()?;
        }

        let placement_config = self.config.placement();
        let text_style = TextStyle::from(self.config.style());
        let line_height = text_style.line_height();
        let closable = tooltip
            .closable()
            .unwrap_or(self.config.behavior().is_tooltip_closable());

        info!(items = tooltip.items().len(), closable; "Laying out tooltip");

        let requested_width = sizing::tooltip_width(tooltip.items(), placement_config);
        // Rows wrap at the clamped width, so clamp before stacking them.
        let row_width = sizing::dialog_size(requested_width, 0.0, screen, placement_config).width();
        let content = RowLayout::new(line_height)
            .with_close_header(closable)
            .layout(tooltip.items(), row_width);

        let dialog_size =
            sizing::dialog_size(requested_width, content.height(), screen, placement_config);
        debug!(requested_width, dialog_size:?; "Dialog sized");

        let anchor = tooltip.anchor().resolve();
        let placement = placement::try_solve(anchor, dialog_size, screen, placement_config)?;
        info!(side = placement.side().name(); "Tooltip placed");
        trace!(placement:?; "Placement result");

        let backdrop = Backdrop::new(screen, self.config.style().global_background_alpha())
            .with_highlights(tooltip.highlights().iter().copied())?;

        let top_action = tooltip.top_action().map(|top_action| {
            let frame = top_action.frame(screen, placement_config, line_height);
            (top_action.clone(), frame)
        });

        Ok(Presentation::new(
            screen,
            placement,
            content,
            backdrop,
            tooltip.items().to_vec(),
            top_action,
            line_height,
        ))
    }

    /// Lay out `tooltip` and start fading it in on `transition`.
    ///
    /// # Errors
    ///
    /// Returns `SignpostError::Transition` if `transition` was already shown,
    /// or any error from [`layout`](Self::layout).
    pub fn present(
        &self,
        tooltip: &Tooltip,
        screen: Bounds,
        transition: &mut Transition,
    ) -> Result<Presentation, SignpostError> {
        let presentation = self.layout(tooltip, screen)?;
        transition.show(*presentation.placement())?;
        Ok(presentation)
    }

    /// Lay out `tooltip` on a changed `screen` and swap the placement held
    /// by a visible `transition`.
    ///
    /// # Errors
    ///
    /// Returns `SignpostError::Transition` while `transition` is fading or
    /// not presented, or any error from [`layout`](Self::layout).
    pub fn relayout(
        &self,
        tooltip: &Tooltip,
        screen: Bounds,
        transition: &mut Transition,
    ) -> Result<Presentation, SignpostError> {
        let presentation = self.layout(tooltip, screen)?;
        transition.relayout(*presentation.placement())?;
        debug!(side = presentation.placement().side().name(); "Tooltip relaid out");
        Ok(presentation)
    }

    /// Render a presentation to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `SignpostError` for rendering errors.
    pub fn render_svg(&self, presentation: &Presentation) -> Result<String, SignpostError> {
        let mut svg_exporter = export::svg::SvgBuilder::new(Vec::new())
            .with_style(self.config.style())
            .with_placement(self.config.placement())
            .build()?;

        svg_exporter.export_presentation(presentation)?;

        let svg_string = String::from_utf8(svg_exporter.into_inner())
            .map_err(|err| SignpostError::Export(Box::new(err)))?;

        info!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }
}
