//! SVG rendering of tooltip presentations.
//!
//! [`SvgBuilder`] configures an [`Svg`] exporter over any [`io::Write`]
//! target. The document is sized to the screen and contains, bottom to top,
//! the backdrop, an optional shadow, the dialog, the arrow and the content
//! rows (see [`layer::RenderLayer`]).
//!
//! # Example
//!
//! ```
//! # use signpost::{Tooltip, TooltipBuilder, anchor::Anchor, content::TextItem, geometry::Bounds};
//! # use signpost::export::{Exporter, svg::SvgBuilder};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let builder = TooltipBuilder::default();
//! let tooltip = Tooltip::new(Anchor::new(300.0, 400.0, 40.0, 40.0))
//!     .with_item(TextItem::new("Hello", 60.0));
//! let presentation = builder.layout(&tooltip, Bounds::new(0.0, 0.0, 375.0, 812.0))?;
//!
//! let mut svg = SvgBuilder::new(Vec::new()).build()?;
//! svg.export_presentation(&presentation)?;
//! let bytes = svg.into_inner();
//! assert!(String::from_utf8(bytes)?.contains("<svg"));
//! # Ok(())
//! # }
//! ```

pub mod layer;

mod content;

use std::io::{self, Write};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use signpost_core::{
    color::Color,
    geometry::Bounds,
    placement::{PlacementConfig, Triangle},
};

use crate::{
    backdrop::Backdrop,
    config::StyleConfig,
    export,
    measure::TextStyle,
    presentation::Presentation,
};

use layer::{LayeredOutput, RenderLayer};

const DIALOG_CLIP_ID: &str = "signpost-dialog-clip";
const SHADOW_FILTER_ID: &str = "signpost-shadow";
const SHADOW_OPACITY: f32 = 0.3;

/// Builder for [`Svg`] exporters.
pub struct SvgBuilder<'a, W: Write> {
    writer: W,
    style: Option<&'a StyleConfig>,
    placement: Option<&'a PlacementConfig>,
    opacity: f32,
}

impl<'a, W: Write> SvgBuilder<'a, W> {
    /// Creates a builder writing the document to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: None,
            placement: None,
            opacity: 1.0,
        }
    }

    /// Uses colors, shadow and font from `style`.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Uses the corner radius and arrow height from `placement`.
    pub fn with_placement(mut self, placement: &'a PlacementConfig) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Renders a frame of a transition at the given opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configured background color
    /// is invalid.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);
        let placement = self.placement.copied().unwrap_or_default();

        let background = style.background_color().map_err(export::Error::Render)?;

        Ok(Svg {
            writer: self.writer,
            background,
            shadow: style.is_need_shadow(),
            text_style: TextStyle::from(style),
            corner_radius: placement.corner_radius(),
            arrow_height: placement.arrow_height(),
            opacity: self.opacity,
        })
    }
}

/// SVG exporter writing to `W`.
pub struct Svg<W: Write> {
    writer: W,
    background: Color,
    shadow: bool,
    text_style: TextStyle,
    corner_radius: f32,
    arrow_height: f32,
    opacity: f32,
}

impl<W: Write> Svg<W> {
    /// Returns the writer, e.g. the buffer holding the rendered document.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders the presentation to an SVG document.
    pub fn render_presentation(&self, presentation: &Presentation) -> Document {
        let screen = presentation.screen();
        let dialog = presentation.dialog_bounds();

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    screen.min_x(),
                    screen.min_y(),
                    screen.width(),
                    screen.height()
                ),
            )
            .set("width", screen.width())
            .set("height", screen.height());

        let mut defs = svg_element::Definitions::new().add(
            svg_element::ClipPath::new()
                .set("id", DIALOG_CLIP_ID)
                .add(rect(dialog).set("rx", self.corner_radius)),
        );
        if self.shadow {
            defs = defs.add(
                svg_element::Filter::new()
                    .set("id", SHADOW_FILTER_ID)
                    .set("x", "-50%")
                    .set("y", "-50%")
                    .set("width", "200%")
                    .set("height", "200%")
                    .add(
                        svg_element::FilterEffectGaussianBlur::new()
                            .set("stdDeviation", self.arrow_height / 2.0),
                    ),
            );
        }
        doc = doc.add(defs);

        let mut output = LayeredOutput::new();
        output.merge(self.render_backdrop(presentation.backdrop()));
        output.merge(self.render_dialog(dialog, &presentation.placement().arrow()));
        output.merge(self.render_content(presentation));

        debug!(layers:? = output.layers(); "Presentation rendered");

        let mut main_group = svg_element::Group::new();
        if self.opacity < 1.0 {
            main_group = main_group.set("opacity", self.opacity);
        }
        let main_group = output
            .render()
            .into_iter()
            .fold(main_group, |group, node| group.add(node));

        doc.add(main_group)
    }

    /// Renders the dim layer, punching highlights out with the even-odd rule.
    fn render_backdrop(&self, backdrop: &Backdrop) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if backdrop.alpha() <= 0.0 {
            return output;
        }

        let node: layer::SvgNode = if backdrop.has_holes() {
            let data = backdrop
                .highlights()
                .iter()
                .fold(rect_path(backdrop.screen(), 0.0), |data, highlight| {
                    format!(
                        "{data} {}",
                        rect_path(highlight.bounds(), highlight.corner_radius())
                    )
                });
            Box::new(
                svg_element::Path::new()
                    .set("d", data)
                    .set("fill", "black")
                    .set("fill-opacity", backdrop.alpha())
                    .set("fill-rule", "evenodd"),
            )
        } else {
            Box::new(
                rect(backdrop.screen())
                    .set("fill", "black")
                    .set("fill-opacity", backdrop.alpha()),
            )
        };

        output.add_to_layer(RenderLayer::Backdrop, node);
        output
    }

    /// Renders the dialog body, its arrow, and the shadow behind both.
    fn render_dialog(&self, dialog: Bounds, arrow: &Triangle) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let fill = self.background.to_string();
        let arrow_data = triangle_path(arrow);

        if self.shadow {
            let shadow = svg_element::Group::new()
                .set("fill", "gray")
                .set("fill-opacity", SHADOW_OPACITY)
                .set("filter", format!("url(#{SHADOW_FILTER_ID})"))
                .add(rect(dialog).set("rx", self.corner_radius))
                .add(svg_element::Path::new().set("d", arrow_data.clone()));
            output.add_to_layer(RenderLayer::Shadow, Box::new(shadow));
        }

        let body = rect(dialog)
            .set("rx", self.corner_radius)
            .set("fill", fill.clone())
            .set("fill-opacity", self.background.alpha());
        output.add_to_layer(RenderLayer::Dialog, Box::new(body));

        let pointer = svg_element::Path::new()
            .set("d", arrow_data)
            .set("fill", fill)
            .set("fill-opacity", self.background.alpha());
        output.add_to_layer(RenderLayer::Arrow, Box::new(pointer));

        output
    }

    /// Writes an SVG document to the output.
    fn write_document(&mut self, doc: Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        self.writer.flush().map_err(export::Error::Io)
    }
}

impl<W: Write> export::Exporter for Svg<W> {
    fn export_presentation(&mut self, presentation: &Presentation) -> Result<(), export::Error> {
        let doc = self.render_presentation(presentation);
        info!(side = presentation.placement().side().name(); "SVG document rendered");
        self.write_document(doc)
    }
}

/// Writes `presentation` into a string with default styling.
///
/// Convenience for hosts that only need a preview.
pub fn to_string(presentation: &Presentation) -> Result<String, export::Error> {
    let mut svg = SvgBuilder::new(Vec::new()).build()?;
    export::Exporter::export_presentation(&mut svg, presentation)?;
    String::from_utf8(svg.into_inner())
        .map_err(|err| export::Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

fn rect(bounds: Bounds) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
}

/// Path data for a rectangle with rounded corners, drawn clockwise.
fn rect_path(bounds: Bounds, radius: f32) -> String {
    let (x0, y0, x1, y1) = (bounds.min_x(), bounds.min_y(), bounds.max_x(), bounds.max_y());
    if radius <= 0.0 {
        return format!("M {x0} {y0} H {x1} V {y1} H {x0} Z");
    }
    let r = radius;
    format!(
        "M {} {y0} H {} A {r} {r} 0 0 1 {x1} {} V {} A {r} {r} 0 0 1 {} {y1} H {} A {r} {r} 0 0 1 {x0} {} V {} A {r} {r} 0 0 1 {} {y0} Z",
        x0 + r,
        x1 - r,
        y0 + r,
        y1 - r,
        x1 - r,
        x0 + r,
        y1 - r,
        y0 + r,
        x0 + r,
    )
}

fn triangle_path(triangle: &Triangle) -> String {
    let [a, b, c] = triangle.points();
    format!(
        "M {} {} L {} {} L {} {} Z",
        a.x(),
        a.y(),
        b.x(),
        b.y(),
        c.x(),
        c.y()
    )
}
