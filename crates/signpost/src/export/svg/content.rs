//! SVG rendering for content rows and the top action.

use std::io::Write;

use svg::node::{Text as SvgText, element as svg_element};

use signpost_core::{
    content::{ActionItem, ContentItem, TextItem},
    geometry::{Bounds, Point},
};

use super::{DIALOG_CLIP_ID, Svg, layer::LayeredOutput, layer::RenderLayer, rect};
use crate::{layout::RowContent, presentation::Presentation};

const CLOSE_SYMBOL: &str = "✕";
const ICON_FILL: &str = "gray";
const IMAGE_PLACEHOLDER_FILL: &str = "lightgray";

impl<W: Write> Svg<W> {
    /// Renders every row of the dialog plus the top action.
    ///
    /// Rows are clipped to the dialog so clamped content never spills over
    /// the arrow or backdrop.
    pub(super) fn render_content(&self, presentation: &Presentation) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let origin = presentation.dialog_bounds().min_point();
        let clip = format!("url(#{DIALOG_CLIP_ID})");

        for row in presentation.content().rows() {
            let item = row.item().and_then(|index| presentation.items().get(index));
            let row_output = match (row.content(), item) {
                (RowContent::CloseButton(button), _) => {
                    self.render_close_button(button.translate(origin))
                }
                (RowContent::Text { icon, text, lines }, Some(ContentItem::Text(item))) => self
                    .render_text_row(
                        item,
                        icon.map(|icon| icon.translate(origin)),
                        text.translate(origin),
                        *lines,
                    ),
                (RowContent::Image(frame), Some(ContentItem::Image(item))) => {
                    render_image(frame.translate(origin), item.source())
                }
                (RowContent::Actions(buttons), Some(ContentItem::Actions(item))) => {
                    let mut actions_output = LayeredOutput::new();
                    for (button, action) in buttons.iter().zip(item.actions()) {
                        actions_output.merge(self.render_action(button.translate(origin), action));
                    }
                    actions_output
                }
                _ => LayeredOutput::new(),
            };

            output.merge(clipped(row_output, &clip));
        }

        if let Some((top_action, frame)) = presentation.top_action() {
            output.merge(self.render_action(frame, top_action.action()));
        }

        output
    }

    fn render_close_button(&self, button: Bounds) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let center = button.center();
        let glyph = self
            .label(center, "middle")
            .set("fill", "gray")
            .add(SvgText::new(CLOSE_SYMBOL));
        output.add_to_layer(RenderLayer::Text, Box::new(glyph));
        output
    }

    fn render_text_row(
        &self,
        item: &TextItem,
        icon: Option<Bounds>,
        text: Bounds,
        lines: usize,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        if let (Some(frame), Some(icon)) = (icon, item.icon()) {
            let node = rect(frame)
                .set("rx", frame.width() / 4.0)
                .set("fill", ICON_FILL)
                .set("data-icon", icon.name());
            output.add_to_layer(RenderLayer::Content, Box::new(node));
        }

        let line_height = if lines == 0 {
            0.0
        } else {
            text.height() / lines as f32
        };

        let mut label = svg_element::Text::new("")
            .set("x", text.min_x())
            .set("y", text.min_y() - line_height / 2.0)
            .set("dominant-baseline", "central")
            .set("font-family", self.text_style.font_family())
            .set("font-size", self.text_style.font_size());
        for line in split_lines(item.text(), lines) {
            let tspan = svg_element::TSpan::new("")
                .set("x", text.min_x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            label = label.add(tspan);
        }
        output.add_to_layer(RenderLayer::Text, Box::new(label));

        output
    }

    fn render_action(&self, button: Bounds, action: &ActionItem) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut body = rect(button).set("rx", action.corner_radius());
        body = match action.background() {
            Some(color) => body
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
            None => body.set("fill", "none").set("stroke", "gray"),
        };
        output.add_to_layer(RenderLayer::Content, Box::new(body));

        let title = self
            .label(button.center(), "middle")
            .add(SvgText::new(action.title()));
        output.add_to_layer(RenderLayer::Text, Box::new(title));

        output
    }

    /// Single-line label at `position`, vertically centered.
    fn label(&self, position: Point, anchor: &str) -> svg_element::Text {
        svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", anchor)
            .set("dominant-baseline", "central")
            .set("font-family", self.text_style.font_family())
            .set("font-size", self.text_style.font_size())
    }
}

fn render_image(frame: Bounds, source: Option<&str>) -> LayeredOutput {
    let mut output = LayeredOutput::new();
    let node: super::layer::SvgNode = match source {
        Some(href) => Box::new(
            svg_element::Image::new()
                .set("x", frame.min_x())
                .set("y", frame.min_y())
                .set("width", frame.width())
                .set("height", frame.height())
                .set("href", href)
                .set("preserveAspectRatio", "xMidYMid meet"),
        ),
        None => Box::new(rect(frame).set("fill", IMAGE_PLACEHOLDER_FILL)),
    };
    output.add_to_layer(RenderLayer::Content, node);
    output
}

/// Wraps every node of `output` in a group clipped by `clip`.
fn clipped(output: LayeredOutput, clip: &str) -> LayeredOutput {
    let mut result = LayeredOutput::new();
    for (layer, node) in output.into_items() {
        let group = svg_element::Group::new().set("clip-path", clip).add(node);
        result.add_to_layer(layer, Box::new(group));
    }
    result
}

/// Splits `text` into `lines` display lines.
///
/// Explicit line breaks are kept. When the text has to wrap further, words
/// are spread greedily so each line holds about the same number of
/// characters.
fn split_lines(text: &str, lines: usize) -> Vec<String> {
    let explicit: Vec<&str> = text.lines().collect();
    if explicit.len() >= lines {
        return explicit.into_iter().map(String::from).collect();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let total: usize = words.iter().map(|word| word.chars().count() + 1).sum();
    let target = total.div_ceil(lines.max(1));

    let mut result = Vec::new();
    let mut current = String::new();
    for word in words {
        let extra = word.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty()
            && current.chars().count() + extra > target
            && result.len() + 1 < lines
        {
            result.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}
