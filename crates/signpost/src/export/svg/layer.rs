//! Layer-based z-ordering for SVG output.
//!
//! Renderers add nodes to a [`RenderLayer`] in any order; [`LayeredOutput`]
//! emits them bottom to top, one `<g data-layer="…">` group per layer.
//!
//! # Example
//!
//! ```
//! # use signpost::export::svg::layer::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Rectangle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Hello")));
//! output.add_to_layer(RenderLayer::Backdrop, Box::new(Rectangle::new()));
//!
//! // Backdrop renders first, then Text
//! assert_eq!(output.render().len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// The dim layer covering the screen.
    Backdrop,
    /// The blurred dialog shadow.
    Shadow,
    /// The dialog body.
    Dialog,
    /// The pointer triangle.
    Arrow,
    /// Icons, images, buttons and the top action.
    Content,
    /// Labels.
    Text,
}

impl RenderLayer {
    /// Returns the value of the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Shadow => "shadow",
            Self::Dialog => "dialog",
            Self::Arrow => "arrow",
            Self::Content => "content",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`, after any nodes already on it.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves every node of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the layers that hold at least one node, bottom to top.
    pub fn layers(&self) -> Vec<RenderLayer> {
        let mut layers: Vec<RenderLayer> = self.items.iter().map(|(layer, _)| *layer).collect();
        layers.sort();
        layers.dedup();
        layers
    }

    /// Returns the nodes with their layers, in insertion order.
    pub fn into_items(self) -> Vec<(RenderLayer, SvgNode)> {
        self.items
    }

    /// Renders every non-empty layer into its own group, consuming the
    /// output.
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable, so insertion order survives within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layers_sorted_and_deduplicated() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Backdrop, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));

        assert_eq!(
            output.layers(),
            vec![RenderLayer::Backdrop, RenderLayer::Text]
        );
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Dialog, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));
        output2.add_to_layer(RenderLayer::Dialog, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_render_emits_layer_order() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Shadow, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Backdrop, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains(r#"data-layer="backdrop""#));
        assert!(rendered[1].contains(r#"data-layer="shadow""#));
        assert!(rendered[2].contains(r#"data-layer="text""#));
    }
}
