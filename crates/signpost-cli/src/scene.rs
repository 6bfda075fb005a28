//! Scene files describing a tooltip to preview.
//!
//! A scene is a TOML document holding the screen, the anchor and the content
//! rows. Text widths may be omitted, in which case they are measured with the
//! configured font.
//!
//! ```toml
//! closable = true
//!
//! [screen]
//! width = 375.0
//! height = 812.0
//!
//! [anchor]
//! x = 300.0
//! y = 400.0
//! width = 40.0
//! height = 40.0
//!
//! [[items]]
//! kind = "text"
//! text = "Your profile lives here"
//!
//! [[items]]
//! kind = "actions"
//! actions = [{ title = "Got it", background = "#2f80ed" }]
//! ```

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use signpost::{
    SignpostError, Tooltip, TopAction,
    anchor::Anchor,
    backdrop::Highlight,
    color::Color,
    config::AppConfig,
    content::{ActionItem, ActionsAlignment, ActionsItem, ContentItem, Icon, ImageItem, TextItem},
    geometry::{Bounds, Size},
    measure::{self, TextStyle},
};

/// Errors raised while reading a scene file.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to parse scene: {0}")]
    Parse(String),

    #[error("Invalid color in scene: {0}")]
    Color(String),
}

impl From<SceneError> for SignpostError {
    fn from(err: SceneError) -> Self {
        SignpostError::Config(err.to_string())
    }
}

/// A parsed scene file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    screen: ScreenSpec,
    #[serde(default)]
    safe_area: SafeAreaSpec,
    anchor: Option<RectSpec>,
    closable: Option<bool>,
    #[serde(default)]
    highlights: Vec<HighlightSpec>,
    top_action: Option<ActionSpec>,
    #[serde(default)]
    items: Vec<ItemSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScreenSpec {
    width: f32,
    height: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SafeAreaSpec {
    top: f32,
    bottom: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct RectSpec {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl From<RectSpec> for Bounds {
    fn from(rect: RectSpec) -> Self {
        Bounds::new(rect.x, rect.y, rect.width, rect.height)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HighlightSpec {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default)]
    corner_radius: f32,
}

impl HighlightSpec {
    fn to_highlight(&self) -> Highlight {
        Highlight::new(Bounds::new(self.x, self.y, self.width, self.height))
            .with_corner_radius(self.corner_radius)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionSpec {
    title: String,
    width: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum AlignmentSpec {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl From<AlignmentSpec> for ActionsAlignment {
    fn from(alignment: AlignmentSpec) -> Self {
        match alignment {
            AlignmentSpec::Leading => ActionsAlignment::Leading,
            AlignmentSpec::Center => ActionsAlignment::Center,
            AlignmentSpec::Trailing => ActionsAlignment::Trailing,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ItemSpec {
    Text {
        text: String,
        width: Option<f32>,
        icon: Option<String>,
        icon_size: Option<f32>,
    },
    Image {
        width: f32,
        height: f32,
        source: Option<String>,
    },
    Actions {
        actions: Vec<ActionSpec>,
        #[serde(default)]
        alignment: AlignmentSpec,
    },
}

impl Scene {
    /// Parses a scene from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed TOML, unknown fields or an
    /// actions row without exactly one or two buttons.
    pub fn parse(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(source).map_err(|e| SceneError::Parse(e.to_string()))?;

        for item in &scene.items {
            if let ItemSpec::Actions { actions, .. } = item {
                if actions.is_empty() || actions.len() > 2 {
                    return Err(SceneError::Parse(format!(
                        "an actions row holds one or two buttons (got {})",
                        actions.len()
                    )));
                }
            }
        }

        debug!(items = scene.items.len(), highlights = scene.highlights.len(); "Scene parsed");
        Ok(scene)
    }

    /// Returns the screen rectangle, anchored at the origin.
    pub fn screen(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.screen.width, self.screen.height)
    }

    /// Applies the scene's safe area to `config`.
    pub fn apply_safe_area(&self, config: AppConfig) -> AppConfig {
        let placement = config
            .placement()
            .with_safe_area(self.safe_area.top, self.safe_area.bottom);
        config.with_placement(placement)
    }

    /// Builds the tooltip, measuring any text whose width is not given.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Color`] for an unparsable button background.
    pub fn to_tooltip(&self, text_style: &TextStyle) -> Result<Tooltip, SceneError> {
        let anchor = self.anchor.map_or(Anchor::Unresolved, |rect| Anchor::from(Bounds::from(rect)));
        let mut tooltip = Tooltip::new(anchor);

        for item in &self.items {
            tooltip = tooltip.with_item(item.to_content(text_style)?);
        }
        for highlight in &self.highlights {
            tooltip = tooltip.with_highlight(highlight.to_highlight());
        }
        if let Some(closable) = self.closable {
            tooltip = tooltip.with_closable(closable);
        }
        if let Some(action) = &self.top_action {
            tooltip = tooltip.with_top_action(TopAction::new(action.to_action(text_style)?));
        }

        Ok(tooltip)
    }
}

impl ItemSpec {
    fn to_content(&self, text_style: &TextStyle) -> Result<ContentItem, SceneError> {
        let item = match self {
            Self::Text {
                text,
                width,
                icon,
                icon_size,
            } => {
                let width = width.unwrap_or_else(|| measure::measure(text, text_style).width());
                let mut item = TextItem::new(text.as_str(), width);
                if let Some(name) = icon {
                    let mut icon = Icon::new(name.as_str());
                    if let Some(size) = icon_size {
                        icon = icon.with_size(*size);
                    }
                    item = item.with_icon(icon);
                }
                ContentItem::from(item)
            }
            Self::Image {
                width,
                height,
                source,
            } => {
                let mut item = ImageItem::new(Size::new(*width, *height));
                if let Some(source) = source {
                    item = item.with_source(source.as_str());
                }
                ContentItem::from(item)
            }
            Self::Actions { actions, alignment } => {
                let mut buttons = actions.iter().map(|action| action.to_action(text_style));
                let first = match buttons.next() {
                    Some(first) => first?,
                    None => return Err(SceneError::Parse(String::from("empty actions row"))),
                };
                let mut item = ActionsItem::new(first).with_alignment((*alignment).into());
                if let Some(second) = buttons.next() {
                    item = item.with_second(second?);
                }
                ContentItem::from(item)
            }
        };
        Ok(item)
    }
}

impl ActionSpec {
    fn to_action(&self, text_style: &TextStyle) -> Result<ActionItem, SceneError> {
        let width = self
            .width
            .unwrap_or_else(|| measure::measure(&self.title, text_style).width());
        let mut action = ActionItem::new(self.title.as_str(), width);
        if let Some(background) = &self.background {
            action = action.with_background(Color::new(background).map_err(SceneError::Color)?);
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use signpost::placement::Side;

    use super::*;

    const PROFILE_SCENE: &str = r##"
        closable = true

        [screen]
        width = 375.0
        height = 812.0

        [anchor]
        x = 300.0
        y = 400.0
        width = 40.0
        height = 40.0

        [[highlights]]
        x = 300.0
        y = 400.0
        width = 40.0
        height = 40.0
        corner_radius = 20.0

        [[items]]
        kind = "text"
        text = "Your profile"
        width = 90.0

        [[items]]
        kind = "actions"
        alignment = "trailing"
        actions = [{ title = "Got it", width = 40.0, background = "#2f80ed" }]
    "##;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::parse(PROFILE_SCENE).unwrap();
        let tooltip = scene.to_tooltip(&TextStyle::default()).unwrap();

        assert_eq!(scene.screen(), Bounds::new(0.0, 0.0, 375.0, 812.0));
        assert_eq!(tooltip.items().len(), 2);
        assert_eq!(tooltip.highlights().len(), 1);
        assert_eq!(tooltip.closable(), Some(true));
        assert!(!tooltip.anchor().is_unresolved());
    }

    #[test]
    fn test_scene_lays_out() {
        let scene = Scene::parse(PROFILE_SCENE).unwrap();
        let tooltip = scene.to_tooltip(&TextStyle::default()).unwrap();
        let presentation = signpost::TooltipBuilder::default()
            .layout(&tooltip, scene.screen())
            .unwrap();
        assert_eq!(presentation.placement().side(), Side::Right);
    }

    #[test]
    fn test_missing_anchor_is_unresolved() {
        let scene = Scene::parse("[screen]\nwidth = 100.0\nheight = 100.0\n").unwrap();
        let tooltip = scene.to_tooltip(&TextStyle::default()).unwrap();
        assert!(tooltip.anchor().is_unresolved());
        assert!(tooltip.items().is_empty());
    }

    #[test]
    fn test_safe_area_applied() {
        let scene = Scene::parse(
            "[screen]\nwidth = 375.0\nheight = 812.0\n[safe_area]\ntop = 47.0\nbottom = 34.0\n",
        )
        .unwrap();
        let config = scene.apply_safe_area(AppConfig::default());
        assert_eq!(config.placement().min_top_inset(), 63.0);
        assert_eq!(config.placement().min_bottom_inset(), 50.0);
    }

    #[test]
    fn test_too_many_actions_rejected() {
        let source = r#"
            [screen]
            width = 375.0
            height = 812.0

            [[items]]
            kind = "actions"
            actions = [{ title = "A" }, { title = "B" }, { title = "C" }]
        "#;
        assert!(matches!(Scene::parse(source), Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_unknown_item_kind_rejected() {
        let source = "[screen]\nwidth = 1.0\nheight = 1.0\n[[items]]\nkind = \"video\"\n";
        assert!(Scene::parse(source).is_err());
    }

    #[test]
    fn test_invalid_button_color() {
        let source = r#"
            [screen]
            width = 375.0
            height = 812.0

            [[items]]
            kind = "actions"
            actions = [{ title = "OK", width = 20.0, background = "not-a-color" }]
        "#;
        let scene = Scene::parse(source).unwrap();
        let result = scene.to_tooltip(&TextStyle::default());
        assert!(matches!(result, Err(SceneError::Color(_))));
    }
}
