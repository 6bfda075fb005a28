//! Configuration types for Signpost tooltips.
//!
//! This module provides configuration structures that control how tooltips
//! are placed, styled and dismissed. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML files, and every
//! section falls back to its defaults when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`PlacementConfig`] - Arrow, corner and inset geometry used by the solver.
//! - [`StyleConfig`] - Colors, backdrop dimming, shadow and font.
//! - [`BehaviorConfig`] - Close button, background tap and animation timing.
//!
//! # Example
//!
//! ```
//! # use signpost::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert!(config.behavior().is_background_tap_closable());
//! ```

use serde::Deserialize;

use signpost_core::color::Color;

pub use signpost_core::placement::PlacementConfig;

use crate::error::SignpostError;

/// Top-level configuration combining placement, style and behavior settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Placement geometry section.
    #[serde(default)]
    placement: PlacementConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Behavior configuration section.
    #[serde(default)]
    behavior: BehaviorConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its three sections.
    ///
    /// # Arguments
    ///
    /// * `placement` - Geometry used by sizing and the placement solver.
    /// * `style` - Visual styling options.
    /// * `behavior` - Dismissal and animation options.
    pub fn new(placement: PlacementConfig, style: StyleConfig, behavior: BehaviorConfig) -> Self {
        Self {
            placement,
            style,
            behavior,
        }
    }

    /// Returns the placement configuration.
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the behavior configuration.
    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Replaces the placement section.
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Replaces the style section.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Replaces the behavior section.
    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Checks every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SignpostError::Geometry`] for invalid placement values and
    /// [`SignpostError::Config`] for invalid style or behavior values.
    pub fn validate(&self) -> Result<(), SignpostError> {
        self.placement.validate()?;
        self.style.validate()?;
        self.behavior.validate()?;
        Ok(())
    }
}

/// Visual styling of the dialog and backdrop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Dialog and arrow fill, as a CSS color string.
    background_color: String,

    /// Opacity of the black dimming layer behind the dialog.
    global_background_alpha: f32,

    /// Draws a soft shadow around the dialog.
    is_need_shadow: bool,

    /// Font family used for labels.
    font_family: String,

    /// Font size in points.
    font_size: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: String::from("white"),
            global_background_alpha: 0.3,
            is_need_shadow: false,
            font_family: String::from("sans-serif"),
            font_size: 14,
        }
    }
}

impl StyleConfig {
    /// Sets the dialog background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the backdrop dimming alpha.
    pub fn with_global_background_alpha(mut self, alpha: f32) -> Self {
        self.global_background_alpha = alpha;
        self
    }

    /// Enables or disables the dialog shadow.
    pub fn with_shadow(mut self, is_need_shadow: bool) -> Self {
        self.is_need_shadow = is_need_shadow;
        self
    }

    /// Sets the label font.
    pub fn with_font(mut self, family: impl Into<String>, size: u16) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    /// Returns the parsed dialog background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn global_background_alpha(&self) -> f32 {
        self.global_background_alpha
    }

    pub fn is_need_shadow(&self) -> bool {
        self.is_need_shadow
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    fn validate(&self) -> Result<(), SignpostError> {
        self.background_color().map_err(SignpostError::Config)?;
        if !(0.0..=1.0).contains(&self.global_background_alpha) {
            return Err(SignpostError::Config(format!(
                "global_background_alpha must be within 0..=1 (got {})",
                self.global_background_alpha
            )));
        }
        if self.font_size == 0 {
            return Err(SignpostError::Config(String::from(
                "font_size must be positive",
            )));
        }
        Ok(())
    }
}

/// How the tooltip reacts to the user and how long it animates.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Adds a close button header above the content rows.
    is_tooltip_closable: bool,

    /// Dismisses the tooltip when the dimmed background is tapped.
    is_background_tap_closable: bool,

    /// Duration of the fade in and fade out, in seconds.
    show_hide_animation_duration: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            is_tooltip_closable: false,
            is_background_tap_closable: true,
            show_hide_animation_duration: 0.3,
        }
    }
}

impl BehaviorConfig {
    pub fn with_tooltip_closable(mut self, closable: bool) -> Self {
        self.is_tooltip_closable = closable;
        self
    }

    pub fn with_background_tap_closable(mut self, closable: bool) -> Self {
        self.is_background_tap_closable = closable;
        self
    }

    pub fn with_show_hide_animation_duration(mut self, seconds: f32) -> Self {
        self.show_hide_animation_duration = seconds;
        self
    }

    pub fn is_tooltip_closable(&self) -> bool {
        self.is_tooltip_closable
    }

    pub fn is_background_tap_closable(&self) -> bool {
        self.is_background_tap_closable
    }

    /// Returns the fade duration in seconds.
    pub fn show_hide_animation_duration(&self) -> f32 {
        self.show_hide_animation_duration
    }

    fn validate(&self) -> Result<(), SignpostError> {
        let duration = self.show_hide_animation_duration;
        if !duration.is_finite() || duration < 0.0 {
            return Err(SignpostError::Config(format!(
                "show_hide_animation_duration must be a non-negative number of seconds (got {duration})"
            )));
        }
        Ok(())
    }
}
