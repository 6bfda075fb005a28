//! Color handling for tooltip styling
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Dialog backgrounds, action buttons and the dimming
//! backdrop are all described with it.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "white".
    ///
    /// # Examples
    ///
    /// ```
    /// use signpost_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha value.
    ///
    /// The backdrop uses this to apply the global background alpha to black.
    ///
    /// # Examples
    ///
    /// ```
    /// use signpost_core::color::Color;
    ///
    /// let dim = Color::new("black").unwrap().with_alpha(0.3);
    /// assert!((dim.alpha() - 0.3).abs() < 0.001);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the color with its alpha multiplied by `factor`.
    ///
    /// Used for the highlighted (pressed) state of action buttons.
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.alpha() * factor)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
