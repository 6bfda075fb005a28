//! Export functionality for Signpost presentations.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a laid-out tooltip into an output format. It is the final stage
//! of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Tooltip + Screen
//!     ↓ sizing, row layout, placement
//! Presentation
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`SignpostError::Export`] at the crate
//! boundary.
//!
//! [`SignpostError::Export`]: crate::SignpostError::Export

/// SVG export backend.
pub mod svg;

use crate::presentation::Presentation;

/// Abstraction for presentation export backends.
///
/// See the [`svg`] module for the built-in SVG implementation.
pub trait Exporter {
    /// Exports a presentation to the backend's output format.
    ///
    /// # Arguments
    ///
    /// * `presentation` - The laid-out tooltip, in screen coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the presentation cannot be converted to
    /// the target format, or [`Error::Io`] if writing the output fails.
    fn export_presentation(&mut self, presentation: &Presentation) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
