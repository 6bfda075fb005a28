//! Error types for Signpost operations.
//!
//! This module provides the main error type [`SignpostError`] which wraps
//! the failures that can occur while laying out, animating and rendering a
//! tooltip.

use std::io;

use thiserror::Error;

use signpost_core::GeometryError;

use crate::transition::TransitionError;

/// The main error type for Signpost operations.
#[derive(Debug, Error)]
pub enum SignpostError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SignpostError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
