//! Signpost Core Types and Algorithms
//!
//! This crate provides the pure geometry behind Signpost tooltips. It
//! includes:
//!
//! - **Geometry**: Points, sizes, rectangles and insets ([`geometry`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Anchor**: The element a tooltip points at ([`anchor::Anchor`])
//! - **Content**: Text, image and action rows ([`content`] module)
//! - **Sizing**: Tooltip width and screen-clamped dialog size ([`sizing`] module)
//! - **Placement**: Side selection, dialog origin and pointer ([`placement`] module)
//!
//! Nothing here holds state or performs I/O; every function can be called
//! again on each layout pass.

pub mod anchor;
pub mod color;
pub mod content;
pub mod geometry;
pub mod placement;
pub mod sizing;

mod error;

pub use error::GeometryError;
