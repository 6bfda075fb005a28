//! CLI logic for the Signpost tooltip previewer.
//!
//! Reads a scene file, lays the tooltip out with [`TooltipBuilder`] and
//! writes the result as SVG.

pub mod error_adapter;

mod args;
mod config;
mod scene;

pub use args::Args;

use std::fs;

use log::info;

use signpost::{SignpostError, TooltipBuilder, measure::TextStyle};

use scene::Scene;

/// Run the Signpost CLI application
///
/// This function lays out the tooltip described by the input scene and
/// writes the rendered SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SignpostError` for:
/// - File I/O errors
/// - Configuration and scene loading errors
/// - Malformed geometry
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SignpostError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let scene = Scene::parse(&source)?;

    let app_config = scene.apply_safe_area(app_config);
    let tooltip = scene.to_tooltip(&TextStyle::from(app_config.style()))?;

    let builder = TooltipBuilder::new(app_config);
    let presentation = builder.layout(&tooltip, scene.screen())?;
    let svg = builder.render_svg(&presentation)?;

    fs::write(&args.output, svg)?;

    info!(
        output_file = args.output,
        side = presentation.placement().side().name(),
        overflows = presentation.overflows();
        "SVG exported successfully"
    );

    Ok(())
}
