//! CLI logic for the floorplan tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use floorplan::{FloorplanBuilder, FloorplanError};

/// Run the floorplan CLI application
///
/// Reads the input file, renders it and writes the SVG to the output path.
///
/// # Errors
///
/// Returns `FloorplanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parse errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FloorplanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing floorplan"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = FloorplanBuilder::new(app_config);
    let floorplan = builder.parse(&source)?;
    let svg = builder.render_svg(&floorplan)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
