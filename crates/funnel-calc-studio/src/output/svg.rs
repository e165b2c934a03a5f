//! SVG chart output writer.

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Write SVG markup from the chart generator to a file
///
/// # Errors
/// Same as [`super::json::write_json`], minus serialization.
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    debug!("SVG size: {:.2} KB", svg_content.len() as f64 / 1024.0);
    super::write_file(output_path.as_ref(), svg_content.as_bytes())
}
