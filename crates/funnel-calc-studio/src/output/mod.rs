//! Output writers for funnel reports and charts.
//!
//! This module handles writing data to disk and the terminal:
//! - JSON reports (pretty printed, readable back)
//! - Funnel definitions (TOML or JSON)
//! - SVG funnel charts
//! - Coloured terminal summaries

pub mod definition;
pub mod json;
pub mod report;
pub mod svg;
pub mod terminal;

// Re-export main functions
pub use definition::write_funnel_definition;
pub use json::{read_report, write_json, write_report, write_what_if};
pub use report::FunnelReport;
pub use svg::write_svg;
pub use terminal::{render_terminal_report, render_what_if};

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directories of an output path if they are missing
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Validate `path`, create its parent directories and write `contents`
///
/// Every writer in this module funnels through here, so all outputs
/// share the same path rules.
pub(crate) fn write_file(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    validate_path(path)?;
    ensure_parent_dir(path)?;
    fs::write(path, contents)?;

    info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
