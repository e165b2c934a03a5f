//! Funnel definition writer (the inverse of `input::load_funnel`).

use crate::engine::FunnelConfig;
use crate::input::FunnelFormat;
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Write a funnel definition as TOML or JSON, chosen by file extension
///
/// # Errors
/// * `OutputError::InvalidPath` - unsupported extension or unusable path
/// * `OutputError::TomlSerializationFailed` / `OutputError::SerializationFailed`
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_funnel_definition(
    config: &FunnelConfig,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    super::validate_path(output_path)?;
    let format = FunnelFormat::from_path(output_path)
        .map_err(|e| OutputError::InvalidPath(e.to_string()))?;

    let contents = match format {
        FunnelFormat::Toml => toml::to_string_pretty(config)?,
        FunnelFormat::Json => serde_json::to_string_pretty(config)?,
    };

    super::write_file(output_path, contents.as_bytes())?;

    info!(
        "Funnel definition with {} stages written to: {}",
        config.stages.len(),
        output_path.display()
    );
    Ok(())
}
