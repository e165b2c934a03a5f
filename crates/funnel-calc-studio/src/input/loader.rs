//! Funnel definition file loader.

use crate::engine::FunnelConfig;
use crate::utils::error::InputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// On-disk encodings a funnel definition may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunnelFormat {
    Toml,
    Json,
}

impl FunnelFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(InputError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                format!(".{}", other)
            })),
        }
    }
}

/// Load a funnel definition from a TOML or JSON file
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `InputError::UnsupportedFormat` - extension is neither `.toml` nor `.json`
/// * `InputError::ReadFailed` - file cannot be read
/// * `InputError::TomlError` / `InputError::JsonError` - content does not parse
pub fn load_funnel(path: impl AsRef<Path>) -> Result<FunnelConfig, InputError> {
    let path = path.as_ref();
    let format = FunnelFormat::from_path(path)?;

    info!("Loading funnel from: {}", path.display());
    let contents = fs::read_to_string(path)?;

    let config = parse_funnel_str(&contents, format)?;
    debug!(
        "Funnel loaded: {} stages, AOV {}",
        config.stages.len(),
        config.average_order_value
    );

    Ok(config)
}

/// Parse a funnel definition held in memory
pub fn parse_funnel_str(contents: &str, format: FunnelFormat) -> Result<FunnelConfig, InputError> {
    let config = match format {
        FunnelFormat::Toml => toml::from_str(contents)?,
        FunnelFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(config)
}
