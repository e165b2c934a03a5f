//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands and main.rs.

use thiserror::Error;

/// Shape violations rejected by the metrics engine.
///
/// Zero denominators are never an error; they resolve to a rate of 0.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunnelError {
    #[error("A funnel needs at least 2 stages, found {found}")]
    TooFewStages { found: usize },

    #[error("Average order value must be a positive number, got {0}")]
    InvalidOrderValue(f64),

    #[error("Transition index {index} is out of range (funnel has {transitions} transitions)")]
    TransitionOutOfRange { index: usize, transitions: usize },
}

/// Errors that can occur while loading a funnel definition
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read funnel file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid JSON funnel definition: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid TOML funnel definition: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported funnel file extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid stage argument '{0}' (expected NAME=USERS)")]
    InvalidStageArg(String),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No stages to chart")]
    EmptyStages,

    #[error("Chart width {0} is too small (minimum {1})")]
    WidthTooSmall(usize, usize),

    #[error("Chart bar height must be at least 1 pixel")]
    ZeroBarHeight,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerializationFailed(#[from] toml::ser::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
