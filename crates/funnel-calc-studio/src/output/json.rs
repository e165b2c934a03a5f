//! JSON writers and the report reader.

use super::report::FunnelReport;
use crate::engine::WhatIfResult;
use crate::utils::error::OutputError;
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Write any serializable value as pretty-printed JSON
///
/// Parent directories are created as needed.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or uncreatable parent
/// * `OutputError::SerializationFailed` - value cannot be serialized
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let json = serde_json::to_vec_pretty(value)?;
    super::write_file(output_path.as_ref(), &json)
}

/// Write a full funnel report
pub fn write_report(report: &FunnelReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    debug!(
        "Serializing report with {} transitions",
        report.transitions.len()
    );
    write_json(report, output_path)
}

/// Write a single what-if projection
pub fn write_what_if(
    result: &WhatIfResult,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    debug!(
        "Serializing what-if for {} -> {}",
        result.from_stage, result.to_stage
    );
    write_json(result, output_path)
}

/// Read a report back from a JSON file
///
/// # Errors
/// * `OutputError::ReadFailed` - file cannot be opened
/// * `OutputError::SerializationFailed` - content is not a valid report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<FunnelReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: FunnelReport = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: version {}, {} transitions",
        report.version,
        report.transitions.len()
    );

    Ok(report)
}
