//! Smaller commands and helpers shared by the main ones.

use super::models::{FunnelSource, TemplateArgs};
use super::validation::funnel_findings;
use crate::engine::FunnelConfig;
use crate::input::{default_funnel, load_funnel};
use crate::output::write_funnel_definition;
use crate::utils::config::{
    DEFAULT_AVERAGE_ORDER_VALUE, MAX_STAGES, MIN_STAGES, SCHEMA_VERSION,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

/// Build the funnel a command will work on
///
/// **Public** - shared by analyze and what-if
pub fn resolve_funnel(source: &FunnelSource) -> Result<FunnelConfig> {
    let mut config = if let Some(path) = &source.config_path {
        if !source.stages.is_empty() {
            debug!("Funnel file given; ignoring {} inline stage(s)", source.stages.len());
        }
        load_funnel(path)
            .with_context(|| format!("Failed to load funnel from {}", path.display()))?
    } else if !source.stages.is_empty() {
        FunnelConfig {
            average_order_value: DEFAULT_AVERAGE_ORDER_VALUE,
            stages: source.stages.clone(),
        }
    } else {
        anyhow::bail!("No funnel given: pass a funnel file or at least two --stage NAME=USERS");
    };

    if let Some(aov) = source.average_order_value {
        config.average_order_value = aov;
    }

    Ok(config)
}

/// Write a starter funnel definition
pub fn execute_template(args: TemplateArgs) -> Result<()> {
    if !(MIN_STAGES..=MAX_STAGES).contains(&args.stages) {
        anyhow::bail!(
            "Template must have between {} and {} stages",
            MIN_STAGES,
            MAX_STAGES
        );
    }

    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = default_funnel(args.stages);
    write_funnel_definition(&config, &args.output)
        .context("Failed to write funnel template")?;

    info!("✓ Template written to: {}", args.output.display());
    Ok(())
}

/// Validate a funnel definition file
pub fn validate_funnel_file(file_path: &Path, lenient: bool) -> Result<()> {
    println!("Validating funnel: {}", file_path.display());

    let config = load_funnel(file_path)
        .with_context(|| format!("Failed to load funnel from {}", file_path.display()))?;
    let findings = funnel_findings(&config, lenient);

    if findings.is_empty() {
        println!("✓ Valid funnel");
        println!("  Stages: {}", config.stages.len());
        println!("  Average order value: ${:.2}", config.average_order_value);
        return Ok(());
    }

    for finding in &findings {
        println!("✗ {}", finding);
    }
    anyhow::bail!("Funnel has {} problem(s)", findings.len())
}

/// Display version information
pub fn display_version() {
    println!("Funnel Calc v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Conversion funnel drop-off and revenue impact calculator.");
}
