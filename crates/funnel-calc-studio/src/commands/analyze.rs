//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Resolves the funnel (file or inline stages)
//! 2. Validates it against the CLI input rules
//! 3. Computes transition metrics and the summary
//! 4. Optionally projects a what-if scenario
//! 5. Writes the JSON report and SVG chart, and prints the summary

use super::models::AnalyzeArgs;
use super::utils::resolve_funnel;
use super::validation::{validate_funnel, validate_what_if};
use crate::chart::generate_funnel_chart;
use crate::engine::{analyze_funnel, compute_what_if, FunnelConfig};
use crate::output::{render_terminal_report, write_report, write_svg, FunnelReport};
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was rendered and written, for callers that want to
/// inspect it further.
///
/// # Errors
/// * Funnel file loading failures
/// * Funnel or what-if validation failures
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<FunnelReport> {
    let config = resolve_funnel(&args.source)?;
    validate_funnel(&config, args.lenient)?;

    info!(
        "Analysing funnel with {} stages (AOV ${:.2})",
        config.stages.len(),
        config.average_order_value
    );

    let report = build_report(&args, &config)?;

    write_outputs(&args, &config, &report)?;

    if args.print_summary {
        println!("{}", render_terminal_report(&report));
    }

    Ok(report)
}

/// Compute metrics and the optional scenario into a report
fn build_report(args: &AnalyzeArgs, config: &FunnelConfig) -> Result<FunnelReport> {
    let analysis = analyze_funnel(config).context("Failed to compute funnel metrics")?;
    debug!("Computed {} transitions", analysis.transitions.len());

    let what_if = match &args.what_if {
        Some(request) => {
            validate_what_if(config, request)?;
            Some(
                compute_what_if(
                    &config.stages,
                    config.average_order_value,
                    request.transition,
                    request.improvement_pct,
                    request.period.multiplier(),
                )
                .context("Failed to compute what-if scenario")?,
            )
        }
        None => None,
    };

    Ok(FunnelReport::new(config, analysis, what_if))
}

/// Write output files (JSON report and optional SVG chart).
fn write_outputs(args: &AnalyzeArgs, config: &FunnelConfig, report: &FunnelReport) -> Result<()> {
    if let Some(path) = &args.output_json {
        write_report(report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if let Some(path) = &args.output_svg {
        let svg = generate_funnel_chart(&config.stages, args.chart_config.as_ref())
            .context("Failed to generate funnel chart")?;
        write_svg(&svg, path).context("Failed to write funnel chart SVG")?;
        info!("✓ Funnel chart written to: {}", path.display());
    }

    Ok(())
}
