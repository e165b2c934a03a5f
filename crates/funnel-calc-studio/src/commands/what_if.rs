//! What-if command implementation.
//! Projects the revenue impact of improving one transition.

use super::models::WhatIfArgs;
use super::utils::resolve_funnel;
use super::validation::{validate_funnel, validate_what_if};
use crate::engine::{compute_what_if, WhatIfResult};
use crate::output::{render_what_if, write_what_if};
use anyhow::{Context, Result};
use log::info;

/// Execute the what-if command
pub fn execute_what_if(args: WhatIfArgs) -> Result<WhatIfResult> {
    let config = resolve_funnel(&args.source)?;
    validate_funnel(&config, args.lenient)?;
    validate_what_if(&config, &args.request)?;

    let request = args.request;
    let result = compute_what_if(
        &config.stages,
        config.average_order_value,
        request.transition,
        request.improvement_pct,
        request.period.multiplier(),
    )
    .context("Failed to compute what-if scenario")?;

    if let Some(path) = &args.output_json {
        write_what_if(&result, path).context("Failed to write what-if JSON")?;
        info!("✓ Scenario written to: {}", path.display());
    }

    println!("{}", render_what_if(&result, Some(request.period.label())));

    Ok(result)
}
