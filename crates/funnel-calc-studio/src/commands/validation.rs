//! Input rules the CLI enforces before handing a funnel to the engine.
//!
//! The engine itself only rejects funnels its formulas cannot handle.
//! These checks mirror what an interactive form would allow: a bounded
//! number of named stages, a positive order value and counts that never
//! grow down the funnel.

use super::models::WhatIfRequest;
use crate::engine::FunnelConfig;
use crate::utils::config::{MAX_IMPROVEMENT_PCT, MAX_STAGES, MIN_IMPROVEMENT_PCT, MIN_STAGES};
use anyhow::Result;
use log::debug;

/// Every rule the funnel breaks, in stage order
///
/// With `lenient` set, stages larger than their predecessor are allowed
/// and surface as negative drop-off instead.
pub fn funnel_findings(config: &FunnelConfig, lenient: bool) -> Vec<String> {
    let mut findings = Vec::new();
    let count = config.stages.len();

    if !(MIN_STAGES..=MAX_STAGES).contains(&count) {
        findings.push(format!(
            "Funnel must have between {} and {} stages, found {}",
            MIN_STAGES, MAX_STAGES, count
        ));
    }

    let aov = config.average_order_value;
    if !aov.is_finite() || aov <= 0.0 {
        findings.push(format!(
            "Average order value must be greater than 0, got {}",
            aov
        ));
    }

    for (i, stage) in config.stages.iter().enumerate() {
        if stage.name.trim().is_empty() {
            findings.push(format!("Stage {} has an empty name", i + 1));
        }
    }

    if let Some(first) = config.stages.first() {
        if first.users == 0 {
            findings.push(format!(
                "First stage '{}' must have at least 1 user",
                first.name
            ));
        }
    }

    if !lenient {
        for pair in config.stages.windows(2) {
            if pair[1].users > pair[0].users {
                findings.push(format!(
                    "Stage '{}' has more users ({}) than the stage before it '{}' ({})",
                    pair[1].name, pair[1].users, pair[0].name, pair[0].users
                ));
            }
        }
    }

    debug!("Funnel validation produced {} finding(s)", findings.len());
    findings
}

/// Fail with every finding if the funnel breaks any rule
pub fn validate_funnel(config: &FunnelConfig, lenient: bool) -> Result<()> {
    let findings = funnel_findings(config, lenient);
    if !findings.is_empty() {
        anyhow::bail!("Invalid funnel:\n  - {}", findings.join("\n  - "));
    }
    Ok(())
}

/// Validate a what-if request against the funnel it targets
pub fn validate_what_if(config: &FunnelConfig, request: &WhatIfRequest) -> Result<()> {
    let transitions = config.stages.len().saturating_sub(1);
    if request.transition >= transitions {
        anyhow::bail!(
            "Transition {} does not exist (funnel has {} transitions, numbered from 0)",
            request.transition,
            transitions
        );
    }

    let pct = request.improvement_pct;
    if !pct.is_finite() || !(MIN_IMPROVEMENT_PCT..=MAX_IMPROVEMENT_PCT).contains(&pct) {
        anyhow::bail!(
            "Improvement must be between {}% and {}%, got {}%",
            MIN_IMPROVEMENT_PCT,
            MAX_IMPROVEMENT_PCT,
            pct
        );
    }

    Ok(())
}
