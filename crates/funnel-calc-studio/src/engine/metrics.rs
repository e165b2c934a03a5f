//! Drop-off and revenue-loss metrics over an ordered list of stages.
//!
//! Every rate here divides by a stage's user count. A zero denominator
//! yields a rate of 0 instead of NaN or infinity, so degenerate funnels
//! (an empty first stage, a stage nobody reached) still produce finite
//! numbers. Stage counts are never assumed to be non-increasing: a later
//! stage larger than an earlier one shows up as negative drop-off.

use super::schema::{FunnelAnalysis, FunnelConfig, FunnelSummary, Stage, TransitionMetric};
use crate::utils::config::MIN_ENGINE_STAGES;
use crate::utils::error::FunnelError;
use log::{debug, trace};

/// Compute one [`TransitionMetric`] per adjacent stage pair
///
/// **Public** - main entry point for per-transition metrics
///
/// # Arguments
/// * `stages` - Ordered stages, at least 2
/// * `average_order_value` - Revenue per purchase, finite and positive
///
/// # Errors
/// * `FunnelError::TooFewStages` - fewer than 2 stages
/// * `FunnelError::InvalidOrderValue` - non-finite or non-positive AOV
pub fn compute_transition_metrics(
    stages: &[Stage],
    average_order_value: f64,
) -> Result<Vec<TransitionMetric>, FunnelError> {
    validate_shape(stages, average_order_value)?;

    debug!(
        "Computing transition metrics for {} stages (AOV {})",
        stages.len(),
        average_order_value
    );

    let overall_rate = overall_conversion_rate(stages);

    let metrics = stages
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            build_transition(index, &pair[0], &pair[1], overall_rate, average_order_value)
        })
        .collect();

    Ok(metrics)
}

/// Compute funnel-wide totals
///
/// **Public** - summary figures shown above the transition table
///
/// # Errors
/// Same shape checks as [`compute_transition_metrics`].
pub fn compute_summary(
    stages: &[Stage],
    average_order_value: f64,
) -> Result<FunnelSummary, FunnelError> {
    let transitions = compute_transition_metrics(stages, average_order_value)?;
    Ok(summarize(stages, &transitions, average_order_value))
}

/// Compute transitions and summary for a whole funnel definition
pub fn analyze_funnel(config: &FunnelConfig) -> Result<FunnelAnalysis, FunnelError> {
    let transitions = compute_transition_metrics(&config.stages, config.average_order_value)?;
    let summary = summarize(&config.stages, &transitions, config.average_order_value);

    debug!(
        "Funnel analysed: overall conversion {:.4}, revenue lost {:.2}",
        summary.overall_conversion_rate, summary.total_revenue_lost
    );

    Ok(FunnelAnalysis {
        transitions,
        summary,
    })
}

/// Last-stage users over first-stage users, 0 when the first stage is empty
pub fn overall_conversion_rate(stages: &[Stage]) -> f64 {
    match (stages.first(), stages.last()) {
        (Some(first), Some(last)) => ratio(last.users as f64, first.users),
        _ => 0.0,
    }
}

/// Transitions ordered by revenue lost, largest first
///
/// Ties keep their funnel order.
pub fn rank_by_revenue_lost(metrics: &[TransitionMetric]) -> Vec<&TransitionMetric> {
    let mut ranked: Vec<&TransitionMetric> = metrics.iter().collect();
    ranked.sort_by(|a, b| b.revenue_lost.total_cmp(&a.revenue_lost));
    ranked
}

/// Transitions whose drop-off rate is strictly above `threshold`
pub fn major_friction_points(
    metrics: &[TransitionMetric],
    threshold: f64,
) -> Vec<&TransitionMetric> {
    metrics
        .iter()
        .filter(|m| m.drop_off_rate > threshold)
        .collect()
}

/// Reject inputs the formulas are not defined for
pub(crate) fn validate_shape(stages: &[Stage], average_order_value: f64) -> Result<(), FunnelError> {
    if stages.len() < MIN_ENGINE_STAGES {
        return Err(FunnelError::TooFewStages {
            found: stages.len(),
        });
    }

    if !average_order_value.is_finite() || average_order_value <= 0.0 {
        return Err(FunnelError::InvalidOrderValue(average_order_value));
    }

    Ok(())
}

/// `numerator / denominator`, or 0 when the denominator is 0
pub(crate) fn ratio(numerator: f64, denominator: u64) -> f64 {
    if denominator > 0 {
        numerator / denominator as f64
    } else {
        0.0
    }
}

/// `from - to` as a signed count
pub(crate) fn signed_delta(from: u64, to: u64) -> i64 {
    let magnitude = i64::try_from(from.abs_diff(to)).unwrap_or(i64::MAX);
    if from >= to {
        magnitude
    } else {
        -magnitude
    }
}

fn build_transition(
    index: usize,
    from: &Stage,
    to: &Stage,
    overall_rate: f64,
    average_order_value: f64,
) -> TransitionMetric {
    let drop_off_users = signed_delta(from.users, to.users);
    let drop_off_rate = ratio(drop_off_users as f64, from.users);
    let conversion_rate = ratio(to.users as f64, from.users);

    // Lost users are valued at the funnel-wide conversion rate
    let revenue_lost = drop_off_users as f64 * overall_rate * average_order_value;
    let one_percent_value = 0.01 * from.users as f64 * overall_rate * average_order_value;

    trace!(
        "{} -> {}: drop-off {} ({:.4}), revenue lost {:.2}",
        from.name,
        to.name,
        drop_off_users,
        drop_off_rate,
        revenue_lost
    );

    TransitionMetric {
        index,
        from_stage: from.name.clone(),
        to_stage: to.name.clone(),
        drop_off_users,
        drop_off_rate,
        conversion_rate,
        revenue_lost,
        one_percent_value,
    }
}

fn summarize(
    stages: &[Stage],
    transitions: &[TransitionMetric],
    average_order_value: f64,
) -> FunnelSummary {
    let first_users = stages.first().map(|s| s.users).unwrap_or(0);
    let last_users = stages.last().map(|s| s.users).unwrap_or(0);

    FunnelSummary {
        overall_conversion_rate: overall_conversion_rate(stages),
        current_revenue: last_users as f64 * average_order_value,
        total_drop_off_users: signed_delta(first_users, last_users),
        total_revenue_lost: transitions.iter().map(|t| t.revenue_lost).sum(),
    }
}
