//! What-if projection for improving a single transition.

use super::metrics::{overall_conversion_rate, ratio, validate_shape};
use super::schema::{Stage, WhatIfResult};
use crate::utils::error::FunnelError;
use log::debug;

/// Project the revenue impact of improving one transition
///
/// **Public** - main entry point for scenario planning
///
/// The extra users are taken from the selected transition's *from* stage
/// and valued at the funnel-wide conversion rate, the same estimator used
/// for revenue lost.
///
/// # Arguments
/// * `stages` - Ordered stages, at least 2
/// * `average_order_value` - Revenue per purchase
/// * `selected_index` - Transition to improve, `0..stages.len() - 1`
/// * `improvement_pct` - Improvement in percent (10.0 means 10%)
/// * `period_multiplier` - Number of periods to project over (1, 3, 12, ...)
///
/// # Errors
/// * `FunnelError::TooFewStages` / `FunnelError::InvalidOrderValue` - bad funnel shape
/// * `FunnelError::TransitionOutOfRange` - `selected_index` does not name a transition
pub fn compute_what_if(
    stages: &[Stage],
    average_order_value: f64,
    selected_index: usize,
    improvement_pct: f64,
    period_multiplier: f64,
) -> Result<WhatIfResult, FunnelError> {
    validate_shape(stages, average_order_value)?;

    let transitions = stages.len() - 1;
    if selected_index >= transitions {
        return Err(FunnelError::TransitionOutOfRange {
            index: selected_index,
            transitions,
        });
    }

    let from = &stages[selected_index];
    let to = &stages[selected_index + 1];
    let overall_rate = overall_conversion_rate(stages);

    let additional_users = from.users as f64 * improvement_pct / 100.0;
    let additional_purchases = additional_users * overall_rate;
    let additional_revenue = additional_purchases * average_order_value;
    let projected_revenue = additional_revenue * period_multiplier;

    let current_revenue = stages
        .last()
        .map(|s| s.users as f64 * average_order_value)
        .unwrap_or(0.0);
    let revenue_lift_pct = if current_revenue > 0.0 {
        projected_revenue / current_revenue * 100.0
    } else {
        0.0
    };

    debug!(
        "What-if {} -> {} (+{}% x{}): projected revenue {:.2}",
        from.name, to.name, improvement_pct, period_multiplier, projected_revenue
    );

    Ok(WhatIfResult {
        transition_index: selected_index,
        from_stage: from.name.clone(),
        to_stage: to.name.clone(),
        improvement_pct,
        period_multiplier,
        current_conversion_rate: ratio(to.users as f64, from.users),
        additional_users,
        additional_purchases,
        additional_revenue,
        projected_revenue,
        revenue_lift_pct,
    })
}
