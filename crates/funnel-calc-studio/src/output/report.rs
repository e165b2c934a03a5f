//! JSON report schema.
//!
//! Schema is versioned to allow future evolution.

use crate::engine::{
    major_friction_points, rank_by_revenue_lost, FunnelAnalysis, FunnelConfig, FunnelSummary,
    Stage, TransitionMetric, WhatIfResult,
};
use crate::utils::config::{MAJOR_FRICTION_DROP_OFF_RATE, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    pub average_order_value: f64,

    /// Input stages, echoed so the report stands alone
    pub stages: Vec<Stage>,

    pub summary: FunnelSummary,

    pub transitions: Vec<TransitionMetric>,

    /// Transition indices ranked by revenue lost, largest first
    pub priorities: Vec<usize>,

    /// Transition indices whose drop-off rate exceeds the friction threshold
    pub major_friction: Vec<usize>,

    /// Scenario projection, when one was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_if: Option<WhatIfResult>,
}

impl FunnelReport {
    /// Assemble a report from a funnel and its computed metrics
    pub fn new(
        config: &FunnelConfig,
        analysis: FunnelAnalysis,
        what_if: Option<WhatIfResult>,
    ) -> Self {
        let priorities = rank_by_revenue_lost(&analysis.transitions)
            .iter()
            .map(|t| t.index)
            .collect();
        let major_friction =
            major_friction_points(&analysis.transitions, MAJOR_FRICTION_DROP_OFF_RATE)
                .iter()
                .map(|t| t.index)
                .collect();

        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            average_order_value: config.average_order_value,
            stages: config.stages.clone(),
            summary: analysis.summary,
            transitions: analysis.transitions,
            priorities,
            major_friction,
            what_if,
        }
    }
}
