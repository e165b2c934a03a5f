//! Value types consumed and produced by the metrics engine.
//!
//! Everything here is serializable so the same structs flow straight
//! into JSON reports and back out of funnel definition files.

use serde::{Deserialize, Serialize};

/// One step of the user journey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Display label (not required to be unique)
    pub name: String,

    /// Number of users that reached this stage
    pub users: u64,
}

impl Stage {
    pub fn new(name: impl Into<String>, users: u64) -> Self {
        Self {
            name: name.into(),
            users,
        }
    }
}

/// A complete funnel definition as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelConfig {
    /// Average revenue per completed purchase
    pub average_order_value: f64,

    /// Ordered stages, first to last
    pub stages: Vec<Stage>,
}

/// Drop-off between two adjacent stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionMetric {
    /// Position of the transition (stage `index` to stage `index + 1`)
    pub index: usize,

    pub from_stage: String,
    pub to_stage: String,

    /// Users lost between the two stages. Negative when the later stage is larger.
    pub drop_off_users: i64,

    /// Fraction of `from_stage` users that did not reach `to_stage`
    pub drop_off_rate: f64,

    /// Fraction of `from_stage` users that reached `to_stage`
    pub conversion_rate: f64,

    /// Revenue attributed to the drop-off at the overall conversion rate
    pub revenue_lost: f64,

    /// Revenue gained per one percent of `from_stage` users recovered
    pub one_percent_value: f64,
}

/// Funnel-wide totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelSummary {
    /// Last-stage users over first-stage users
    pub overall_conversion_rate: f64,

    /// Last-stage users times average order value
    pub current_revenue: f64,

    /// First-stage users minus last-stage users
    pub total_drop_off_users: i64,

    /// Sum of `revenue_lost` across all transitions
    pub total_revenue_lost: f64,
}

/// Projected impact of improving a single transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfResult {
    pub transition_index: usize,
    pub from_stage: String,
    pub to_stage: String,

    /// Improvement applied, in percent (10.0 means 10%)
    pub improvement_pct: f64,

    /// Number of periods the projection covers
    pub period_multiplier: f64,

    /// Current pass-through rate of the selected transition, `to / from`
    ///
    /// 0 when the from-stage has no users, following the zero-denominator
    /// rule of the metrics. This is not `1 - drop_off_rate` read off a
    /// display, which would report 100% for an empty stage.
    pub current_conversion_rate: f64,

    pub additional_users: f64,
    pub additional_purchases: f64,

    /// Additional revenue for a single period
    pub additional_revenue: f64,

    /// `additional_revenue` scaled by `period_multiplier`
    pub projected_revenue: f64,

    /// Projected revenue as a percentage of current revenue
    pub revenue_lift_pct: f64,
}

/// Transitions and summary computed from one funnel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelAnalysis {
    pub transitions: Vec<TransitionMetric>,
    pub summary: FunnelSummary,
}
