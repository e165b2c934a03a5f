//! Funnel metrics engine.
//!
//! Pure functions that turn an ordered list of stage counts and an
//! average order value into:
//! - Per-transition drop-off and revenue lost
//! - Funnel-wide summary totals
//! - What-if projections for improving a single transition
//!
//! Nothing here holds state; callers re-run the functions whenever
//! their inputs change.

pub mod metrics;
pub mod schema;
pub mod what_if;

// Re-export main types and functions
pub use metrics::{
    analyze_funnel, compute_summary, compute_transition_metrics, major_friction_points,
    overall_conversion_rate, rank_by_revenue_lost,
};
pub use schema::{
    FunnelAnalysis, FunnelConfig, FunnelSummary, Stage, TransitionMetric, WhatIfResult,
};
pub use what_if::compute_what_if;
