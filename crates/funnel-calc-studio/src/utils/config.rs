//! Configuration and constants for the calculator and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Smallest funnel the engine accepts
pub const MIN_ENGINE_STAGES: usize = 2;

// Bounds the CLI applies to user-supplied funnels
pub const MIN_STAGES: usize = 3;
pub const MAX_STAGES: usize = 10;

/// Default average order value in dollars
pub const DEFAULT_AVERAGE_ORDER_VALUE: f64 = 95.0;

/// Users at the first stage of a generated template
pub const DEFAULT_FIRST_STAGE_USERS: u64 = 100_000;

/// Ratio applied to the first stage when seeding the second one
pub const DEFAULT_SECOND_STAGE_RATIO: f64 = 0.7;

/// Ratio applied to each previous stage for every later stage
pub const DEFAULT_LATER_STAGE_RATIO: f64 = 0.5;

/// Stage names used when generating a starter funnel
pub const DEFAULT_STAGE_NAMES: &[&str] = &[
    "Homepage/Landing",
    "Product Page View",
    "Add to Cart",
    "Checkout Begin",
    "Purchase",
];

// What-if improvement bounds, in percent
pub const MIN_IMPROVEMENT_PCT: f64 = 1.0;
pub const MAX_IMPROVEMENT_PCT: f64 = 100.0;
pub const DEFAULT_IMPROVEMENT_PCT: f64 = 10.0;

/// Drop-off rate above which a transition counts as a major friction point
pub const MAJOR_FRICTION_DROP_OFF_RATE: f64 = 0.5;

/// Fill colours for funnel chart bars, cycled when a funnel has more stages
pub const CHART_PALETTE: &[&str] = &["#3b82f6", "#60a5fa", "#93c5fd", "#bfdbfe", "#dbeafe"];
