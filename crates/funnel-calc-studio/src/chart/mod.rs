//! SVG funnel chart generation.
//!
//! Renders one centred bar per stage, sized by its user count, so the
//! funnel's shape and its steepest narrowing are visible at a glance.

pub mod generator;

// Re-export main types
pub use generator::{generate_funnel_chart, ChartConfig};
