//! Funnel Calc Studio library
//!
//! Conversion funnel analysis: per-stage drop-off, revenue lost to
//! drop-off and what-if projections, plus the input loaders, report
//! writers and CLI commands built around them.
//!
//! ```
//! use funnel_calc_studio::engine::{compute_summary, Stage};
//!
//! let stages = vec![Stage::new("Landing", 1000), Stage::new("Purchase", 50)];
//! let summary = compute_summary(&stages, 40.0).unwrap();
//! assert_eq!(summary.total_drop_off_users, 950);
//! ```

pub mod chart;
pub mod commands;
pub mod engine;
pub mod input;
pub mod output;
pub mod utils;
