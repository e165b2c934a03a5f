//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the engine, input loaders and output writers
//! to perform user tasks.

pub mod analyze;
pub mod models;
pub mod utils;
pub mod validation;
pub mod what_if;

// Re-export main command functions
pub use analyze::execute_analyze;
pub use models::{AnalyzeArgs, FunnelSource, Period, TemplateArgs, WhatIfArgs, WhatIfRequest};
pub use utils::{display_version, execute_template, resolve_funnel, validate_funnel_file};
pub use validation::{funnel_findings, validate_funnel, validate_what_if};
pub use what_if::execute_what_if;
