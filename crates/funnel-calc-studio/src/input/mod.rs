//! Loading funnel definitions from files and command-line arguments.
//!
//! Funnels are described in TOML or JSON:
//!
//! ```toml
//! average_order_value = 95.0
//!
//! [[stages]]
//! name = "Homepage/Landing"
//! users = 100000
//!
//! [[stages]]
//! name = "Purchase"
//! users = 2300
//! ```

pub mod loader;
pub mod stage_arg;
pub mod template;

// Re-export main functions
pub use loader::{load_funnel, parse_funnel_str, FunnelFormat};
pub use stage_arg::parse_stage_arg;
pub use template::{default_funnel, default_stages};
