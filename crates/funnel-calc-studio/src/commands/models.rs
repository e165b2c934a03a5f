use crate::chart::ChartConfig;
use crate::engine::Stage;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Where a command gets its funnel from
///
/// A file wins over inline stages; an explicit order value overrides
/// the one stored in the file.
#[derive(Debug, Clone, Default)]
pub struct FunnelSource {
    /// TOML or JSON funnel definition
    pub config_path: Option<PathBuf>,

    /// Stages given directly on the command line
    pub stages: Vec<Stage>,

    /// Average order value override
    pub average_order_value: Option<f64>,
}

/// Projection window for what-if scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Period {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl Period {
    /// Number of monthly periods in this window
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Monthly => 1.0,
            Self::Quarterly => 3.0,
            Self::Annually => 12.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single what-if scenario to project
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhatIfRequest {
    /// Transition to improve (0 = first stage to second)
    pub transition: usize,

    /// Improvement in percent
    pub improvement_pct: f64,

    pub period: Period,
}

impl Default for WhatIfRequest {
    fn default() -> Self {
        Self {
            transition: 0,
            improvement_pct: crate::utils::config::DEFAULT_IMPROVEMENT_PCT,
            period: Period::Monthly,
        }
    }
}

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub source: FunnelSource,

    /// Skip the non-increasing stage check
    pub lenient: bool,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the SVG funnel chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart configuration
    pub chart_config: Option<ChartConfig>,

    /// Print the summary to stdout
    pub print_summary: bool,

    /// Optional scenario to project alongside the analysis
    pub what_if: Option<WhatIfRequest>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            source: FunnelSource::default(),
            lenient: false,
            output_json: None,
            output_svg: None,
            chart_config: None,
            print_summary: true,
            what_if: None,
        }
    }
}

/// Arguments for the what-if command
#[derive(Debug, Clone, Default)]
pub struct WhatIfArgs {
    pub source: FunnelSource,

    /// Skip the non-increasing stage check
    pub lenient: bool,

    pub request: WhatIfRequest,

    /// Write the projection as JSON (optional)
    pub output_json: Option<PathBuf>,
}

/// Arguments for the template command
#[derive(Debug, Clone)]
pub struct TemplateArgs {
    /// Where to write the starter funnel (.toml or .json)
    pub output: PathBuf,

    /// Number of stages to generate
    pub stages: usize,

    /// Replace an existing file
    pub force: bool,
}

impl Default for TemplateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("funnel.toml"),
            stages: crate::utils::config::DEFAULT_STAGE_NAMES.len(),
            force: false,
        }
    }
}
