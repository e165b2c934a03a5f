//! Funnel Calc CLI
//!
//! A conversion funnel calculator. Computes per-stage drop-off, revenue
//! lost to drop-off and the projected impact of improving a stage.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use funnel_calc_studio::chart::ChartConfig;
use funnel_calc_studio::commands::{
    display_version, execute_analyze, execute_template, execute_what_if, validate_funnel_file,
    AnalyzeArgs, FunnelSource, Period, TemplateArgs, WhatIfArgs, WhatIfRequest,
};
use funnel_calc_studio::engine::Stage;
use funnel_calc_studio::input::parse_stage_arg;
use funnel_calc_studio::utils::config::DEFAULT_IMPROVEMENT_PCT;

/// Funnel Calc - conversion funnel revenue impact calculator
#[derive(Parser, Debug)]
#[command(name = "funnel-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Funnel input shared by analyze and what-if
#[derive(Args, Debug)]
struct FunnelInput {
    /// Funnel definition file (.toml or .json)
    #[arg(short, long, env = "FUNNEL_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Inline stage as NAME=USERS (repeat in funnel order)
    #[arg(short, long = "stage", value_parser = parse_stage)]
    stages: Vec<Stage>,

    /// Average order value in dollars (overrides the file)
    #[arg(long)]
    aov: Option<f64>,

    /// Allow stages with more users than the stage before them
    #[arg(long)]
    lenient: bool,
}

impl FunnelInput {
    fn into_source(self) -> (FunnelSource, bool) {
        (
            FunnelSource {
                config_path: self.config,
                stages: self.stages,
                average_order_value: self.aov,
            },
            self.lenient,
        )
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse a funnel: drop-off, revenue lost and priorities
    Analyze {
        #[command(flatten)]
        input: FunnelInput,

        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for the SVG funnel chart
        #[arg(long, default_missing_value = "funnel.svg", num_args = 0..=1)]
        chart: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "900")]
        width: usize,

        /// Height of each chart bar in pixels
        #[arg(long, default_value = "48")]
        bar_height: usize,

        /// Also project improving this transition (0 = first stage to second)
        #[arg(long)]
        improve: Option<usize>,

        /// Improvement percentage for --improve
        #[arg(long, default_value_t = DEFAULT_IMPROVEMENT_PCT)]
        improvement: f64,

        /// Projection window for --improve
        #[arg(long, value_enum, default_value_t = Period::Monthly)]
        period: Period,

        /// Do not print the summary to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Project the revenue impact of improving one transition
    WhatIf {
        #[command(flatten)]
        input: FunnelInput,

        /// Transition to improve (0 = first stage to second)
        #[arg(short, long)]
        transition: usize,

        /// Improvement percentage (1-100)
        #[arg(long, default_value_t = DEFAULT_IMPROVEMENT_PCT)]
        improvement: f64,

        /// Projection window
        #[arg(long, value_enum, default_value_t = Period::Monthly)]
        period: Period,

        /// Write the projection as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a starter funnel definition
    Template {
        /// Output path (.toml or .json)
        #[arg(short, long, default_value = "funnel.toml")]
        output: PathBuf,

        /// Number of stages
        #[arg(long, default_value = "5")]
        stages: usize,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a funnel definition file
    Validate {
        /// Path to funnel definition file
        #[arg(short, long)]
        file: PathBuf,

        /// Allow stages with more users than the stage before them
        #[arg(long)]
        lenient: bool,
    },

    /// Display version information
    Version,
}

fn parse_stage(arg: &str) -> Result<Stage, String> {
    parse_stage_arg(arg).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            output,
            chart,
            title,
            width,
            bar_height,
            improve,
            improvement,
            period,
            quiet,
        } => {
            let (source, lenient) = input.into_source();

            let chart_config = chart.as_ref().map(|_| {
                let config = ChartConfig::new()
                    .with_width(width)
                    .with_bar_height(bar_height);
                match title {
                    Some(title) => config.with_title(title),
                    None => config,
                }
            });

            let what_if = improve.map(|transition| WhatIfRequest {
                transition,
                improvement_pct: improvement,
                period,
            });

            let args = AnalyzeArgs {
                source,
                lenient,
                output_json: output,
                output_svg: chart,
                chart_config,
                print_summary: !quiet,
                what_if,
            };

            execute_analyze(args)?;
        }

        Commands::WhatIf {
            input,
            transition,
            improvement,
            period,
            output,
        } => {
            let (source, lenient) = input.into_source();

            let args = WhatIfArgs {
                source,
                lenient,
                request: WhatIfRequest {
                    transition,
                    improvement_pct: improvement,
                    period,
                },
                output_json: output,
            };

            execute_what_if(args)?;
        }

        Commands::Template {
            output,
            stages,
            force,
        } => {
            execute_template(TemplateArgs {
                output,
                stages,
                force,
            })?;
        }

        Commands::Validate { file, lenient } => {
            validate_funnel_file(&file, lenient)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
