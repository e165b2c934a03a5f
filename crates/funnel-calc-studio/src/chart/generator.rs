//! Hand-rolled SVG funnel chart.

use crate::engine::metrics::ratio;
use crate::engine::Stage;
use crate::utils::config::CHART_PALETTE;
use crate::utils::error::ChartError;
use crate::utils::format::{format_count, format_rate};
use log::info;

/// Narrowest chart that still leaves room for labels
pub const MIN_CHART_WIDTH: usize = 200;

const TITLE_HEIGHT: usize = 40;
const BAR_GAP: usize = 8;
const SIDE_MARGIN: usize = 20;

/// Funnel chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub bar_height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Conversion Funnel".to_string(),
            width: 900,
            bar_height: 48,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_bar_height(mut self, bar_height: usize) -> Self {
        self.bar_height = bar_height;
        self
    }
}

/// Generate an SVG funnel chart from stages
///
/// Bar widths are relative to the largest stage, so a funnel whose counts
/// grow part way down still fits the canvas. Labels show the count and its
/// share of the first stage.
///
/// # Errors
/// * `ChartError::EmptyStages` - nothing to draw
/// * `ChartError::WidthTooSmall` - width below [`MIN_CHART_WIDTH`]
/// * `ChartError::ZeroBarHeight` - bars would be invisible
pub fn generate_funnel_chart(
    stages: &[Stage],
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if stages.is_empty() {
        return Err(ChartError::EmptyStages);
    }

    let config = config.cloned().unwrap_or_default();
    if config.width < MIN_CHART_WIDTH {
        return Err(ChartError::WidthTooSmall(config.width, MIN_CHART_WIDTH));
    }
    if config.bar_height == 0 {
        return Err(ChartError::ZeroBarHeight);
    }

    info!("Generating funnel chart with {} stages", stages.len());

    let width = config.width;
    let row_height = config.bar_height + BAR_GAP;
    let total_height = TITLE_HEIGHT + stages.len() * row_height + BAR_GAP;
    let plot_width = (width - 2 * SIDE_MARGIN) as f64;

    let widest = stages.iter().map(|s| s.users).max().unwrap_or(0);
    let initial = stages[0].users;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, total_height, width, total_height
    ));
    svg.push_str(r#"<style>.stage { font: 13px sans-serif; fill: #334155; }</style>"#);
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        width, total_height
    ));
    svg.push_str(&format!(
        r##"<text x="{}" y="26" font-size="16" text-anchor="middle" font-weight="bold" fill="#0f172a">{}</text>"##,
        width / 2,
        escape_xml(&config.title)
    ));

    for (i, stage) in stages.iter().enumerate() {
        let bar_width = ratio(stage.users as f64, widest) * plot_width;
        let x = (width as f64 - bar_width) / 2.0;
        let y = TITLE_HEIGHT + i * row_height;
        let color = CHART_PALETTE[i % CHART_PALETTE.len()];
        let label = format!(
            "{}: {} ({})",
            stage.name,
            format_count(stage.users.min(i64::MAX as u64) as i64),
            format_rate(ratio(stage.users as f64, initial))
        );

        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{}" width="{:.2}" height="{}" fill="{}" rx="3"><title>{}</title></rect>"#,
            x,
            y,
            bar_width,
            config.bar_height,
            color,
            escape_xml(&label)
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" class="stage">{}</text>"#,
            width / 2,
            y + config.bar_height / 2,
            escape_xml(&label)
        ));
    }

    svg.push_str("</svg>");

    info!("Funnel chart generated ({} bytes)", svg.len());
    Ok(svg)
}

/// Escape the characters SVG text content cannot hold verbatim
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
