//! Terminal output rendering for funnel reports.
//!
//! Provides human-readable summaries with visual cues for the
//! transitions that cost the most revenue.

use super::report::FunnelReport;
use crate::engine::metrics::ratio;
use crate::engine::{TransitionMetric, WhatIfResult};
use crate::utils::config::MAJOR_FRICTION_DROP_OFF_RATE;
use crate::utils::format::{format_count, format_currency, format_rate, format_users};
use colored::*;

const TRANSITION_COL: usize = 40;
const BAR_WIDTH: usize = 40;
const RULE: &str = "---------------------------------------------------------------------------------------------";

/// Render a full funnel report for the terminal
pub fn render_terminal_report(report: &FunnelReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_summary(report));
    out.push_str(&render_funnel_bars(report));
    out.push_str(&render_transition_table(&report.transitions));
    out.push_str(&render_priorities(report));

    if let Some(what_if) = &report.what_if {
        out.push_str(&render_what_if(what_if, None));
    }

    out
}

/// Render the impact summary of a what-if projection
///
/// `period_label` names the projection window (e.g. "Annually"); without
/// one the multiplier is shown as a number of periods.
pub fn render_what_if(result: &WhatIfResult, period_label: Option<&str>) -> String {
    let window = period_label
        .map(|p| p.to_string())
        .unwrap_or_else(|| format!("{} period(s)", result.period_multiplier));

    let mut out = String::new();
    out.push_str("\n🎯 ");
    out.push_str(&"Scenario Planning".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Improving {} → {} by {}%\n\n",
        result.from_stage.bold(),
        result.to_stage.bold(),
        result.improvement_pct
    ));
    out.push_str(&format!(
        "  Additional conversions: +{}\n",
        format_users(result.additional_users)
    ));
    out.push_str(&format!(
        "  Additional purchases:   +{}\n",
        format_users(result.additional_purchases)
    ));
    out.push_str(&format!(
        "  Revenue per period:     {}\n",
        format_currency(result.additional_revenue)
    ));
    out.push_str(&format!(
        "  {} revenue: {}\n",
        window,
        format_currency(result.projected_revenue).green().bold()
    ));
    out.push_str(&format!(
        "  Revenue lift:           +{:.1}%\n",
        result.revenue_lift_pct
    ));
    out.push_str(&format!(
        "  Current pass-through at this stage: {}\n",
        format_rate(result.current_conversion_rate)
    ));
    out
}

fn render_header(report: &FunnelReport) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Conversion Funnel Summary".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Stages: {} | Average order value: ${:.2}\n",
        report.stages.len(),
        report.average_order_value
    ));
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

fn render_summary(report: &FunnelReport) -> String {
    let summary = &report.summary;
    format!(
        "  Conversion Rate: {:.2}%\n  Current Revenue: {}\n  Total Drop-offs: {}\n  Revenue at Risk: {}\n",
        summary.overall_conversion_rate * 100.0,
        format_currency(summary.current_revenue),
        format_count(summary.total_drop_off_users),
        format_currency(summary.total_revenue_lost).red()
    )
}

fn render_funnel_bars(report: &FunnelReport) -> String {
    let mut out = String::new();
    let widest = report.stages.iter().map(|s| s.users).max().unwrap_or(0);
    let initial = report.stages.first().map(|s| s.users).unwrap_or(0);

    out.push_str("\nFunnel:\n");
    for stage in &report.stages {
        let filled = (ratio(stage.users as f64, widest) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled);
        out.push_str(&format!(
            "  {:<24} {:<width$} {:>12} {:>7}\n",
            truncate(&stage.name, 24),
            bar.blue(),
            format_count(stage.users.min(i64::MAX as u64) as i64),
            format_rate(ratio(stage.users as f64, initial)),
            width = BAR_WIDTH
        ));
    }
    out
}

fn render_transition_table(transitions: &[TransitionMetric]) -> String {
    let mut out = String::new();

    out.push_str("\nRevenue Impact by Stage:\n");
    out.push_str(&format!(
        "  {:<width$} {:>12} {:>9} {:>14} {:>12}\n",
        "Stage Transition",
        "Users Lost",
        "Drop-off",
        "Revenue Lost",
        "Value of 1%",
        width = TRANSITION_COL
    ));

    for t in transitions {
        let label = truncate(&format!("{} → {}", t.from_stage, t.to_stage), TRANSITION_COL);
        let rate = format_rate(t.drop_off_rate);
        let rate = if t.drop_off_rate > MAJOR_FRICTION_DROP_OFF_RATE {
            rate.red().to_string()
        } else if t.drop_off_users < 0 {
            rate.yellow().to_string()
        } else {
            rate
        };

        out.push_str(&format!(
            "  {:<width$} {:>12} {:>9} {:>14} {:>12}\n",
            label,
            format_count(t.drop_off_users),
            rate,
            format_currency(t.revenue_lost),
            format_currency(t.one_percent_value),
            width = TRANSITION_COL
        ));
    }
    out
}

fn render_priorities(report: &FunnelReport) -> String {
    let mut out = String::new();
    if report.priorities.is_empty() {
        return out;
    }

    out.push_str("\nOptimization Priorities (by revenue lost):\n");
    for (rank, index) in report.priorities.iter().enumerate() {
        let Some(t) = report.transitions.get(*index) else {
            continue;
        };
        let marker = if report.major_friction.contains(index) {
            "🔴"
        } else {
            "  "
        };
        out.push_str(&format!(
            "  {} {}. {} → {}: {} lost, {} drop-off\n",
            marker,
            rank + 1,
            t.from_stage,
            t.to_stage,
            format_currency(t.revenue_lost),
            format_rate(t.drop_off_rate)
        ));
    }

    if !report.major_friction.is_empty() {
        out.push_str(&format!(
            "\n  🔴 Drop-off above {} indicates a major friction point\n",
            format_rate(MAJOR_FRICTION_DROP_OFF_RATE)
        ));
    }
    out
}

/// Truncate a label to `max_chars` characters with an ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
