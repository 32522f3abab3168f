//! Plain-text rendering of analysis results and chart series for the CLI.

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::analysis::{AnalysisResult, BuyVerdict, ChartSeries, SellVerdict, format_wait};

/// Uppercase section heading, e.g. "BUY ANALYSIS:"
pub fn heading(text: impl Into<String>) -> String {
    text.into().to_uppercase() + ":"
}

/// Amount rounded to `decimals` places with an explicit sign, e.g. "+750"
/// or "-12.5". Values that round to zero print as "+0".
pub fn format_signed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    match text.strip_prefix('-') {
        Some(digits) if digits.chars().all(|c| c == '0' || c == '.') => format!("+{}", digits),
        Some(_) => text,
        None => format!("+{}", text),
    }
}

pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_buy_section(&mut out, result);
    if result.has_sell_side() {
        out.push('\n');
        let _ = write_sell_section(&mut out, result);
    }
    out
}

fn write_buy_section(out: &mut String, r: &AnalysisResult) -> std::fmt::Result {
    let verdict = r.buy_verdict();
    writeln!(out, "{}", heading("Buy analysis"))?;
    writeln!(out, "  Buy price:            {:.0}", r.buy_price)?;
    writeln!(out, "  Percentile:           {:.1}", r.buy_percentile)?;
    writeln!(out, "  Verdict:              {} {}", verdict, verdict.description())?;
    writeln!(
        out,
        "  {:.1}% of prices are lower (better) than yours, {:.1}% are higher.",
        r.buy_pct_lower(),
        r.buy_pct_higher()
    )?;
    writeln!(out, "  From low-price cluster:  {:.1}%", r.low_cluster_pct)?;
    writeln!(out, "  From high-price cluster: {:.1}%", r.high_cluster_pct)?;
    Ok(())
}

fn write_sell_section(out: &mut String, r: &AnalysisResult) -> std::fmt::Result {
    writeln!(out, "{}", heading("Sell analysis"))?;
    if let Some(sell) = r.sell_price {
        writeln!(out, "  Sell price:           {:.0}", sell)?;
    }
    if let Some(pct) = r.sell_percentile {
        writeln!(out, "  Percentile:           {:.1}", pct)?;
    }
    if let (Some(profit), Some(roi)) = (r.profit, r.roi) {
        writeln!(
            out,
            "  Potential profit:     {} ({}% ROI)",
            format_signed(profit, 0),
            format_signed(roi, 1)
        )?;
    }
    if let Some(prob) = r.prob_better {
        writeln!(out, "  Better price per period: {:.1}%", prob)?;
    }
    if let Some(wait) = r.expected_periods {
        writeln!(out, "  Expected wait:        {} periods", format_wait(wait))?;
        if r.trials_per_period > 1 {
            writeln!(
                out,
                "  (with {} price checks per period)",
                r.trials_per_period
            )?;
        }
    }
    if let Some(verdict) = r.sell_verdict() {
        writeln!(out, "  Recommendation:       {}", verdict)?;
    }
    Ok(())
}

/// Percentile bands behind each buy verdict.
pub fn render_buy_legend() -> String {
    let mut out = heading("Buy verdicts by percentile") + "\n";
    for verdict in BuyVerdict::iter() {
        let _ = writeln!(out, "  {:<14} {}", verdict.band(), verdict);
    }
    out
}

/// Expected-wait bands behind each sell recommendation.
pub fn render_sell_legend() -> String {
    let mut out = heading("Sell recommendations by expected wait") + "\n";
    for verdict in SellVerdict::iter() {
        let _ = writeln!(out, "  {:<14} {}", verdict.band(), verdict);
    }
    out
}

/// Two-column listing of a chart series.
pub fn render_series(title: &str, x_label: &str, y_label: &str, series: &ChartSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(title));
    let _ = writeln!(out, "{:>10}  {}", x_label, y_label);
    for (x, y) in series.points() {
        let _ = writeln!(out, "{:>10.0}  {:.6}", x, y);
    }
    out
}
