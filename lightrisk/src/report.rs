//! Report rendering for sweep results.

use std::fmt::Write;

use crate::sweep::{CategoryOutcome, SweepReport, SweepRow};

const RULE_WIDTH: usize = 75;

/// Meters without a trailing `.0` for whole numbers.
pub fn format_meters(meters: f64) -> String {
    if meters.fract() == 0.0 && meters.abs() < 1e15 {
        format!("{}", meters as i64)
    } else {
        format!("{}", meters)
    }
}

fn outcome_cell(outcome: &CategoryOutcome) -> String {
    format!(
        "{}/{} ({:.1}/1k)",
        outcome.deaths,
        outcome.total,
        outcome.rate_per_1000()
    )
}

fn row_line(row: &SweepRow) -> String {
    let marker = if row.significant { "*" } else { "" };
    format!(
        "{:<12} | {:<25} | {:<23} | {:.4} {}",
        format_meters(row.threshold_m),
        outcome_cell(&row.acoustic),
        outcome_cell(&row.silent),
        row.p_value,
        marker
    )
    .trim_end()
    .to_string()
}

/// Human-readable sensitivity table.
pub fn render_table(report: &SweepReport) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(
        out,
        "   RESULTS TABLE: SENSITIVITY ANALYSIS (Check Dist: {}m)",
        format_meters(report.check_distance_m)
    );
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(
        out,
        "{:<12} | {:<25} | {:<23} | {:<10}",
        "HABITAT (m)", "ACOUSTIC (Deaths/Lights)", "SILENT (Deaths/Lights)", "P-VALUE"
    );
    let _ = writeln!(out, "{}", light);
    for row in &report.rows {
        let _ = writeln!(out, "{}", row_line(row));
    }
    let _ = writeln!(out, "{}", light);
    let _ = writeln!(
        out,
        " * = Significant (p < {})",
        report.significance_level
    );
    let _ = writeln!(
        out,
        " Note: 'Quiet Street' buffer fixed at {}m for all tests.",
        format_meters(report.street_buffer_m)
    );
    out
}

/// Tab-separated rows with a header, one line per threshold.
pub fn render_tsv(report: &SweepReport) -> String {
    let mut out = String::from(
        "threshold_m\tacoustic_deaths\tacoustic_lights\tacoustic_rate_per_1k\t\
         silent_deaths\tsilent_lights\tsilent_rate_per_1k\tp_value\todds_ratio\tsignificant\n",
    );
    for row in &report.rows {
        let odds = row
            .odds_ratio
            .map(|o| o.to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{:.3}\t{}\t{}\t{:.3}\t{:.6}\t{}\t{}",
            format_meters(row.threshold_m),
            row.acoustic.deaths,
            row.acoustic.total,
            row.acoustic.rate_per_1000(),
            row.silent.deaths,
            row.silent.total,
            row.silent.rate_per_1000(),
            row.p_value,
            odds,
            row.significant
        );
    }
    out
}
