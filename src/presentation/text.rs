use crate::config::toml_config::CalculatorConfig;
use crate::domain::model::{ComparisonEntry, TransportMode, TripReport};
use crate::presentation::format::{format_currency, format_number};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl BarColor {
    pub fn from_width(width_pct: u32) -> Self {
        match width_pct {
            0..=25 => BarColor::Green,
            26..=75 => BarColor::Yellow,
            76..=100 => BarColor::Orange,
            _ => BarColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub mode: TransportMode,
    /// 相對於最高排放的寬度 (0-100)
    pub width_pct: u32,
    pub color: BarColor,
}

pub fn comparison_bars(entries: &[ComparisonEntry]) -> Vec<ComparisonBar> {
    let max_emission = entries
        .iter()
        .map(|entry| entry.emission_kg)
        .fold(0.0_f64, f64::max);

    entries
        .iter()
        .map(|entry| {
            let width_pct = if max_emission > 0.0 {
                (entry.emission_kg / max_emission * 100.0).round().max(0.0) as u32
            } else {
                0
            };
            ComparisonBar {
                mode: entry.mode,
                width_pct,
                color: BarColor::from_width(width_pct),
            }
        })
        .collect()
}

fn percentage_label(entry: &ComparisonEntry) -> String {
    match entry.percentage_vs_baseline {
        Some(percentage) => format!("{}% vs {}", percentage, TransportMode::BASELINE),
        None => "—".to_string(),
    }
}

const BAR_CELLS: u32 = 20;

/// CLI 用的純文字報表
pub fn render_report(report: &TripReport, config: &CalculatorConfig) -> String {
    let mut out = String::new();
    let selected = config.mode_metadata(report.mode);

    out.push_str(&format!("Route:      {} → {}\n", report.origin, report.destination));
    out.push_str(&format!("Distance:   {} km\n", format_number(report.distance_km, 2)));
    out.push_str(&format!(
        "Emission:   🌿 {} kg CO₂\n",
        format_number(report.emission.emission_kg, 2)
    ));
    out.push_str(&format!("Transport:  {} {}\n", selected.icon, selected.label));
    out.push('\n');

    out.push_str("Comparison:\n");
    let bars = comparison_bars(&report.comparison);
    for (entry, bar) in report.comparison.iter().zip(bars) {
        let meta = config.mode_metadata(entry.mode);
        let filled = (bar.width_pct * BAR_CELLS + 50) / 100;
        let marker = if entry.mode == report.mode {
            "  ← selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {} {:<10} {:>12} kg • {:<16} [{}{}]{}\n",
            meta.icon,
            meta.label,
            format_number(entry.emission_kg, 2),
            percentage_label(entry),
            "█".repeat(filled as usize),
            " ".repeat((BAR_CELLS - filled) as usize),
            marker
        ));
    }
    out.push('\n');

    let savings = &report.savings_vs_baseline;
    out.push_str(&format!(
        "Savings vs {}: {} kg ({}%)\n",
        TransportMode::BASELINE,
        format_number(savings.saved_kg, 2),
        format_number(savings.percentage, 2)
    ));

    let credits = &report.carbon_credits;
    out.push_str(&format!(
        "Carbon credits needed: {} (1 credit = {} kg CO₂)\n",
        format_number(credits.credits_required, 4),
        format_number(config.carbon_credit.kg_per_credit, 0)
    ));
    out.push_str(&format!(
        "Estimated price: {} (range {} — {})\n",
        format_currency(credits.price_average),
        format_currency(credits.price_min),
        format_currency(credits.price_max)
    ));

    out
}
