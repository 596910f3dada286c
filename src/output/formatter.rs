use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{factor_scores, RiskAssessment, RiskLevel, Vitals};

/// Decide whether to colorize output: only when stdout is a terminal and
/// NO_COLOR is not set.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Horizontal rule sized to the terminal, capped so reports stay readable
/// on wide screens.
fn divider() -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(60)
        .clamp(20, 60);
    "-".repeat(width)
}

fn risk_label(risk: RiskLevel, use_colors: bool) -> String {
    if !use_colors {
        return risk.to_string();
    }
    match risk {
        RiskLevel::Low => risk.green().bold().to_string(),
        RiskLevel::Moderate => risk.yellow().bold().to_string(),
        RiskLevel::High => risk.red().bold().to_string(),
    }
}

/// Multi-line assessment report: vitals, risk level, confidence, and the
/// per-factor contribution table.
pub fn format_report(
    vitals: &Vitals,
    assessment: &RiskAssessment,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();
    let rule = divider();

    if use_colors {
        lines.push("Diabetes Risk Assessment".bold().to_string());
    } else {
        lines.push("Diabetes Risk Assessment".to_string());
    }
    lines.push(rule.clone());
    lines.push(format!(
        "Age: {}   BMI: {:.1}   Blood Pressure: {}   Glucose: {}",
        vitals.age, vitals.bmi, vitals.blood_pressure, vitals.glucose
    ));
    lines.push(rule.clone());
    lines.push(format!(
        "Risk Level: {}",
        risk_label(assessment.risk, use_colors)
    ));
    lines.push(format!("Confidence: {}%", assessment.confidence));
    lines.push(rule);
    lines.push("Risk contribution by factor:".to_string());
    lines.push(format_factor_table(vitals, use_colors));

    lines.join("\n")
}

/// Per-factor contribution table, one row per factor.
pub fn format_factor_table(vitals: &Vitals, use_colors: bool) -> String {
    factor_scores(vitals)
        .iter()
        .map(|f| {
            let bar = "#".repeat(f.points as usize);
            if use_colors {
                format!(
                    "  {:<16} {} {}",
                    f.label,
                    f.points,
                    if f.points >= 2 {
                        bar.red().to_string()
                    } else {
                        bar.green().to_string()
                    }
                )
            } else {
                format!("  {:<16} {} {}", f.label, f.points, bar)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Machine-readable report for scripting.
pub fn format_json(vitals: &Vitals, assessment: &RiskAssessment) -> Result<String> {
    let value = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "vitals": vitals,
        "assessment": assessment,
        "factors": factor_scores(vitals),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
