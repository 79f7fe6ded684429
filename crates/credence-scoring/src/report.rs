//! Human-readable report rendering.
//!
//! Both renderers keep the same section order: overall score, rule
//! breakdown, linguistic breakdown, each breakdown in evaluation order.

use credence_core::{CredibilityReport, ScoreExplanation};

const RULE: &str = "==================================================";

/// Plain console rendering
#[must_use]
pub fn render_text(report: &CredibilityReport) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "      CREDIBILITY ANALYSIS REPORT".to_string(),
        RULE.to_string(),
        String::new(),
        format!(
            "FINAL CREDIBILITY SCORE: {:.2} / 100.00",
            report.final_score
        ),
        String::new(),
        "-".repeat(20),
        "Detailed Breakdown:".to_string(),
        "-".repeat(20),
        String::new(),
        format!(
            ">>> Rule-Based Analysis (Weight: {}%)",
            report.weights.rule_percent()
        ),
        format!("    Score: {:.2}", f64::from(report.rules.score)),
    ];
    lines.extend(report.rules.explanations.iter().map(|e| format!("    - {e}")));

    lines.push(String::new());
    lines.push(format!(
        ">>> Linguistic Analysis (Weight: {}%)",
        report.weights.ml_percent()
    ));
    lines.push(format!("    Score: {:.2}", report.linguistic.score));
    lines.extend(
        report
            .linguistic
            .explanations
            .iter()
            .map(|e| format!("    - {e}")),
    );

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Markdown rendering for chat-style hosts
#[must_use]
pub fn render_markdown(report: &CredibilityReport) -> String {
    let mut lines = vec![
        "## Credibility Analysis Report".to_string(),
        format!(
            "### **Final Credibility Score: `{:.2} / 100.00`**",
            report.final_score
        ),
        "---".to_string(),
        "#### Detailed Breakdown:".to_string(),
        format!(
            "##### Rule-Based Analysis (Weight: {}%)",
            report.weights.rule_percent()
        ),
        format!("* **Score:** `{:.2}`", f64::from(report.rules.score)),
    ];
    lines.extend(report.rules.explanations.iter().map(markdown_item));

    lines.push(String::new());
    lines.push(format!(
        "##### Linguistic Analysis (Weight: {}%)",
        report.weights.ml_percent()
    ));
    lines.push(format!("* **Score:** `{:.2}`", report.linguistic.score));
    lines.extend(report.linguistic.explanations.iter().map(markdown_item));

    lines.join("\n")
}

fn markdown_item(e: &ScoreExplanation) -> String {
    match e.delta_tag() {
        Some(tag) => format!("* {tag} **{}**: {}", e.label, e.detail),
        None => format!("* **{}**: {}", e.label, e.detail),
    }
}
