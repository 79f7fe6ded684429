//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use credence::{render_markdown, render_text, CredibilityReport, ScoreExplanation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured summary with breakdown tables
    #[default]
    Pretty,
    /// Plain console report
    Text,
    /// Markdown report
    Markdown,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "text" | "plain" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, text, markdown, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Check")]
    label: String,
    #[tabled(rename = "Points")]
    points: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl CheckRow {
    fn from_explanation(e: &ScoreExplanation) -> Self {
        Self {
            label: e.label.clone(),
            points: e.delta_tag().unwrap_or_default(),
            detail: e.detail.clone(),
        }
    }
}

/// Render a report in any format.
pub fn render(report: &CredibilityReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Pretty => render_pretty(report),
        OutputFormat::Text => render_text(report),
        OutputFormat::Markdown => render_markdown(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

fn render_pretty(report: &CredibilityReport) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "{} {} {}",
        "Credibility:".bold(),
        score_colored(report.final_score),
        "/ 100".dimmed()
    ));
    out.push(format!("  {}", verdict(report.final_score).dimmed()));
    out.push(String::new());

    out.push(format!(
        "{} {} {}",
        "Rule-Based Analysis".bold().underline(),
        format!("({}%)", report.weights.rule_percent()).dimmed(),
        format!("score {:.2}", f64::from(report.rules.score)).cyan()
    ));
    let rows: Vec<CheckRow> = report
        .rules
        .explanations
        .iter()
        .map(CheckRow::from_explanation)
        .collect();
    out.push(Table::new(&rows).with(Style::rounded()).to_string());
    out.push(String::new());

    out.push(format!(
        "{} {} {}",
        "Linguistic Analysis".bold().underline(),
        format!("({}%)", report.weights.ml_percent()).dimmed(),
        format!("score {:.2}", report.linguistic.score).cyan()
    ));
    let rows: Vec<CheckRow> = report
        .linguistic
        .explanations
        .iter()
        .map(CheckRow::from_explanation)
        .collect();
    out.push(Table::new(&rows).with(Style::rounded()).to_string());

    if let Some(sentiment) = report.linguistic.sentiment {
        out.push(
            format!(
                "polarity {:.2}, subjectivity {:.2}",
                sentiment.polarity, sentiment.subjectivity
            )
            .dimmed()
            .to_string(),
        );
    }

    out.join("\n")
}

fn score_colored(score: f64) -> ColoredString {
    let text = format!("{score:.2}");
    if score >= 70.0 {
        text.green().bold()
    } else if score >= 40.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn verdict(score: f64) -> &'static str {
    if score >= 70.0 {
        "Likely credible. Still check the claims that matter to you."
    } else if score >= 40.0 {
        "Mixed signals. Read critically and look for corroboration."
    } else {
        "Low credibility signals. Verify with independent sources."
    }
}
