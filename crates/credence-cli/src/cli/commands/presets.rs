//! `credence presets` - List the built-in scoring setups.

use anyhow::Result;
use colored::Colorize;
use credence::{DomainTier, Preset, RuleEngine};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::education::Explain;
use crate::output::OutputFormat;

#[derive(Tabled, Serialize)]
struct PresetRow {
    #[tabled(rename = "Preset")]
    name: String,
    #[tabled(rename = "Weights (rules/linguistic)")]
    weights: String,
    #[tabled(rename = "Tier points (high/medium/low)")]
    points: String,
    #[tabled(rename = "Domains (high/medium/low)")]
    domains: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl PresetRow {
    fn new(preset: Preset) -> Self {
        let config = preset.config();
        let engine = RuleEngine::from_config(&config);
        let count = |tier| engine.domains().entries(tier).len();
        let rep = config.reputation;

        Self {
            name: preset.to_string(),
            weights: format!(
                "{}% / {}%",
                config.weights.rule_percent(),
                config.weights.ml_percent()
            ),
            points: format!("{:+} / {:+} / {:+}", rep.high, rep.medium, rep.low),
            domains: format!(
                "{} / {} / {}",
                count(DomainTier::High),
                count(DomainTier::Medium),
                count(DomainTier::Low)
            ),
            description: preset.description().to_string(),
        }
    }
}

pub fn execute(ctx: &Context) -> Result<()> {
    if ctx.explain {
        Explain::presets().print();
    }

    let rows: Vec<PresetRow> = Preset::ALL.into_iter().map(PresetRow::new).collect();

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&rows)?),
        OutputFormat::Pretty | OutputFormat::Text | OutputFormat::Markdown => {
            let mut table = Table::new(&rows);
            if ctx.output_format == OutputFormat::Markdown {
                table.with(Style::markdown());
            } else {
                table.with(Style::rounded());
            }
            println!("{table}");
            println!();
            println!(
                "{} {}",
                "Active:".bold(),
                ctx.preset.to_string().cyan()
            );
        }
    }

    Ok(())
}
