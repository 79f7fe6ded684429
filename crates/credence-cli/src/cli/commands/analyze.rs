//! `credence analyze` - Score one article.

use anyhow::{Context as _, Result};
use colored::Colorize;
use credence::{Analyzer, CredibilityReport, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;

use super::Context;
use crate::cli::args::AnalyzeArgs;
use crate::education::Explain;
use crate::output::{render, OutputFormat};

/// Exit status for analyses that ran but could not produce a score
pub const EXIT_NO_SCORE: u8 = 2;

pub async fn execute(ctx: Context, args: AnalyzeArgs) -> Result<ExitCode> {
    let input = read_input(&args)?;
    let analyzer = ctx.analyzer()?;

    if ctx.explain {
        Explain::analyze(Input::classify(&input).is_url(), analyzer.config()).print();
    }

    match run_analysis(&analyzer, &input, ctx.output_format).await {
        Ok(report) => {
            println!("{}", render(&report, ctx.output_format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_user_facing() => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            Ok(ExitCode::from(EXIT_NO_SCORE))
        }
        Err(e) => Err(e.into()),
    }
}

/// Analyze with a spinner while a URL is being fetched.
pub async fn run_analysis(
    analyzer: &Analyzer,
    input: &str,
    format: OutputFormat,
) -> credence::Result<CredibilityReport> {
    let spinner = match Input::classify(input) {
        Input::Url(url) if format == OutputFormat::Pretty => Some(fetch_spinner(url)),
        _ => None,
    };

    let result = analyzer.analyze(input).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    pb.set_message(format!("Fetching {url}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    if args.stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        return Ok(buf);
    }

    Ok(args.input.clone().unwrap_or_default())
}
