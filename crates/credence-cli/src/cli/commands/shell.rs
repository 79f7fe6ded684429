//! `credence shell` - Interactive shell mode.

use anyhow::Result;
use colored::Colorize;
use credence::{Analyzer, Preset};
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::process::ExitCode;
use tracing::debug;

use super::analyze::run_analysis;
use super::Context;
use crate::education::Explain;
use crate::output::{render, OutputFormat};

/// What the shell should do with one line of input
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Empty,
    Exit,
    Help,
    Preset(&'a str),
    Output(&'a str),
    Analyze(&'a str),
}

impl<'a> Line<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((".preset", arg)) => return Self::Preset(arg.trim()),
            Some((".output", arg)) => return Self::Output(arg.trim()),
            _ => {}
        }

        match line {
            "" => Self::Empty,
            "exit" | "quit" | ".exit" | ".quit" => Self::Exit,
            "help" | ".help" | "?" | ".preset" | ".output" => Self::Help,
            other => Self::Analyze(other),
        }
    }
}

pub async fn execute(mut ctx: Context) -> Result<ExitCode> {
    println!("Welcome to the {} interactive shell!", "credence".bold());
    println!(
        "Paste a URL or article text. Type {} for commands, {} to quit.",
        "help".green(),
        "exit".red()
    );
    println!();

    if ctx.explain {
        Explain::shell().print();
    }

    let mut analyzer = ctx.analyzer()?;
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline("credence> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match Line::parse(&line) {
            Line::Empty => continue,
            Line::Exit => break,
            Line::Help => print_help(),
            Line::Preset(name) => match name.parse::<Preset>() {
                Ok(preset) => {
                    ctx.preset = preset;
                    ctx.config_file = None;
                    match ctx.analyzer() {
                        Ok(a) => {
                            analyzer = a;
                            println!("Preset set to {}.", preset.to_string().cyan());
                        }
                        Err(e) => eprintln!("{} {e:#}", "Error:".red().bold()),
                    }
                }
                Err(e) => eprintln!("{} {e}", "Error:".red().bold()),
            },
            Line::Output(name) => match name.parse::<OutputFormat>() {
                Ok(format) => {
                    ctx.output_format = format;
                    println!("Output format set to {}.", format.to_string().cyan());
                }
                Err(e) => eprintln!("{} {e}", "Error:".red().bold()),
            },
            Line::Analyze(input) => {
                remember(editor.history_mut(), input);
                analyze_one(&analyzer, input, ctx.output_format).await;
            }
        }
    }

    println!("Bye.");
    Ok(ExitCode::SUCCESS)
}

async fn analyze_one(analyzer: &Analyzer, input: &str, format: OutputFormat) {
    match run_analysis(analyzer, input, format).await {
        Ok(report) => match render(&report, format) {
            Ok(text) => println!("{text}\n"),
            Err(e) => eprintln!("{} {e:#}", "Error:".red().bold()),
        },
        Err(e) if e.is_user_facing() => eprintln!("{} {e}\n", "Warning:".yellow().bold()),
        Err(e) => eprintln!("{} {e}\n", "Error:".red().bold()),
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  {}   score an article by URL", "<url>".green());
    println!("  {}  score pasted article text", "<text>".green());
    println!(
        "  {} {}  switch preset ({})",
        ".preset".green(),
        "<name>".dimmed(),
        Preset::ALL.map(|p| p.to_string()).join(", ")
    );
    println!(
        "  {} {}  switch output (pretty, text, markdown, json, yaml)",
        ".output".green(),
        "<fmt>".dimmed()
    );
    println!("  {}          leave the shell", "exit".green());
    println!();
}

/// Add a line to the shell history. A failure only costs recall.
fn remember<H: History>(history: &mut H, line: &str) -> bool {
    match history.add(line) {
        Ok(added) => added,
        Err(e) => {
            debug!(error = %e, "could not record shell history");
            false
        }
    }
}
