//! # credence-cli
//!
//! Command-line interface for the credence credibility scorer.
//!
//! ## Features
//!
//! - **One-shot analysis**: a URL, a text file, stdin or inline text
//! - **Presets**: switch between built-in scoring setups with `--preset`
//! - **Educational mode**: `--explain` describes every check before the results
//! - **Interactive shell**: analyze article after article in one session
//! - **Multiple output formats**: coloured tables, plain text, Markdown, JSON, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
