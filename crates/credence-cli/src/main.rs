//! credence - news article credibility checker
//!
//! Scores an article URL or pasted text and explains every point.

use anyhow::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    credence_cli::run().await
}
