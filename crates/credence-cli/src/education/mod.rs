//! Educational features: what each check looks for and why it matters.

use colored::Colorize;
use credence::{DomainTable, DomainTier, ScoringConfig};

/// Explanation builder for `--explain`.
pub struct Explain {
    description: String,
    input: Option<String>,
    what_happens: Vec<String>,
    tip: Option<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            input: None,
            what_happens: Vec::new(),
            tip: None,
        }
    }

    fn input(mut self, kind: &str) -> Self {
        self.input = Some(kind.to_string());
        self
    }

    fn step(mut self, step: impl Into<String>) -> Self {
        self.what_happens.push(step.into());
        self
    }

    fn tip(mut self, tip: &str) -> Self {
        self.tip = Some(tip.to_string());
        self
    }

    /// Steps as plain text, one per line.
    pub fn steps(&self) -> &[String] {
        &self.what_happens
    }

    /// Print the explanation to stderr so it never mixes with piped output.
    pub fn print(&self) {
        eprintln!();
        eprintln!("{}", "=== What This Does ===".bold().cyan());
        eprintln!("{}", self.description);
        eprintln!();

        if let Some(input) = &self.input {
            eprintln!("{} {}", "Input:".bold(), input);
            eprintln!();
        }

        if !self.what_happens.is_empty() {
            eprintln!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, step);
            }
            eprintln!();
        }

        if let Some(tip) = &self.tip {
            eprintln!("{} {}", "Tip:".bold(), tip.dimmed());
            eprintln!();
        }

        eprintln!("{}", "=== Results ===".bold().cyan());
        eprintln!();
    }

    // ========================================================================
    // Factory methods
    // ========================================================================

    /// Explain one analysis, using the active configuration's numbers.
    pub fn analyze(is_url: bool, config: &ScoringConfig) -> Self {
        let rep = &config.reputation;
        let table = DomainTable::from_config(&config.domains);
        let domains = |tier: DomainTier| format!("{} domains", table.entries(tier).len());

        let mut explain = Self::new(
            "Estimates how credible a news article is. A rule-based score and a \
             linguistic score are blended into a final score from 0 to 100.",
        );

        explain = if is_url {
            explain
                .input("URL - the page is downloaded and its main text and title extracted")
                .step(format!(
                    "Source reputation: high tier {:+} ({}), medium {:+} ({}), low {:+} ({})",
                    rep.high,
                    domains(DomainTier::High),
                    rep.medium,
                    domains(DomainTier::Medium),
                    rep.low,
                    domains(DomainTier::Low),
                ))
        } else {
            explain.input(&format!(
                "Raw text - needs at least {} words; no source or headline checks",
                config.min_input_words
            ))
        };

        explain = explain
            .step("Author byline: +10 if 'By Firstname Lastname' opens the article, otherwise -5")
            .step("Citations: +15 if the text mentions sources, references or a bibliography")
            .step("Sensationalism: -2 per ALL-CAPS word or '!' beyond the first 10, up to -20");

        if is_url {
            explain = explain
                .step("Headline: -15 for clickbait phrases, question headlines or listicles");
        }

        explain
            .step(format!(
                "Depth: -10 if the article has fewer than {} words",
                config.word_count_threshold
            ))
            .step(format!(
                "Linguistic: objectivity and emotional neutrality, averaged; \
                 blended {}% rules / {}% linguistic",
                config.weights.rule_percent(),
                config.weights.ml_percent()
            ))
            .tip("A high score is a signal, not a verdict. Check important claims yourself.")
    }

    /// Explain the presets listing.
    pub fn presets() -> Self {
        Self::new("Lists the built-in scoring setups.")
            .step("Each preset fixes the domain lists, tier points and blend weights")
            .step("Select one with --preset or `credence config set preset <name>`")
            .tip("A TOML file passed with --config replaces the preset entirely.")
    }

    /// Explain the interactive shell.
    pub fn shell() -> Self {
        Self::new("Starts an interactive session for analyzing several articles.")
            .step("Paste a URL or a paragraph of article text at the prompt")
            .step("Use .preset and .output to change settings without restarting")
            .tip("Failed fetches and short inputs are reported; the shell keeps running.")
    }
}
