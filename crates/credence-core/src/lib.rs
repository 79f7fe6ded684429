//! Core types and configuration for the credence credibility scorer.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - **Types**: explanations, per-engine results and the final [`CredibilityReport`]
//! - **Configuration**: [`ScoringConfig`], [`Weights`] and the built-in [`Preset`]s
//! - **Domains**: the suffix-matched [`DomainTable`] of source reputation tiers
//! - **Errors**: [`CredibilityError`] and the crate [`Result`] alias
//!
//! # Example
//!
//! ```rust,ignore
//! use credence_core::{DomainTable, DomainTier, Preset};
//!
//! let config = Preset::Standard.config();
//! let table = DomainTable::from_config(&config.domains);
//! assert_eq!(table.classify("news.bbc.com"), DomainTier::High);
//! ```

#![doc(html_root_url = "https://docs.rs/credence-core/0.3.0")]

pub mod config;
pub mod domain;
mod error;
pub mod types;

pub use config::{DomainLists, Preset, ReputationDeltas, ScoringConfig, Weights};
pub use domain::{host_from_url, DomainTable};
pub use error::{CredibilityError, Result};
pub use types::*;
