//! Command-line interface for work-classifier.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Reconcile a work's classifications into one profile
//! - **subject**: Show what a single subject implies
//! - **taxonomy**: Print or export the genre tree
//!
//! ## Usage
//!
//! ```text
//! # Classify a work described in JSON
//! work-classifier classify work.json
//!
//! # JSON output with a stricter genre cutoff
//! work-classifier classify work.json --cutoff 0.25 --format json
//!
//! # What does a BISAC code mean?
//! work-classifier subject --scheme bisac --identifier FIC028000
//!
//! # Export the genre tree
//! work-classifier taxonomy --export genres.json
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod subject;
pub mod taxonomy;

#[derive(Parser)]
#[command(name = "work-classifier")]
#[command(author = "Library Simplified")]
#[command(version)]
#[command(about = "Reduce a book's subject classifications to fiction status, audience, target age and genres")]
#[command(
    long_about = "work-classifier reads the raw subject classifications attached to a book (Dewey, LCC, BISAC, LCSH, distributor tags, age and grade strings) and reconciles them into one profile:\n- Fiction or nonfiction\n- Audience (children, young adult, adult, adults only, all ages, research)\n- Target age range\n- Weighted genres from a fixed taxonomy"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a work from its metadata and classifications
    Classify(classify::ClassifyArgs),

    /// Classify a single subject
    Subject(subject::SubjectArgs),

    /// Show or export the genre taxonomy
    Taxonomy(taxonomy::TaxonomyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Render an optional value, using `-` for "unknown"
pub(crate) fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
