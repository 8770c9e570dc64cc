//! Classify command - reconcile every classification of one work.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::taxonomy::GenreTaxonomy;
use crate::classifiers::ClassifierRegistry;
use crate::cli::{or_dash, OutputFormat};
use crate::core::work::{WorkInput, WorkProfile};
use crate::matching::{classify_work, ClassifierConfig};

/// Arguments for the classify command
#[derive(Args)]
pub struct ClassifyArgs {
    /// Work JSON: optional title/publisher/imprint plus a `classifications` array
    #[arg(required = true)]
    pub input: PathBuf,

    /// Engine configuration (JSON); missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum genre affinity, overriding the configuration (0-1)
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Path to a custom genre taxonomy
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,
}

/// Execute the classify command
///
/// # Errors
///
/// Returns an error if the work, configuration or taxonomy cannot be read or parsed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let taxonomy = load_taxonomy(args.taxonomy.as_deref())?;
    let registry = ClassifierRegistry::standard(&taxonomy)?;

    let mut config = match &args.config {
        Some(path) => ClassifierConfig::from_json(&std::fs::read_to_string(path)?)
            .map_err(|e| anyhow::anyhow!("Invalid configuration {}: {e}", path.display()))?,
        None => ClassifierConfig::default(),
    };
    if let Some(cutoff) = args.cutoff {
        if !(0.0..=1.0).contains(&cutoff) {
            anyhow::bail!("Cutoff must be between 0 and 1, got {cutoff}");
        }
        config = config.with_genre_cutoff(cutoff);
    }

    let work = WorkInput::from_json(&std::fs::read_to_string(&args.input)?)
        .map_err(|e| anyhow::anyhow!("Invalid work {}: {e}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Classifying {} with {} classifications",
            args.input.display(),
            work.classifications.len()
        );
    }

    let profile = classify_work(&registry, &config, &work);

    match format {
        OutputFormat::Text => print_text(&profile),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Tsv => print_tsv(&profile),
    }
    Ok(())
}

pub(crate) fn load_taxonomy(path: Option<&Path>) -> anyhow::Result<GenreTaxonomy> {
    Ok(match path {
        Some(path) => GenreTaxonomy::load_from_file(path)?,
        None => GenreTaxonomy::load_embedded()?,
    })
}

fn print_text(profile: &WorkProfile) {
    let fiction = profile
        .fiction
        .map(|f| if f { "Fiction" } else { "Nonfiction" });
    println!("Fiction:    {}", or_dash(fiction));
    println!("Audience:   {}", or_dash(profile.audience));
    println!("Target age: {}", profile.target_age);

    if profile.genres.is_empty() {
        println!("Genres:     (none)");
        return;
    }
    println!("Genres:");
    for (genre, affinity) in profile.ranked_genres() {
        println!("  {:<35} {:>6.1}%", genre, affinity * 100.0);
    }
}

fn print_tsv(profile: &WorkProfile) {
    println!("field\tvalue");
    println!("fiction\t{}", or_dash(profile.fiction));
    println!("audience\t{}", or_dash(profile.audience));
    println!("target_age_lower\t{}", or_dash(profile.target_age.lower));
    println!("target_age_upper\t{}", or_dash(profile.target_age.upper));
    for (genre, affinity) in profile.ranked_genres() {
        println!("genre\t{genre}\t{affinity:.4}");
    }
}
