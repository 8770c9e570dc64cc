//! Subject command - show what one classification value implies.

use clap::Args;
use serde::Serialize;

use crate::classifiers::ClassifierRegistry;
use crate::cli::classify::load_taxonomy;
use crate::cli::{or_dash, OutputFormat};
use crate::core::subject::Subject;
use crate::core::types::{AgeRange, Audience, Scheme};

/// Arguments for the subject command
#[derive(Args)]
pub struct SubjectArgs {
    /// Classification scheme (ddc, lcc, bisac, lcsh, overdrive, age_range, ...)
    #[arg(long, required = true)]
    pub scheme: String,

    /// Identifier within the scheme (e.g. "FIC028000", "813.54")
    #[arg(long)]
    pub identifier: Option<String>,

    /// Human-readable name (e.g. "Fiction / Science Fiction / General")
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Serialize)]
struct SubjectReport<'a> {
    scheme: Scheme,
    identifier: Option<&'a str>,
    name: Option<&'a str>,
    genre: Option<&'a str>,
    audience: Option<Audience>,
    target_age: AgeRange,
    fiction: Option<bool>,
}

/// Execute the subject command
///
/// # Errors
///
/// Returns an error if the scheme is unknown or neither identifier nor name is given.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SubjectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let scheme = Scheme::parse(&args.scheme)
        .ok_or_else(|| anyhow::anyhow!("Unknown scheme '{}'", args.scheme))?;
    if args.identifier.is_none() && args.name.is_none() {
        anyhow::bail!("Give --identifier, --name, or both");
    }

    let taxonomy = load_taxonomy(None)?;
    let registry = ClassifierRegistry::standard(&taxonomy)?;

    let mut subject = Subject::new(scheme, args.identifier.as_deref(), args.name.as_deref());
    if registry.get(scheme).is_none() && verbose {
        eprintln!("No classifier for {scheme}; nothing can be derived");
    }
    registry.assign_to_genre(&mut subject, false);

    let report = SubjectReport {
        scheme,
        identifier: subject.identifier.as_deref(),
        name: subject.name.as_deref(),
        genre: subject.genre.map(|g| taxonomy.name(g)),
        audience: subject.audience,
        target_age: subject.target_age,
        fiction: subject.fiction,
    };

    match format {
        OutputFormat::Text => {
            println!("Subject:    {subject}");
            println!("Genre:      {}", or_dash(report.genre));
            println!("Audience:   {}", or_dash(report.audience));
            println!("Target age: {}", report.target_age);
            println!("Fiction:    {}", or_dash(report.fiction));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => {
            println!("scheme\tidentifier\tname\tgenre\taudience\ttarget_age\tfiction");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                report.scheme,
                or_dash(report.identifier),
                or_dash(report.name),
                or_dash(report.genre),
                or_dash(report.audience),
                report.target_age,
                or_dash(report.fiction)
            );
        }
    }
    Ok(())
}
