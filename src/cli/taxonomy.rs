use std::path::PathBuf;

use clap::Args;

use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::cli::classify::load_taxonomy;
use crate::cli::{or_dash, OutputFormat};

#[derive(Args)]
pub struct TaxonomyArgs {
    /// Write the taxonomy as JSON to this file instead of printing it
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Path to a custom taxonomy file (defaults to embedded)
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,
}

/// Execute the taxonomy command
///
/// # Errors
///
/// Returns an error if the taxonomy cannot be loaded or the export cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: TaxonomyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let taxonomy = load_taxonomy(args.taxonomy.as_deref())?;
    if verbose {
        eprintln!(
            "Loaded taxonomy with {} genres ({} BISAC codes known)",
            taxonomy.len(),
            crate::catalog::bisac::known_codes()
        );
    }

    if let Some(output) = args.export {
        std::fs::write(&output, taxonomy.to_json()?)?;
        println!("Exported {} genres to {}", taxonomy.len(), output.display());
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            for root in taxonomy.roots() {
                print_tree(&taxonomy, root, 0);
            }
        }
        OutputFormat::Json => println!("{}", taxonomy.to_json()?),
        OutputFormat::Tsv => {
            println!("name\tparent\tfiction\taudiences");
            for id in taxonomy.ids() {
                let node = taxonomy.node(id);
                let audiences = node.audience_restriction.as_ref().map(|audiences| {
                    audiences
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(",")
                });
                println!(
                    "{}\t{}\t{}\t{}",
                    node.name,
                    or_dash(node.parent.map(|p| taxonomy.name(p))),
                    or_dash(node.default_fiction),
                    or_dash(audiences)
                );
            }
        }
    }
    Ok(())
}

fn print_tree(taxonomy: &GenreTaxonomy, id: GenreId, depth: usize) {
    let node = taxonomy.node(id);
    let fiction = match node.default_fiction {
        Some(true) => "fiction",
        Some(false) => "nonfiction",
        None => "either",
    };
    println!("{}{} ({fiction})", "  ".repeat(depth), node.name);
    for &child in &node.children {
        print_tree(taxonomy, child, depth + 1);
    }
}
