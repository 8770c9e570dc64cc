use super::{ScrubbedIdentifier, SchemeClassifier};
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{Audience, Scheme};

/// Language and literature subclasses that hold fiction
const FICTION: &[&str] = &["PN", "PQ", "PR", "PS", "PT", "PZ"];

/// Subclass prefixes per genre; the longest matching prefix wins
const GENRES: &[(&str, &[&str])] = &[
    ("Art", &["N", "NB", "NC", "ND", "NE", "NK", "NX"]),
    ("Architecture", &["NA"]),
    ("Biography & Memoir", &["CT"]),
    ("Business", &["HF", "HG", "HJ"]),
    ("Christianity", &["BR", "BS", "BT", "BV", "BX"]),
    ("Cooking", &["TX"]),
    ("Crafts & Hobbies", &["TT"]),
    ("Economics", &["HB", "HC"]),
    (
        "Education",
        &["L", "LA", "LB", "LC", "LD", "LE", "LF", "LG", "LH", "LJ", "LT"],
    ),
    (
        "European History",
        &["DA", "DAW", "DB", "DD", "DF", "DG", "DH", "DJ", "DK", "DL", "DP", "DQ", "DR"],
    ),
    ("History", &["D"]),
    ("Islam", &["BP"]),
    ("Judaism", &["BM"]),
    ("Mathematics", &["QA", "HA", "GA"]),
    ("Medical", &["QM", "R"]),
    ("Military History", &["U", "V"]),
    ("Music", &["M", "MT", "ML"]),
    ("Parenting & Family", &["HQ"]),
    ("Periodicals", &["AP", "AN"]),
    ("Philosophy", &["BC", "BD", "BJ"]),
    ("Photography", &["TR"]),
    ("Political Science", &["J", "HX"]),
    ("Psychology", &["BF"]),
    ("Reference & Study Aids", &["AE", "AG", "AI"]),
    ("Religion & Spirituality", &["BL", "BQ"]),
    (
        "Science",
        &["QB", "QC", "QD", "QE", "QH", "QK", "QL", "QR", "CC", "GB", "GC", "QP"],
    ),
    (
        "Social Sciences",
        &["HD", "HE", "HM", "HN", "HS", "HT", "HV", "GN", "GF", "GT"],
    ),
    ("Sports", &["SK"]),
    ("World History", &["CB"]),
];

/// Fallbacks for whole classes no specific prefix covers
const LEFTOVERS: &[(&str, &str)] = &[
    ("B", "Philosophy"),
    ("T", "Technology"),
    ("Q", "Science"),
    ("S", "Science"),
    ("H", "Social Sciences"),
    ("D", "History"),
    ("N", "Art"),
    ("L", "Education"),
    ("E", "United States History"),
    ("F", "United States History"),
];

fn longest_prefix<'t>(identifier: &str, table: impl Iterator<Item = (&'t str, &'t str)>) -> Option<&'t str> {
    table
        .filter(|(prefix, _)| identifier.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, genre)| genre)
}

/// Library of Congress Classification
#[derive(Debug, Clone, Copy, Default)]
pub struct LcClassifier;

impl SchemeClassifier for LcClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::Lcc
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        ScrubbedIdentifier::new(identifier.trim().to_uppercase())
    }

    fn is_fiction(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        let identifier = identifier?;
        if identifier == "P" {
            return Some(true);
        }
        Some(FICTION.iter().any(|prefix| identifier.starts_with(prefix)))
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        let identifier = identifier?;
        if identifier.starts_with("PZ") {
            Some(Audience::Children)
        } else {
            // Everything else is implicitly for adults.
            Some(Audience::Adult)
        }
    }

    fn genre(
        &self,
        taxonomy: &GenreTaxonomy,
        identifier: Option<&str>,
        _name: Option<&str>,
        _fiction: Option<bool>,
        _audience: Option<Audience>,
    ) -> Option<GenreId> {
        let identifier = identifier?;
        let specific = GENRES
            .iter()
            .flat_map(|(genre, prefixes)| prefixes.iter().map(move |prefix| (*prefix, *genre)));
        longest_prefix(identifier, specific)
            .or_else(|| longest_prefix(identifier, LEFTOVERS.iter().copied()))
            .and_then(|genre| taxonomy.get(genre))
    }

    /// PZ covers both children's and young adult literature
    fn juvenile_is_generic(&self) -> bool {
        true
    }
}
