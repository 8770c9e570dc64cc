//! Publisher, imprint and title heuristics.
//!
//! Some publishers only put out one kind of book: Harlequin publishes
//! romances, Scholastic publishes for children. These tables turn a work's
//! bibliographic metadata into simulated classifications.

use crate::catalog::taxonomy::names;
use crate::core::types::Audience;
use crate::core::work::WorkMetadata;

/// Weight of each simulated classification
pub const METADATA_WEIGHT: f64 = 100.0;

const GENRE_PUBLISHERS: &[(&str, &str)] = &[
    ("Harlequin", "Romance"),
    ("Pocket Books/Star Trek", names::MEDIA_TIE_IN_SF),
    ("Kensington", "Urban Fiction"),
    ("Fodor's Travel Publications", "Travel"),
    ("Marvel Entertainment, LLC", names::COMICS_GRAPHIC_NOVELS),
];

const GENRE_IMPRINTS: &[(&str, &str)] = &[
    ("Harlequin Intrigue", "Romantic Suspense"),
    ("Love Inspired Suspense", "Romantic Suspense"),
    ("Harlequin Historical", "Historical Romance"),
    ("Harlequin Historical Undone", "Historical Romance"),
    ("Frommers", "Travel"),
    ("LucasBooks", names::MEDIA_TIE_IN_SF),
];

const AUDIENCE_IMPRINTS: &[(&str, Audience)] = &[
    ("Harlequin Teen", Audience::YoungAdult),
    ("HarperTeen", Audience::YoungAdult),
    ("Open Road Media Teen & Tween", Audience::YoungAdult),
    ("Rosen Young Adult", Audience::YoungAdult),
];

const NOT_ADULT_PUBLISHERS: &[&str] = &[
    "Scholastic Inc.",
    "Random House Children's Books",
    "Little, Brown Books for Young Readers",
    "Penguin Young Readers Group",
    "Hachette Children's Books",
    "Nickelodeon Publishing",
];

const NOT_ADULT_IMPRINTS: &[&str] = &[
    "Scholastic",
    "Scholastic Paperbacks",
    "Random House Books for Young Readers",
    "HMH Books for Young Readers",
    "Knopf Books for Young Readers",
    "Delacorte Books for Young Readers",
    "Open Road Young Readers",
    "Macmillan Young Listeners",
    "Bloomsbury Childrens",
    "NYR Children's Collection",
    "Bloomsbury USA Childrens",
    "National Geographic Children's Books",
];

const FICTION_IMPRINTS: &[&str] = &["Del Rey"];
const NONFICTION_IMPRINTS: &[&str] = &["Harlequin Nonfiction"];
const FICTION_PUBLISHERS: &[&str] = &[];
const NONFICTION_PUBLISHERS: &[&str] = &["Wiley"];

/// How a work's metadata shifts the audience tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceHint {
    /// Add weight to one audience
    Toward(Audience),
    /// Subtract weight from the adult audiences
    NotAdult,
}

/// Evidence simulated from publisher, imprint and title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataHints {
    /// Genre names, each worth [`METADATA_WEIGHT`]
    pub genres: Vec<&'static str>,
    pub fiction: Option<bool>,
    pub audience: Option<AudienceHint>,
}

fn lookup<T: Copy>(table: &[(&str, T)], key: Option<&str>) -> Option<T> {
    let key = key?;
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn listed(table: &[&str], key: Option<&str>) -> bool {
    key.is_some_and(|key| table.contains(&key))
}

impl MetadataHints {
    /// Derive hints from a work's metadata
    #[must_use]
    pub fn from_metadata(metadata: &WorkMetadata) -> Self {
        let title = metadata.title.as_deref().unwrap_or_default();
        let publisher = metadata.publisher.as_deref();
        let imprint = metadata.imprint.as_deref();

        let mut genres = Vec::new();
        if title.contains("Star Trek:")
            || title.contains("Star Wars:")
            || (title.contains("Jedi") && imprint == Some("Del Rey"))
        {
            genres.push(names::MEDIA_TIE_IN_SF);
        }
        if let Some(genre) = lookup(GENRE_IMPRINTS, imprint).or_else(|| lookup(GENRE_PUBLISHERS, publisher)) {
            genres.push(genre);
        }

        let fiction = if listed(NONFICTION_IMPRINTS, imprint) || listed(NONFICTION_PUBLISHERS, publisher) {
            Some(false)
        } else if listed(FICTION_IMPRINTS, imprint) || listed(FICTION_PUBLISHERS, publisher) {
            Some(true)
        } else {
            None
        };

        let audience = if let Some(audience) = lookup(AUDIENCE_IMPRINTS, imprint) {
            Some(AudienceHint::Toward(audience))
        } else if listed(NOT_ADULT_PUBLISHERS, publisher) || listed(NOT_ADULT_IMPRINTS, imprint) {
            Some(AudienceHint::NotAdult)
        } else {
            None
        };

        Self {
            genres,
            fiction,
            audience,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.fiction.is_none() && self.audience.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::taxonomy::GenreTaxonomy;

    fn metadata(title: &str, publisher: &str, imprint: &str) -> WorkMetadata {
        let field = |value: &str| (!value.is_empty()).then(|| value.to_string());
        WorkMetadata {
            title: field(title),
            publisher: field(publisher),
            imprint: field(imprint),
        }
    }

    #[test]
    fn test_table_genres_exist() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        for (_, genre) in GENRE_PUBLISHERS.iter().chain(GENRE_IMPRINTS) {
            assert!(taxonomy.get(genre).is_some(), "{genre}");
        }
    }

    #[test]
    fn test_no_metadata_no_hints() {
        assert!(MetadataHints::from_metadata(&WorkMetadata::default()).is_empty());
        assert!(MetadataHints::from_metadata(&metadata("Moby Dick", "Penguin", "")).is_empty());
    }

    #[test]
    fn test_title_cues() {
        let hints = MetadataHints::from_metadata(&metadata("Star Wars: Heir to the Empire", "", ""));
        assert_eq!(hints.genres, vec![names::MEDIA_TIE_IN_SF]);

        let hints = MetadataHints::from_metadata(&metadata("Jedi Trial", "Random House", "Del Rey"));
        assert_eq!(hints.genres, vec![names::MEDIA_TIE_IN_SF]);
        assert_eq!(hints.fiction, Some(true));

        let hints = MetadataHints::from_metadata(&metadata("Jedi Trial", "", ""));
        assert!(hints.genres.is_empty());
    }

    #[test]
    fn test_imprint_beats_publisher() {
        let hints = MetadataHints::from_metadata(&metadata("", "Harlequin", "Harlequin Intrigue"));
        assert_eq!(hints.genres, vec!["Romantic Suspense"]);

        let hints = MetadataHints::from_metadata(&metadata("", "Harlequin", "Harlequin Teen"));
        assert_eq!(hints.genres, vec!["Romance"]);
        assert_eq!(hints.audience, Some(AudienceHint::Toward(Audience::YoungAdult)));
    }

    #[test]
    fn test_not_adult_and_nonfiction() {
        let hints = MetadataHints::from_metadata(&metadata("", "Scholastic Inc.", ""));
        assert_eq!(hints.audience, Some(AudienceHint::NotAdult));

        let hints = MetadataHints::from_metadata(&metadata("", "Wiley", "Del Rey"));
        assert_eq!(hints.fiction, Some(false));
    }
}
