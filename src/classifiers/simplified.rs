//! Staff-curated genre and fiction status.
//!
//! Librarians assign these directly, so identifiers are genre names (or the
//! vocabulary URI followed by a percent-encoded genre name) rather than codes.

use super::{lowercased, Judgment, ScrubbedIdentifier, SchemeClassifier};
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{Audience, Scheme, SIMPLIFIED_FICTION_STATUS_URI, SIMPLIFIED_GENRE_URI};

/// Decode `%XX` escapes, keeping the raw text if it doesn't decode to UTF-8
fn percent_decode(value: &str) -> String {
    urlencoding::decode(value).map_or_else(|_| value.to_string(), |decoded| decoded.into_owned())
}

/// Genre names assigned by staff; `NONE` means "no genre at all"
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedGenreClassifier;

impl SchemeClassifier for SimplifiedGenreClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::SimplifiedGenre
    }

    /// Genre names are case-sensitive, so only the URI prefix is removed
    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        let identifier = identifier.trim();
        match identifier.strip_prefix(SIMPLIFIED_GENRE_URI) {
            Some(encoded) => ScrubbedIdentifier::new(percent_decode(encoded)),
            None => ScrubbedIdentifier::new(identifier),
        }
    }

    fn scrub_name(&self, name: &str) -> String {
        name.trim().to_string()
    }

    fn genre(
        &self,
        taxonomy: &GenreTaxonomy,
        identifier: Option<&str>,
        _name: Option<&str>,
        _fiction: Option<bool>,
        _audience: Option<Audience>,
    ) -> Option<GenreId> {
        taxonomy.get(identifier?)
    }

    fn classify(
        &self,
        taxonomy: &GenreTaxonomy,
        identifier: Option<&str>,
        name: Option<&str>,
    ) -> Judgment {
        let identifier = identifier.map(|i| self.scrub_identifier(i).identifier);
        let genre = self.genre(taxonomy, identifier.as_deref(), name, None, None);
        // Fiction status follows the genre.
        Judgment {
            genre,
            fiction: genre.and_then(|g| taxonomy.node(g).default_fiction),
            ..Judgment::default()
        }
    }
}

/// Fiction status assigned by staff: `fiction` or `nonfiction`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedFictionClassifier;

impl SchemeClassifier for SimplifiedFictionClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::SimplifiedFictionStatus
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        let identifier = identifier.trim();
        let identifier = match identifier.strip_prefix(SIMPLIFIED_FICTION_STATUS_URI) {
            Some(encoded) => percent_decode(encoded),
            None => identifier.to_string(),
        };
        ScrubbedIdentifier::new(lowercased(&identifier))
    }

    fn is_fiction(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        match identifier? {
            "fiction" => Some(true),
            "nonfiction" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::taxonomy::names;

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("Science%20Fiction"), "Science Fiction");
        assert_eq!(percent_decode("Crafts%20%26%20Hobbies"), "Crafts & Hobbies");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("Caf%C3%A9"), "Café");
        assert_eq!(percent_decode("Bad%FFByte"), "Bad%FFByte");
    }

    #[test]
    fn test_genre_by_uri_or_name() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let uri = format!("{SIMPLIFIED_GENRE_URI}Space%20Opera");
        let judgment = SimplifiedGenreClassifier.classify(&taxonomy, Some(&uri), None);
        assert_eq!(judgment.genre, taxonomy.get("Space Opera"));
        assert_eq!(judgment.fiction, Some(true));

        let judgment = SimplifiedGenreClassifier.classify(&taxonomy, Some("Cooking"), None);
        assert_eq!(judgment.genre, taxonomy.get("Cooking"));
        assert_eq!(judgment.fiction, Some(false));
        assert_eq!(judgment.audience, None);
        assert!(judgment.target_age.is_unknown());
    }

    #[test]
    fn test_genre_is_case_sensitive() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let judgment = SimplifiedGenreClassifier.classify(&taxonomy, Some("cooking"), None);
        assert_eq!(judgment.genre, None);
    }

    #[test]
    fn test_none_sentinel_is_not_a_genre() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let judgment = SimplifiedGenreClassifier.classify(&taxonomy, Some(names::NONE), None);
        assert_eq!(judgment.genre, None);
        assert_eq!(judgment.fiction, None);
    }

    #[test]
    fn test_fiction_status() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let fiction = |id: &str| SimplifiedFictionClassifier.classify(&taxonomy, Some(id), None).fiction;
        assert_eq!(fiction("Fiction"), Some(true));
        assert_eq!(fiction(&format!("{SIMPLIFIED_FICTION_STATUS_URI}nonfiction")), Some(false));
        assert_eq!(fiction("maybe"), None);
    }
}
