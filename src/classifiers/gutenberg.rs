use super::{ScrubbedIdentifier, SchemeClassifier};
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{Audience, Scheme};

/// Bookshelves holding fiction that don't say "Fiction" or "Stories" in their names
const FICTION: &[&str] = &[
    "Adventure",
    "Bestsellers, American, 1895-1923",
    "Christmas",
    "Fantasy",
    "Horror",
    "Humor",
    "Movie Books",
    "Precursors of Science Fiction",
    "Romance",
    "Science Fiction by Women",
    "Western",
];

const GENRES: &[(&str, &[&str])] = &[
    ("Adventure", &["Adventure", "Pirates, Buccaneers, Corsairs, etc."]),
    ("Biography & Memoir", &["Biographies"]),
    ("Classics", &["Best Books Ever Listings", "Harvard Classics"]),
    ("Cooking", &["Cookbooks and Cooking"]),
    ("Crafts & Hobbies", &["Crafts", "Knots and Splices"]),
    ("Drama", &["One Act Plays", "Plays"]),
    ("Fantasy", &["Fantasy", "Oz"]),
    ("Folklore", &["Folklore", "Mythology", "Fairy Tales"]),
    ("Ghost Stories", &["Ghost Stories"]),
    ("Gothic Horror", &["Gothic Fiction"]),
    ("Historical Fiction", &["Historical Fiction"]),
    ("Horror", &["Horror"]),
    ("Humorous Fiction", &["Humor"]),
    ("Mystery", &["Detective Fiction", "Mystery Fiction"]),
    ("Crime & Detective Stories", &["Crime Fiction"]),
    ("Philosophy", &["Philosophy"]),
    ("Poetry", &["Poetry", "Poetry, A Period"]),
    ("Religion & Spirituality", &["Atheism", "Bahá'í Faith", "Hinduism", "Paganism"]),
    ("Christianity", &["Christianity", "Bible"]),
    ("Romance", &["Romance"]),
    ("Science Fiction", &["Science Fiction", "Precursors of Science Fiction", "Science Fiction by Women"]),
    ("Short Stories", &["Short Stories"]),
    ("Sports", &["Sports", "Hunting", "Fishing"]),
    ("Travel", &["Travel"]),
    ("United States History", &["American Revolutionary War", "United States"]),
    ("Civil War History", &["US Civil War"]),
    ("Westerns", &["Western"]),
    ("Science", &["Astronomy", "Biology", "Botany", "Chemistry", "Geology", "Physics"]),
    ("Music", &["Music", "Opera"]),
];

/// Project Gutenberg bookshelf names
#[derive(Debug, Clone, Copy, Default)]
pub struct GutenbergBookshelfClassifier;

impl SchemeClassifier for GutenbergBookshelfClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::GutenbergBookshelf
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        ScrubbedIdentifier::new(identifier.trim())
    }

    fn is_fiction(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        let identifier = identifier?;
        if FICTION.contains(&identifier) || identifier.contains("Fiction") || identifier.contains("Stories") {
            Some(true)
        } else {
            // Bookshelves rarely rule fiction out.
            None
        }
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        let identifier = identifier?;
        if identifier.contains("Children's") {
            Some(Audience::Children)
        } else {
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
        GENRES
            .iter()
            .find(|(_, shelves)| shelves.contains(&identifier))
            .and_then(|(genre, _)| taxonomy.get(genre))
    }
}
