use super::age::parse_age_range;
use super::SchemeClassifier;
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{default_audience_for_target_age, range_tuple, AgeRange, Audience, Scheme};

const FICTION: &[&str] = &[
    "action-adventure",
    "erotica",
    "fantasy",
    "general-fiction",
    "historical-fiction",
    "horror",
    "humorous-fiction",
    "inspirational",
    "juvenile-fiction",
    "literary",
    "mystery",
    "romance",
    "science-fiction",
    "short-stories",
    "suspense-thriller",
    "urban-fiction",
    "westerns",
    "womens-fiction",
    "young-adult-fiction",
];

const NEITHER_FICTION_NOR_NONFICTION: &[&str] = &["comics-graphic-novels", "drama", "poetry"];

const GENRES: &[(&str, &[&str])] = &[
    ("Adventure", &["action-adventure"]),
    ("Antiques & Collectibles", &["antiques-collectibles"]),
    ("Architecture", &["architecture"]),
    ("Art", &["art"]),
    ("Biography & Memoir", &["biography-autobiography"]),
    ("Business", &["business", "business-economics"]),
    ("Comics & Graphic Novels", &["comics-graphic-novels"]),
    ("Computers", &["computers"]),
    ("Cooking", &["cooking"]),
    ("Crafts & Hobbies", &["crafts-hobbies"]),
    ("Drama", &["drama"]),
    ("Education", &["education"]),
    ("Erotica", &["erotica"]),
    ("Fantasy", &["fantasy"]),
    ("Foreign Language Study", &["foreign-language-study"]),
    ("Games", &["games"]),
    ("Gardening", &["gardening"]),
    ("Health & Diet", &["health-fitness"]),
    ("Historical Fiction", &["historical-fiction"]),
    ("History", &["history"]),
    ("Horror", &["horror"]),
    ("House & Home", &["house-home"]),
    ("Humorous Fiction", &["humorous-fiction"]),
    ("Humorous Nonfiction", &["humor"]),
    ("Law", &["law"]),
    ("Literary Criticism", &["literary-criticism"]),
    ("Literary Fiction", &["literary"]),
    ("Mathematics", &["mathematics"]),
    ("Medical", &["medical"]),
    ("Music", &["music"]),
    ("Mystery", &["mystery"]),
    ("Nature", &["nature"]),
    ("Parenting & Family", &["family-relationships"]),
    ("Performing Arts", &["performing-arts"]),
    ("Pets", &["pets"]),
    ("Philosophy", &["philosophy"]),
    ("Photography", &["photography"]),
    ("Poetry", &["poetry"]),
    ("Political Science", &["political-science"]),
    ("Psychology", &["psychology"]),
    ("Reference & Study Aids", &["reference", "language-arts"]),
    ("Religion & Spirituality", &["religion-spirituality"]),
    ("Religious Fiction", &["inspirational"]),
    ("Romance", &["romance"]),
    ("Science", &["science"]),
    ("Science Fiction", &["science-fiction"]),
    ("Self-Help", &["self-help"]),
    ("Short Stories", &["short-stories"]),
    ("Social Sciences", &["social-science"]),
    ("Sports", &["sports-recreations"]),
    ("Suspense/Thriller", &["suspense-thriller"]),
    ("Technology", &["technology"]),
    ("Travel", &["travel"]),
    ("True Crime", &["true-crime"]),
    ("Urban Fiction", &["urban-fiction"]),
    ("Westerns", &["westerns"]),
    ("Women's Fiction", &["womens-fiction"]),
];

/// RBdigital's genre slugs such as `science-fiction`
#[derive(Debug, Clone, Copy, Default)]
pub struct RbDigitalClassifier;

impl SchemeClassifier for RbDigitalClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::Rbdigital
    }

    fn is_fiction(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        let identifier = identifier?;
        if FICTION.contains(&identifier) {
            Some(true)
        } else if NEITHER_FICTION_NOR_NONFICTION.contains(&identifier) {
            None
        } else {
            Some(false)
        }
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        let identifier = identifier?;
        if identifier.starts_with("juvenile-") {
            Some(Audience::Children)
        } else if identifier.starts_with("young-adult-") {
            Some(Audience::YoungAdult)
        } else {
            None
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
            .find(|(_, slugs)| slugs.contains(&identifier))
            .and_then(|(genre, _)| taxonomy.get(genre))
    }
}

/// RBdigital audience labels, which may also be explicit age ranges
#[derive(Debug, Clone, Copy, Default)]
pub struct RbDigitalAudienceClassifier;

impl RbDigitalAudienceClassifier {
    fn label(identifier: &str) -> String {
        identifier.replace('-', " ")
    }
}

impl SchemeClassifier for RbDigitalAudienceClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::RbdigitalAudience
    }

    fn audience(&self, identifier: Option<&str>, name: Option<&str>) -> Option<Audience> {
        let label = Self::label(identifier?);
        match label.as_str() {
            "adult" | "adults" | "general adult" => Some(Audience::Adult),
            "young adult" | "teen" => Some(Audience::YoungAdult),
            "childrens" | "children" | "juvenile" | "beginning reader" | "pre school" => {
                Some(Audience::Children)
            }
            _ => default_audience_for_target_age(self.target_age(identifier, name)),
        }
    }

    fn target_age(&self, identifier: Option<&str>, _name: Option<&str>) -> AgeRange {
        let Some(identifier) = identifier else {
            return AgeRange::UNKNOWN;
        };
        match Self::label(identifier).as_str() {
            "pre school" => range_tuple(Some(0), Some(4)),
            "beginning reader" => range_tuple(Some(5), Some(8)),
            // Bare numbers here are too ambiguous to trust.
            _ => parse_age_range(identifier, true).unwrap_or(AgeRange::UNKNOWN),
        }
    }
}
