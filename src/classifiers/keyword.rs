//! Keyword search over free-text subject headings.
//!
//! Subject headings (LCSH, FAST) and user tags are matched against three tiers
//! of keywords, most specific first. Within a tier the genre with the most
//! keyword hits wins; a subgenre beats a parent it ties with. The first tier
//! that produces a winner decides.

use regex::Regex;
use std::sync::LazyLock;

use super::age::age_or_grade_target_age;
use super::{compile_patterns, SchemeClassifier};
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{AgeRange, Audience, Scheme};

type KeywordTable = &'static [(&'static str, &'static [&'static str])];

const SPECIFIC: KeywordTable = &[
    ("Epic Fantasy", &["epic fantasy", "high fantasy"]),
    ("Historical Fantasy", &["historical fantasy"]),
    ("Urban Fantasy", &["urban fantasy"]),
    ("Gothic Horror", &["gothic horror", "gothic fiction"]),
    ("Ghost Stories", &["ghost stor(?:y|ies)"]),
    ("Vampires", &["vampires?"]),
    ("Werewolves", &["werewol(?:f|ves)", "shape ?shifters?"]),
    ("Occult Horror", &["occult fiction"]),
    ("Cozy Mystery", &["cozy myster(?:y|ies)", "cosy myster(?:y|ies)"]),
    ("Hard-Boiled Mystery", &["hard[- ]boiled", "noir fiction"]),
    ("Police Procedural", &["police procedurals?"]),
    ("Historical Mystery", &["historical myster(?:y|ies)"]),
    ("Paranormal Mystery", &["paranormal myster(?:y|ies)"]),
    ("Women Detectives", &["women detectives", "women sleuths", "female detectives?"]),
    (
        "Crime & Detective Stories",
        &["detective and mystery stories", "crime fiction", "detective fiction", "private investigators"],
    ),
    ("Contemporary Romance", &["contemporary romance"]),
    ("Historical Romance", &["historical romance", "regency romance"]),
    ("Paranormal Romance", &["paranormal romance"]),
    ("Western Romance", &["western romance"]),
    ("Romantic Suspense", &["romantic suspense"]),
    ("Romantic SF", &["romantic science fiction", "futuristic romance", "time[- ]travel romance"]),
    ("Dystopian SF", &["dystopian", "dystopias?", "post-apocalyptic"]),
    ("Space Opera", &["space opera"]),
    ("Cyberpunk", &["cyberpunk"]),
    ("Military SF", &["military science fiction"]),
    ("Alternative History", &["alternative histor(?:y|ies)", "alternate histor(?:y|ies)"]),
    ("Steampunk", &["steampunk"]),
    ("Media Tie-in SF", &["star trek", "star wars", "media tie-in"]),
    ("Historical Thriller", &["historical thrillers?"]),
    ("Espionage", &["espionage", "spies", "spy stories", "spy fiction"]),
    ("Supernatural Thriller", &["supernatural thrillers?"]),
    ("Medical Thriller", &["medical thrillers?"]),
    ("Political Thriller", &["political thrillers?", "political fiction"]),
    ("Psychological Thriller", &["psychological thrillers?", "psychological fiction"]),
    ("Technothriller", &["techno-?thrillers?"]),
    ("Legal Thriller", &["legal thrillers?", "legal stories"]),
    ("Military Thriller", &["military thrillers?"]),
    ("Architecture", &["architecture", "buildings"]),
    ("Art Criticism & Theory", &["art criticism", "art theory", "aesthetics"]),
    ("Art History", &["art history", "history of art", r"art\W+history"]),
    ("Art", &["art", "painting", "sculpture", "drawing"]),
    ("Design", &["graphic design", "interior design", "industrial design"]),
    ("Fashion", &["fashion", "clothing and dress", "costume"]),
    ("Photography", &["photography", "photographs"]),
    ("Economics", &["economics", "economic"]),
    ("Management & Leadership", &["management", "leadership"]),
    ("Personal Finance & Investing", &["personal finance", "investing", "investments", "finance, personal"]),
    ("Real Estate", &["real estate"]),
    ("Business", &["business", "entrepreneurship", "marketing"]),
    ("Family & Relationships", &["family relationships", "marriage", "dating", "interpersonal relations"]),
    ("Parenting", &["parenting", "child rearing"]),
    ("Bartending & Cocktails", &["cocktails", "bartending", "wine"]),
    ("Cooking", &["cooking", "cookery", "cookbooks?", "recipes"]),
    ("Health & Diet", &["diet", "nutrition", "fitness", "weight loss"]),
    ("Vegetarian & Vegan", &["vegetarian", "vegan"]),
    ("African History", &[r"africa\W+history", "african history"]),
    ("Ancient History", &["ancient history", "antiquities", r"ancient (?:egypt|greece|rome)"]),
    ("Asian History", &[r"(?:asia|china|japan|india|korea|vietnam)\W+history", "asian history"]),
    ("Civil War History", &["civil war, 1861-1865", "american civil war"]),
    (
        "European History",
        &[r"(?:europe|england|great britain|france|germany|italy|russia|spain|ireland)\W+history", "european history"],
    ),
    ("Latin American History", &[r"(?:latin america|mexico|brazil|argentina|cuba)\W+history"]),
    ("Medieval History", &["middle ages", "medieval"]),
    ("Middle East History", &[r"middle east\W+history"]),
    ("Military History", &["military history", r"world war,? (?:i|ii|1914-1918|1939-1945)", "battles"]),
    ("Modern History", &["modern history"]),
    ("Renaissance & Early Modern History", &["renaissance", "early modern"]),
    ("United States History", &[r"united states\W+history", "american history"]),
    ("World History", &["world history"]),
    ("Antiques & Collectibles", &["antiques", "collectibles", "collectors and collecting"]),
    ("Crafts & Hobbies", &["crafts?", "handicraft", "knitting", "quilting", "sewing", "needlework"]),
    ("Gardening", &["gardening", "gardens"]),
    ("Games", &["games", "puzzles", "chess"]),
    ("House & Home", &["home improvement", "interior decoration", "house & home"]),
    ("Pets", &["pets", "dogs", "cats"]),
    ("Film & TV", &["motion pictures", "films?", "television"]),
    ("Music", &["music", "musicians"]),
    ("Performing Arts", &["theater", "theatre", "dance", "performing arts"]),
    ("Dictionaries", &["dictionar(?:y|ies)"]),
    ("Foreign Language Study", &["language study", "foreign language", "language and languages", "english language"]),
    ("Law", &["law", "legal"]),
    ("Study Aids", &["study aids", "test preparation", "examinations"]),
    ("Body, Mind & Spirit", &["occultism", "astrology", "new age", "spiritualism", "tarot"]),
    ("Buddhism", &["buddhism", "buddhist"]),
    ("Bible Studies", &["bible"]),
    ("Catholicism", &["catholic", "catholicism"]),
    ("Christianity", &["christianity", "christian life", "church", "jesus christ"]),
    ("Hinduism", &["hinduism", "hindu"]),
    ("Islam", &["islam", "islamic", "muslims?"]),
    ("Judaism", &["judaism", "jewish"]),
    ("Computers", &["computers?", "programming", "software", "internet"]),
    ("Mathematics", &["mathematics", "algebra", "geometry", "calculus"]),
    ("Medical", &["medicine", "medical", "diseases"]),
    ("Nature", &["nature", "natural history", "animals", "birds", "plants"]),
    ("Psychology", &["psychology", "psychological aspects"]),
    ("Science", &["physics", "chemistry", "biology", "astronomy", "geology"]),
    ("Social Sciences", &["sociology", "anthropology", "social sciences?"]),
    ("Technology", &["technology", "engineering"]),
];

const GENERAL: KeywordTable = &[
    ("Adventure", &["adventure", "adventure stories", "sea stories"]),
    ("Classics", &["classics"]),
    ("Comics & Graphic Novels", &["comic books", "comics", "graphic novels?", "manga"]),
    ("Drama", &["drama", "plays"]),
    ("Erotica", &["erotica", "erotic"]),
    ("Fantasy", &["fantasy", "fantasy fiction", "magic"]),
    ("Folklore", &["folklore", "fairy tales", "mythology", "legends"]),
    ("Historical Fiction", &["historical fiction"]),
    ("Horror", &["horror", "horror tales"]),
    ("Humorous Fiction", &["humorous fiction", "humorous stories"]),
    ("Literary Fiction", &["literary fiction"]),
    ("LGBTQ Fiction", &["gays?", "lesbians?", "lgbtq?"]),
    ("Mystery", &["myster(?:y|ies)", "detectives?"]),
    ("Poetry", &["poetry", "poems"]),
    ("Religious Fiction", &["christian fiction", "religious fiction"]),
    ("Romance", &["romance", "love stories"]),
    ("Science Fiction", &["science fiction", "sci-fi"]),
    ("Short Stories", &["short stories"]),
    ("Suspense/Thriller", &["thrillers?", "suspense"]),
    ("Urban Fiction", &["urban fiction", "street lit"]),
    ("Westerns", &["westerns?", "western stories"]),
    ("Women's Fiction", &["women's fiction", "chick lit"]),
    ("Biography & Memoir", &["biograph(?:y|ies)", "autobiograph(?:y|ies)", "memoirs?"]),
    ("Education", &["education", "teaching"]),
    ("History", &["histor(?:y|ies)"]),
    ("Humorous Nonfiction", &["humor", "wit and humor"]),
    ("Life Strategies", &["life skills", "conduct of life"]),
    ("Literary Criticism", &["criticism and interpretation", "literary criticism"]),
    ("Periodicals", &["periodicals"]),
    ("Philosophy", &["philosophy", "ethics"]),
    ("Political Science", &["politics", "political science", "government"]),
    ("Self-Help", &["self-help", "self-actualization", "motivational"]),
    ("Sports", &["sports", "baseball", "football", "basketball", "soccer"]),
    ("Travel", &["travel", "guidebooks"]),
    ("True Crime", &["true crime", "murder", "criminals"]),
    ("Religion & Spirituality", &["religion", "spirituality"]),
];

const CATCHALL: KeywordTable = &[
    ("Art & Design", &["design", "arts"]),
    ("Personal Finance & Business", &["finance", "money"]),
    ("Parenting & Family", &["family", "families"]),
    ("Food & Health", &["food", "health"]),
    ("Hobbies & Home", &["hobbies", "home"]),
    ("Entertainment", &["entertainment"]),
    ("Reference & Study Aids", &["reference", "handbooks"]),
    ("Science & Technology", &["science", "inventions"]),
    ("Religion & Spirituality", &["religious", "spiritual"]),
];

/// Wrap keywords so they only match whole words
fn word_patterns(keywords: &[&str]) -> Vec<Regex> {
    let wrapped: Vec<String> = keywords.iter().map(|k| format!(r"\b(?:{k})\b")).collect();
    let refs: Vec<&str> = wrapped.iter().map(String::as_str).collect();
    compile_patterns(&refs)
}

type KeywordTier = Vec<(&'static str, Vec<Regex>)>;

static TIERS: LazyLock<Vec<KeywordTier>> = LazyLock::new(|| {
    [SPECIFIC, GENERAL, CATCHALL]
        .iter()
        .map(|table| {
            table
                .iter()
                .map(|(genre, keywords)| (*genre, word_patterns(keywords)))
                .collect()
        })
        .collect()
});

static FICTION_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    word_patterns(&["fiction", "stories", "tales", "literatures", "scriptwriting", "novels?"])
});

static NONFICTION_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    word_patterns(&[
        "history",
        "histories",
        "biography",
        "biographies",
        "autobiography",
        "autobiographies",
        "nonfiction",
        "essays",
        "letters",
        "true story",
        "personal memoirs",
    ])
});

static JUVENILE_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    word_patterns(&["for children", "children's", "juvenile", "nursery rhymes"])
});

static YOUNG_ADULT_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    word_patterns(&[
        "young adult",
        "ya",
        "12-up",
        "teenage .*fiction",
        "teens .*fiction",
        "teen books",
        "teenage romance",
    ])
});

/// Headings that are about children rather than for them
static JUVENILE_BLACKLIST: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    word_patterns(&[
        "delinquent",
        "delinquency",
        "juvenile crime",
        "juvenile-delinquency",
        "juvenile court",
        "juvenile justice",
        "juvenile hall",
        "juvenile detention",
        "young criminals",
        "gangs",
        "missing children",
        "child abuse",
        "children of",
        "runaway children",
    ])
});

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Best genre for a piece of free text, honoring known fiction status and audience
#[must_use]
pub fn genre_for_text(
    taxonomy: &GenreTaxonomy,
    text: &str,
    fiction: Option<bool>,
    audience: Option<Audience>,
) -> Option<GenreId> {
    for tier in TIERS.iter() {
        let mut counts: Vec<(GenreId, usize)> = Vec::new();
        for (name, patterns) in tier {
            let Some(genre) = taxonomy.get(name) else {
                continue;
            };
            let node = taxonomy.node(genre);
            if fiction.is_some() && node.default_fiction != fiction {
                continue;
            }
            if audience.is_some_and(|a| !node.allows_audience(a)) {
                continue;
            }
            let hits = patterns.iter().filter(|p| p.is_match(text)).count();
            if hits > 0 {
                counts.push((genre, hits));
            }
        }
        // Stable: ties keep table order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut best: Option<(GenreId, usize)> = None;
        for (genre, hits) in counts {
            match best {
                None => best = Some((genre, hits)),
                Some((current, current_hits))
                    if hits >= current_hits && taxonomy.is_descendant(genre, current) =>
                {
                    best = Some((genre, hits));
                }
                Some(_) => {}
            }
        }
        if let Some((genre, _)) = best {
            return Some(genre);
        }
    }
    None
}

/// Keyword classification for LCSH, FAST and tags
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    scheme: Scheme,
}

impl KeywordClassifier {
    #[must_use]
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    /// Tags usually arrive as a bare identifier
    fn text<'t>(identifier: Option<&'t str>, name: Option<&'t str>) -> Option<&'t str> {
        name.or(identifier)
    }
}

impl SchemeClassifier for KeywordClassifier {
    fn scheme(&self) -> Scheme {
        self.scheme
    }

    fn is_fiction(&self, identifier: Option<&str>, name: Option<&str>) -> Option<bool> {
        let text = Self::text(identifier, name)?;
        if any_match(&FICTION_INDICATORS, text) {
            Some(true)
        } else if any_match(&NONFICTION_INDICATORS, text) {
            Some(false)
        } else {
            None
        }
    }

    fn audience(&self, identifier: Option<&str>, name: Option<&str>) -> Option<Audience> {
        let text = Self::text(identifier, name)?;
        if any_match(&JUVENILE_BLACKLIST, text) {
            // About children, not for them.
            return None;
        }
        if any_match(&JUVENILE_INDICATORS, text) {
            Some(Audience::Children)
        } else if any_match(&YOUNG_ADULT_INDICATORS, text) {
            Some(Audience::YoungAdult)
        } else {
            None
        }
    }

    fn target_age(&self, identifier: Option<&str>, name: Option<&str>) -> AgeRange {
        age_or_grade_target_age(identifier, name)
    }

    fn genre(
        &self,
        taxonomy: &GenreTaxonomy,
        identifier: Option<&str>,
        name: Option<&str>,
        fiction: Option<bool>,
        audience: Option<Audience>,
    ) -> Option<GenreId> {
        genre_for_text(taxonomy, Self::text(identifier, name)?, fiction, audience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::range_tuple;

    fn genre_name(taxonomy: &GenreTaxonomy, text: &str, fiction: Option<bool>) -> Option<String> {
        genre_for_text(taxonomy, text, fiction, None).map(|g| taxonomy.name(g).to_string())
    }

    #[test]
    fn test_keyword_tables_compile() {
        for table in [SPECIFIC, GENERAL, CATCHALL] {
            for (genre, keywords) in table {
                assert_eq!(word_patterns(keywords).len(), keywords.len(), "{genre}");
            }
        }
    }

    #[test]
    fn test_keyword_genres_exist_in_taxonomy() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        for table in [SPECIFIC, GENERAL, CATCHALL] {
            for (genre, _) in table {
                assert!(taxonomy.get(genre).is_some(), "{genre}");
            }
        }
    }

    #[test]
    fn test_specific_tier_beats_general() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        assert_eq!(
            genre_name(&taxonomy, "fantasy fiction, epic fantasy", None).as_deref(),
            Some("Epic Fantasy")
        );
        assert_eq!(
            genre_name(&taxonomy, "science fiction", None).as_deref(),
            Some("Science Fiction")
        );
        assert_eq!(
            genre_name(&taxonomy, "united states -- history -- civil war, 1861-1865", None).as_deref(),
            Some("Civil War History")
        );
    }

    #[test]
    fn test_word_boundaries() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        // "artificial" does not contain the word "art".
        assert_eq!(genre_name(&taxonomy, "artificial intelligence", None), None);
        assert_eq!(genre_name(&taxonomy, "fiction/urban", None), None);
    }

    #[test]
    fn test_fiction_status_filters_genres() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        assert_eq!(genre_name(&taxonomy, "juvenile fiction/history/general", Some(true)), None);
        assert_eq!(
            genre_name(&taxonomy, "history", Some(false)).as_deref(),
            Some("History")
        );
    }

    #[test]
    fn test_audience_restriction_filters_genres() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        assert!(genre_for_text(&taxonomy, "erotica", None, Some(Audience::Children)).is_none());
        assert_eq!(
            genre_for_text(&taxonomy, "erotica", None, Some(Audience::AdultsOnly)),
            taxonomy.get("Erotica")
        );
    }

    #[test]
    fn test_audience_and_blacklist() {
        let lcsh = KeywordClassifier::new(Scheme::Lcsh);
        assert_eq!(lcsh.audience(None, Some("juvenile literature")), Some(Audience::Children));
        assert_eq!(lcsh.audience(None, Some("young adult fiction")), Some(Audience::YoungAdult));
        assert_eq!(lcsh.audience(None, Some("juvenile delinquency")), None);
        assert_eq!(lcsh.audience(None, Some("missing children")), None);
        assert_eq!(lcsh.audience(None, Some("cooking")), None);
    }

    #[test]
    fn test_is_fiction() {
        let lcsh = KeywordClassifier::new(Scheme::Lcsh);
        assert_eq!(lcsh.is_fiction(None, Some("detective and mystery stories")), Some(true));
        assert_eq!(lcsh.is_fiction(None, Some("world war, 1939-1945 -- history")), Some(false));
        assert_eq!(lcsh.is_fiction(None, Some("cooking")), None);
    }

    #[test]
    fn test_tag_uses_identifier() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let tag = KeywordClassifier::new(Scheme::Tag);
        let judgment = tag.classify(&taxonomy, Some("Space Opera"), None);
        assert_eq!(judgment.genre, taxonomy.get("Space Opera"));
        let judgment = tag.classify(&taxonomy, Some("ages 8-12"), None);
        assert_eq!(judgment.target_age, range_tuple(Some(8), Some(12)));
    }
}
