use super::{ScrubbedIdentifier, SchemeClassifier};
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{range_tuple, AgeRange, Audience, Scheme};

/// Subjects only used for video titles
const VIDEO_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Ballet",
    "Cartoon",
    "Classic Film",
    "Comedy",
    "Children's Video",
    "Documentary",
    "Feature Film",
    "Foreign Film",
    "Instructional",
    "Martial Arts",
    "Music Video",
    "Short Film",
    "Stage Production",
    "Theater",
    "TV Series",
    "Young Adult Video",
];

/// Subjects only used for music titles
const MUSIC_GENRES: &[&str] = &[
    "Alternative",
    "Ambient",
    "Blues",
    "Chamber Music",
    "Children's Music",
    "Choral",
    "Christian",
    "Classical",
    "Compilations",
    "Concertos",
    "Country",
    "Dance",
    "Electronica",
    "Film Music",
    "Folk",
    "Hip-Hop",
    "Holiday Music",
    "Indie",
    "Instrumental",
    "Jazz",
    "Opera & Operetta",
    "Orchestral",
    "Pop",
    "Ragtime",
    "Rap",
    "R & B",
    "Rock",
    "Soundtrack",
    "Vocal",
    "World Music",
];

const FICTION: &[&str] = &[
    "Fantasy",
    "Horror",
    "Literary Anthologies",
    "Mystery",
    "Romance",
    "Short Stories",
    "Suspense",
    "Thriller",
    "Science Fiction",
    "Western",
    "Erotic Literature",
    "Folklore",
    "Antiquarian",
];

const NEITHER_FICTION_NOR_NONFICTION: &[&str] = &["Drama", "Poetry", "Comic and Graphic Books"];

const GENRES: &[(&str, &[&str])] = &[
    ("Antiques & Collectibles", &["Antiques"]),
    ("Architecture", &["Architecture"]),
    ("Art", &["Art"]),
    ("Biography & Memoir", &["Biography & Autobiography"]),
    ("Business", &["Business", "Marketing & Sales", "Careers"]),
    ("Christianity", &["Christian Nonfiction"]),
    ("Computers", &["Computer Technology", "Social Media"]),
    ("Classics", &["Classic Literature"]),
    ("Cooking", &["Cooking & Food"]),
    ("Crafts & Hobbies", &["Crafts"]),
    ("Games", &["Games"]),
    ("Drama", &["Drama"]),
    ("Economics", &["Economics"]),
    ("Education", &["Education"]),
    ("Erotica", &["Erotic Literature"]),
    ("Fantasy", &["Fantasy"]),
    ("Folklore", &["Folklore", "Mythology"]),
    ("Foreign Language Study", &["Foreign Language Study"]),
    ("Gardening", &["Gardening"]),
    ("Comics & Graphic Novels", &["Comic and Graphic Books"]),
    ("Health & Diet", &["Health & Fitness"]),
    ("Historical Fiction", &["Historical Fiction", "Antiquarian"]),
    ("History", &["History"]),
    ("Horror", &["Horror"]),
    ("House & Home", &["Home Design & Décor"]),
    ("Humorous Fiction", &["Humor (Fiction)"]),
    ("Humorous Nonfiction", &["Humor (Nonfiction)"]),
    ("Entertainment", &["Entertainment"]),
    ("Judaism", &["Judaica"]),
    ("Law", &["Law"]),
    ("Literary Criticism", &["Literary Criticism", "Criticism", "Language Arts", "Writing"]),
    ("Management & Leadership", &["Management"]),
    ("Mathematics", &["Mathematics"]),
    ("Medical", &["Medical"]),
    ("Military History", &["Military"]),
    ("Music", &["Music", "Songbook"]),
    ("Mystery", &["Mystery"]),
    ("Nature", &["Nature"]),
    ("Body, Mind & Spirit", &["New Age"]),
    ("Parenting & Family", &["Family & Relationships", "Child Development"]),
    ("Performing Arts", &["Performing Arts"]),
    ("Personal Finance & Investing", &["Finance"]),
    ("Pets", &["Pets"]),
    ("Philosophy", &["Philosophy", "Ethics"]),
    ("Photography", &["Photography"]),
    ("Poetry", &["Poetry"]),
    ("Political Science", &["Politics", "Current Events"]),
    ("Psychology", &["Psychology", "Psychiatry", "Psychiatry & Psychology"]),
    ("Reference & Study Aids", &["Reference", "Grammar & Language Usage"]),
    ("Religious Fiction", &["Christian Fiction"]),
    ("Religion & Spirituality", &["Religion & Spirituality"]),
    ("Romance", &["Romance"]),
    ("Science", &["Science", "Physics", "Chemistry", "Biology"]),
    ("Science Fiction", &["Science Fiction"]),
    ("Self-Help", &["Self-Improvement", "Self-Help", "Self Help", "Recovery"]),
    ("Short Stories", &["Literary Anthologies", "Short Stories"]),
    (
        "Social Sciences",
        &["Sociology", "Gender Studies", "Genealogy", "Media Studies", "Social Studies"],
    ),
    ("Sports", &["Sports & Recreations"]),
    ("Study Aids", &["Study Aids & Workbooks", "Text Book"]),
    ("Technology", &["Technology", "Engineering", "Transportation"]),
    ("Suspense/Thriller", &["Suspense", "Thriller"]),
    ("Travel", &["Travel", "Travel Literature", "Outdoor Recreation"]),
    ("True Crime", &["True Crime"]),
    ("Urban Fiction", &["African American Fiction", "Urban Fiction"]),
    ("Westerns", &["Western"]),
    ("Women's Fiction", &["Chick Lit Fiction"]),
];

/// Overdrive's proprietary subject list
///
/// Identifiers are matched case-sensitively, exactly as Overdrive sends them.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverdriveClassifier;

impl SchemeClassifier for OverdriveClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::Overdrive
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        ScrubbedIdentifier::new(identifier.trim())
    }

    fn is_fiction(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        let identifier = identifier?;
        // "Literature" is Overdrive's synonym for fiction; "Literary Criticism" is not.
        if FICTION.contains(&identifier)
            || identifier.contains("Fiction")
            || identifier.contains("Literature")
        {
            return Some(true);
        }
        if NEITHER_FICTION_NOR_NONFICTION.contains(&identifier)
            || VIDEO_GENRES.contains(&identifier)
            || MUSIC_GENRES.contains(&identifier)
        {
            return None;
        }
        Some(false)
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        let identifier = identifier?;
        if ["Juvenile", "Picture Book", "Beginning Reader", "Children's"]
            .iter()
            .any(|marker| identifier.contains(marker))
        {
            Some(Audience::Children)
        } else if identifier.contains("Young Adult") {
            Some(Audience::YoungAdult)
        } else if identifier == "Fiction" || identifier == "Nonfiction" {
            Some(Audience::Adult)
        } else if identifier == "Erotic Literature" {
            Some(Audience::AdultsOnly)
        } else {
            None
        }
    }

    fn target_age(&self, identifier: Option<&str>, _name: Option<&str>) -> AgeRange {
        let Some(identifier) = identifier else {
            return AgeRange::UNKNOWN;
        };
        if identifier.starts_with("Picture Book") {
            range_tuple(Some(0), Some(4))
        } else if identifier.starts_with("Beginning Reader") {
            range_tuple(Some(5), Some(8))
        } else if identifier.contains("Young Adult") {
            // Overdrive's young adult titles skew younger than 14.
            range_tuple(Some(12), Some(17))
        } else {
            AgeRange::UNKNOWN
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
            .find(|(_, subjects)| subjects.contains(&identifier))
            .and_then(|(genre, _)| taxonomy.get(genre))
    }
}
