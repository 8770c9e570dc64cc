//! BISAC subject headings.
//!
//! A BISAC heading is a slash-separated path such as
//! `Fiction / Romance / Historical / General`. The path is split into lowercase
//! tokens and run through one rule table per judgment. A genre heading no rule
//! recognizes falls back to keyword search over the whole path.

use std::sync::LazyLock;
use tracing::warn;

use super::{keyword, ScrubbedIdentifier, SchemeClassifier};
use crate::catalog::bisac::canonical_name;
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{range_tuple, AgeRange, Audience, Scheme};
use crate::rules::{RuleError, RuleOutcome, RuleSet, RuleSpec, RuleToken};

use RuleOutcome::{Stop, Value};
use RuleToken::Literal as L;
use RuleToken::Pattern as RE;
use RuleToken::{Anything as ANY, Fiction as FICTION, Juvenile as JUVENILE, Nonfiction as NONFICTION, YoungAdult as YA};

const FICTION_RULES: &[RuleSpec<bool>] = &[
    (Value(true), &[L("fiction")]),
    (Value(true), &[L("juvenile fiction")]),
    (Value(false), &[L("juvenile nonfiction")]),
    (Value(true), &[L("young adult fiction")]),
    (Value(false), &[L("young adult nonfiction")]),
    (Value(false), &[ANY, L("essays")]),
    (Value(false), &[ANY, L("letters")]),
    (Value(true), &[L("literary collections")]),
    (Stop, &[L("humor")]),
    (Stop, &[L("drama")]),
    (Stop, &[L("poetry")]),
    (Stop, &[L("comics & graphic novels")]),
    (Value(false), &[ANY]),
];

const AUDIENCE_RULES: &[RuleSpec<Audience>] = &[
    (Value(Audience::Children), &[RE("^bibles?$"), ANY, L("children")]),
    (Value(Audience::Children), &[JUVENILE, ANY]),
    (Value(Audience::YoungAdult), &[YA, ANY]),
    (Value(Audience::YoungAdult), &[RE("^bibles?$"), ANY, L("youth & teen")]),
    (Value(Audience::AdultsOnly), &[ANY, L("erotica")]),
    (Value(Audience::AdultsOnly), &[L("humor"), L("topic"), L("adult")]),
    (Value(Audience::Adult), &[ANY]),
];

const TARGET_AGE_RULES: &[RuleSpec<(i32, i32)>] = &[
    (Value((0, 4)), &[JUVENILE, ANY, L("readers"), L("beginner")]),
    (Value((5, 7)), &[JUVENILE, ANY, L("readers"), L("intermediate")]),
    (Value((5, 7)), &[JUVENILE, ANY, L("early readers")]),
    (Value((8, 13)), &[JUVENILE, ANY, L("chapter books")]),
];

const GENRE_RULES: &[RuleSpec<&str>] = &[
    // Fiction: most specific headings first.
    (Value("Epic Fantasy"), &[FICTION, L("fantasy"), L("epic")]),
    (Value("Historical Fantasy"), &[FICTION, L("fantasy"), L("historical")]),
    (Value("Urban Fantasy"), &[FICTION, L("fantasy"), L("urban")]),
    (Value("Fantasy"), &[FICTION, RE("^fantasy")]),
    (Value("Fantasy"), &[FICTION, L("magical realism")]),
    (Value("Ghost Stories"), &[FICTION, L("ghost")]),
    (Value("Ghost Stories"), &[FICTION, L("horror"), L("ghosts")]),
    (Value("Vampires"), &[FICTION, ANY, L("vampires")]),
    (Value("Werewolves"), &[FICTION, ANY, RE("^werewolves")]),
    (Value("Occult Horror"), &[FICTION, ANY, L("occult")]),
    (Value("Gothic Horror"), &[FICTION, L("horror"), L("gothic")]),
    (Value("Horror"), &[FICTION, L("horror")]),
    (Value("Historical Mystery"), &[FICTION, RE("^myster"), L("historical")]),
    (Value("Women Detectives"), &[FICTION, RE("^myster"), L("women sleuths")]),
    (Value("Cozy Mystery"), &[FICTION, RE("^myster"), RE("^cozy")]),
    (Value("Hard-Boiled Mystery"), &[FICTION, RE("^myster"), L("hard-boiled")]),
    (Value("Police Procedural"), &[FICTION, RE("^myster"), L("police procedural")]),
    (Value("Paranormal Mystery"), &[FICTION, RE("^myster"), L("paranormal")]),
    (Value("Crime & Detective Stories"), &[FICTION, RE("^myster"), L("private investigators")]),
    (Value("Mystery"), &[FICTION, RE("^myster")]),
    (Value("Contemporary Romance"), &[FICTION, L("romance"), L("contemporary")]),
    (Value("Historical Romance"), &[FICTION, L("romance"), L("historical")]),
    (Value("Historical Romance"), &[FICTION, L("romance"), L("regency")]),
    (Value("Paranormal Romance"), &[FICTION, L("romance"), L("paranormal")]),
    (Value("Western Romance"), &[FICTION, L("romance"), L("western")]),
    (Value("Romantic Suspense"), &[FICTION, L("romance"), L("suspense")]),
    (Value("Romantic SF"), &[FICTION, L("romance"), L("science fiction")]),
    (Value("Romantic SF"), &[FICTION, L("romance"), L("time travel")]),
    (Value("Romance"), &[FICTION, L("romance")]),
    (Value("Dystopian SF"), &[FICTION, L("dystopian")]),
    (Value("Dystopian SF"), &[FICTION, L("science fiction"), L("apocalyptic & post-apocalyptic")]),
    (Value("Space Opera"), &[FICTION, L("science fiction"), L("space opera")]),
    (Value("Cyberpunk"), &[FICTION, L("science fiction"), L("cyberpunk")]),
    (Value("Military SF"), &[FICTION, L("science fiction"), L("military")]),
    (Value("Steampunk"), &[FICTION, L("science fiction"), L("steampunk")]),
    (Value("Alternative History"), &[FICTION, ANY, L("alternative history")]),
    (Value("Media Tie-in SF"), &[FICTION, L("media tie-in")]),
    (Value("Science Fiction"), &[FICTION, L("science fiction")]),
    (Value("Science Fiction"), &[FICTION, L("time travel")]),
    (Value("Historical Thriller"), &[FICTION, L("thrillers"), L("historical")]),
    (Value("Espionage"), &[FICTION, L("thrillers"), L("espionage")]),
    (Value("Supernatural Thriller"), &[FICTION, L("thrillers"), L("supernatural")]),
    (Value("Medical Thriller"), &[FICTION, L("thrillers"), L("medical")]),
    (Value("Political Thriller"), &[FICTION, L("thrillers"), L("political")]),
    (Value("Psychological Thriller"), &[FICTION, L("thrillers"), L("psychological")]),
    (Value("Technothriller"), &[FICTION, L("thrillers"), L("technological")]),
    (Value("Legal Thriller"), &[FICTION, L("thrillers"), L("legal")]),
    (Value("Military Thriller"), &[FICTION, L("thrillers"), L("military")]),
    (Value("Suspense/Thriller"), &[FICTION, L("thrillers")]),
    (Value("Suspense/Thriller"), &[FICTION, L("suspense")]),
    (Value("Political Thriller"), &[FICTION, L("political")]),
    (Value("Urban Fiction"), &[FICTION, L("african american"), L("urban")]),
    (Value("Urban Fiction"), &[FICTION, L("urban & street lit")]),
    (Value("Adventure"), &[FICTION, RE("^action & adventure")]),
    (Value("Adventure"), &[FICTION, L("sea stories")]),
    (Value("Adventure"), &[FICTION, L("war & military")]),
    (Value("Classics"), &[FICTION, L("classics")]),
    (Value("Folklore"), &[FICTION, L("fairy tales, folk tales, legends & mythology")]),
    (Value("Historical Fiction"), &[FICTION, L("historical")]),
    (Value("Humorous Fiction"), &[FICTION, L("humorous")]),
    (Value("Humorous Fiction"), &[FICTION, L("satire")]),
    (Value("Literary Fiction"), &[FICTION, L("literary")]),
    (Value("LGBTQ Fiction"), &[FICTION, RE("^lgbt")]),
    (Value("Religious Fiction"), &[FICTION, RE("^christian")]),
    (Value("Religious Fiction"), &[FICTION, L("religious")]),
    (Value("Religious Fiction"), &[FICTION, L("jewish")]),
    (Value("Religious Fiction"), &[FICTION, L("visionary & metaphysical")]),
    (Value("Women's Fiction"), &[FICTION, L("women")]),
    (Value("Women's Fiction"), &[FICTION, L("contemporary women")]),
    (Value("Westerns"), &[FICTION, L("westerns")]),
    (Value("Short Stories"), &[FICTION, RE("^short stories")]),
    (Value("Short Stories"), &[FICTION, L("anthologies")]),
    (Value("Erotica"), &[FICTION, L("erotica")]),
    (Value("Comics & Graphic Novels"), &[FICTION, L("comics & graphic novels")]),
    (Value("Comics & Graphic Novels"), &[L("comics & graphic novels")]),
    (Value("Drama"), &[L("drama")]),
    (Value("Poetry"), &[L("poetry")]),
    // Nonfiction.
    (Value("Antiques & Collectibles"), &[NONFICTION, L("antiques & collectibles")]),
    (Value("Architecture"), &[NONFICTION, L("architecture")]),
    (Value("Art History"), &[NONFICTION, L("art"), L("history")]),
    (Value("Art Criticism & Theory"), &[NONFICTION, L("art"), L("criticism & theory")]),
    (Value("Art"), &[NONFICTION, L("art")]),
    (Value("Bible Studies"), &[NONFICTION, L("religion"), L("biblical studies")]),
    (Value("Bible Studies"), &[NONFICTION, RE("^bibles?$")]),
    (Value("Buddhism"), &[NONFICTION, L("religion"), L("buddhism")]),
    (Value("Catholicism"), &[NONFICTION, L("religion"), RE("^christianity"), L("catholic")]),
    (Value("Christianity"), &[NONFICTION, L("religion"), RE("^christian")]),
    (Value("Hinduism"), &[NONFICTION, L("religion"), L("hinduism")]),
    (Value("Islam"), &[NONFICTION, L("religion"), L("islam")]),
    (Value("Judaism"), &[NONFICTION, L("religion"), L("judaism")]),
    (Value("Religion & Spirituality"), &[NONFICTION, L("religion")]),
    (Value("Body, Mind & Spirit"), &[NONFICTION, L("body, mind & spirit")]),
    (Value("Biography & Memoir"), &[NONFICTION, L("biography & autobiography")]),
    (Value("Personal Finance & Investing"), &[NONFICTION, L("business & economics"), L("personal finance")]),
    (Value("Personal Finance & Investing"), &[NONFICTION, L("business & economics"), L("investments & securities")]),
    (Value("Real Estate"), &[NONFICTION, L("business & economics"), L("real estate")]),
    (Value("Management & Leadership"), &[NONFICTION, L("business & economics"), RE("^(management|leadership)")]),
    (Value("Economics"), &[NONFICTION, L("business & economics"), RE("^economics")]),
    (Value("Business"), &[NONFICTION, L("business & economics")]),
    (Value("Computers"), &[NONFICTION, L("computers")]),
    (Value("Vegetarian & Vegan"), &[NONFICTION, L("cooking"), RE("^(vegetarian|vegan)")]),
    (Value("Bartending & Cocktails"), &[NONFICTION, L("cooking"), L("beverages")]),
    (Value("Cooking"), &[NONFICTION, L("cooking")]),
    (Value("Crafts & Hobbies"), &[NONFICTION, L("crafts & hobbies")]),
    (Value("Education"), &[NONFICTION, L("education")]),
    (Value("Parenting"), &[NONFICTION, L("family & relationships"), L("parenting")]),
    (Value("Family & Relationships"), &[NONFICTION, L("family & relationships")]),
    (Value("Foreign Language Study"), &[NONFICTION, L("foreign language study")]),
    (Value("Games"), &[NONFICTION, RE("^games")]),
    (Value("Gardening"), &[NONFICTION, L("gardening")]),
    (Value("Health & Diet"), &[NONFICTION, L("health & fitness")]),
    (Value("African History"), &[NONFICTION, L("history"), L("africa")]),
    (Value("Ancient History"), &[NONFICTION, L("history"), L("ancient")]),
    (Value("Asian History"), &[NONFICTION, L("history"), L("asia")]),
    (Value("European History"), &[NONFICTION, L("history"), L("europe")]),
    (Value("Latin American History"), &[NONFICTION, L("history"), L("latin america")]),
    (Value("Medieval History"), &[NONFICTION, L("history"), L("medieval")]),
    (Value("Middle East History"), &[NONFICTION, L("history"), L("middle east")]),
    (Value("Military History"), &[NONFICTION, L("history"), L("military")]),
    (Value("Renaissance & Early Modern History"), &[NONFICTION, L("history"), L("renaissance")]),
    (Value("Modern History"), &[NONFICTION, L("history"), L("modern")]),
    (Value("Civil War History"), &[NONFICTION, L("history"), L("united states"), ANY, L("civil war period (1850-1877)")]),
    (Value("United States History"), &[NONFICTION, L("history"), L("united states")]),
    (Value("World History"), &[NONFICTION, L("history"), L("world")]),
    (Value("History"), &[NONFICTION, L("history")]),
    (Value("House & Home"), &[NONFICTION, L("house & home")]),
    (Value("Humorous Nonfiction"), &[NONFICTION, L("humor")]),
    (Value("Reference & Study Aids"), &[NONFICTION, L("language arts & disciplines")]),
    (Value("Law"), &[NONFICTION, L("law")]),
    (Value("Literary Criticism"), &[NONFICTION, L("literary criticism")]),
    (Value("Mathematics"), &[NONFICTION, L("mathematics")]),
    (Value("Medical"), &[NONFICTION, L("medical")]),
    (Value("Music"), &[NONFICTION, L("music")]),
    (Value("Nature"), &[NONFICTION, L("nature")]),
    (Value("Film & TV"), &[NONFICTION, L("performing arts"), RE("^(film|television)")]),
    (Value("Performing Arts"), &[NONFICTION, L("performing arts")]),
    (Value("Pets"), &[NONFICTION, L("pets")]),
    (Value("Philosophy"), &[NONFICTION, L("philosophy")]),
    (Value("Photography"), &[NONFICTION, L("photography")]),
    (Value("Political Science"), &[NONFICTION, L("political science")]),
    (Value("Psychology"), &[NONFICTION, L("psychology")]),
    (Value("Dictionaries"), &[NONFICTION, L("reference"), L("dictionaries")]),
    (Value("Reference & Study Aids"), &[NONFICTION, L("reference")]),
    (Value("Study Aids"), &[NONFICTION, L("study aids")]),
    (Value("Science"), &[NONFICTION, RE("^science")]),
    (Value("Self-Help"), &[NONFICTION, L("self-help")]),
    (Value("Social Sciences"), &[NONFICTION, L("social science")]),
    (Value("Sports"), &[NONFICTION, L("sports & recreation")]),
    (Value("Technology"), &[NONFICTION, L("technology & engineering")]),
    (Value("Travel"), &[NONFICTION, L("travel")]),
    (Value("True Crime"), &[NONFICTION, L("true crime")]),
];

static FICTION_RULESET: LazyLock<Result<RuleSet<bool>, RuleError>> =
    LazyLock::new(|| compile_logged("fiction", FICTION_RULES));
static AUDIENCE_RULESET: LazyLock<Result<RuleSet<Audience>, RuleError>> =
    LazyLock::new(|| compile_logged("audience", AUDIENCE_RULES));
static TARGET_AGE_RULESET: LazyLock<Result<RuleSet<(i32, i32)>, RuleError>> =
    LazyLock::new(|| compile_logged("target age", TARGET_AGE_RULES));
static GENRE_RULESET: LazyLock<Result<RuleSet<&'static str>, RuleError>> =
    LazyLock::new(|| compile_logged("genre", GENRE_RULES));

fn compile_logged<T: Copy>(table: &str, rules: &[RuleSpec<T>]) -> Result<RuleSet<T>, RuleError> {
    RuleSet::compile(rules).inspect_err(|e| warn!("BISAC {table} rules failed to compile: {e}"))
}

/// Split a scrubbed heading into its path components
#[must_use]
pub fn tokens(name: &str) -> Vec<&str> {
    name.split('/')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// BISAC subject headings, by code or by name
#[derive(Debug, Clone, Copy, Default)]
pub struct BisacClassifier;

impl SchemeClassifier for BisacClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::Bisac
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        let code = identifier.trim().to_uppercase();
        let code = code.strip_prefix("FB").unwrap_or(&code).to_string();
        match canonical_name(&code) {
            // A known code overrides whatever name the source sent along.
            Some(name) => ScrubbedIdentifier::with_name(code, name),
            None => ScrubbedIdentifier::new(code),
        }
    }

    fn scrub_name(&self, name: &str) -> String {
        let mut name = name.to_lowercase().replace("  ", ", ");
        name = name
            .trim()
            .trim_start_matches(['\'', '"'])
            .trim_end_matches(['\'', '"'])
            .to_string();
        // Trailing marker characters copied from listings.
        name = name.trim_end_matches(['|', '/', '*']).to_string();
        name.replace('|', "/")
            .split('/')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" / ")
    }

    fn is_fiction(&self, _identifier: Option<&str>, name: Option<&str>) -> Option<bool> {
        let rules = FICTION_RULESET.as_ref().ok()?;
        rules.value(&tokens(name?)).copied()
    }

    fn audience(&self, _identifier: Option<&str>, name: Option<&str>) -> Option<Audience> {
        let rules = AUDIENCE_RULESET.as_ref().ok()?;
        rules.value(&tokens(name?)).copied()
    }

    fn target_age(&self, _identifier: Option<&str>, name: Option<&str>) -> AgeRange {
        let Some(name) = name else {
            return AgeRange::UNKNOWN;
        };
        TARGET_AGE_RULESET
            .as_ref()
            .ok()
            .and_then(|rules| rules.value(&tokens(name)))
            .map_or(AgeRange::UNKNOWN, |&(lower, upper)| {
                range_tuple(Some(lower), Some(upper))
            })
    }

    fn genre(
        &self,
        taxonomy: &GenreTaxonomy,
        _identifier: Option<&str>,
        name: Option<&str>,
        fiction: Option<bool>,
        audience: Option<Audience>,
    ) -> Option<GenreId> {
        let name = name?;
        let parts = tokens(name);
        let rules = GENRE_RULESET.as_ref().ok()?;
        match rules.first_match(&parts) {
            Some(RuleOutcome::Value(genre)) => taxonomy.get(genre),
            Some(RuleOutcome::Stop) => None,
            None => keyword::genre_for_text(taxonomy, &parts.join("/"), fiction, audience),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(identifier: Option<&str>, name: Option<&str>) -> (Option<String>, Option<Audience>, AgeRange, Option<bool>) {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let judgment = BisacClassifier.classify(&taxonomy, identifier, name);
        (
            judgment.genre.map(|g| taxonomy.name(g).to_string()),
            judgment.audience,
            judgment.target_age,
            judgment.fiction,
        )
    }

    fn genre_is(name: &str, expected: Option<&str>) {
        let (genre, ..) = classify(None, Some(name));
        assert_eq!(genre.as_deref(), expected, "genre of {name}");
    }

    #[test]
    fn test_rule_tables_compile() {
        assert!(FICTION_RULESET.is_ok());
        assert!(AUDIENCE_RULESET.is_ok());
        assert!(TARGET_AGE_RULESET.is_ok());
        assert!(GENRE_RULESET.is_ok());
    }

    #[test]
    fn test_scrub_name() {
        let scrub = |n: &str| BisacClassifier.scrub_name(n);
        assert_eq!(scrub("Fiction / Science Fiction / General"), "fiction / science fiction / general");
        assert_eq!(scrub("\"FICTION|Mystery & Detective|General*\""), "fiction / mystery & detective / general");
        assert_eq!(scrub("Fiction / Fairy Tales  Folk Tales"), "fiction / fairy tales, folk tales");
        assert_eq!(scrub("Cooking/"), "cooking");
    }

    #[test]
    fn test_known_code_overrides_name() {
        let scrubbed = BisacClassifier.scrub_identifier("FBFIC028000");
        assert_eq!(scrubbed.identifier, "FIC028000");
        assert_eq!(scrubbed.name.as_deref(), Some("Fiction / Science Fiction / General"));

        let (genre, audience, _, fiction) = classify(Some("FIC028000"), Some("Cooking"));
        assert_eq!(genre.as_deref(), Some("Science Fiction"));
        assert_eq!(audience, Some(Audience::Adult));
        assert_eq!(fiction, Some(true));
    }

    #[test]
    fn test_genre_urban() {
        genre_is("Fiction / African American / Urban", Some("Urban Fiction"));
        genre_is("Fiction / Urban", None);
        genre_is("Fiction / Fantasy / Urban", Some("Urban Fantasy"));
    }

    #[test]
    fn test_genre_rules() {
        genre_is("Fiction / Romance / Historical / Regency", Some("Historical Romance"));
        genre_is("Fiction / Romance / General", Some("Romance"));
        genre_is("Fiction / Historical / General", Some("Historical Fiction"));
        genre_is("Young Adult Fiction / Fantasy / General", Some("Fantasy"));
        genre_is("Juvenile Fiction / Mysteries & Detective Stories", Some("Mystery"));
        genre_is("Fiction / Mystery & Detective / Women Sleuths", Some("Women Detectives"));
        genre_is("Fiction / Thrillers / Technological", Some("Technothriller"));
        genre_is("Fiction / LGBTQ+ / General", Some("LGBTQ Fiction"));
        genre_is("History / Europe / General", Some("European History"));
        genre_is("History / General", Some("History"));
        genre_is("Juvenile Nonfiction / History / General", Some("History"));
        genre_is("Young Adult Nonfiction / Biography & Autobiography / General", Some("Biography & Memoir"));
        genre_is("Religion / Christianity / Catholic", Some("Catholicism"));
        genre_is("Cooking / Vegetarian", Some("Vegetarian & Vegan"));
        genre_is("Comics & Graphic Novels / Manga / General", Some("Comics & Graphic Novels"));
    }

    #[test]
    fn test_fiction_history_is_not_nonfiction_history() {
        // The leading nonfiction token refuses fiction paths.
        genre_is("Juvenile Fiction / History / General", None);
    }

    #[test]
    fn test_is_fiction() {
        let fiction = |name: &str| classify(None, Some(name)).3;
        assert_eq!(fiction("Fiction / Westerns"), Some(true));
        assert_eq!(fiction("Juvenile Nonfiction / Science & Nature / General"), Some(false));
        assert_eq!(fiction("Literary Collections / Essays"), Some(false));
        assert_eq!(fiction("Literary Collections / General"), Some(true));
        assert_eq!(fiction("Poetry / American / General"), None);
        assert_eq!(fiction("Drama / General"), None);
        assert_eq!(fiction("Cooking / General"), Some(false));
    }

    #[test]
    fn test_audience() {
        let audience = |name: &str| classify(None, Some(name)).1;
        assert_eq!(audience("Juvenile Fiction / General"), Some(Audience::Children));
        assert_eq!(audience("Young Adult Nonfiction / General"), Some(Audience::YoungAdult));
        assert_eq!(audience("Bibles / King James / Children"), Some(Audience::Children));
        assert_eq!(audience("Bibles / New International / Youth & Teen"), Some(Audience::YoungAdult));
        assert_eq!(audience("Fiction / Erotica / General"), Some(Audience::AdultsOnly));
        assert_eq!(audience("Humor / Topic / Adult"), Some(Audience::AdultsOnly));
        assert_eq!(audience("Cooking / General"), Some(Audience::Adult));
    }

    #[test]
    fn test_target_age() {
        let age = |name: &str| classify(None, Some(name)).2;
        assert_eq!(age("Juvenile Fiction / Readers / Beginner"), range_tuple(Some(0), Some(4)));
        assert_eq!(age("Juvenile Fiction / Readers / Intermediate"), range_tuple(Some(5), Some(7)));
        assert_eq!(age("Juvenile Fiction / Readers / Chapter Books"), range_tuple(Some(8), Some(13)));
        // No specific age: the audience default applies.
        assert_eq!(age("Young Adult Fiction / General"), range_tuple(Some(14), Some(17)));
        assert!(age("Juvenile Fiction / General").is_unknown());
    }
}
