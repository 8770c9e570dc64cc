use std::ops::RangeInclusive;

use super::{ScrubbedIdentifier, SchemeClassifier};
use crate::catalog::taxonomy::{GenreId, GenreTaxonomy};
use crate::core::types::{Audience, Scheme};

/// Literature classes that hold fiction (American, English, German, ... fiction)
const FICTION_CLASSES: &[u16] = &[813, 823, 833, 843, 853, 863, 873, 883];

/// Letter codes libraries use alongside Dewey numbers
const FICTION_CODES: &[&str] = &["FIC", "E", "F"];

/// Canonical names for letter codes and the main classes
const NAMES: &[(&str, &str)] = &[
    ("B", "Biography"),
    ("E", "Juvenile Fiction"),
    ("F", "Fiction"),
    ("FIC", "Juvenile Fiction"),
    ("J", "Juvenile Nonfiction"),
    ("Y", "Young Adult"),
    ("JB", "Juvenile Biography"),
    ("JFIC", "Juvenile Fiction"),
    ("YB", "Young Adult Biography"),
    ("YFIC", "Young Adult Fiction"),
    ("0", "Computer science, information & general works"),
    ("100", "Philosophy & psychology"),
    ("200", "Religion"),
    ("300", "Social sciences"),
    ("400", "Language"),
    ("500", "Science"),
    ("600", "Technology"),
    ("700", "Arts & recreation"),
    ("800", "Literature"),
    ("900", "History & geography"),
];

/// Dewey ranges per genre; earlier entries win where ranges overlap
const GENRES: &[(&str, &[RangeInclusive<u16>])] = &[
    (
        "Periodicals",
        &[50..=59, 105..=105, 405..=405, 505..=505, 605..=605, 705..=705, 805..=805, 905..=905],
    ),
    (
        "Reference & Study Aids",
        &[
            10..=19,
            30..=39,
            103..=103,
            203..=203,
            303..=303,
            403..=403,
            503..=503,
            603..=603,
            703..=703,
            803..=803,
            903..=903,
            410..=429,
        ],
    ),
    ("Education", &[370..=379, 707..=707]),
    ("African History", &[960..=969]),
    ("Architecture", &[710..=729]),
    ("Art Criticism & Theory", &[701..=701]),
    ("Art History", &[709..=709]),
    ("Art", &[700..=709, 730..=769, 774..=774, 776..=776]),
    ("Photography", &[771..=773, 775..=775, 778..=779]),
    ("Biography & Memoir", &[920..=920]),
    ("Economics", &[330..=339]),
    ("Christianity", &[220..=289]),
    ("Cooking", &[640..=641]),
    ("Performing Arts", &[790..=792]),
    ("Games", &[793..=795]),
    (
        "Drama",
        &[812..=812, 822..=822, 832..=832, 842..=842, 852..=852, 862..=862, 872..=872, 882..=882],
    ),
    ("European History", &[940..=949]),
    ("Folklore", &[398..=398]),
    ("History", &[900..=900]),
    ("Islam", &[297..=297]),
    ("Judaism", &[296..=296]),
    ("Latin American History", &[981..=989]),
    ("Law", &[340..=349, 364..=364]),
    ("Management & Leadership", &[658..=658]),
    ("Mathematics", &[510..=519]),
    ("Medical", &[610..=619]),
    ("Military History", &[355..=359]),
    ("Music", &[780..=788]),
    ("Philosophy", &[160..=199]),
    (
        "Poetry",
        &[
            811..=811,
            821..=821,
            831..=831,
            841..=841,
            851..=851,
            861..=861,
            871..=871,
            874..=874,
            881..=881,
            884..=884,
        ],
    ),
    ("Political Science", &[320..=329, 351..=354]),
    ("Psychology", &[150..=159]),
    ("Foreign Language Study", &[430..=499]),
    (
        "Religion & Spirituality",
        &[200..=219, 290..=290, 292..=295, 299..=299],
    ),
    ("Science", &[500..=502, 506..=509, 520..=599]),
    (
        "Social Sciences",
        &[300..=309, 360..=363, 390..=397, 399..=399],
    ),
    ("Sports", &[796..=799]),
    (
        "Technology",
        &[600..=602, 604..=604, 606..=609, 620..=639, 660..=679, 681..=699],
    ),
    ("Travel", &[910..=919]),
    ("United States History", &[973..=979]),
    ("World History", &[909..=909]),
];

/// Dewey Decimal Classification
#[derive(Debug, Clone, Copy, Default)]
pub struct DeweyClassifier;

impl DeweyClassifier {
    fn class_number(identifier: &str) -> Option<u16> {
        identifier.parse().ok()
    }

    /// Drop the J/Y prefix libraries put on juvenile and YA call numbers
    fn without_age_prefix(identifier: &str) -> &str {
        identifier
            .strip_prefix('J')
            .or_else(|| identifier.strip_prefix('Y'))
            .unwrap_or(identifier)
    }
}

impl SchemeClassifier for DeweyClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::Ddc
    }

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        let mut id = identifier.trim().to_uppercase();
        if id.starts_with('[') && id.ends_with(']') && id.len() >= 2 {
            id = id[1..id.len() - 1].to_string();
        }
        // Canadian and Australian numbers carry a one-letter prefix, New Zealand two.
        if let Some(rest) = id.strip_prefix("NZ") {
            id = rest.to_string();
        } else if let Some(rest) = id.strip_prefix('C').or_else(|| id.strip_prefix('A')) {
            id = rest.to_string();
        }
        // Only the part before the decimal point is used.
        if let Some((whole, _)) = id.split_once('.') {
            id = whole.to_string();
        }
        if let Some(number) = Self::class_number(&id) {
            id = number.to_string();
        }

        match NAMES.iter().find(|(code, _)| *code == id) {
            Some((_, name)) => ScrubbedIdentifier::with_name(id, *name),
            None => ScrubbedIdentifier::new(id),
        }
    }

    fn is_fiction(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        let identifier = identifier?;
        if identifier == "Y" {
            // Used for both young adult fiction and nonfiction.
            return None;
        }
        let identifier = Self::without_age_prefix(identifier);
        if FICTION_CODES.contains(&identifier) {
            return Some(true);
        }
        let fiction = Self::class_number(identifier).is_some_and(|n| FICTION_CLASSES.contains(&n));
        Some(fiction)
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        let identifier = identifier?;
        let audience = if identifier == "E" || identifier == "FIC" || identifier.starts_with('J') {
            Audience::Children
        } else if identifier.starts_with('Y') {
            Audience::YoungAdult
        } else {
            Audience::Adult
        };
        Some(audience)
    }

    fn genre(
        &self,
        taxonomy: &GenreTaxonomy,
        identifier: Option<&str>,
        _name: Option<&str>,
        _fiction: Option<bool>,
        _audience: Option<Audience>,
    ) -> Option<GenreId> {
        let identifier = Self::without_age_prefix(identifier?);
        if identifier == "B" {
            return taxonomy.get("Biography & Memoir");
        }
        let number = Self::class_number(identifier)?;
        GENRES
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|range| range.contains(&number)))
            .and_then(|(genre, _)| taxonomy.get(genre))
    }
}
