//! Free-text age and grade parsing.
//!
//! Age and grade strings arrive in every shape imaginable: "ages 3-5",
//! "9 and up", "Grades K-3", "baby-2 years". Patterns are tried in order and
//! the first one that matches decides. Strict mode only accepts text that says
//! what is being measured; loose mode also accepts bare ranges like "5-8".

use regex::Regex;
use std::sync::LazyLock;

use super::{compile_patterns, SchemeClassifier};
use crate::core::types::{and_up, default_audience_for_target_age, range_tuple, AgeRange, Audience, Scheme};

/// Largest number we believe is an age rather than, say, a Dewey number
const MAX_PLAUSIBLE_AGE: i32 = 99;

static BABY_PATTERN: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_patterns(&[r"^baby ?- ?([0-9]+) years?"]));

static AGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_patterns(&[
        r"ages? ?:? ?([0-9]+) ?(?:-|to) ?([0-9]+)",
        r"([0-9]+) ?(?:-|to) ?([0-9]+) years?",
        r"([0-9]+) years? and up",
        r"ages? ?:? ?([0-9]+) ?(?:and up|\+)",
        r"([0-9]+) and up",
        r"([0-9]+) years?",
        r"ages? ?:? ?([0-9]+)",
    ])
});

static GENERIC_AGE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_patterns(&[r"([0-9]+) ?- ?([0-9]+)", r"([0-9]+) ?\+"]));

static GRADE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_patterns(&[
        r"grades? ?:? ?([kp0-9]+) ?(?:-|to) ?([kp0-9]+)",
        r"grades? ?:? ?([kp0-9]+)",
        r"\bgr\.? ?([kp0-9]+) ?(?:-|to) ?([kp0-9]+)",
        r"\bgr\.? ?([kp0-9]+)\b",
        r"([0-9]+)(?:st|nd|rd|th) grade",
        r"([a-z-]+) grade",
        r"\b(kindergarten|preschool|pre-school)\b",
    ])
});

static GENERIC_GRADE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_patterns(&[r"([kp0-9]+) ?- ?([kp0-9]+)"]));

/// Age at which an American child starts a grade
#[must_use]
pub fn grade_to_age(grade: &str) -> Option<i32> {
    let age = match grade {
        "preschool" | "pre-school" | "p" => 3,
        "pk" => 4,
        "kindergarten" | "k" | "0" => 5,
        "first" | "1" => 6,
        "second" | "2" => 7,
        "third" | "3" => 8,
        "fourth" | "4" => 9,
        "fifth" | "5" => 10,
        "sixth" | "6" => 11,
        "seventh" | "7" => 12,
        "eighth" | "8" => 13,
        "ninth" | "9" => 14,
        "tenth" | "10" => 15,
        "eleventh" | "11" => 16,
        "twelfth" | "12" => 17,
        _ => return None,
    };
    Some(age)
}

fn plausible_age(value: Option<&regex::Match<'_>>) -> Option<i32> {
    value
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .filter(|&age| (0..=MAX_PLAUSIBLE_AGE).contains(&age))
}

/// Parse an age range out of free text
///
/// Returns `None` when nothing in the text looks like an age.
#[must_use]
pub fn parse_age_range(text: &str, require_explicit_marker: bool) -> Option<AgeRange> {
    let text = text.trim().to_lowercase();

    if let Some(caps) = BABY_PATTERN.iter().find_map(|re| re.captures(&text)) {
        return Some(range_tuple(Some(0), plausible_age(caps.get(1).as_ref())));
    }

    let generic: &[Regex] = if require_explicit_marker {
        &[]
    } else {
        GENERIC_AGE_PATTERNS.as_slice()
    };
    let candidates = AGE_PATTERNS
        .iter()
        .map(|re| (re, false))
        .chain(generic.iter().map(|re| (re, true)));

    for (re, is_generic) in candidates {
        let Some(caps) = re.captures(&text) else {
            continue;
        };
        let young = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok());
        let old = if caps.len() > 2 {
            caps.get(2).and_then(|m| m.as_str().parse::<i32>().ok())
        } else {
            and_up(young, &text)
        };
        if old.is_none() && is_generic {
            // A lone number is not an age range.
            continue;
        }
        let young = young.filter(|&y| (0..=MAX_PLAUSIBLE_AGE).contains(&y));
        let old = old.filter(|&o| (0..=MAX_PLAUSIBLE_AGE).contains(&o));
        return Some(range_tuple(young, old));
    }
    None
}

/// Parse a grade range out of free text and convert it to ages
#[must_use]
pub fn parse_grade_range(text: &str, require_explicit_marker: bool) -> Option<AgeRange> {
    let text = text.trim().to_lowercase();
    if text.contains("education") || text.contains("grader") {
        // A book about teaching fifth grade, or about fifth graders.
        return None;
    }

    let generic: &[Regex] = if require_explicit_marker {
        &[]
    } else {
        GENERIC_GRADE_PATTERNS.as_slice()
    };
    for re in GRADE_PATTERNS.iter().chain(generic.iter()) {
        let Some(caps) = re.captures(&text) else {
            continue;
        };
        let grade = |index: usize| {
            caps.get(index).and_then(|m| {
                let label = m.as_str();
                let trimmed = label.trim_start_matches('0');
                grade_to_age(if trimmed.is_empty() { label } else { trimmed })
            })
        };
        let mut young = grade(1);
        let mut old = grade(2);
        if young.is_none() && old.is_none() {
            // Looked like a grade but isn't one we know; a later pattern may do better.
            continue;
        }
        if old.is_none() {
            old = and_up(young, &text).or(young);
        }
        if young.is_none() {
            young = old;
        }
        return Some(range_tuple(young, old));
    }
    None
}

/// Strict age first, then strict grade
///
/// A bare "9-12" could be either, so it yields nothing.
#[must_use]
pub fn parse_age_or_grade(text: &str) -> Option<AgeRange> {
    parse_age_range(text, true)
        .filter(|range| !range.is_unknown())
        .or_else(|| parse_grade_range(text, true))
}

/// Apply a parser to the identifier, then the name
fn first_range(
    identifier: Option<&str>,
    name: Option<&str>,
    parse: impl Fn(&str) -> Option<AgeRange>,
) -> AgeRange {
    identifier
        .into_iter()
        .chain(name)
        .find_map(parse)
        .unwrap_or(AgeRange::UNKNOWN)
}

/// Target age from an identifier or name that may hold an age or a grade
#[must_use]
pub fn age_or_grade_target_age(identifier: Option<&str>, name: Option<&str>) -> AgeRange {
    first_range(identifier, name, parse_age_or_grade)
}

/// Ages such as "9-12", "ages 3 to 5" or "baby-2 years"
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeClassifier;

impl SchemeClassifier for AgeClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::AgeRange
    }

    fn audience(&self, identifier: Option<&str>, name: Option<&str>) -> Option<Audience> {
        default_audience_for_target_age(self.target_age(identifier, name))
    }

    fn target_age(&self, identifier: Option<&str>, name: Option<&str>) -> AgeRange {
        first_range(identifier, name, |text| parse_age_range(text, false))
    }
}

/// US grade levels such as "grades 3-5", "K-3" or "fifth grade"
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeLevelClassifier;

impl SchemeClassifier for GradeLevelClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::GradeLevel
    }

    fn audience(&self, identifier: Option<&str>, name: Option<&str>) -> Option<Audience> {
        default_audience_for_target_age(self.target_age(identifier, name))
    }

    fn target_age(&self, identifier: Option<&str>, name: Option<&str>) -> AgeRange {
        first_range(identifier, name, |text| parse_grade_range(text, false))
    }
}

/// Interest levels: lower grades, middle grades, upper grades
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestLevelClassifier;

impl SchemeClassifier for InterestLevelClassifier {
    fn scheme(&self) -> Scheme {
        Scheme::InterestLevel
    }

    fn audience(&self, identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        match identifier? {
            "lg" | "mg" | "mg+" => Some(Audience::Children),
            "ug" => Some(Audience::YoungAdult),
            _ => None,
        }
    }

    fn target_age(&self, identifier: Option<&str>, _name: Option<&str>) -> AgeRange {
        match identifier {
            Some("lg") => range_tuple(Some(5), Some(8)),
            Some("mg" | "mg+") => range_tuple(Some(9), Some(13)),
            Some("ug") => range_tuple(Some(14), Some(17)),
            _ => AgeRange::UNKNOWN,
        }
    }
}
