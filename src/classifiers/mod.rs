//! Per-scheme subject classifiers.
//!
//! Every classification scheme gets one [`SchemeClassifier`] implementation.
//! A classifier turns a raw `(identifier, name)` pair into four judgments:
//! fiction status, audience, target age and genre. The [`ClassifierRegistry`]
//! maps each [`Scheme`] to its classifier and caches the judgments on
//! [`Subject`] records.
//!
//! | Scheme | Classifier |
//! |--------|------------|
//! | DDC | [`ddc::DeweyClassifier`] |
//! | LCC | [`lcc::LcClassifier`] |
//! | BISAC | [`bisac::BisacClassifier`] |
//! | LCSH, FAST, tag | [`keyword::KeywordClassifier`] |
//! | Overdrive | [`overdrive::OverdriveClassifier`] |
//! | RBdigital | [`rbdigital::RbDigitalClassifier`], [`rbdigital::RbDigitalAudienceClassifier`] |
//! | Axis 360 audience | [`axis360::Axis360AudienceClassifier`] |
//! | Age range, grade level, interest level | [`age`] |
//! | Freeform audience | [`freeform::FreeformAudienceClassifier`] |
//! | Staff genre and fiction status | [`simplified`] |
//! | Gutenberg bookshelf | [`gutenberg::GutenbergBookshelfClassifier`] |
//!
//! ## Example
//!
//! ```rust,no_run
//! use work_classifier::{ClassifierRegistry, GenreTaxonomy, Scheme};
//!
//! let taxonomy = GenreTaxonomy::load_embedded().unwrap();
//! let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
//!
//! let judgment = registry.classify_raw(Scheme::Bisac, Some("FIC028000"), None);
//! println!("{:?} {:?}", judgment.fiction, judgment.genre.map(|g| taxonomy.name(g)));
//! ```

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::taxonomy::{names, GenreId, GenreTaxonomy};
use crate::core::subject::Subject;
use crate::core::types::{
    default_audience_for_target_age, default_target_age_for_audience, AgeRange, Audience, Scheme,
};

pub mod age;
pub mod axis360;
pub mod bisac;
pub mod ddc;
pub mod freeform;
pub mod gutenberg;
pub mod keyword;
pub mod lcc;
pub mod overdrive;
pub mod rbdigital;
pub mod simplified;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("A classifier is already registered for scheme {0}")]
    DuplicateScheme(Scheme),
}

/// A scrubbed identifier, possibly carrying a canonical name that overrides the source's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubbedIdentifier {
    pub identifier: String,
    pub name: Option<String>,
}

impl ScrubbedIdentifier {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: Some(name.into()),
        }
    }
}

/// The four judgments a classifier makes about one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Judgment {
    pub genre: Option<GenreId>,
    pub audience: Option<Audience>,
    pub target_age: AgeRange,
    pub fiction: Option<bool>,
}

/// Lowercase, trim and drop one trailing period
#[must_use]
pub fn lowercased(value: &str) -> String {
    let lower = value.trim().to_lowercase();
    match lower.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Compile case-insensitive patterns; a pattern that fails to compile matches nothing
pub(crate) fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| match RegexBuilder::new(p).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Skipping pattern {p:?}: {e}");
                None
            }
        })
        .collect()
}

/// Classification logic for one scheme
///
/// Identifiers and names reach the judgment methods already scrubbed.
pub trait SchemeClassifier: Send + Sync {
    fn scheme(&self) -> Scheme;

    fn scrub_identifier(&self, identifier: &str) -> ScrubbedIdentifier {
        ScrubbedIdentifier::new(lowercased(identifier))
    }

    fn scrub_name(&self, name: &str) -> String {
        lowercased(name)
    }

    fn is_fiction(&self, _identifier: Option<&str>, _name: Option<&str>) -> Option<bool> {
        None
    }

    fn audience(&self, _identifier: Option<&str>, _name: Option<&str>) -> Option<Audience> {
        None
    }

    fn target_age(&self, _identifier: Option<&str>, _name: Option<&str>) -> AgeRange {
        AgeRange::UNKNOWN
    }

    fn genre(
        &self,
        _taxonomy: &GenreTaxonomy,
        _identifier: Option<&str>,
        _name: Option<&str>,
        _fiction: Option<bool>,
        _audience: Option<Audience>,
    ) -> Option<GenreId> {
        None
    }

    /// A children's signal from this scheme may equally mean young adult
    fn juvenile_is_generic(&self) -> bool {
        false
    }

    /// Scrub the raw values and make all four judgments
    fn classify(
        &self,
        taxonomy: &GenreTaxonomy,
        identifier: Option<&str>,
        name: Option<&str>,
    ) -> Judgment {
        let scrubbed = identifier.map(|i| self.scrub_identifier(i));
        let (identifier, name) = match scrubbed {
            Some(ScrubbedIdentifier {
                identifier,
                name: Some(forced),
            }) => (Some(identifier), Some(self.scrub_name(&forced))),
            Some(ScrubbedIdentifier { identifier, name: None }) => {
                (Some(identifier), name.map(|n| self.scrub_name(n)))
            }
            None => (None, name.map(|n| self.scrub_name(n))),
        };
        let identifier = identifier.as_deref();
        let name = name.as_deref();

        let fiction = self.is_fiction(identifier, name);
        let audience = self.audience(identifier, name);
        let mut target_age = self.target_age(identifier, name);
        if target_age.is_unknown() {
            target_age = default_target_age_for_audience(audience);
        }
        let genre = self.genre(taxonomy, identifier, name, fiction, audience);

        Judgment {
            genre,
            audience,
            target_age,
            fiction,
        }
    }
}

/// Scheme to classifier lookup, built once and shared by reference
pub struct ClassifierRegistry<'a> {
    taxonomy: &'a GenreTaxonomy,
    classifiers: HashMap<Scheme, Box<dyn SchemeClassifier>>,
}

impl<'a> ClassifierRegistry<'a> {
    /// Create an empty registry
    #[must_use]
    pub fn new(taxonomy: &'a GenreTaxonomy) -> Self {
        Self {
            taxonomy,
            classifiers: HashMap::new(),
        }
    }

    /// Create a registry with a classifier for every supported scheme
    ///
    /// # Errors
    ///
    /// Returns an error if two built-in classifiers claim the same scheme.
    pub fn standard(taxonomy: &'a GenreTaxonomy) -> Result<Self, RegistryError> {
        let mut registry = Self::new(taxonomy);
        registry.register(Box::new(ddc::DeweyClassifier))?;
        registry.register(Box::new(lcc::LcClassifier))?;
        registry.register(Box::new(bisac::BisacClassifier))?;
        registry.register(Box::new(keyword::KeywordClassifier::new(Scheme::Lcsh)))?;
        registry.register(Box::new(keyword::KeywordClassifier::new(Scheme::Fast)))?;
        registry.register(Box::new(keyword::KeywordClassifier::new(Scheme::Tag)))?;
        registry.register(Box::new(overdrive::OverdriveClassifier))?;
        registry.register(Box::new(rbdigital::RbDigitalClassifier))?;
        registry.register(Box::new(rbdigital::RbDigitalAudienceClassifier))?;
        registry.register(Box::new(axis360::Axis360AudienceClassifier))?;
        registry.register(Box::new(age::AgeClassifier))?;
        registry.register(Box::new(age::GradeLevelClassifier))?;
        registry.register(Box::new(age::InterestLevelClassifier))?;
        registry.register(Box::new(freeform::FreeformAudienceClassifier))?;
        registry.register(Box::new(simplified::SimplifiedGenreClassifier))?;
        registry.register(Box::new(simplified::SimplifiedFictionClassifier))?;
        registry.register(Box::new(gutenberg::GutenbergBookshelfClassifier))?;
        Ok(registry)
    }

    /// Register a classifier for its scheme
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateScheme`] if the scheme already has one.
    pub fn register(&mut self, classifier: Box<dyn SchemeClassifier>) -> Result<(), RegistryError> {
        let scheme = classifier.scheme();
        if self.classifiers.contains_key(&scheme) {
            return Err(RegistryError::DuplicateScheme(scheme));
        }
        self.classifiers.insert(scheme, classifier);
        Ok(())
    }

    #[must_use]
    pub fn taxonomy(&self) -> &'a GenreTaxonomy {
        self.taxonomy
    }

    #[must_use]
    pub fn get(&self, scheme: Scheme) -> Option<&dyn SchemeClassifier> {
        self.classifiers.get(&scheme).map(Box::as_ref)
    }

    /// Whether the scheme's children's signals are ambiguous between children and YA
    #[must_use]
    pub fn juvenile_is_generic(&self, scheme: Scheme) -> bool {
        self.get(scheme).is_some_and(|c| c.juvenile_is_generic())
    }

    /// Classify raw values; an unregistered scheme yields an all-empty judgment
    #[must_use]
    pub fn classify_raw(
        &self,
        scheme: Scheme,
        identifier: Option<&str>,
        name: Option<&str>,
    ) -> Judgment {
        self.get(scheme).map_or_else(Judgment::default, |classifier| {
            classifier.classify(self.taxonomy, identifier, name)
        })
    }

    #[must_use]
    pub fn classify(&self, subject: &Subject) -> Judgment {
        self.classify_raw(
            subject.scheme,
            subject.identifier.as_deref(),
            subject.name.as_deref(),
        )
    }

    /// Derive and cache a subject's genre, audience, target age and fiction status
    ///
    /// Locked subjects are never touched. Checked subjects are only
    /// re-derived when `force` is set. Returns whether anything changed.
    pub fn assign_to_genre(&self, subject: &mut Subject, force: bool) -> bool {
        if subject.locked || (subject.checked && !force) {
            return false;
        }
        // An unregistered scheme judges nothing, which clears any stale judgment.
        let judgment = self.classify(subject);
        let mut audience = judgment.audience;
        let mut target_age = judgment.target_age;

        if judgment
            .genre
            .is_some_and(|g| self.taxonomy.name(g) == names::EROTICA)
        {
            audience = Some(Audience::AdultsOnly);
        }
        if audience.is_some_and(Audience::is_adult_class) {
            target_age = default_target_age_for_audience(audience);
        }
        if audience.is_none() && !target_age.is_unknown() {
            audience = default_audience_for_target_age(target_age);
        }

        let mut changed = false;
        if subject.genre != judgment.genre {
            info!(
                "{subject} genre {} => {}",
                self.genre_label(subject.genre),
                self.genre_label(judgment.genre)
            );
            subject.genre = judgment.genre;
            changed = true;
        }
        if subject.audience != audience {
            info!(
                "{subject} audience {} => {}",
                label(subject.audience),
                label(audience)
            );
            subject.audience = audience;
            changed = true;
        }
        if subject.target_age != target_age {
            info!(
                "{subject} target age {} => {}",
                subject.target_age, target_age
            );
            subject.target_age = target_age;
            changed = true;
        }
        if subject.fiction != judgment.fiction {
            info!(
                "{subject} fiction {} => {}",
                label(subject.fiction),
                label(judgment.fiction)
            );
            subject.fiction = judgment.fiction;
            changed = true;
        }
        subject.checked = true;
        changed
    }

    fn genre_label(&self, genre: Option<GenreId>) -> &str {
        genre.map_or("(none)", |g| self.taxonomy.name(g))
    }
}

impl std::fmt::Debug for ClassifierRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut schemes: Vec<Scheme> = self.classifiers.keys().copied().collect();
        schemes.sort();
        f.debug_struct("ClassifierRegistry")
            .field("schemes", &schemes)
            .finish_non_exhaustive()
    }
}

fn label<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "(none)".to_string(), |v| v.to_string())
}
