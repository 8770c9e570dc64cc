use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::taxonomy::{names, GenreId, GenreTaxonomy};
use crate::core::types::{AgeRange, Audience, Scheme};

/// Unique key of a subject: its scheme plus the raw identifier
///
/// Subjects that arrive with only a name are keyed by the name, flagged so
/// they never collide with a subject whose identifier is the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectKey {
    pub scheme: Scheme,
    pub identifier: String,
    #[serde(default)]
    pub by_name: bool,
}

impl SubjectKey {
    #[must_use]
    pub fn new(scheme: Scheme, identifier: impl Into<String>) -> Self {
        Self {
            scheme,
            identifier: identifier.into(),
            by_name: false,
        }
    }

    /// Key for a subject known only by its name
    #[must_use]
    pub fn named(scheme: Scheme, name: impl Into<String>) -> Self {
        Self {
            by_name: true,
            ..Self::new(scheme, name)
        }
    }
}

impl std::fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.by_name {
            write!(f, "{}:\"{}\"", self.scheme, self.identifier)
        } else {
            write!(f, "{}:{}", self.scheme, self.identifier)
        }
    }
}

/// One externally sourced classification value, cached with what it implies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub scheme: Scheme,
    pub identifier: Option<String>,
    pub name: Option<String>,

    /// Derived fields, filled in by subject assignment
    pub fiction: Option<bool>,
    pub audience: Option<Audience>,
    pub target_age: AgeRange,
    pub genre: Option<GenreId>,

    /// Reviewed by a human; never re-derived
    pub locked: bool,

    /// Derived fields have been computed at least once
    pub checked: bool,
}

impl Subject {
    #[must_use]
    pub fn new(scheme: Scheme, identifier: Option<&str>, name: Option<&str>) -> Self {
        Self {
            scheme,
            identifier: identifier.map(str::to_string),
            name: name.map(str::to_string),
            fiction: None,
            audience: None,
            target_age: AgeRange::UNKNOWN,
            genre: None,
            locked: false,
            checked: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> SubjectKey {
        match (&self.identifier, &self.name) {
            (Some(identifier), _) => SubjectKey::new(self.scheme, identifier.as_str()),
            (None, Some(name)) => SubjectKey::named(self.scheme, name.as_str()),
            (None, None) => SubjectKey::new(self.scheme, ""),
        }
    }

    /// Whether this subject speaks to the physical format rather than the content
    ///
    /// A comic adaptation's metadata says little about the prose work it adapts.
    #[must_use]
    pub fn describes_format(&self, taxonomy: &GenreTaxonomy) -> bool {
        self.genre
            .is_some_and(|genre| taxonomy.name(genre) == names::COMICS_GRAPHIC_NOVELS)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}", self.scheme)?;
        if let Some(identifier) = &self.identifier {
            write!(f, " {identifier}")?;
        }
        if let Some(name) = &self.name {
            write!(f, " \"{name}\"")?;
        }
        write!(f, "]")
    }
}

/// A weighted assertion, from one data source, that a work belongs under a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub subject: SubjectKey,
    pub data_source: String,
    pub weight: f64,

    /// Curated by library staff
    #[serde(default)]
    pub from_staff: bool,

    /// Came directly from the source that licenses the work
    #[serde(default)]
    pub from_license_source: bool,
}

/// Get-or-create access to persistent subjects
pub trait SubjectRepository {
    /// Return the subject for `(scheme, identifier)`, creating it on first sighting
    fn get_or_create(
        &mut self,
        scheme: Scheme,
        identifier: Option<&str>,
        name: Option<&str>,
    ) -> &mut Subject;

    fn get(&self, key: &SubjectKey) -> Option<&Subject>;

    fn get_mut(&mut self, key: &SubjectKey) -> Option<&mut Subject>;
}

/// In-memory subject repository
#[derive(Debug, Default)]
pub struct SubjectStore {
    subjects: HashMap<SubjectKey, Subject>,
}

impl SubjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }
}

impl SubjectRepository for SubjectStore {
    fn get_or_create(
        &mut self,
        scheme: Scheme,
        identifier: Option<&str>,
        name: Option<&str>,
    ) -> &mut Subject {
        let subject = Subject::new(scheme, identifier, name);
        let key = subject.key();
        let entry = self.subjects.entry(key).or_insert(subject);
        // A later sighting may supply a name the first one lacked.
        if entry.name.is_none() {
            entry.name = name.map(str::to_string);
        }
        entry
    }

    fn get(&self, key: &SubjectKey) -> Option<&Subject> {
        self.subjects.get(key)
    }

    fn get_mut(&mut self, key: &SubjectKey) -> Option<&mut Subject> {
        self.subjects.get_mut(key)
    }
}
