use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use super::config::{sources, ClassifierConfig};
use super::consolidation::consolidate;
use super::metadata::{AudienceHint, MetadataHints, METADATA_WEIGHT};
use super::scoring::{
    decide_audience, decide_fiction, decide_target_age, low_pass_filter, target_age_quality, Tally,
};
use crate::catalog::taxonomy::{names, GenreId};
use crate::classifiers::simplified::SimplifiedGenreClassifier;
use crate::classifiers::{ClassifierRegistry, SchemeClassifier};
use crate::core::subject::{Classification, Subject, SubjectKey, SubjectRepository, SubjectStore};
use crate::core::types::{AgeRange, Audience, Scheme};
use crate::core::work::{WorkInput, WorkMetadata, WorkProfile};

/// Share of a generic juvenile signal credited to young adults
const GENERIC_JUVENILE_YA_SHARE: f64 = 0.6;
/// Share of a generic juvenile signal credited to children
const GENERIC_JUVENILE_CHILDREN_SHARE: f64 = 0.4;
/// Share of a generic juvenile signal counted against adult audiences
const GENERIC_JUVENILE_ADULT_PENALTY: f64 = 0.5;

/// Age range implied by an Overdrive "Juvenile Fiction" tag with nothing more specific
const OVERDRIVE_JUVENILE_DEFAULT_AGES: (i32, i32) = (9, 12);

/// Who controls one dimension of a work's classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffControl {
    /// No evidence yet
    #[default]
    Unset,
    /// Automatically derived evidence is being summed
    Accumulating,
    /// A staff classification has taken over; other evidence is ignored
    StaffLocked,
}

/// What to do with one piece of evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Ignore,
    /// Throw away earlier evidence, then add this
    Reset,
    Add,
}

impl StaffControl {
    /// Admit evidence; `takes_over` marks the staff evidence that locks the dimension
    fn admit(&mut self, takes_over: bool) -> Admission {
        match (*self, takes_over) {
            (Self::StaffLocked, _) => Admission::Ignore,
            (_, true) => {
                *self = Self::StaffLocked;
                Admission::Reset
            }
            (_, false) => {
                *self = Self::Accumulating;
                Admission::Add
            }
        }
    }

    /// Like [`Self::admit`], but once locked further staff evidence still adds up
    fn admit_staff_additive(&mut self, from_staff: bool) -> Admission {
        match (*self, from_staff) {
            (Self::StaffLocked, true) => Admission::Add,
            _ => self.admit(from_staff),
        }
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        self == Self::StaffLocked
    }
}

/// Staff control state of every dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaffControls {
    pub genre: StaffControl,
    pub fiction: StaffControl,
    pub audience: StaffControl,
    pub target_age: StaffControl,
}

/// Reconciles every classification of one work into a [`WorkProfile`]
///
/// Feed classifications with [`WorkClassifier::add`], then call
/// [`WorkClassifier::classify`]. One instance serves one work.
pub struct WorkClassifier<'a> {
    registry: &'a ClassifierRegistry<'a>,
    config: ClassifierConfig,
    hints: MetadataHints,

    seen: HashSet<(SubjectKey, String)>,
    fiction_weights: Tally<bool>,
    audience_weights: Tally<Audience>,
    target_age_lower_weights: Tally<i32>,
    target_age_upper_weights: Tally<i32>,
    genre_weights: Tally<GenreId>,
    controls: StaffControls,

    /// Audiences of classifications straight from the license source
    license_source_audiences: Vec<Option<Audience>>,
    /// Target-age weight of Overdrive juvenile tags that carry no age of their own
    overdrive_juvenile_generic: Option<f64>,
    overdrive_juvenile_with_target_age: bool,
    prepared: bool,
}

impl<'a> WorkClassifier<'a> {
    /// Create a classifier with the default configuration
    #[must_use]
    pub fn new(registry: &'a ClassifierRegistry<'a>) -> Self {
        Self::with_config(registry, ClassifierConfig::default())
    }

    /// Create a classifier with a custom configuration
    #[must_use]
    pub fn with_config(registry: &'a ClassifierRegistry<'a>, config: ClassifierConfig) -> Self {
        Self {
            registry,
            config,
            hints: MetadataHints::default(),
            seen: HashSet::new(),
            fiction_weights: Tally::new(),
            audience_weights: Tally::new(),
            target_age_lower_weights: Tally::new(),
            target_age_upper_weights: Tally::new(),
            genre_weights: Tally::new(),
            controls: StaffControls::default(),
            license_source_audiences: Vec::new(),
            overdrive_juvenile_generic: None,
            overdrive_juvenile_with_target_age: false,
            prepared: false,
        }
    }

    /// Consult the work's publisher, imprint and title before deciding
    #[must_use]
    pub fn with_metadata(mut self, metadata: &WorkMetadata) -> Self {
        self.hints = MetadataHints::from_metadata(metadata);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    #[must_use]
    pub fn controls(&self) -> StaffControls {
        self.controls
    }

    #[must_use]
    pub fn fiction_weights(&self) -> &Tally<bool> {
        &self.fiction_weights
    }

    #[must_use]
    pub fn audience_weights(&self) -> &Tally<Audience> {
        &self.audience_weights
    }

    #[must_use]
    pub fn genre_weights(&self) -> &Tally<GenreId> {
        &self.genre_weights
    }

    /// Consider one classification
    ///
    /// The subject is looked up in `subjects` and classified on first use.
    /// Returns `false` if the classification was ignored: a repeat from the
    /// same data source, an unknown subject, or a format-only subject from a
    /// source other than the license source.
    pub fn add<R: SubjectRepository + ?Sized>(
        &mut self,
        subjects: &mut R,
        classification: &Classification,
    ) -> bool {
        let seen_key = (classification.subject.clone(), classification.data_source.clone());
        if !self.seen.insert(seen_key) {
            debug!(
                "Ignoring repeat of {} from {}",
                classification.subject, classification.data_source
            );
            return false;
        }

        let Some(subject) = subjects.get_mut(&classification.subject) else {
            debug!("No subject for {}", classification.subject);
            return false;
        };
        if !subject.checked {
            self.registry.assign_to_genre(subject, false);
        }
        let subject: &Subject = subject;

        if classification.from_license_source {
            self.license_source_audiences.push(subject.audience);
        } else if subject.describes_format(self.registry.taxonomy()) {
            // A graphic adaptation's format says nothing about the original work.
            debug!("Ignoring format subject {subject} from {}", classification.data_source);
            return false;
        }

        let weight = self
            .config
            .source_weights
            .scale(&classification.data_source, classification.weight);
        let from_staff =
            classification.from_staff || classification.data_source == sources::LIBRARY_STAFF;
        debug!(
            "{subject} from {} weighs {weight} (staff: {from_staff})",
            classification.data_source
        );

        self.weigh_genre(subject, weight, from_staff);
        self.weigh_fiction(subject, weight, from_staff);
        self.weigh_audience(subject, weight, from_staff);
        self.weigh_target_age(subject, classification, from_staff);

        if subject.scheme == Scheme::Overdrive && subject.audience == Some(Audience::Children) {
            if subject.target_age.is_unknown() {
                let weight = classification.weight * target_age_quality_of(subject, classification);
                *self.overdrive_juvenile_generic.get_or_insert(0.0) += weight;
            } else {
                self.overdrive_juvenile_with_target_age = true;
            }
        }
        true
    }

    fn weigh_genre(&mut self, subject: &Subject, weight: f64, from_staff: bool) {
        let no_genre = from_staff && is_no_genre(subject);
        if subject.genre.is_none() && !no_genre {
            return;
        }
        match self.controls.genre.admit_staff_additive(from_staff) {
            Admission::Ignore => return,
            Admission::Reset => {
                debug!("Staff genre {subject} overrides {} genres", self.genre_weights.iter().count());
                self.genre_weights.clear();
            }
            Admission::Add => {}
        }
        if let Some(genre) = subject.genre {
            self.genre_weights.add(genre, weight);
        }
    }

    fn weigh_fiction(&mut self, subject: &Subject, weight: f64, from_staff: bool) {
        let takes_over = from_staff && subject.scheme == Scheme::SimplifiedFictionStatus;
        match self.controls.fiction.admit(takes_over) {
            Admission::Ignore => return,
            Admission::Reset => {
                debug!("Staff fiction status {subject} takes over");
                self.fiction_weights.clear();
            }
            Admission::Add => {}
        }
        if let Some(fiction) = subject.fiction {
            self.fiction_weights.add(fiction, weight);
        }
    }

    fn weigh_audience(&mut self, subject: &Subject, weight: f64, from_staff: bool) {
        let takes_over = from_staff && subject.scheme == Scheme::FreeformAudience;
        match self.controls.audience.admit(takes_over) {
            Admission::Ignore => {}
            Admission::Reset => {
                debug!("Staff audience {subject} takes over");
                self.audience_weights.clear();
                if let Some(audience) = subject.audience {
                    self.audience_weights.add(audience, weight);
                }
            }
            Admission::Add => {
                let Some(audience) = subject.audience else {
                    return;
                };
                if audience == Audience::Children && self.registry.juvenile_is_generic(subject.scheme) {
                    self.weigh_generic_juvenile(weight);
                } else {
                    self.audience_weights.add(audience, weight);
                }
            }
        }
    }

    /// Split a "juvenile" signal that doesn't say whether it means children or teens
    ///
    /// Research is penalized along with the other adult audiences; All Ages is not.
    fn weigh_generic_juvenile(&mut self, weight: f64) {
        self.audience_weights
            .add(Audience::YoungAdult, weight * GENERIC_JUVENILE_YA_SHARE);
        self.audience_weights
            .add(Audience::Children, weight * GENERIC_JUVENILE_CHILDREN_SHARE);
        for audience in Audience::ADULT_CLASS {
            if audience != Audience::AllAges {
                self.audience_weights
                    .add(audience, -weight * GENERIC_JUVENILE_ADULT_PENALTY);
            }
        }
    }

    fn weigh_target_age(&mut self, subject: &Subject, classification: &Classification, from_staff: bool) {
        let takes_over = from_staff && subject.scheme == Scheme::AgeRange;
        match self.controls.target_age.admit(takes_over) {
            Admission::Ignore => return,
            Admission::Reset => {
                debug!("Staff target age {subject} takes over");
                self.target_age_lower_weights.clear();
                self.target_age_upper_weights.clear();
            }
            Admission::Add => {}
        }
        if subject.target_age.is_unknown() {
            return;
        }
        let weight = classification.weight * target_age_quality_of(subject, classification);
        if let Some(lower) = subject.target_age.lower {
            self.target_age_lower_weights.add(lower, weight);
        }
        if let Some(upper) = subject.target_age.upper {
            self.target_age_upper_weights.add(upper, weight);
        }
    }

    /// Add the evidence that only makes sense once every classification is in
    ///
    /// Runs once; [`WorkClassifier::classify`] calls it if needed.
    pub fn prepare_to_classify(&mut self) {
        if self.prepared {
            return;
        }
        self.prepared = true;
        self.weigh_metadata();

        let flagged = [Audience::Children, Audience::YoungAdult, Audience::AdultsOnly];
        let license_source_silent = !self.license_source_audiences.is_empty()
            && !self
                .license_source_audiences
                .iter()
                .any(|audience| audience.is_some_and(|a| flagged.contains(&a)));
        if license_source_silent && !self.controls.audience.is_locked() {
            // Distributors flag children's books and erotica; silence means a book for adults.
            self.audience_weights
                .add(Audience::Adult, self.config.adult_default_weight);
        }

        if let Some(weight) = self.overdrive_juvenile_generic {
            if !self.overdrive_juvenile_with_target_age && !self.controls.target_age.is_locked() {
                let (lower, upper) = OVERDRIVE_JUVENILE_DEFAULT_AGES;
                self.target_age_lower_weights.add(lower, weight);
                self.target_age_upper_weights.add(upper, weight);
            }
        }

        debug!("Fiction weights: {:?}", self.fiction_weights.as_map());
        debug!("Audience weights: {:?}", self.audience_weights.as_map());
        debug!(
            "Target age weights: {:?} / {:?}",
            self.target_age_lower_weights.as_map(),
            self.target_age_upper_weights.as_map()
        );
        debug!("Genre weights: {:?}", self.genre_weights_by_name());
    }

    fn weigh_metadata(&mut self) {
        let taxonomy = self.registry.taxonomy();
        if !self.controls.genre.is_locked() {
            for genre in self.hints.genres.iter().filter_map(|name| taxonomy.get(name)) {
                self.genre_weights.add(genre, METADATA_WEIGHT);
            }
        }
        if let Some(fiction) = self.hints.fiction.filter(|_| !self.controls.fiction.is_locked()) {
            self.fiction_weights.set(fiction, METADATA_WEIGHT);
        }
        if self.controls.audience.is_locked() {
            return;
        }
        match self.hints.audience {
            Some(AudienceHint::Toward(audience)) => self.audience_weights.add(audience, METADATA_WEIGHT),
            Some(AudienceHint::NotAdult) => {
                self.audience_weights.add(Audience::Adult, -METADATA_WEIGHT);
                self.audience_weights.add(Audience::AdultsOnly, -METADATA_WEIGHT);
            }
            None => {}
        }
    }

    fn genre_weights_by_name(&self) -> BTreeMap<&str, f64> {
        let taxonomy = self.registry.taxonomy();
        self.genre_weights
            .iter()
            .map(|(genre, weight)| (taxonomy.name(genre), weight))
            .collect()
    }

    /// Decide fiction status, falling back to `default` without evidence
    #[must_use]
    pub fn fiction(&self, default: Option<bool>) -> Option<bool> {
        decide_fiction(&self.fiction_weights, default)
    }

    /// Genres consistent with `fiction`, consolidated and low-pass filtered
    ///
    /// A genre whose own fiction status contradicts a decided `fiction` is
    /// dropped; genres with no fiction status of their own always stay.
    #[must_use]
    pub fn genres(&self, fiction: Option<bool>, cutoff: f64) -> BTreeMap<GenreId, f64> {
        let taxonomy = self.registry.taxonomy();
        let consistent: BTreeMap<GenreId, f64> = self
            .genre_weights
            .iter()
            .filter(|(genre, _)| match (fiction, taxonomy.node(*genre).default_fiction) {
                (Some(work), Some(genre)) => work == genre,
                _ => true,
            })
            .collect();
        let consolidated = consolidate(taxonomy, &consistent, self.config.swallow_threshold);
        low_pass_filter(&consolidated, cutoff)
    }

    /// Decide the audience; Erotica among `genres` forces Adults Only
    #[must_use]
    pub fn audience(&self, genres: &BTreeMap<GenreId, f64>, default: Option<Audience>) -> Option<Audience> {
        let erotica = self
            .registry
            .taxonomy()
            .get(names::EROTICA)
            .is_some_and(|id| genres.contains_key(&id));
        decide_audience(&self.audience_weights, erotica, default)
    }

    #[must_use]
    pub fn target_age(&self, audience: Option<Audience>) -> AgeRange {
        decide_target_age(
            audience,
            &self.target_age_lower_weights,
            &self.target_age_upper_weights,
        )
    }

    /// Reach a decision on every dimension
    pub fn classify(&mut self) -> WorkProfile {
        self.prepare_to_classify();

        let fiction = self.fiction(self.config.default_fiction);
        let genres = self.genres(fiction, self.config.genre_cutoff);
        let audience = self.audience(&genres, self.config.default_audience);
        let target_age = self.target_age(audience);

        let taxonomy = self.registry.taxonomy();
        let total: f64 = genres.values().sum();
        let genres = genres
            .into_iter()
            .map(|(genre, weight)| {
                let affinity = if total > 0.0 { weight / total } else { 0.0 };
                (taxonomy.name(genre).to_string(), affinity)
            })
            .collect();

        let profile = WorkProfile {
            fiction,
            audience,
            target_age,
            genres,
        };
        debug!("Classified as {profile:?}");
        profile
    }
}

impl std::fmt::Debug for WorkClassifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkClassifier")
            .field("fiction_weights", &self.fiction_weights)
            .field("audience_weights", &self.audience_weights)
            .field("genre_weights", &self.genre_weights_by_name())
            .field("controls", &self.controls)
            .finish_non_exhaustive()
    }
}

/// Whether a subject is the staff sentinel meaning "no genre at all"
fn is_no_genre(subject: &Subject) -> bool {
    subject.scheme == Scheme::SimplifiedGenre
        && subject
            .identifier
            .as_deref()
            .is_some_and(|id| SimplifiedGenreClassifier.scrub_identifier(id).identifier == names::NONE)
}

/// Classify a whole work from its metadata and raw classification tuples
///
/// Tuples naming an unknown scheme are skipped.
#[must_use]
pub fn classify_work(
    registry: &ClassifierRegistry<'_>,
    config: &ClassifierConfig,
    work: &WorkInput,
) -> WorkProfile {
    let mut subjects = SubjectStore::new();
    let mut classifier = WorkClassifier::with_config(registry, config.clone()).with_metadata(&work.metadata);

    for input in &work.classifications {
        let Some(scheme) = Scheme::parse(&input.scheme) else {
            debug!("Skipping unknown scheme {:?}", input.scheme);
            continue;
        };
        if input.identifier.is_none() && input.name.is_none() {
            continue;
        }
        let key = subjects
            .get_or_create(scheme, input.identifier.as_deref(), input.name.as_deref())
            .key();
        let classification = Classification {
            subject: key,
            data_source: input.data_source.clone(),
            weight: input.weight,
            from_staff: input.staff,
            from_license_source: input.from_license_source,
        };
        classifier.add(&mut subjects, &classification);
    }
    classifier.classify()
}

fn target_age_quality_of(subject: &Subject, classification: &Classification) -> f64 {
    target_age_quality(
        &classification.data_source,
        subject.scheme,
        subject.identifier.as_deref().map(str::trim),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::taxonomy::GenreTaxonomy;
    use crate::core::types::range_tuple;

    struct Fixture {
        subjects: SubjectStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                subjects: SubjectStore::new(),
            }
        }

        fn classification(
            &mut self,
            scheme: Scheme,
            identifier: &str,
            data_source: &str,
            weight: f64,
        ) -> Classification {
            let key = self.subjects.get_or_create(scheme, Some(identifier), None).key();
            Classification {
                subject: key,
                data_source: data_source.to_string(),
                weight,
                from_staff: false,
                from_license_source: false,
            }
        }

        fn staff(&mut self, scheme: Scheme, identifier: &str) -> Classification {
            Classification {
                from_staff: true,
                ..self.classification(scheme, identifier, sources::LIBRARY_STAFF, 1.0)
            }
        }
    }

    #[test]
    fn test_staff_control_transitions() {
        let mut control = StaffControl::default();
        assert_eq!(control.admit(false), Admission::Add);
        assert_eq!(control, StaffControl::Accumulating);
        assert_eq!(control.admit(true), Admission::Reset);
        assert!(control.is_locked());
        assert_eq!(control.admit(false), Admission::Ignore);
        assert_eq!(control.admit(true), Admission::Ignore);
        assert_eq!(control.admit_staff_additive(true), Admission::Add);
        assert_eq!(control.admit_staff_additive(false), Admission::Ignore);
    }

    #[test]
    fn test_duplicate_from_same_source_is_ignored() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let romance = fixture.classification(Scheme::Bisac, "FIC027000", "Bibliotheca", 10.0);
        assert!(classifier.add(&mut fixture.subjects, &romance));
        assert!(!classifier.add(&mut fixture.subjects, &romance));

        let again = fixture.classification(Scheme::Bisac, "FIC027000", "OCLC", 10.0);
        assert!(classifier.add(&mut fixture.subjects, &again));

        let genre = taxonomy.get("Romance").unwrap();
        assert!((classifier.genre_weights().get(genre) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_subject_is_classified_lazily() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let classification = fixture.classification(Scheme::Ddc, "813", "OCLC", 1.0);
        assert!(!fixture.subjects.get(&classification.subject).unwrap().checked);
        classifier.add(&mut fixture.subjects, &classification);
        let subject = fixture.subjects.get(&classification.subject).unwrap();
        assert!(subject.checked);
        assert_eq!(subject.fiction, Some(true));
    }

    #[test]
    fn test_format_subject_needs_license_source() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let comics = fixture.classification(Scheme::Bisac, "CGN004010", "OCLC", 10.0);
        assert!(!classifier.add(&mut fixture.subjects, &comics));
        assert!(classifier.genre_weights().is_empty());

        let licensed = Classification {
            from_license_source: true,
            ..fixture.classification(Scheme::Bisac, "CGN004010", "Bibliotheca", 10.0)
        };
        assert!(classifier.add(&mut fixture.subjects, &licensed));
        assert!(!classifier.genre_weights().is_empty());
    }

    #[test]
    fn test_staff_fiction_status_wins() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let sf = fixture.classification(Scheme::Overdrive, "Science Fiction", sources::OVERDRIVE, 100.0);
        classifier.add(&mut fixture.subjects, &sf);
        let nonfiction = fixture.staff(Scheme::SimplifiedFictionStatus, "nonfiction");
        classifier.add(&mut fixture.subjects, &nonfiction);
        let more_sf = fixture.classification(Scheme::Bisac, "FIC028000", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &more_sf);

        assert!(classifier.controls().fiction.is_locked());
        assert_eq!(classifier.fiction(None), Some(false));
    }

    #[test]
    fn test_staff_genres_replace_and_accumulate() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let sf = fixture.classification(Scheme::Bisac, "FIC028000", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &sf);
        let fantasy = fixture.staff(Scheme::SimplifiedGenre, "Fantasy");
        classifier.add(&mut fixture.subjects, &fantasy);
        let horror = fixture.staff(Scheme::SimplifiedGenre, "Horror");
        classifier.add(&mut fixture.subjects, &horror);
        let romance = fixture.classification(Scheme::Bisac, "FIC027000", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &romance);

        let names: Vec<&str> = classifier
            .genre_weights()
            .iter()
            .map(|(genre, _)| taxonomy.name(genre))
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Fantasy"));
        assert!(names.contains(&"Horror"));
    }

    #[test]
    fn test_staff_no_genre_clears_genres() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let sf = fixture.classification(Scheme::Bisac, "FIC028000", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &sf);
        let none = fixture.staff(Scheme::SimplifiedGenre, names::NONE);
        classifier.add(&mut fixture.subjects, &none);

        let profile = classifier.classify();
        assert!(profile.genres.is_empty());
        assert_eq!(profile.fiction, Some(true));
    }

    #[test]
    fn test_generic_juvenile_split() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let juvenile = fixture.classification(Scheme::Lcc, "PZ7", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &juvenile);

        let weights = classifier.audience_weights();
        assert!((weights.get(Audience::YoungAdult) - 60.0).abs() < 1e-9);
        assert!((weights.get(Audience::Children) - 40.0).abs() < 1e-9);
        assert!((weights.get(Audience::Adult) + 50.0).abs() < 1e-9);
        assert!((weights.get(Audience::AdultsOnly) + 50.0).abs() < 1e-9);
        assert!((weights.get(Audience::Research) + 50.0).abs() < 1e-9);
        assert!(weights.get(Audience::AllAges).abs() < 1e-9);
    }

    #[test]
    fn test_license_source_silence_implies_adult() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let licensed = Classification {
            from_license_source: true,
            ..fixture.classification(Scheme::Bisac, "FIC028000", "Bibliotheca", 1.0)
        };
        classifier.add(&mut fixture.subjects, &licensed);
        let juvenile = fixture.classification(Scheme::Lcc, "PZ7", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &juvenile);

        classifier.prepare_to_classify();
        assert!((classifier.audience_weights().get(Audience::Adult) - 451.0).abs() < 1e-9);
        assert_eq!(classifier.classify().audience, Some(Audience::Adult));
    }

    #[test]
    fn test_overdrive_juvenile_fiction_implies_middle_grade() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let juvenile = fixture.classification(Scheme::Overdrive, "Juvenile Fiction", sources::OVERDRIVE, 1.0);
        classifier.add(&mut fixture.subjects, &juvenile);
        let profile = classifier.classify();
        assert_eq!(profile.audience, Some(Audience::Children));
        assert_eq!(profile.target_age, range_tuple(Some(9), Some(12)));
    }

    #[test]
    fn test_overdrive_implied_ages_carry_the_tag_weight() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let juvenile = fixture.classification(Scheme::Overdrive, "Juvenile Fiction", sources::OVERDRIVE, 100.0);
        classifier.add(&mut fixture.subjects, &juvenile);
        let ages = fixture.classification(Scheme::AgeRange, "5-6", "Bibliotheca", 10.0);
        classifier.add(&mut fixture.subjects, &ages);

        let profile = classifier.classify();
        assert_eq!(profile.audience, Some(Audience::Children));
        assert_eq!(profile.target_age, range_tuple(Some(9), Some(12)));
    }

    #[test]
    fn test_publisher_fiction_status_replaces_weight() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let metadata = WorkMetadata {
            title: None,
            publisher: Some("Wiley".to_string()),
            imprint: None,
        };
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry).with_metadata(&metadata);

        let history = fixture.classification(Scheme::Ddc, "973", "OCLC", 250.0);
        classifier.add(&mut fixture.subjects, &history);
        let sf = fixture.classification(Scheme::Bisac, "FIC028000", "OCLC", 150.0);
        classifier.add(&mut fixture.subjects, &sf);

        classifier.prepare_to_classify();
        assert!((classifier.fiction_weights().get(false) - METADATA_WEIGHT).abs() < 1e-9);
        assert_eq!(classifier.fiction(None), Some(true));
    }

    #[test]
    fn test_reading_level_scores_add_no_target_age() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let lexile = fixture.classification(Scheme::LexileScore, "880L", sources::OVERDRIVE, 10.0);
        assert!(classifier.add(&mut fixture.subjects, &lexile));
        let atos = fixture.classification(Scheme::AtosScore, "4.5", sources::OVERDRIVE, 10.0);
        assert!(classifier.add(&mut fixture.subjects, &atos));

        classifier.prepare_to_classify();
        assert!(classifier.target_age_lower_weights.is_empty());
        assert!(classifier.target_age_upper_weights.is_empty());
        assert!(classifier.audience_weights().is_empty());
    }

    #[test]
    fn test_metadata_hints_apply() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let metadata = WorkMetadata {
            title: Some("The Sheikh's Secret".to_string()),
            publisher: Some("Harlequin".to_string()),
            imprint: None,
        };
        let mut classifier = WorkClassifier::new(&registry).with_metadata(&metadata);
        let profile = classifier.classify();
        assert_eq!(profile.genres.keys().collect::<Vec<_>>(), vec!["Romance"]);
        // Harlequin says nothing about fiction status by itself.
        assert_eq!(profile.fiction, None);
        assert_eq!(profile.audience, Some(Audience::Adult));
    }

    #[test]
    fn test_genres_drop_fiction_contradictions() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut fixture = Fixture::new();
        let mut classifier = WorkClassifier::new(&registry);

        let sf = fixture.classification(Scheme::Bisac, "FIC028000", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &sf);
        let history = fixture.classification(Scheme::Ddc, "973", "OCLC", 100.0);
        classifier.add(&mut fixture.subjects, &history);

        let sf_id = taxonomy.get("Science Fiction").unwrap();
        assert!(!classifier.genres(Some(false), 0.15).contains_key(&sf_id));
        assert!(classifier.genres(Some(true), 0.15).contains_key(&sf_id));
        assert_eq!(classifier.genres(None, 0.15).len(), 2);
    }

    #[test]
    fn test_empty_work_uses_defaults() {
        let taxonomy = GenreTaxonomy::load_embedded().unwrap();
        let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
        let mut classifier = WorkClassifier::new(&registry);
        let profile = classifier.classify();
        assert_eq!(profile.fiction, None);
        assert_eq!(profile.audience, Some(Audience::Adult));
        assert_eq!(profile.target_age, range_tuple(Some(18), None));
        assert!(profile.genres.is_empty());
    }
}
