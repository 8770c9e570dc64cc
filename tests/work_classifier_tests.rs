//! End-to-end classification scenarios through the public API.

use work_classifier::classifiers::age::{AgeClassifier, GradeLevelClassifier};
use work_classifier::matching::consolidation::consolidate;
use work_classifier::{
    classify_work, range_tuple, Audience, Classification, ClassifierConfig, ClassifierRegistry,
    GenreTaxonomy, Scheme, SchemeClassifier, SubjectRepository, SubjectStore, WorkClassifier,
    WorkInput,
};

fn work(json: &str) -> WorkInput {
    WorkInput::from_json(json).unwrap()
}

#[test]
fn test_age_and_grade_parsing() {
    assert_eq!(
        GradeLevelClassifier.target_age(None, Some("grades 0-1")),
        range_tuple(Some(5), Some(6))
    );
    assert_eq!(
        AgeClassifier.target_age(None, Some("9 and up")),
        range_tuple(Some(9), Some(13))
    );
}

#[test]
fn test_bisac_urban_fiction() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();

    let judgment = registry.classify_raw(Scheme::Bisac, None, Some("Fiction / African American / Urban"));
    assert_eq!(judgment.genre, taxonomy.get("Urban Fiction"));

    let judgment = registry.classify_raw(Scheme::Bisac, None, Some("Fiction / Urban"));
    assert_eq!(judgment.genre, None);
}

#[test]
fn test_nonfiction_outweighs_science_fiction() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"classifications": [
            {"scheme": "Overdrive", "identifier": "Science Fiction", "data_source": "Overdrive", "weight": 100},
            {"scheme": "Overdrive", "identifier": "History", "data_source": "Overdrive", "weight": 10},
            {"scheme": "Overdrive", "identifier": "Young Adult Nonfiction", "data_source": "Overdrive", "weight": 100}
        ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert_eq!(profile.fiction, Some(false));
    assert_eq!(profile.audience, Some(Audience::YoungAdult));
    assert_eq!(profile.target_age, range_tuple(Some(12), Some(17)));
    assert_eq!(profile.genres.len(), 1);
    assert!((profile.genres["History"] - 1.0).abs() < 1e-9);
}

#[test]
fn test_subgenre_absorbs_parent() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let romance = taxonomy.get("Romance").unwrap();
    let historical = taxonomy.get("Historical Romance").unwrap();
    let weights = [(romance, 100.0), (historical, 5.0)].into_iter().collect();

    let consolidated = consolidate(&taxonomy, &weights, 0.03);
    assert!(!consolidated.contains_key(&romance));
    assert!((consolidated[&historical] - 105.0).abs() < 1e-9);
}

#[test]
fn test_staff_none_genre_empties_genres() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"classifications": [
            {"scheme": "BISAC", "identifier": "FIC028000", "data_source": "Overdrive", "weight": 100},
            {"scheme": "DDC", "identifier": "813.54", "data_source": "OCLC", "weight": 10},
            {"scheme": "http://librarysimplified.org/terms/genres/Simplified/", "identifier": "NONE",
             "data_source": "Library staff", "weight": 1, "staff": true},
            {"scheme": "LCSH", "name": "Space opera", "data_source": "OCLC", "weight": 50}
        ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert!(profile.genres.is_empty());
    assert_eq!(profile.fiction, Some(true));
}

#[test]
fn test_staff_audience_overrides_distributor() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"classifications": [
            {"scheme": "BISAC", "identifier": "FIC028000", "data_source": "Overdrive", "weight": 100,
             "from_license_source": true},
            {"scheme": "freeform_audience", "identifier": "Young Adult", "data_source": "Library staff",
             "weight": 1, "staff": true},
            {"scheme": "schema:typicalAgeRange", "identifier": "14-16", "data_source": "Library staff",
             "weight": 1, "staff": true},
            {"scheme": "BISAC", "identifier": "FIC027000", "data_source": "OCLC", "weight": 100}
        ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert_eq!(profile.audience, Some(Audience::YoungAdult));
    assert_eq!(profile.target_age, range_tuple(Some(14), Some(16)));
}

#[test]
fn test_erotica_forces_adults_only() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"classifications": [
            {"scheme": "BISAC", "identifier": "FIC027000", "data_source": "OCLC", "weight": 10},
            {"scheme": "RBdigital", "identifier": "erotica", "data_source": "RBdigital", "weight": 100}
        ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert!(profile.genres.contains_key("Erotica"));
    assert_eq!(profile.audience, Some(Audience::AdultsOnly));
    assert_eq!(profile.target_age, range_tuple(Some(18), None));
}

#[test]
fn test_publisher_heuristics() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"title": "Star Trek: The Motion Picture", "publisher": "Pocket Books/Star Trek",
            "classifications": [
                {"scheme": "BISAC", "identifier": "FIC028000", "data_source": "OCLC", "weight": 10}
            ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert_eq!(profile.fiction, Some(true));
    let ranked = profile.ranked_genres();
    assert_eq!(ranked[0].0, "Media Tie-in SF");
}

#[test]
fn test_cutoff_drops_minor_genres() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"classifications": [
            {"scheme": "BISAC", "identifier": "FIC028000", "data_source": "OCLC", "weight": 80},
            {"scheme": "BISAC", "identifier": "FIC027000", "data_source": "OCLC", "weight": 20}
        ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert_eq!(profile.genres.len(), 2);
    assert!((profile.genres["Science Fiction"] - 0.8).abs() < 1e-9);

    let strict = ClassifierConfig::default().with_genre_cutoff(0.5);
    let profile = classify_work(&registry, &strict, &input);
    assert_eq!(profile.genres.keys().collect::<Vec<_>>(), vec!["Science Fiction"]);
}

#[test]
fn test_unknown_scheme_is_skipped() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let input = work(
        r#"{"classifications": [
            {"scheme": "Mystery Vocabulary", "identifier": "X1", "data_source": "OCLC", "weight": 100},
            {"scheme": "BISAC", "identifier": "FIC028000", "data_source": "OCLC", "weight": 1}
        ]}"#,
    );

    let profile = classify_work(&registry, &ClassifierConfig::default(), &input);
    assert_eq!(profile.genres.keys().collect::<Vec<_>>(), vec!["Science Fiction"]);
}

#[test]
fn test_locked_subject_is_not_reclassified() {
    let taxonomy = GenreTaxonomy::load_embedded().unwrap();
    let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
    let mut subjects = SubjectStore::new();

    let subject = subjects.get_or_create(Scheme::Bisac, Some("FIC028000"), None);
    subject.locked = true;
    subject.genre = taxonomy.get("Cooking");
    subject.fiction = Some(false);
    let key = subject.key();

    let mut classifier = WorkClassifier::new(&registry);
    classifier.add(
        &mut subjects,
        &Classification {
            subject: key,
            data_source: "OCLC".to_string(),
            weight: 1.0,
            from_staff: false,
            from_license_source: false,
        },
    );
    let profile = classifier.classify();
    assert_eq!(profile.fiction, Some(false));
    assert_eq!(profile.genres.keys().collect::<Vec<_>>(), vec!["Cooking"]);
}
