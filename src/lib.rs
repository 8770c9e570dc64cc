//! # work-classifier
//!
//! A library for reducing a book's raw subject classifications to one
//! consistent profile.
//!
//! A single book picks up classifications from many places: Dewey and LC
//! numbers from a catalog record, BISAC codes and proprietary tags from its
//! distributor, subject headings, free-text age ranges, and occasionally a
//! librarian's override. They use different vocabularies, carry different
//! weights, and often disagree.
//!
//! `work-classifier` interprets each classification with a per-scheme
//! classifier and reconciles the results into a [`WorkProfile`]: fiction
//! status, audience, target age and weighted genres from a fixed taxonomy.
//!
//! ## Features
//!
//! - **Per-scheme classifiers**: DDC, LCC, BISAC, LCSH/FAST keywords, Overdrive,
//!   RBdigital, Axis 360, age/grade/interest levels and staff classifications
//! - **Rule matching**: BISAC names are decoded with ordered token rules
//! - **Weighted reconciliation**: per-source reliability, staff overrides,
//!   publisher heuristics, and a bias toward protecting younger readers
//! - **Genre consolidation**: strong subgenres absorb their vaguer parents
//!
//! ## Example
//!
//! ```rust,no_run
//! use work_classifier::{ClassifierRegistry, GenreTaxonomy, Scheme, SubjectRepository, SubjectStore};
//! use work_classifier::{Classification, WorkClassifier};
//!
//! // Load the embedded genre taxonomy and register every scheme classifier
//! let taxonomy = GenreTaxonomy::load_embedded().unwrap();
//! let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
//!
//! let mut subjects = SubjectStore::new();
//! let key = subjects.get_or_create(Scheme::Bisac, Some("FIC028000"), None).key();
//!
//! let mut classifier = WorkClassifier::new(&registry);
//! classifier.add(&mut subjects, &Classification {
//!     subject: key,
//!     data_source: "Overdrive".to_string(),
//!     weight: 1.0,
//!     from_staff: false,
//!     from_license_source: true,
//! });
//!
//! let profile = classifier.classify();
//! println!("{:?} {:?} {}", profile.fiction, profile.audience, profile.target_age);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The genre taxonomy and BISAC code table
//! - [`core`]: Core data types for subjects, classifications and profiles
//! - [`rules`]: Token rule matcher for hierarchical subject names
//! - [`classifiers`]: Per-scheme classifiers and their registry
//! - [`matching`]: The work classification engine
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod classifiers;
pub mod cli;
pub mod core;
pub mod matching;
pub mod rules;

// Re-export commonly used types for convenience
pub use catalog::taxonomy::{GenreId, GenreNode, GenreTaxonomy, TaxonomyError};
pub use classifiers::{ClassifierRegistry, Judgment, RegistryError, SchemeClassifier};
pub use core::subject::{Classification, Subject, SubjectKey, SubjectRepository, SubjectStore};
pub use core::types::*;
pub use core::work::{ClassificationInput, WorkInput, WorkMetadata, WorkProfile};
pub use matching::{classify_work, ClassifierConfig, SourceWeights, WorkClassifier};
