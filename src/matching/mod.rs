//! Work classification engine.
//!
//! This module reconciles every classification attached to one work:
//!
//! - [`WorkClassifier`]: accumulates weighted evidence and decides
//! - [`ClassifierConfig`]: cutoffs, defaults and per-source weighting
//! - [`consolidation::consolidate`]: folds parent genres into subgenres
//!
//! ## Algorithm
//!
//! 1. **Ingestion**: each classification's subject is classified once, then
//!    its fiction status, audience, target age and genre are added to
//!    per-dimension tallies, scaled by the data source's reliability
//! 2. **Staff overrides**: the first staff classification for a dimension
//!    discards the automatic evidence for it and locks it
//! 3. **Preparation**: publisher and imprint heuristics, the adult default
//!    for license sources that flag nothing, and the implied middle-grade
//!    age of a bare Overdrive "Juvenile Fiction"
//! 4. **Decision**: fiction first, then genres consistent with it, then the
//!    audience (Erotica forces Adults Only), then the target age
//!
//! ## Example
//!
//! ```rust,no_run
//! use work_classifier::{classify_work, ClassifierConfig, ClassifierRegistry, GenreTaxonomy, WorkInput};
//!
//! let taxonomy = GenreTaxonomy::load_embedded().unwrap();
//! let registry = ClassifierRegistry::standard(&taxonomy).unwrap();
//! let work = WorkInput::from_json(r#"{"classifications": [
//!     {"scheme": "BISAC", "identifier": "FIC028000", "data_source": "Overdrive", "weight": 1}
//! ]}"#).unwrap();
//!
//! let profile = classify_work(&registry, &ClassifierConfig::default(), &work);
//! for (genre, affinity) in profile.ranked_genres() {
//!     println!("{genre}: {:.1}%", affinity * 100.0);
//! }
//! ```

pub mod config;
pub mod consolidation;
pub mod engine;
pub mod metadata;
pub mod scoring;

pub use config::{ClassifierConfig, SourceWeights};
pub use engine::{classify_work, StaffControl, WorkClassifier};
