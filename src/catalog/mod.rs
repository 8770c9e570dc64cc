//! Genre taxonomy and code tables.
//!
//! The taxonomy is a fixed tree of fiction and nonfiction genres. Each node has a
//! default fiction status (inherited from its parent unless overridden) and an
//! optional audience restriction. The tree is compiled into the binary; a custom
//! tree can be loaded from a JSON file with the same shape.
//!
//! ## Example
//!
//! ```rust,no_run
//! use work_classifier::GenreTaxonomy;
//!
//! let taxonomy = GenreTaxonomy::load_embedded().unwrap();
//!
//! let epic = taxonomy.get("Epic Fantasy").unwrap();
//! for ancestor in taxonomy.ancestors(epic) {
//!     println!("{}", taxonomy.name(ancestor));
//! }
//! ```
//!
//! ## Custom taxonomies
//!
//! ```rust,no_run
//! use work_classifier::GenreTaxonomy;
//! use std::path::Path;
//!
//! let json = GenreTaxonomy::load_embedded().unwrap().to_json().unwrap();
//! std::fs::write("my_genres.json", json).unwrap();
//! let custom = GenreTaxonomy::load_from_file(Path::new("my_genres.json")).unwrap();
//! ```

pub mod bisac;
pub mod taxonomy;
