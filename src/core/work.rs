use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::{AgeRange, Audience};

/// Bibliographic metadata consulted by the publisher/imprint heuristics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub imprint: Option<String>,
}

/// One raw classification tuple as supplied by a collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    /// Scheme name or URI, see [`crate::core::types::Scheme::parse`]
    pub scheme: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub data_source: String,
    pub weight: f64,
    #[serde(default)]
    pub staff: bool,
    #[serde(default)]
    pub from_license_source: bool,
}

/// A work and every classification attached to it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkInput {
    #[serde(flatten)]
    pub metadata: WorkMetadata,
    #[serde(default)]
    pub classifications: Vec<ClassificationInput>,
}

impl WorkInput {
    /// Parse a work from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or misses required fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The reconciled classification of one work
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkProfile {
    pub fiction: Option<bool>,
    pub audience: Option<Audience>,
    pub target_age: AgeRange,

    /// Genre name to affinity; affinities sum to 1 unless empty
    pub genres: BTreeMap<String, f64>,
}

impl WorkProfile {
    /// Genres ordered by descending affinity
    #[must_use]
    pub fn ranked_genres(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .genres
            .iter()
            .map(|(name, affinity)| (name.as_str(), *affinity))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
