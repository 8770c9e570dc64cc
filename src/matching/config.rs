use serde::{Deserialize, Serialize};

use crate::core::types::Audience;

/// Names of the data sources the engine treats specially
pub mod sources {
    pub const OVERDRIVE: &str = "Overdrive";
    pub const OCLC_LINKED_DATA: &str = "OCLC Linked Data";
    pub const AMAZON: &str = "Amazon";
    pub const LIBRARY_STAFF: &str = "Library staff";
}

/// Default minimum affinity for a genre to survive the low-pass filter
pub const DEFAULT_GENRE_CUTOFF: f64 = 0.15;

/// Default fraction of a parent's weight a subgenre needs to swallow it
pub const DEFAULT_SWALLOW_THRESHOLD: f64 = 0.03;

/// Configuration for the aggregation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Genres with a smaller share of the total weight are dropped
    pub genre_cutoff: f64,
    /// See [`crate::matching::consolidation::consolidate`]
    pub swallow_threshold: f64,
    /// Fiction status when there is no evidence either way
    pub default_fiction: Option<bool>,
    /// Audience when there is no convincing evidence
    pub default_audience: Option<Audience>,
    /// Per-source reliability scaling
    pub source_weights: SourceWeights,
    /// Adult weight added when the license source is silent about juvenile or adult content
    pub adult_default_weight: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            genre_cutoff: DEFAULT_GENRE_CUTOFF,
            swallow_threshold: DEFAULT_SWALLOW_THRESHOLD,
            default_fiction: None,
            default_audience: Some(Audience::Adult),
            source_weights: SourceWeights::default(),
            adult_default_weight: 500.0,
        }
    }
}

impl ClassifierConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_genre_cutoff(mut self, cutoff: f64) -> Self {
        self.genre_cutoff = cutoff;
        self
    }
}

/// Multipliers reflecting how far each data source's weights can be trusted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceWeights {
    /// Overdrive sends one classification per category, each worth a lot
    pub overdrive_multiplier: f64,
    /// OCLC Linked Data tags sometimes describe the wrong book
    pub oclc_linked_data_divisor: f64,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            overdrive_multiplier: 50.0,
            oclc_linked_data_divisor: 10.0,
        }
    }
}

impl SourceWeights {
    /// Scale a raw classification weight by its data source
    #[must_use]
    pub fn scale(&self, data_source: &str, weight: f64) -> f64 {
        match data_source {
            sources::OCLC_LINKED_DATA if self.oclc_linked_data_divisor > 0.0 => {
                weight / self.oclc_linked_data_divisor
            }
            sources::OVERDRIVE => weight * self.overdrive_multiplier,
            _ => weight,
        }
    }
}
