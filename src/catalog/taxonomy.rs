use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::types::Audience;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse taxonomy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate genre name: {0}")]
    DuplicateGenre(String),

    #[error("Unknown audience '{audience}' restricting genre {genre}")]
    UnknownAudience { genre: String, audience: String },
}

/// Taxonomy version for compatibility checking
pub const TAXONOMY_VERSION: &str = "1.0.0";

/// Genre names the classification logic refers to directly
pub mod names {
    pub const COMICS_GRAPHIC_NOVELS: &str = "Comics & Graphic Novels";
    pub const EROTICA: &str = "Erotica";
    pub const MEDIA_TIE_IN_SF: &str = "Media Tie-in SF";

    /// Staff genre value meaning "this work has no genre"
    pub const NONE: &str = "NONE";
}

/// Index of a genre node in its taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GenreId(pub u16);

impl GenreId {
    fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// A node of the genre tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreNode {
    pub name: String,
    pub parent: Option<GenreId>,
    pub children: Vec<GenreId>,
    pub default_fiction: Option<bool>,
    pub audience_restriction: Option<Vec<Audience>>,
}

impl GenreNode {
    /// Whether a work for `audience` may carry this genre
    #[must_use]
    pub fn allows_audience(&self, audience: Audience) -> bool {
        self.audience_restriction
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&audience))
    }
}

/// Serializable genre definition; a bare string is a leaf with inherited fiction status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreSpec {
    Leaf(String),
    Node(GenreNodeSpec),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreNodeSpec {
    pub name: String,

    /// Absent inherits from the parent, `null` means "either"
    #[serde(
        default,
        deserialize_with = "present_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fiction: Option<Option<bool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_restriction: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subgenres: Vec<GenreSpec>,
}

fn present_option<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Some)
}

/// Serializable taxonomy format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyData {
    pub version: String,
    pub created_at: String,
    pub fiction: Vec<GenreSpec>,
    pub nonfiction: Vec<GenreSpec>,
}

/// The fixed genre tree, stored as an arena and indexed by name
#[derive(Debug, Default)]
pub struct GenreTaxonomy {
    nodes: Vec<GenreNode>,
    name_to_id: HashMap<String, GenreId>,
}

impl GenreTaxonomy {
    /// Load the embedded default taxonomy
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog is invalid; build.rs rules this out.
    pub fn load_embedded() -> Result<Self, TaxonomyError> {
        // Validated at compile time by build.rs
        const EMBEDDED_TAXONOMY: &str = include_str!("../../catalogs/genres.json");
        Self::from_json(EMBEDDED_TAXONOMY)
    }

    /// Load a taxonomy from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid taxonomy.
    pub fn load_from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a taxonomy from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a genre name repeats, or an
    /// audience restriction names an unknown audience.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let data: TaxonomyData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != TAXONOMY_VERSION {
            warn!(
                "Taxonomy version mismatch (expected {}, found {})",
                TAXONOMY_VERSION, data.version
            );
        }

        Self::from_data(&data)
    }

    /// Build the tree from its serializable form
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate genre names or unknown audiences.
    pub fn from_data(data: &TaxonomyData) -> Result<Self, TaxonomyError> {
        let mut taxonomy = Self::default();
        for spec in &data.fiction {
            taxonomy.add_spec(spec, None, Some(true))?;
        }
        for spec in &data.nonfiction {
            taxonomy.add_spec(spec, None, Some(false))?;
        }
        Ok(taxonomy)
    }

    fn add_spec(
        &mut self,
        spec: &GenreSpec,
        parent: Option<GenreId>,
        inherited_fiction: Option<bool>,
    ) -> Result<GenreId, TaxonomyError> {
        match spec {
            GenreSpec::Leaf(name) => self.add_genre(name, parent, inherited_fiction, None),
            GenreSpec::Node(node) => {
                let fiction = node.fiction.unwrap_or(inherited_fiction);
                let restriction = node
                    .audience_restriction
                    .as_ref()
                    .map(|audiences| {
                        audiences
                            .iter()
                            .map(|a| {
                                Audience::parse(a).ok_or_else(|| TaxonomyError::UnknownAudience {
                                    genre: node.name.clone(),
                                    audience: a.clone(),
                                })
                            })
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()?;
                let id = self.add_genre(&node.name, parent, fiction, restriction)?;
                for child in &node.subgenres {
                    self.add_spec(child, Some(id), fiction)?;
                }
                Ok(id)
            }
        }
    }

    /// Add a genre under `parent`
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::DuplicateGenre`] if the name is already taken.
    pub fn add_genre(
        &mut self,
        name: &str,
        parent: Option<GenreId>,
        default_fiction: Option<bool>,
        audience_restriction: Option<Vec<Audience>>,
    ) -> Result<GenreId, TaxonomyError> {
        if self.name_to_id.contains_key(name) {
            return Err(TaxonomyError::DuplicateGenre(name.to_string()));
        }
        let id = u16::try_from(self.nodes.len())
            .map(GenreId)
            .map_err(|_| TaxonomyError::DuplicateGenre(name.to_string()))?;

        self.nodes.push(GenreNode {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            default_fiction,
            audience_restriction,
        });
        self.name_to_id.insert(name.to_string(), id);
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        Ok(id)
    }

    /// Look a genre up by its exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<GenreId> {
        self.name_to_id.get(name).copied()
    }

    #[must_use]
    pub fn node(&self, id: GenreId) -> &GenreNode {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn name(&self, id: GenreId) -> &str {
        &self.node(id).name
    }

    #[must_use]
    pub fn parent(&self, id: GenreId) -> Option<GenreId> {
        self.node(id).parent
    }

    /// Walk from the parent of `id` up to the root
    pub fn ancestors(&self, id: GenreId) -> impl Iterator<Item = GenreId> + '_ {
        std::iter::successors(self.parent(id), |&current| self.parent(current))
    }

    /// Whether `descendant` sits anywhere below `ancestor`
    #[must_use]
    pub fn is_descendant(&self, descendant: GenreId, ancestor: GenreId) -> bool {
        self.ancestors(descendant).any(|a| a == ancestor)
    }

    /// Genres with no parent, in catalog order
    pub fn roots(&self) -> impl Iterator<Item = GenreId> + '_ {
        self.ids().filter(|&id| self.parent(id).is_none())
    }

    pub fn ids(&self) -> impl Iterator<Item = GenreId> + '_ {
        (0..self.nodes.len()).filter_map(|i| u16::try_from(i).ok().map(GenreId))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Convert back to the serializable form, stamped with the current time
    #[must_use]
    pub fn to_data(&self) -> TaxonomyData {
        let mut fiction = Vec::new();
        let mut nonfiction = Vec::new();
        for root in self.roots() {
            let spec = self.spec_for(root, None);
            if self.node(root).default_fiction == Some(false) {
                nonfiction.push(spec);
            } else {
                fiction.push(spec);
            }
        }
        TaxonomyData {
            version: TAXONOMY_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            fiction,
            nonfiction,
        }
    }

    fn spec_for(&self, id: GenreId, inherited_fiction: Option<bool>) -> GenreSpec {
        let node = self.node(id);
        let top_level = node.parent.is_none();
        let fiction_differs = if top_level {
            node.default_fiction.is_none()
        } else {
            node.default_fiction != inherited_fiction
        };
        if node.children.is_empty() && node.audience_restriction.is_none() && !fiction_differs {
            return GenreSpec::Leaf(node.name.clone());
        }
        GenreSpec::Node(GenreNodeSpec {
            name: node.name.clone(),
            fiction: fiction_differs.then_some(node.default_fiction),
            audience_restriction: node
                .audience_restriction
                .as_ref()
                .map(|audiences| audiences.iter().map(ToString::to_string).collect()),
            subgenres: node
                .children
                .iter()
                .map(|&child| self.spec_for(child, node.default_fiction))
                .collect(),
        })
    }

    /// Export the taxonomy to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, TaxonomyError> {
        Ok(serde_json::to_string_pretty(&self.to_data())?)
    }
}
