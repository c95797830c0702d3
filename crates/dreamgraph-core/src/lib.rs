//! Dreamgraph Core - World model types, errors and shared configuration
//!
//! This crate defines the abstractions shared by the rest of the workspace:
//! - World model (entities, relationships and their closed type sets)
//! - Common error types
//! - Configuration management (vocabulary, stopwords, markers, logging)

pub mod config;

pub use config::{
    AppConfig, ConfigError, Contraction, LoggingConfig, NormalizerConfig, RelationConfig,
    TokenizerConfig, VocabularyConfig,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for Dreamgraph operations
#[derive(Error, Debug)]
pub enum DreamError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DreamError>;

// ============================================================================
// Entity and Relation Types
// ============================================================================

/// Category assigned to a content word by vocabulary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Place,
    Object,
    Descriptor,
    Unknown,
}

impl EntityType {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Object => "object",
            Self::Descriptor => "descriptor",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the entity can anchor a spatial relation (place or object)
    pub fn is_spatial(&self) -> bool {
        match self {
            Self::Place | Self::Object => true,
            Self::Descriptor | Self::Unknown => false,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = DreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "place" => Ok(Self::Place),
            "object" => Ok(Self::Object),
            "descriptor" => Ok(Self::Descriptor),
            "unknown" => Ok(Self::Unknown),
            _ => Err(DreamError::ValidationError(format!(
                "unknown entity type: {s}"
            ))),
        }
    }
}

/// Relationship kinds discovered by the positional scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Descriptor -> place/object it qualifies
    Modifies,
    /// Place/object -> place/object containing it
    LocatedIn,
    /// Place/object -> place/object below it
    Above,
}

impl RelationType {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modifies => "modifies",
            Self::LocatedIn => "located_in",
            Self::Above => "above",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RelationType {
    type Err = DreamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "modifies" => Ok(Self::Modifies),
            "located_in" => Ok(Self::LocatedIn),
            "above" => Ok(Self::Above),
            _ => Err(DreamError::ValidationError(format!(
                "unknown relation type: {s}"
            ))),
        }
    }
}

// ============================================================================
// World Model
// ============================================================================

/// Attributes carried by a world entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAttributes {
    /// Lowercase source word, unique within one world model
    pub name: String,
}

/// An entity instantiated from a content word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEntity {
    /// Synthetic id (`entity_1`, `entity_2`, ...)
    pub id: String,

    #[serde(rename = "type")]
    pub entity_type: EntityType,

    pub attributes: EntityAttributes,
}

impl WorldEntity {
    /// Create an entity with the 1-based ordinal `seq`
    pub fn new(seq: usize, entity_type: EntityType, name: impl Into<String>) -> Self {
        Self {
            id: format!("entity_{seq}"),
            entity_type,
            attributes: EntityAttributes { name: name.into() },
        }
    }

    /// The source word
    pub fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// A typed, directed relationship between two entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldRelation {
    /// Synthetic id (`relation_1`, `relation_2`, ...)
    pub id: String,

    #[serde(rename = "type")]
    pub relation_type: RelationType,

    /// Source entity id
    pub from: String,

    /// Target entity id
    pub to: String,
}

impl WorldRelation {
    /// Create a relation with the 1-based ordinal `seq`
    pub fn new(
        seq: usize,
        relation_type: RelationType,
        from: &WorldEntity,
        to: &WorldEntity,
    ) -> Self {
        Self {
            id: format!("relation_{seq}"),
            relation_type,
            from: from.id.clone(),
            to: to.id.clone(),
        }
    }
}

/// The graph produced from one dream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldModel {
    pub entities: Vec<WorldEntity>,
    pub relationships: Vec<WorldRelation>,
}

impl WorldModel {
    /// Check if the model has neither entities nor relationships
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }

    /// Look up an entity by id
    pub fn entity(&self, id: &str) -> Option<&WorldEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Look up an entity by its source word
    pub fn entity_named(&self, name: &str) -> Option<&WorldEntity> {
        self.entities.iter().find(|e| e.attributes.name == name)
    }

    /// Entities of the given type, in model order
    pub fn entities_of_type(&self, entity_type: EntityType) -> impl Iterator<Item = &WorldEntity> {
        self.entities
            .iter()
            .filter(move |e| e.entity_type == entity_type)
    }

    /// Relationships whose source is the given entity id
    pub fn relations_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a WorldRelation> {
        self.relationships.iter().filter(move |r| r.from == id)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
