//! Dreamgraph Extractor - Dream-to-world-model pipeline
//!
//! Turns a free-text dream into a [`WorldModel`]:
//! normalize → tokenize → build entities (filtered tokens) →
//! scan relations (full tokens).
//!
//! The transformation is a pure function of the input text and the
//! configuration the pipeline was built with.

use dreamgraph_core::{EntityType, WorldModel};

/// Classification policy: maps one lowercase word to an entity type
pub trait WordClassifier: Send + Sync {
    fn classify(&self, word: &str) -> EntityType;
}

pub mod classify;
pub mod entity;
pub mod normalize;
pub mod pipeline;
pub mod relation;
pub mod tokenize;

pub use classify::VocabularyClassifier;
pub use entity::EntityIndex;
pub use normalize::Normalizer;
pub use pipeline::DreamPipeline;
pub use relation::RelationScanner;
pub use tokenize::{Tokenizer, Tokens};

/// Transform a dream with the default vocabulary
pub fn transform_dream(dream: &str) -> WorldModel {
    DreamPipeline::new().transform(dream)
}
