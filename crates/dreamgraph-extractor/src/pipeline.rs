//! Dream pipeline
//!
//! Built once from configuration, immutable afterwards. Every call to
//! [`DreamPipeline::transform`] keeps its state (tokens, name index,
//! relation counter) local, so one pipeline can be shared across threads.

use dreamgraph_core::{AppConfig, EntityType, Result, WorldModel};

use crate::entity::EntityIndex;
use crate::normalize::Normalizer;
use crate::relation::RelationScanner;
use crate::tokenize::{Tokenizer, Tokens};
use crate::{VocabularyClassifier, WordClassifier};

/// Text-to-world-model transformation
#[derive(Debug, Clone)]
pub struct DreamPipeline<C = VocabularyClassifier> {
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    classifier: C,
    relations: RelationScanner,
}

impl DreamPipeline {
    /// Create a pipeline with the default vocabulary and rules
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::default(),
            tokenizer: Tokenizer::default(),
            classifier: VocabularyClassifier::default(),
            relations: RelationScanner::default(),
        }
    }

    /// Create from a configuration, validating it first
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let pipeline = Self {
            normalizer: Normalizer::new(&config.normalizer)?,
            tokenizer: Tokenizer::new(&config.tokenizer),
            classifier: VocabularyClassifier::new(&config.vocabulary),
            relations: RelationScanner::new(&config.relations),
        };

        tracing::info!(
            "Dream pipeline ready: {} vocabulary words, {} stopwords, {} contractions",
            pipeline.classifier.len(),
            config.tokenizer.stopwords.len(),
            config.normalizer.contractions.len()
        );

        Ok(pipeline)
    }
}

impl Default for DreamPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WordClassifier> DreamPipeline<C> {
    /// Swap the classification policy
    pub fn with_classifier<D: WordClassifier>(self, classifier: D) -> DreamPipeline<D> {
        DreamPipeline {
            normalizer: self.normalizer,
            tokenizer: self.tokenizer,
            classifier,
            relations: self.relations,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Normalize, then split into full and filtered tokens
    pub fn tokenize(&self, text: &str) -> Tokens {
        self.tokenizer.tokenize(&self.normalize(text))
    }

    pub fn classify(&self, word: &str) -> EntityType {
        self.classifier.classify(word)
    }

    /// Transform a dream into a world model. Total: empty or
    /// letter-free input yields an empty model.
    pub fn transform(&self, dream: &str) -> WorldModel {
        let tokens = self.tokenize(dream);
        let index = EntityIndex::build(&tokens.filtered, &self.classifier);
        let relationships = self
            .relations
            .extract(&tokens.full, &index, &self.classifier);

        tracing::debug!(
            "Transformed dream: {} tokens, {} content words, {} entities, {} relations",
            tokens.full.len(),
            tokens.filtered.len(),
            index.len(),
            relationships.len()
        );

        WorldModel {
            entities: index.into_entities(),
            relationships,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
