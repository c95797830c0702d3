//! Word classification
//!
//! Maps a content word to an [`EntityType`] by vocabulary lookup. The lists
//! are consulted in precedence order (places, objects, descriptors) and the
//! first list containing the word wins, so a word configured in two lists
//! takes the earlier category. Words in no list are `unknown`.

use std::collections::HashMap;

use dreamgraph_core::{EntityType, VocabularyConfig};

use crate::WordClassifier;

/// Vocabulary-table classifier
#[derive(Debug, Clone)]
pub struct VocabularyClassifier {
    /// Lookup index (word -> winning category)
    lookup: HashMap<String, EntityType>,
}

impl VocabularyClassifier {
    /// Build from configured word lists
    pub fn new(config: &VocabularyConfig) -> Self {
        let mut classifier = Self {
            lookup: HashMap::new(),
        };

        classifier.add_terms(&config.places, EntityType::Place);
        classifier.add_terms(&config.objects, EntityType::Object);
        classifier.add_terms(&config.descriptors, EntityType::Descriptor);
        classifier
    }

    /// Register words; earlier registrations keep precedence
    fn add_terms(&mut self, words: &[String], entity_type: EntityType) {
        for word in words {
            self.lookup
                .entry(word.to_lowercase())
                .or_insert(entity_type);
        }
    }

    /// Number of distinct words known to the classifier
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

impl Default for VocabularyClassifier {
    fn default() -> Self {
        Self::new(&VocabularyConfig::default())
    }
}

impl WordClassifier for VocabularyClassifier {
    fn classify(&self, word: &str) -> EntityType {
        self.lookup
            .get(word)
            .copied()
            .unwrap_or(EntityType::Unknown)
    }
}
