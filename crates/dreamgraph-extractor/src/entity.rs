//! Entity building
//!
//! One entity per distinct content word, in first-seen order. The word itself
//! is the deduplication key; repeats are skipped without touching the
//! existing entity.

use std::collections::HashMap;

use dreamgraph_core::WorldEntity;

use crate::WordClassifier;

/// Entities of one dream plus a name index
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    entities: Vec<WorldEntity>,
    /// name -> position in `entities`
    by_name: HashMap<String, usize>,
}

impl EntityIndex {
    /// Build entities from the stopword-filtered token sequence
    pub fn build<C>(filtered: &[String], classifier: &C) -> Self
    where
        C: WordClassifier + ?Sized,
    {
        let mut index = Self::default();

        for word in filtered {
            if index.by_name.contains_key(word) {
                continue;
            }

            let entity = WorldEntity::new(
                index.entities.len() + 1,
                classifier.classify(word),
                word.as_str(),
            );

            index.by_name.insert(word.clone(), index.entities.len());
            index.entities.push(entity);
        }

        index
    }

    /// Entity created for `word`, if any
    pub fn get(&self, word: &str) -> Option<&WorldEntity> {
        self.by_name.get(word).map(|&i| &self.entities[i])
    }

    pub fn entities(&self) -> &[WorldEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn into_entities(self) -> Vec<WorldEntity> {
        self.entities
    }
}
