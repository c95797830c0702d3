//! Relation Extraction (RE) module
//!
//! Scans the unfiltered token sequence once, left to right. At each position
//! three rules are evaluated in a fixed order:
//!
//! 1. `modifies`: a descriptor followed *immediately* by a place or object.
//! 2. `above`: an above-marker with a place/object somewhere on each side.
//! 3. `located_in`: a located-in marker, same search as `above`.
//!
//! Marker rules use a skip-search: walk away from the marker and take the
//! first place/object entity found. Stopwords, descriptors and unknown words
//! in between are stepped over, never block the search.

use std::collections::HashSet;

use dreamgraph_core::{EntityType, RelationConfig, RelationType, WorldEntity, WorldRelation};

use crate::entity::EntityIndex;
use crate::WordClassifier;

/// Direction of a skip-search from a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Positional relation extractor
#[derive(Debug, Clone)]
pub struct RelationScanner {
    above_markers: HashSet<String>,
    located_in_markers: HashSet<String>,
}

impl RelationScanner {
    pub fn new(config: &RelationConfig) -> Self {
        Self {
            above_markers: config.above_markers.iter().cloned().collect(),
            located_in_markers: config.located_in_markers.iter().cloned().collect(),
        }
    }

    /// Extract relations from the full token sequence.
    ///
    /// Relation ids follow emission order; every `from`/`to` is an entity in
    /// `index`.
    pub fn extract<C>(
        &self,
        full: &[String],
        index: &EntityIndex,
        classifier: &C,
    ) -> Vec<WorldRelation>
    where
        C: WordClassifier + ?Sized,
    {
        let mut relations = Vec::new();

        for (position, word) in full.iter().enumerate() {
            if classifier.classify(word) == EntityType::Descriptor {
                if let Some((from, to)) = modifies_pair(full, index, position) {
                    push_relation(&mut relations, RelationType::Modifies, from, to);
                }
            }

            if self.above_markers.contains(word) {
                if let Some((from, to)) = marker_pair(full, index, position) {
                    push_relation(&mut relations, RelationType::Above, from, to);
                }
            }

            if self.located_in_markers.contains(word) {
                if let Some((from, to)) = marker_pair(full, index, position) {
                    push_relation(&mut relations, RelationType::LocatedIn, from, to);
                }
            }
        }

        relations
    }
}

impl Default for RelationScanner {
    fn default() -> Self {
        Self::new(&RelationConfig::default())
    }
}

fn push_relation(
    relations: &mut Vec<WorldRelation>,
    relation_type: RelationType,
    from: &WorldEntity,
    to: &WorldEntity,
) {
    let relation = WorldRelation::new(relations.len() + 1, relation_type, from, to);
    tracing::trace!(
        "{} {}: {} -> {}",
        relation.id,
        relation_type,
        from.name(),
        to.name()
    );
    relations.push(relation);
}

/// Descriptor at `position` and its right neighbour, adjacency only
fn modifies_pair<'a>(
    full: &[String],
    index: &'a EntityIndex,
    position: usize,
) -> Option<(&'a WorldEntity, &'a WorldEntity)> {
    let from = index.get(&full[position])?;
    let to = full.get(position + 1).and_then(|next| index.get(next))?;

    to.entity_type.is_spatial().then_some((from, to))
}

fn marker_pair<'a>(
    full: &[String],
    index: &'a EntityIndex,
    position: usize,
) -> Option<(&'a WorldEntity, &'a WorldEntity)> {
    let left = nearest_spatial(full, index, position, Direction::Left)?;
    let right = nearest_spatial(full, index, position, Direction::Right)?;
    Some((left, right))
}

/// Nearest place/object entity strictly on one side of `position`.
///
/// Bounded by the sequence ends; returns `None` when that side has no
/// qualifying entity.
pub fn nearest_spatial<'a>(
    full: &[String],
    index: &'a EntityIndex,
    position: usize,
    direction: Direction,
) -> Option<&'a WorldEntity> {
    let spatial = |word: &String| index.get(word).filter(|e| e.entity_type.is_spatial());

    match direction {
        Direction::Left => full.get(..position)?.iter().rev().find_map(spatial),
        Direction::Right => full.get(position + 1..)?.iter().find_map(spatial),
    }
}

// ============================================================================
// Tests
// ============================================================================
