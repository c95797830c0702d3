//! End-to-end dream transformation tests

use dreamgraph_core::{EntityType, RelationType, WorldModel};
use dreamgraph_extractor::{transform_dream, DreamPipeline};
use serde_json::{json, Value};

fn entity_summary(model: &WorldModel) -> Vec<(String, EntityType)> {
    model
        .entities
        .iter()
        .map(|e| (e.attributes.name.clone(), e.entity_type))
        .collect()
}

fn relation_summary(model: &WorldModel) -> Vec<(RelationType, String, String)> {
    model
        .relationships
        .iter()
        .map(|r| {
            let from = model.entity(&r.from).expect("from id resolves");
            let to = model.entity(&r.to).expect("to id resolves");
            (r.relation_type, from.name().to_string(), to.name().to_string())
        })
        .collect()
}

fn owned(items: &[(&str, EntityType)]) -> Vec<(String, EntityType)> {
    items.iter().map(|(n, t)| (n.to_string(), *t)).collect()
}

fn rels(items: &[(RelationType, &str, &str)]) -> Vec<(RelationType, String, String)> {
    items
        .iter()
        .map(|(t, f, to)| (*t, f.to_string(), to.to_string()))
        .collect()
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_floating_city_above_clouds() {
    let model = transform_dream("A floating city above the clouds with glass towers");

    assert_eq!(
        entity_summary(&model),
        owned(&[
            ("floating", EntityType::Descriptor),
            ("city", EntityType::Place),
            ("clouds", EntityType::Place),
            ("glass", EntityType::Descriptor),
            ("towers", EntityType::Object),
        ])
    );
    assert_eq!(
        relation_summary(&model),
        rels(&[
            (RelationType::Modifies, "floating", "city"),
            (RelationType::Above, "city", "clouds"),
            (RelationType::Modifies, "glass", "towers"),
        ])
    );
}

#[test]
fn test_contraction_and_marker_without_left_entity() {
    let model = transform_dream("I'm in a dark forest");

    assert_eq!(
        entity_summary(&model),
        owned(&[
            ("dark", EntityType::Descriptor),
            ("forest", EntityType::Place),
        ])
    );
    assert_eq!(
        relation_summary(&model),
        rels(&[(RelationType::Modifies, "dark", "forest")])
    );
}

#[test]
fn test_empty_dream() {
    let model = transform_dream("");

    assert!(model.is_empty());
    assert_eq!(
        serde_json::to_value(&model).unwrap(),
        json!({"entities": [], "relationships": []})
    );
}

#[test]
fn test_ship_at_ocean() {
    let model = transform_dream("ship at ocean");

    assert_eq!(
        entity_summary(&model),
        owned(&[("ship", EntityType::Object), ("ocean", EntityType::Place)])
    );
    assert_eq!(
        relation_summary(&model),
        rels(&[(RelationType::LocatedIn, "ship", "ocean")])
    );
}

#[test]
fn test_unknown_words_are_entities() {
    let model = transform_dream("a gleaming spaceship");

    assert_eq!(
        entity_summary(&model),
        owned(&[
            ("gleaming", EntityType::Unknown),
            ("spaceship", EntityType::Unknown),
        ])
    );
    assert!(model.relationships.is_empty());
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_letter_free_input() {
    assert!(transform_dream("1234 !!! ... \n\t").is_empty());
    assert!(transform_dream("the a an of").entities.is_empty());
}

#[test]
fn test_digits_and_punctuation_are_separators() {
    let a = transform_dream("ship at ocean");
    let b = transform_dream("SHIP!!at--42--OCEAN.");
    assert_eq!(a, b);
}

#[test]
fn test_repeated_words_keep_first_position() {
    let model = transform_dream("tree near house, tree near house, near tree");

    assert_eq!(
        entity_summary(&model),
        owned(&[
            ("tree", EntityType::Object),
            ("near", EntityType::Unknown),
            ("house", EntityType::Place),
        ])
    );
    assert_eq!(model.entities[2].id, "entity_3");
}

#[test]
fn test_skip_search_sees_past_descriptors() {
    let model = transform_dream("the tower glowing above ancient ruined beach");

    assert_eq!(
        relation_summary(&model),
        rels(&[
            (RelationType::Above, "tower", "beach"),
            (RelationType::Modifies, "ruined", "beach"),
        ])
    );
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn test_json_shape() {
    let model = transform_dream("ship at ocean");
    let value: Value = serde_json::to_value(&model).unwrap();

    assert_eq!(
        value,
        json!({
            "entities": [
                {"id": "entity_1", "type": "object", "attributes": {"name": "ship"}},
                {"id": "entity_2", "type": "place", "attributes": {"name": "ocean"}}
            ],
            "relationships": [
                {"id": "relation_1", "type": "located_in", "from": "entity_1", "to": "entity_2"}
            ]
        })
    );
}

#[test]
fn test_json_parses_back() {
    let model = transform_dream("A floating city above the clouds with glass towers");
    let parsed: WorldModel = serde_json::from_str(&model.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, model);
}

#[test]
fn test_repeat_calls_are_byte_identical() {
    let pipeline = DreamPipeline::new();
    let dream = "bright car in dark room above ocean at jacked street";

    let first = pipeline.transform(dream).to_json().unwrap();
    let second = pipeline.transform(dream).to_json().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, transform_dream(dream).to_json().unwrap());
}
