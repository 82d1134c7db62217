use super::*;
use serde_json::json;

// =============================================================
// Kit constructors
// =============================================================

#[test]
fn empty_kit_has_canonical_empty_content() {
    let kit = Kit::empty("topic", "cinematic", "English");
    assert_eq!(kit.topic, "topic");
    assert_eq!(kit.tone, "cinematic");
    assert_eq!(kit.language, "English");
    assert_eq!(kit.hooks, json!([]));
    assert_eq!(kit.titles, json!([]));
    assert_eq!(kit.tags, json!([]));
    assert_eq!(kit.shorts, json!([]));
    assert_eq!(kit.description, json!(""));
    assert_eq!(kit.script, json!(""));
    assert_eq!(kit.thumbnail, json!({ "text": "", "prompt": "" }));
    assert!(!kit.has_error());
}

#[test]
fn transport_failure_kit_carries_error_and_detail() {
    let kit = Kit::transport_failure("topic", "connection refused");
    assert_eq!(kit.error.as_deref(), Some("Frontend could not call backend"));
    assert_eq!(kit.raw.as_deref(), Some("connection refused"));
    assert!(kit.has_error());
    assert_eq!(kit.tone, DEFAULT_TONE);
    assert_eq!(kit.language, DEFAULT_LANGUAGE);
}

// =============================================================
// Serde tolerance
// =============================================================

#[test]
fn kit_deserializes_from_empty_object_with_defaults() {
    let kit: Kit = serde_json::from_value(json!({})).expect("kit");
    assert_eq!(kit.topic, "");
    assert_eq!(kit.tone, DEFAULT_TONE);
    assert_eq!(kit.language, DEFAULT_LANGUAGE);
    assert!(kit.hooks.is_null());
    assert!(kit.error.is_none());
}

#[test]
fn kit_preserves_malformed_content_values_through_round_trip() {
    let body = json!({
        "topic": "t",
        "hooks": { "items": ["h1"] },
        "shorts": "not a list",
        "thumbnail": 7
    });
    let kit: Kit = serde_json::from_value(body).expect("kit");
    let back = serde_json::to_value(&kit).expect("value");
    assert_eq!(back["hooks"], json!({ "items": ["h1"] }));
    assert_eq!(back["shorts"], json!("not a list"));
    assert_eq!(back["thumbnail"], json!(7));
}

#[test]
fn serialized_kit_omits_absent_diagnostics() {
    let value = serde_json::to_value(Kit::empty("t", "tone", "lang")).expect("value");
    let map = value.as_object().expect("object");
    assert!(!map.contains_key("error"));
    assert!(!map.contains_key("raw"));
    assert!(!map.contains_key("fixed"));
    assert!(!map.contains_key("hint"));
}

// =============================================================
// RegenerateOutcome
// =============================================================

#[test]
fn regenerate_outcome_parses_success_shape() {
    let outcome: RegenerateOutcome =
        serde_json::from_value(json!({ "section": "titles", "value": ["a", "b"] }))
            .expect("outcome");
    assert_eq!(outcome.section.as_deref(), Some("titles"));
    assert_eq!(outcome.value, json!(["a", "b"]));
    assert!(outcome.error.is_none());
}

#[test]
fn regenerate_outcome_parses_error_shape() {
    let outcome: RegenerateOutcome = serde_json::from_value(json!({
        "error": "Invalid JSON from model",
        "raw": "Here is your JSON: {",
        "fixed": "{",
        "hint": "EOF while parsing"
    }))
    .expect("outcome");
    assert_eq!(outcome.error.as_deref(), Some("Invalid JSON from model"));
    assert!(outcome.section.is_none());
    assert!(outcome.value.is_null());
}

// =============================================================
// History DTOs
// =============================================================

#[test]
fn recent_item_parses_backend_row() {
    let item: RecentItem = serde_json::from_value(json!({
        "id": 12,
        "topic": "lost cities",
        "tone": "cinematic",
        "language": "English",
        "created_at": "2025-11-03T10:00:00"
    }))
    .expect("item");
    assert_eq!(item.id, 12);
    assert_eq!(item.topic, "lost cities");
}

#[test]
fn kit_detail_tolerates_missing_kit() {
    let detail: KitDetail = serde_json::from_value(json!({ "id": 3 })).expect("detail");
    assert_eq!(detail.id, Some(3));
    assert!(detail.kit.is_none());

    let detail: KitDetail =
        serde_json::from_value(json!({ "id": 3, "kit": { "topic": "t" } })).expect("detail");
    assert_eq!(detail.kit.expect("kit").topic, "t");
}
