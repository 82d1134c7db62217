use super::*;
use serde_json::json;

// =============================================================
// to_string_list
// =============================================================

#[test]
fn string_list_flattens_mixed_array() {
    let value = json!(["a", { "title": "b" }, { "text": "c" }, { "x": "d" }, 5]);
    assert_eq!(to_string_list(&value), vec!["a", "b", "c", "d", "5"]);
}

#[test]
fn string_list_splits_single_string_on_commas_and_newlines() {
    let value = json!("a, b\nc");
    assert_eq!(to_string_list(&value), vec!["a", "b", "c"]);
}

#[test]
fn string_list_trims_and_drops_empty_entries() {
    let value = json!(["  spaced  ", "", "   ", { "title": "" }, null]);
    assert_eq!(to_string_list(&value), vec!["spaced"]);
}

#[test]
fn string_list_prefers_title_over_text() {
    let value = json!([{ "title": "from title", "text": "from text" }]);
    assert_eq!(to_string_list(&value), vec!["from title"]);
}

#[test]
fn string_list_joins_string_fields_without_title_or_text() {
    let value = json!([{ "first": "high", "second": "noon", "count": 3 }]);
    assert_eq!(to_string_list(&value), vec!["high noon"]);
}

#[test]
fn string_list_unwraps_nested_sequence_first_key_wins() {
    let value = json!({ "titles": ["t1", "t2"], "hooks": ["h1"] });
    assert_eq!(to_string_list(&value), vec!["t1", "t2"]);

    let value = json!({ "items": ["i1"], "tags": ["g1"] });
    assert_eq!(to_string_list(&value), vec!["i1"]);
}

#[test]
fn string_list_skips_wrapper_keys_holding_non_sequences() {
    let value = json!({ "items": "not a list", "tags": ["kept"] });
    assert_eq!(to_string_list(&value), vec!["kept"]);
}

#[test]
fn string_list_uninterpretable_input_is_empty() {
    assert!(to_string_list(&json!(null)).is_empty());
    assert!(to_string_list(&json!(42)).is_empty());
    assert!(to_string_list(&json!({ "unrelated": true })).is_empty());
}

// =============================================================
// to_shorts_list
// =============================================================

#[test]
fn shorts_keep_partial_entries_and_drop_empty_objects() {
    let value = json!([{ "title": "T" }, { "script": "S" }, {}]);
    let shorts = to_shorts_list(&value);
    assert_eq!(shorts.len(), 2);
    assert_eq!(shorts[0].title, "T");
    assert_eq!(shorts[0].script, "");
    assert_eq!(shorts[1].title, "");
    assert_eq!(shorts[1].script, "S");
}

#[test]
fn shorts_ignore_non_string_fields() {
    let value = json!([{ "title": 7, "script": "kept" }]);
    let shorts = to_shorts_list(&value);
    assert_eq!(shorts.len(), 1);
    assert_eq!(shorts[0].title, "");
    assert_eq!(shorts[0].script, "kept");
}

#[test]
fn shorts_non_array_input_is_empty() {
    assert!(to_shorts_list(&json!("five shorts please")).is_empty());
    assert!(to_shorts_list(&json!({ "title": "x" })).is_empty());
}

// =============================================================
// to_thumbnail
// =============================================================

#[test]
fn thumbnail_extracts_string_fields() {
    let value = json!({ "text": "BIG", "prompt": "sunset over ruins" });
    let thumb = to_thumbnail(&value);
    assert_eq!(thumb.text, "BIG");
    assert_eq!(thumb.prompt, "sunset over ruins");
}

#[test]
fn thumbnail_non_record_input_is_empty() {
    let thumb = to_thumbnail(&json!("not a record"));
    assert_eq!(thumb.text, "");
    assert_eq!(thumb.prompt, "");

    let thumb = to_thumbnail(&json!({ "text": 5, "prompt": null }));
    assert_eq!(thumb.text, "");
    assert_eq!(thumb.prompt, "");
}

// =============================================================
// pick_non_empty_string
// =============================================================

#[test]
fn pick_returns_trimmed_plain_string() {
    assert_eq!(pick_non_empty_string(&json!("  hi  ")), Some("hi".to_owned()));
}

#[test]
fn pick_rejects_blank_string() {
    assert_eq!(pick_non_empty_string(&json!("   ")), None);
}

#[test]
fn pick_probes_record_fields_in_order() {
    assert_eq!(
        pick_non_empty_string(&json!({ "content": "  hi  " })),
        Some("hi".to_owned())
    );
    assert_eq!(
        pick_non_empty_string(&json!({ "script": "first", "text": "second" })),
        Some("first".to_owned())
    );
    assert_eq!(
        pick_non_empty_string(&json!({ "script": " ", "value": "fallback" })),
        Some("fallback".to_owned())
    );
}

#[test]
fn pick_reports_no_value_for_empty_record() {
    assert_eq!(pick_non_empty_string(&json!({})), None);
    assert_eq!(pick_non_empty_string(&json!(12)), None);
}

// =============================================================
// normalize_thumbnail
// =============================================================

fn previous() -> crate::net::types::Thumbnail {
    crate::net::types::Thumbnail {
        text: "old text".to_owned(),
        prompt: "old prompt".to_owned(),
    }
}

#[test]
fn normalize_merges_fields_independently() {
    let next = normalize_thumbnail(&json!({ "text": "", "prompt": "new" }), &previous());
    assert_eq!(next.text, "old text");
    assert_eq!(next.prompt, "new");

    let next = normalize_thumbnail(&json!({ "text": "NEW", "prompt": "  " }), &previous());
    assert_eq!(next.text, "NEW");
    assert_eq!(next.prompt, "old prompt");
}

#[test]
fn normalize_treats_bare_string_as_prompt_candidate() {
    let prev = crate::net::types::Thumbnail {
        text: "kept".to_owned(),
        prompt: "ignored".to_owned(),
    };
    let next = normalize_thumbnail(&json!("just a prompt"), &prev);
    assert_eq!(next.text, "kept");
    assert_eq!(next.prompt, "just a prompt");
}

#[test]
fn normalize_unusable_input_returns_previous() {
    assert_eq!(normalize_thumbnail(&json!(null), &previous()), previous());
    assert_eq!(normalize_thumbnail(&json!(""), &previous()), previous());
    assert_eq!(
        normalize_thumbnail(&json!({ "text": 1, "prompt": [] }), &previous()),
        previous()
    );
}
