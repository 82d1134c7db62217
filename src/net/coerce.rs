//! Total coercion of loosely-shaped backend values into display shapes.
//!
//! DESIGN
//! ======
//! Generation output comes from a language model: list sections arrive as
//! arrays of strings, arrays of objects, comma-joined strings, or wrapped
//! one level deep. Every function here accepts any `serde_json::Value` and
//! returns a canonical value without panicking; uninterpretable input
//! becomes the empty canonical value, never an error.

#[cfg(test)]
#[path = "coerce_test.rs"]
mod coerce_test;

use serde_json::Value;

use crate::net::types::{Short, Thumbnail};

/// Keys a wrapped list may hide under, tried in order.
const LIST_KEYS: [&str; 4] = ["items", "titles", "hooks", "tags"];

/// Keys a plain-string section may hide under, tried in order.
const STRING_KEYS: [&str; 4] = ["script", "text", "content", "value"];

/// Coerce a value into a list of non-empty trimmed strings.
///
/// Arrays are flattened element-wise: strings pass through, objects
/// contribute their `title` or `text` field (else the space-joined
/// concatenation of their string-valued fields), other scalars are
/// stringified. A single string splits on newlines and commas. A non-array
/// object is unwrapped through the first of `items`/`titles`/`hooks`/`tags`
/// holding a sequence. Anything else yields an empty list.
pub fn to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(flatten_list_entry)
            .map(|entry| entry.trim().to_owned())
            .filter(|entry| !entry.is_empty())
            .collect(),
        Value::String(text) => text
            .split(['\n', ','])
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
        Value::Object(map) => {
            for key in LIST_KEYS {
                if let Some(nested) = map.get(key) {
                    if nested.is_array() {
                        return to_string_list(nested);
                    }
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// One list element reduced to display text. Empty output is dropped by the
/// caller.
fn flatten_list_entry(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(map) => {
            for key in ["title", "text"] {
                if let Some(Value::String(text)) = map.get(key) {
                    return text.clone();
                }
            }
            map.values()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        }
        Value::Null | Value::Array(_) => String::new(),
        other => other.to_string(),
    }
}

/// Coerce a value into a list of shorts, keeping only string-typed
/// `title`/`script` fields and dropping entries where both are empty.
pub fn to_shorts_list(value: &Value) -> Vec<Short> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let title = item
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            let script = item
                .get("script")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            if title.is_empty() && script.is_empty() {
                None
            } else {
                Some(Short { title, script })
            }
        })
        .collect()
}

/// Coerce a value into a thumbnail record; non-records and missing or
/// non-string fields yield empty strings.
pub fn to_thumbnail(value: &Value) -> Thumbnail {
    Thumbnail {
        text: value
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        prompt: value
            .get("prompt")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
    }
}

/// Extract a non-empty trimmed string from a value.
///
/// Plain strings are used directly; records are probed through `script`,
/// `text`, `content`, `value` in that order. `None` means no usable text.
pub fn pick_non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Value::Object(map) => {
            for key in STRING_KEYS {
                if let Some(Value::String(text)) = map.get(key) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_owned());
                    }
                }
            }
            None
        }
        _ => None,
    }
}

/// Merge a regenerated thumbnail value into `previous`, field by field.
///
/// New non-empty `text`/`prompt` win independently; a bare string counts as
/// a candidate prompt only. Unusable input returns `previous` unchanged, so
/// a degraded regenerate never erases a good thumbnail.
pub fn normalize_thumbnail(value: &Value, previous: &Thumbnail) -> Thumbnail {
    match value {
        Value::String(text) => {
            let prompt = text.trim();
            if prompt.is_empty() {
                previous.clone()
            } else {
                Thumbnail {
                    text: previous.text.clone(),
                    prompt: prompt.to_owned(),
                }
            }
        }
        Value::Object(map) => {
            let text = map
                .get("text")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty());
            let prompt = map
                .get("prompt")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|prompt| !prompt.is_empty());
            Thumbnail {
                text: text.map_or_else(|| previous.text.clone(), ToOwned::to_owned),
                prompt: prompt.map_or_else(|| previous.prompt.clone(), ToOwned::to_owned),
            }
        }
        _ => previous.clone(),
    }
}
