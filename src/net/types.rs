//! Shared wire DTOs for the studio/backend boundary.
//!
//! DESIGN
//! ======
//! The backend is a language-model-backed service and its section payloads
//! arrive in loosely-typed shapes. Content fields are therefore kept as raw
//! `serde_json::Value` and coerced at the display/reconcile boundary instead
//! of failing the whole deserialization, and the `{section, kit}` regenerate
//! round-trip stays lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Tone sent with generate requests.
pub const DEFAULT_TONE: &str = "cinematic";

/// Language sent with generate requests.
pub const DEFAULT_LANGUAGE: &str = "English";

/// The full structured content bundle for one topic.
///
/// `topic`/`tone`/`language` are set at generation time and immutable for
/// the session. The content fields are raw backend values; every one of them
/// is coercible to its canonical shape via `net::coerce` even when malformed.
/// The diagnostic fields are populated only on failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Curiosity hooks; canonical shape is a string list.
    #[serde(default)]
    pub hooks: serde_json::Value,
    /// Video title candidates; canonical shape is a string list.
    #[serde(default)]
    pub titles: serde_json::Value,
    /// Long description; canonical shape is a plain string.
    #[serde(default)]
    pub description: serde_json::Value,
    /// Search tags; canonical shape is a string list.
    #[serde(default)]
    pub tags: serde_json::Value,
    /// Thumbnail text/prompt pair; canonical shape is [`Thumbnail`].
    #[serde(default)]
    pub thumbnail: serde_json::Value,
    /// Short-form scripts; canonical shape is a list of [`Short`].
    #[serde(default)]
    pub shorts: serde_json::Value,
    /// Long-form voiceover script; canonical shape is a plain string.
    #[serde(default)]
    pub script: serde_json::Value,
    /// Backend-reported or transport error, when generation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw model output attached to an error for debugging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Repaired-but-still-unparseable model output attached to an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
    /// Human-readable pointer at the underlying failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_owned()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

impl Kit {
    /// A clean kit template with every content field at its empty canonical
    /// value. Matches the shape the backend returns on validation failure.
    pub fn empty(topic: &str, tone: &str, language: &str) -> Self {
        Self {
            topic: topic.to_owned(),
            tone: tone.to_owned(),
            language: language.to_owned(),
            hooks: serde_json::json!([]),
            titles: serde_json::json!([]),
            description: serde_json::Value::String(String::new()),
            tags: serde_json::json!([]),
            thumbnail: serde_json::json!({ "text": "", "prompt": "" }),
            shorts: serde_json::json!([]),
            script: serde_json::Value::String(String::new()),
            error: None,
            raw: None,
            fixed: None,
            hint: None,
        }
    }

    /// Synthetic kit installed when the backend could not be reached at all.
    pub fn transport_failure(topic: &str, detail: &str) -> Self {
        let mut kit = Self::empty(topic, DEFAULT_TONE, DEFAULT_LANGUAGE);
        kit.error = Some("Frontend could not call backend".to_owned());
        kit.raw = Some(detail.to_owned());
        kit
    }

    /// Whether the kit carries a backend-reported or transport error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for Kit {
    fn default() -> Self {
        Self::empty("", DEFAULT_TONE, DEFAULT_LANGUAGE)
    }
}

/// One short-form entry in its canonical display shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Short {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub script: String,
}

/// Thumbnail text/prompt pair in its canonical display shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Overlay text rendered on the thumbnail.
    #[serde(default)]
    pub text: String,
    /// Image-generation prompt for the thumbnail background.
    #[serde(default)]
    pub prompt: String,
}

/// Response body of `POST /regenerate/` — either `{section, value}` on
/// success or `{error, raw, fixed, hint}` when the backend could not repair
/// the model output.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegenerateOutcome {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub fixed: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// A history summary row from `GET /kits/recent/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentItem {
    /// Database id used to reload the full kit.
    pub id: i64,
    pub topic: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub language: String,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// Response body of `GET /kits/{id}/`.
#[derive(Clone, Debug, Deserialize)]
pub struct KitDetail {
    #[serde(default)]
    pub id: Option<i64>,
    /// The stored kit, when the id resolved.
    #[serde(default)]
    pub kit: Option<Kit>,
}
