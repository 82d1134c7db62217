//! Active-kit state and the regenerate reconciliation policy.
//!
//! DESIGN
//! ======
//! Regeneration responses from the backend can be partial or degraded.
//! Reconciliation never overwrites good content with empty or unusable
//! data: the kit accumulates the best version seen so far per section.
//! An empty coercion result is "no new data", not "clear the field".

#[cfg(test)]
#[path = "kit_test.rs"]
mod kit_test;

use serde_json::Value;

use crate::net::coerce;
use crate::net::types::{Kit, RegenerateOutcome};

/// State for the active kit and in-flight request tracking.
#[derive(Clone, Debug, Default)]
pub struct KitState {
    /// The current kit; replaced wholesale by generate and load-by-id.
    pub kit: Option<Kit>,
    /// Global in-flight flag. User-triggered operations are serialized from
    /// the UI's perspective by disabling controls while this is set; it is
    /// best-effort, not a hard lock.
    pub loading: bool,
    /// Section currently being regenerated, for per-card button labels.
    pub busy_section: Option<String>,
}

/// Merge a regenerate response into the kit.
///
/// An error outcome overwrites the diagnostic fields and leaves every
/// content field untouched, so a failed regenerate never destroys prior
/// content. A success outcome updates only the named section, per
/// [`apply_section`].
pub fn apply_regenerated(kit: &mut Kit, outcome: &RegenerateOutcome) {
    if let Some(error) = &outcome.error {
        kit.error = Some(error.clone());
        kit.raw = outcome.raw.clone();
        kit.fixed = outcome.fixed.clone();
        kit.hint = outcome.hint.clone();
        return;
    }

    let Some(section) = outcome.section.as_deref() else {
        return;
    };
    apply_section(kit, section, &outcome.value);
}

/// Apply a regenerated `value` to one named section of the kit.
///
/// List sections and plain-string sections keep their previous value when
/// the coercion yields nothing; the thumbnail merge is per-field. Applied
/// values are stored in canonical shape so the export payload and the
/// `{section, kit}` round-trip stay well-formed. Unrecognized section names
/// change nothing.
pub fn apply_section(kit: &mut Kit, section: &str, value: &Value) {
    match section {
        "hooks" | "titles" | "tags" => {
            let list = coerce::to_string_list(value);
            if list.is_empty() {
                return;
            }
            let canonical = Value::from(list);
            match section {
                "hooks" => kit.hooks = canonical,
                "titles" => kit.titles = canonical,
                _ => kit.tags = canonical,
            }
        }
        "shorts" => {
            let list = coerce::to_shorts_list(value);
            if list.is_empty() {
                return;
            }
            if let Ok(canonical) = serde_json::to_value(list) {
                kit.shorts = canonical;
            }
        }
        "thumbnail" => {
            let previous = coerce::to_thumbnail(&kit.thumbnail);
            let next = coerce::normalize_thumbnail(value, &previous);
            kit.thumbnail = serde_json::json!({ "text": next.text, "prompt": next.prompt });
        }
        "script" => {
            if let Some(text) = coerce::pick_non_empty_string(value) {
                kit.script = Value::String(text);
            }
        }
        "description" => {
            if let Some(text) = coerce::pick_non_empty_string(value) {
                kit.description = Value::String(text);
            }
        }
        _ => {}
    }
}
