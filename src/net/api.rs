//! REST API helpers for communicating with the content-kit backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Read operations
//! degrade to `None`; write operations surface a failure message the page
//! turns into a synthetic error kit or an alert.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{Kit, KitDetail, RecentItem, RegenerateOutcome};

/// Default backend base path used when the hosting page injects nothing.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Global the hosting page may set before the WASM bundle loads to point the
/// studio at a different backend.
#[cfg(feature = "hydrate")]
const API_BASE_GLOBAL: &str = "KIT_STUDIO_API_BASE";

#[cfg(any(test, feature = "hydrate"))]
fn normalized_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Resolve the backend base path, preferring the startup-injected override.
#[cfg(feature = "hydrate")]
fn api_base() -> String {
    web_sys::window()
        .and_then(|window| {
            js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(API_BASE_GLOBAL)).ok()
        })
        .and_then(|value| value.as_string())
        .and_then(|base| normalized_base(&base))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn generate_endpoint(base: &str) -> String {
    format!("{base}/generate/")
}

#[cfg(any(test, feature = "hydrate"))]
fn regenerate_endpoint(base: &str) -> String {
    format!("{base}/regenerate/")
}

#[cfg(any(test, feature = "hydrate"))]
fn export_endpoint(base: &str) -> String {
    format!("{base}/export/")
}

#[cfg(any(test, feature = "hydrate"))]
fn recent_kits_endpoint(base: &str, limit: u32) -> String {
    format!("{base}/kits/recent/?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn kit_detail_endpoint(base: &str, id: i64) -> String {
    format!("{base}/kits/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn health_endpoint(base: &str) -> String {
    format!("{base}/health/")
}

#[cfg(any(test, feature = "hydrate"))]
fn export_failed_message(status: u16) -> String {
    format!("export request failed: {status}")
}

/// Generate a full kit for `topic` via `POST /generate/`.
///
/// The backend encodes logical failures inside the kit body (possibly with a
/// non-2xx status), so the response JSON is taken as the kit regardless of
/// status code.
///
/// # Errors
///
/// Returns the failure message when the request cannot be sent or the body
/// is not a JSON kit.
pub async fn generate_kit(topic: &str, tone: &str, language: &str) -> Result<Kit, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "topic": topic, "tone": tone, "language": language });
        let resp = gloo_net::http::Request::post(&generate_endpoint(&api_base()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<Kit>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (topic, tone, language);
        Err("not available on server".to_owned())
    }
}

/// Regenerate one section via `POST /regenerate/`, round-tripping the whole
/// current kit so the backend can keep the new section consistent with it.
///
/// # Errors
///
/// Returns the failure message on transport or decode failure. A backend
/// that answered but could not produce the section reports that inside the
/// returned [`RegenerateOutcome`] instead.
pub async fn regenerate_section(section: &str, kit: &Kit) -> Result<RegenerateOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "section": section, "kit": kit });
        let resp = gloo_net::http::Request::post(&regenerate_endpoint(&api_base()))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<RegenerateOutcome>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (section, kit);
        Err("not available on server".to_owned())
    }
}

/// Export a kit as a plain-text bundle via `POST /export/`.
///
/// # Errors
///
/// Returns the failure message when the request cannot be sent or the server
/// answers with a non-OK status.
pub async fn export_kit(kit: &Kit) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&export_endpoint(&api_base()))
            .json(kit)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(export_failed_message(resp.status()));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kit;
        Err("not available on server".to_owned())
    }
}

/// Fetch history summaries via `GET /kits/recent/?limit=N`.
/// Returns `None` on any failure; the sidebar treats that as an empty list.
pub async fn fetch_recent_kits(limit: u32) -> Option<Vec<RecentItem>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&recent_kits_endpoint(&api_base(), limit))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        #[derive(serde::Deserialize)]
        struct RecentResponse {
            results: Vec<RecentItem>,
        }
        resp.json::<RecentResponse>()
            .await
            .ok()
            .map(|body| body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        None
    }
}

/// Load a stored kit via `GET /kits/{id}/`.
/// Returns `None` if the id does not resolve or on any failure.
pub async fn fetch_kit_detail(id: i64) -> Option<KitDetail> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&kit_detail_endpoint(&api_base(), id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<KitDetail>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Probe `GET /health/` and return the backend's status string.
pub async fn fetch_health() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&health_endpoint(&api_base()))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        #[derive(serde::Deserialize)]
        struct HealthResponse {
            status: String,
        }
        resp.json::<HealthResponse>().await.ok().map(|body| body.status)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
