//! Client-side file download via Blob URLs.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Build the export filename for a kit topic.
///
/// Spaces become underscores and characters outside `[A-Za-z0-9 _-]` are
/// dropped, matching the backend's attachment naming; topics longer than 30
/// characters are truncated. A topic with nothing usable falls back to
/// `kit.txt`.
pub fn export_file_name(topic: &str) -> String {
    let safe: String = topic
        .chars()
        .take(30)
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    let safe = safe.trim().replace(' ', "_");
    if safe.is_empty() {
        "kit.txt".to_owned()
    } else {
        format!("{safe}_kit.txt")
    }
}

/// Trigger a browser download of `bytes` under `filename`.
///
/// Builds an object URL for a one-part blob and clicks a detached anchor.
/// Failures are logged and swallowed; the user can simply retry the export.
pub fn save_file(filename: &str, bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
            leptos::logging::warn!("download: could not build blob for {filename}");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            leptos::logging::warn!("download: could not create object url for {filename}");
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, bytes);
    }
}
