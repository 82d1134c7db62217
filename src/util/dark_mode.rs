//! Dark-mode preference handling.
//!
//! The preference lives in `localStorage`; with nothing stored, the system
//! color-scheme preference decides. Applying toggles the `.dark-mode` class
//! on `<html>`. Browser-only; native builds see inert fallbacks.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "kit_studio_dark";

/// Resolve the initial dark-mode setting: stored preference first, system
/// preference second, light mode otherwise.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        stored_preference().unwrap_or_else(system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Some(value == "true")
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map_or(false, |query| query.matches())
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            let class_list = root.class_list();
            let result = if enabled {
                class_list.add_1("dark-mode")
            } else {
                class_list.remove_1("dark-mode")
            };
            let _ = result;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
