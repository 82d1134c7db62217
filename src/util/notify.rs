//! Fire-and-forget user notifications.

/// Show a blocking browser alert. No-op outside the browser.
///
/// Used for failures that should not mutate state: a failed regenerate or
/// export leaves the kit exactly as it was, so an alert is the whole story.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
