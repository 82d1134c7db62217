//! Recent-kit history state for the sidebar.

#[cfg(test)]
#[path = "recent_test.rs"]
mod recent_test;

use crate::net::types::RecentItem;

/// How many history entries the sidebar requests. The backend keeps only the
/// last few kits for a clean history anyway.
pub const RECENT_LIMIT: u32 = 5;

/// Shared history-list state backed by the `/kits/recent/` endpoint.
#[derive(Clone, Debug, Default)]
pub struct RecentState {
    pub items: Vec<RecentItem>,
    pub loading: bool,
}
