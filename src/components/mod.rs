//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render studio chrome and kit content while reading shared
//! state from Leptos context providers; mutations go through callbacks owned
//! by the page.

pub mod error_banner;
pub mod kit_panel;
pub mod recent_list;
pub mod status_bar;
pub mod topic_form;
