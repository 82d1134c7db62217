//! Networking modules for the content-kit HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `coerce` normalizes loosely-shaped response
//! payloads into canonical display values, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod coerce;
pub mod types;
