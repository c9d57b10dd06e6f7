//! Shared core for the enrollment marketing site.
//!
//! The surrounding site is thin UI glue; everything with behavior worth
//! specifying lives here so the browser client and the server-side request
//! handlers validate and cache with one implementation:
//!
//! - [`validation`] — pure field validators, sanitizers, and display
//!   formatters used by every lead-capture form.
//! - [`consent`] — the persisted cookie-consent record and its fail-closed
//!   read path.
//! - [`cache`] — a consent-gated, two-tier, TTL-bounded cache for the small
//!   read-only lists shown on the public pages.
//! - [`intake`] — form submissions turned into sanitized lead records and
//!   handed to the outbound submission seam.

pub mod cache;
pub mod config;
pub mod consent;
pub mod intake;
pub mod storage;
pub mod telemetry;
pub mod validation;
