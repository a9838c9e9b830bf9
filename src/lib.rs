//! # harscan
//!
//! A HAR capture auditing library for third-party request and
//! tracking-cookie classification.
//!
//! `harscan` takes a browser network capture and a declared first-party
//! domain and determines which requests went to third parties, which
//! responses set long-lived cross-site cookies, and which known
//! organizations those third parties belong to. Run it over an
//! "accepted" and a "rejected" capture of the same site to compare what
//! a consent banner actually changes.
//!
//! ## Features
//!
//! - **Third-party detection**: registrable-domain comparison over the
//!   Public Suffix List
//! - **Tracking cookies**: `SameSite=None` cookies whose lifetime meets
//!   a configurable retention threshold, judged against the capture's
//!   reference time for reproducible reruns
//! - **Entity attribution**: registrable-domain lookup with a
//!   public-suffix fallback against a static registry
//! - **HAR ingestion**: serde-based loader for the capture subset the
//!   auditor consumes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use harscan::audit::{summarize, AuditConfig};
//! use harscan::capture::har;
//! use harscan::domains::{EntityRegistry, PslResolver};
//! use time::macros::datetime;
//!
//! fn main() -> Result<(), harscan::base::AuditError> {
//!     let entries = har::load_entries("capture_accept.har")?;
//!     let registry = EntityRegistry::load("domain_map.json")?;
//!     let config = AuditConfig::new("example.com", datetime!(2024-02-28 0:00 UTC));
//!
//!     let report = summarize(&entries, &config, &PslResolver::new(), &registry)?;
//!     println!("{} third parties", report.third_party_domains.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`capture`] - Entry records and HAR ingestion
//! - [`cookies`] - Cookie attribute parsing and lifetime classification
//! - [`domains`] - Domain resolution and entity attribution
//! - [`audit`] - Per-entry classification and capture aggregation

pub mod audit;
pub mod base;
pub mod capture;
pub mod cookies;
pub mod domains;
