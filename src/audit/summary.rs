//! Capture aggregation.
//!
//! Folds a capture's entries into one [`AggregateReport`]: header
//! counts, deduplicated third-party and tracker domain sets, entity
//! attribution, and an ordered per-entry summary sequence.

use std::collections::BTreeSet;

use serde::Serialize;
use time::OffsetDateTime;

use crate::audit::classify;
use crate::base::error::AuditError;
use crate::capture::entry::{Entry, HeaderSide};
use crate::domains::entity::{self, EntityRegistry};
use crate::domains::resolver::DomainResolver;

/// Characters of the request URL kept in a per-entry summary.
const URL_SUMMARY_CHARS: usize = 128;

/// Default minimum retention, in days, for a cross-site cookie to count
/// as tracking.
pub const DEFAULT_MIN_COOKIE_AGE_DAYS: i64 = 60;

/// Per-run audit parameters.
///
/// Always passed explicitly; the engine keeps no ambient state, so the
/// same entries can be audited against different first parties or
/// thresholds without interference.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Registrable domain of the audited site. Everything else is a
    /// third party.
    pub first_party_domain: String,
    /// Minimum lifetime for a `SameSite=None` cookie to count as
    /// tracking.
    pub min_cookie_age_days: i64,
    /// When the capture was taken. Cookie lifetimes are judged against
    /// this instant, not the wall clock, so reruns stay reproducible.
    pub reference_time: OffsetDateTime,
}

impl AuditConfig {
    pub fn new(first_party_domain: impl Into<String>, reference_time: OffsetDateTime) -> Self {
        Self {
            first_party_domain: first_party_domain.into(),
            min_cookie_age_days: DEFAULT_MIN_COOKIE_AGE_DAYS,
            reference_time,
        }
    }

    pub fn with_min_cookie_age_days(mut self, days: i64) -> Self {
        self.min_cookie_age_days = days;
        self
    }
}

/// Per-entry classification summary. Order matches the capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    /// Request URL, truncated to its first 128 characters.
    pub url: String,
    /// Registrable domain the request went to.
    pub domain: String,
    pub third_party: bool,
    /// Whether the response carried any `Set-Cookie` header.
    pub sets_cookies: bool,
    /// Attributed organization, or `unknown`.
    pub entity: String,
}

/// Aggregate classification of one capture.
///
/// The domain and entity sets are deduplicated and carry no ordering
/// guarantee; `requests` preserves capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub num_requests: usize,
    /// Requests that sent a `Cookie` header.
    pub num_requests_with_cookies: usize,
    /// Responses that carried a `Set-Cookie` header.
    pub num_responses_with_cookies: usize,
    /// Distinct registrable domains other than the first party.
    pub third_party_domains: BTreeSet<String>,
    /// Distinct registrable domains that set a qualifying tracking
    /// cookie. Not restricted to third parties.
    pub tracker_cookie_domains: BTreeSet<String>,
    /// Distinct entity names across all entries.
    pub entities: BTreeSet<String>,
    pub requests: Vec<RequestSummary>,
}

/// Reports for the two consent variants of the same capture target.
#[derive(Debug, Clone, Serialize)]
pub struct ConsentReport {
    pub accepted: AggregateReport,
    pub rejected: AggregateReport,
}

/// Fold `entries` into one report.
///
/// Pure single pass; per-entry work is independent. The first entry
/// whose URL fails domain resolution aborts the fold with
/// [`AuditError::EntryFailed`] naming the entry. Partial reports are
/// never produced, so data-quality problems surface instead of skewing
/// the counts.
pub fn summarize(
    entries: &[Entry],
    config: &AuditConfig,
    resolver: &dyn DomainResolver,
    registry: &EntityRegistry,
) -> Result<AggregateReport, AuditError> {
    let mut report = AggregateReport {
        num_requests: entries.len(),
        ..AggregateReport::default()
    };

    for (index, entry) in entries.iter().enumerate() {
        fold_entry(&mut report, entry, config, resolver, registry).map_err(|source| {
            AuditError::entry_failed(index, entry.request.url.as_str(), source)
        })?;
    }

    tracing::debug!(
        first_party = %config.first_party_domain,
        requests = report.num_requests,
        third_party_domains = report.third_party_domains.len(),
        tracker_domains = report.tracker_cookie_domains.len(),
        "capture summarized"
    );
    Ok(report)
}

fn fold_entry(
    report: &mut AggregateReport,
    entry: &Entry,
    config: &AuditConfig,
    resolver: &dyn DomainResolver,
    registry: &EntityRegistry,
) -> Result<(), AuditError> {
    let url = &entry.request.url;

    // One resolution per entry, shared by the third-party check, the
    // tracker set, and the summary record.
    let domain = resolver.registrable_domain(url)?;
    let third_party = domain != config.first_party_domain;
    let sets_cookies = entry.has_header(HeaderSide::Response, "set-cookie");
    let entity = entity::entity_name_for(url, registry, resolver)?;

    if entry.has_header(HeaderSide::Request, "cookie") {
        report.num_requests_with_cookies += 1;
    }
    if sets_cookies {
        report.num_responses_with_cookies += 1;
    }
    if third_party {
        report.third_party_domains.insert(domain.clone());
    }
    if classify::has_tracking_cookie(entry, config.min_cookie_age_days, config.reference_time) {
        report.tracker_cookie_domains.insert(domain.clone());
    }
    report.entities.insert(entity.clone());

    report.requests.push(RequestSummary {
        url: truncate_url(url),
        domain,
        third_party,
        sets_cookies,
        entity,
    });
    Ok(())
}

/// Summarize both consent variants with the same configuration.
pub fn summarize_pair(
    accepted: &[Entry],
    rejected: &[Entry],
    config: &AuditConfig,
    resolver: &dyn DomainResolver,
    registry: &EntityRegistry,
) -> Result<ConsentReport, AuditError> {
    Ok(ConsentReport {
        accepted: summarize(accepted, config, resolver, registry)?,
        rejected: summarize(rejected, config, resolver, registry)?,
    })
}

fn truncate_url(url: &str) -> String {
    match url.char_indices().nth(URL_SUMMARY_CHARS) {
        Some((idx, _)) => url[..idx].to_string(),
        None => url.to_string(),
    }
}
