//! Domain resolution over the Public Suffix List.
//!
//! Uses Mozilla's Public Suffix List via the `psl` crate to split a
//! request URL's host into registrable domain (eTLD+1) and public
//! suffix.

use psl::{List, Psl};
use url::Url;

use crate::base::error::AuditError;

/// Resolves request URLs into registrable domain / public suffix.
///
/// Classification and attribution go through this trait so tests can
/// substitute a canned resolver. Implementations must be pure lookups:
/// no state carried between calls.
pub trait DomainResolver {
    /// Registrable domain (eTLD+1) of the URL's host.
    /// For `https://sub.example.co.uk/x`, that is `example.co.uk`.
    fn registrable_domain(&self, url: &str) -> Result<String, AuditError>;

    /// Public suffix of the URL's host, which may be multi-label.
    /// For `https://sub.example.co.uk/x`, that is `co.uk`.
    fn top_level_domain(&self, url: &str) -> Result<String, AuditError>;
}

/// Production resolver backed by the bundled Public Suffix List.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver;

impl PslResolver {
    pub fn new() -> Self {
        Self
    }

    fn host_of(url: &str) -> Result<String, AuditError> {
        let parsed = Url::parse(url).map_err(|source| AuditError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let host = parsed.host_str().ok_or_else(|| AuditError::MissingHost {
            url: url.to_string(),
        })?;
        Ok(host.to_lowercase())
    }
}

impl DomainResolver for PslResolver {
    fn registrable_domain(&self, url: &str) -> Result<String, AuditError> {
        let host = Self::host_of(url)?;
        psl::domain(host.as_bytes())
            .and_then(|d| std::str::from_utf8(d.as_bytes()).ok())
            .map(|s| s.to_string())
            .ok_or(AuditError::NoRegistrableDomain { host })
    }

    fn top_level_domain(&self, url: &str) -> Result<String, AuditError> {
        let host = Self::host_of(url)?;
        List.suffix(host.as_bytes())
            .and_then(|s| std::str::from_utf8(s.as_bytes()).ok())
            .map(|s| s.to_string())
            .ok_or(AuditError::NoPublicSuffix { host })
    }
}
