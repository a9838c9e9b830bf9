//! Per-entry classification predicates.

use time::OffsetDateTime;

use crate::base::error::AuditError;
use crate::capture::entry::Entry;
use crate::cookies::attributes::CookieAttributes;
use crate::cookies::lifetime::is_long_lived;
use crate::domains::resolver::DomainResolver;

/// True if the entry's request went to a registrable domain other than
/// `first_party_domain` (compared as exact strings).
///
/// The classification is relative to exactly the first-party domain
/// supplied per call; nothing is cached across calls.
pub fn is_third_party(
    entry: &Entry,
    first_party_domain: &str,
    resolver: &dyn DomainResolver,
) -> Result<bool, AuditError> {
    let domain = resolver.registrable_domain(&entry.request.url)?;
    Ok(domain != first_party_domain)
}

/// True if any response header sets a long-lived `SameSite=None` cookie.
///
/// Scans every `Set-Cookie` record (names matched case-insensitively,
/// duplicates included) and short-circuits on the first cookie whose
/// parsed `samesite` attribute is `none` and whose lifetime meets
/// `min_age_days` as of `reference_time`.
pub fn has_tracking_cookie(
    entry: &Entry,
    min_age_days: i64,
    reference_time: OffsetDateTime,
) -> bool {
    for header in &entry.response.headers {
        if !header.name.eq_ignore_ascii_case("set-cookie") {
            continue;
        }

        let attrs = CookieAttributes::parse(&header.value);
        if attrs.same_site() == Some("none")
            && is_long_lived(&header.value, min_age_days, reference_time)
        {
            tracing::debug!(url = %entry.request.url, "long-lived cross-site cookie");
            return true;
        }
    }
    false
}
