//! `Set-Cookie` attribute parsing.

use std::collections::BTreeMap;

/// Parsed attributes of a single `Set-Cookie` header value.
///
/// Built fresh per header value, never persisted. Keys and values are
/// lower-cased; flag attributes with no `=` (`Secure`, `HttpOnly`) map
/// the name to itself as a presence marker. Malformed input never
/// errors; absent keys are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieAttributes {
    attrs: BTreeMap<String, String>,
}

impl CookieAttributes {
    /// Parse a raw `Set-Cookie` value into its attribute map.
    ///
    /// Segments are split on `;`, trimmed, lower-cased, then split on
    /// the first `=` only; extra `=` characters stay in the value, so
    /// `a=b=c` maps `a` to `b=c`.
    pub fn parse(raw: &str) -> Self {
        let mut attrs = BTreeMap::new();

        for segment in raw.split(';') {
            let segment = segment.trim().to_lowercase();
            if segment.is_empty() {
                continue;
            }
            match segment.split_once('=') {
                Some((name, value)) => {
                    attrs.insert(name.to_string(), value.to_string());
                }
                None => {
                    attrs.insert(segment.clone(), segment);
                }
            }
        }

        Self { attrs }
    }

    /// Value of the attribute `name` (lower-case), if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// True if the attribute `name` appeared, with or without a value.
    pub fn has(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// `Max-Age` in seconds. None when absent or unparsable.
    pub fn max_age(&self) -> Option<i64> {
        self.get("max-age").and_then(|v| v.parse().ok())
    }

    /// Raw `Expires` value, lower-cased.
    pub fn expires(&self) -> Option<&str> {
        self.get("expires")
    }

    /// `SameSite` value, lower-cased (`none`, `lax`, `strict`).
    pub fn same_site(&self) -> Option<&str> {
        self.get("samesite")
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}
