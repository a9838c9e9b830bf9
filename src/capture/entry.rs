//! Capture entry records.
//!
//! An [`Entry`] is one recorded request/response exchange from a browser
//! network trace. Entries are immutable once built; all classification
//! reads them through the lookup helpers here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::error::AuditError;

/// A single header as captured: original casing, original order.
///
/// Several records with the same name may coexist (multiple `Set-Cookie`
/// lines); lookups must consider all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    pub name: String,
    pub value: String,
}

impl HeaderRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Request half of a captured exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub url: String,
    pub headers: Vec<HeaderRecord>,
}

/// Response half of a captured exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    pub headers: Vec<HeaderRecord>,
}

/// One captured request/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub request: RequestRecord,
    pub response: ResponseRecord,
}

/// Which half of an entry a header lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderSide {
    Request,
    Response,
}

impl FromStr for HeaderSide {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "request" => Ok(HeaderSide::Request),
            "response" => Ok(HeaderSide::Response),
            other => Err(AuditError::InvalidHeaderSide {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HeaderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSide::Request => f.write_str("request"),
            HeaderSide::Response => f.write_str("response"),
        }
    }
}

impl Entry {
    /// Create an entry for `url` with no headers on either side.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            request: RequestRecord {
                url: url.into(),
                headers: Vec::new(),
            },
            response: ResponseRecord::default(),
        }
    }

    /// Append a request header, preserving order and duplicates.
    pub fn with_request_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.request.headers.push(HeaderRecord::new(name, value));
        self
    }

    /// Append a response header, preserving order and duplicates.
    pub fn with_response_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.response.headers.push(HeaderRecord::new(name, value));
        self
    }

    fn headers(&self, side: HeaderSide) -> &[HeaderRecord] {
        match side {
            HeaderSide::Request => &self.request.headers,
            HeaderSide::Response => &self.response.headers,
        }
    }

    /// True if any header on `side` is named `name`.
    ///
    /// Header names are matched ASCII-case-insensitively, uniformly; a
    /// present header with an empty value still counts.
    pub fn has_header(&self, side: HeaderSide, name: &str) -> bool {
        self.headers(side)
            .iter()
            .any(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Every value carried under `name` on `side`, in capture order.
    pub fn header_values<'a>(
        &'a self,
        side: HeaderSide,
        name: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.headers(side)
            .iter()
            .filter(move |h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
