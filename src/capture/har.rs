//! HAR capture ingestion.
//!
//! Reads the subset of the HTTP Archive format the auditor consumes:
//! request URL plus request/response header lists. Everything else in a
//! HAR file is ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::base::error::AuditError;
use crate::capture::entry::{Entry, HeaderRecord, RequestRecord, ResponseRecord};

#[derive(Debug, Deserialize)]
struct HarFile {
    log: HarLog,
}

#[derive(Debug, Deserialize)]
struct HarLog {
    #[serde(default)]
    entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
struct HarEntry {
    request: HarRequest,
    response: HarResponse,
}

#[derive(Debug, Deserialize)]
struct HarRequest {
    url: String,
    #[serde(default)]
    headers: Vec<HeaderRecord>,
}

#[derive(Debug, Deserialize)]
struct HarResponse {
    #[serde(default)]
    headers: Vec<HeaderRecord>,
}

impl From<HarEntry> for Entry {
    fn from(har: HarEntry) -> Self {
        Entry {
            request: RequestRecord {
                url: har.request.url,
                headers: har.request.headers,
            },
            response: ResponseRecord {
                headers: har.response.headers,
            },
        }
    }
}

/// Parse capture entries out of HAR-format JSON.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>, serde_json::Error> {
    let har: HarFile = serde_json::from_str(json)?;
    Ok(har.log.entries.into_iter().map(Entry::from).collect())
}

/// Load capture entries from a HAR file on disk.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>, AuditError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| AuditError::CaptureIo {
        path: path.display().to_string(),
        source,
    })?;

    let entries = parse_entries(&json).map_err(|source| AuditError::CaptureFormat {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "capture loaded");
    Ok(entries)
}
