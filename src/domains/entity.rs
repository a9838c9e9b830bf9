//! Entity registry lookup and attribution.
//!
//! Maps registrable domains to the organizations that own them, using a
//! static registry loaded once per run.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::base::error::AuditError;
use crate::domains::resolver::DomainResolver;

/// Sentinel entity name returned when no registry entry matches.
pub const UNKNOWN_ENTITY: &str = "unknown";

/// One organization record from the registry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "entityName")]
    pub entity_name: String,
    /// Registry metadata carried through untouched.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            metadata: Map::new(),
        }
    }
}

/// Read-only mapping from registrable domain (or public suffix, for the
/// fallback key space) to an [`EntityRecord`]. Loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    records: HashMap<String, EntityRecord>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry out of `{"<domain>": {"entityName": ...}}` JSON.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let records: HashMap<String, EntityRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Load a registry from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|source| AuditError::RegistryIo {
            path: path.display().to_string(),
            source,
        })?;

        let registry = Self::parse(&json).map_err(|source| AuditError::RegistryFormat {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), records = registry.len(), "entity registry loaded");
        Ok(registry)
    }

    pub fn insert(&mut self, domain: impl Into<String>, record: EntityRecord) {
        self.records.insert(domain.into(), record);
    }

    pub fn get(&self, domain: &str) -> Option<&EntityRecord> {
        self.records.get(domain)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Name the organization behind `url`.
///
/// Looks up the URL's registrable domain first, then falls back to its
/// public suffix before settling on [`UNKNOWN_ENTITY`]. The fallback
/// recovers hosts whose registrable-domain computation diverges from the
/// registry's key set; a bare public suffix that coincidentally appears
/// as a registry key will mis-attribute, which is an accepted trade-off
/// of the two-step lookup.
pub fn entity_name_for(
    url: &str,
    registry: &EntityRegistry,
    resolver: &dyn DomainResolver,
) -> Result<String, AuditError> {
    let domain = resolver.registrable_domain(url)?;
    if let Some(record) = registry.get(&domain) {
        return Ok(record.entity_name.clone());
    }

    let suffix = resolver.top_level_domain(url)?;
    if let Some(record) = registry.get(&suffix) {
        tracing::debug!(
            domain = %domain,
            suffix = %suffix,
            "entity matched via public suffix fallback"
        );
        return Ok(record.entity_name.clone());
    }

    Ok(UNKNOWN_ENTITY.to_string())
}
