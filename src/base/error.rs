use thiserror::Error;

/// Audit failure taxonomy.
///
/// Classification aborts on the first unrecoverable input; recoverable
/// gaps (missing cookie attributes, registry misses) never surface here.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL `{url}` has no host")]
    MissingHost { url: String },

    #[error("no registrable domain for host `{host}`")]
    NoRegistrableDomain { host: String },

    #[error("no public suffix for host `{host}`")]
    NoPublicSuffix { host: String },

    #[error("header side must be `request` or `response`, got `{value}`")]
    InvalidHeaderSide { value: String },

    #[error("capture entry {index} (`{url}`) failed")]
    EntryFailed {
        index: usize,
        url: String,
        #[source]
        source: Box<AuditError>,
    },

    #[error("failed to read capture file `{path}`")]
    CaptureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed capture file `{path}`")]
    CaptureFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read entity registry `{path}`")]
    RegistryIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed entity registry `{path}`")]
    RegistryFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AuditError {
    /// Wrap a per-entry failure with the entry's position and URL so the
    /// caller can see which entry and which step aborted the run.
    pub fn entry_failed(index: usize, url: impl Into<String>, source: AuditError) -> Self {
        AuditError::EntryFailed {
            index,
            url: url.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_failed_names_entry_and_cause() {
        let inner = AuditError::MissingHost {
            url: "data:text/plain,hi".into(),
        };
        let err = AuditError::entry_failed(3, "data:text/plain,hi", inner);

        let msg = err.to_string();
        assert!(msg.contains("entry 3"));
        assert!(msg.contains("data:text/plain,hi"));

        match err {
            AuditError::EntryFailed { index, source, .. } => {
                assert_eq!(index, 3);
                assert!(matches!(*source, AuditError::MissingHost { .. }));
            }
            _ => panic!("expected EntryFailed"),
        }
    }
}
