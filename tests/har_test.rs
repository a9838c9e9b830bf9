//! HAR ingestion tests.

use harscan::base::AuditError;
use harscan::capture::{har, HeaderSide};

const CAPTURE: &str = r#"{
    "log": {
        "version": "1.2",
        "creator": { "name": "browser", "version": "122.0" },
        "pages": [],
        "entries": [
            {
                "startedDateTime": "2024-02-28T09:15:00.000Z",
                "time": 42.0,
                "request": {
                    "method": "GET",
                    "url": "https://www.example.com/",
                    "httpVersion": "HTTP/2",
                    "headers": [
                        { "name": "Host", "value": "www.example.com" },
                        { "name": "Cookie", "value": "session=abc" }
                    ],
                    "queryString": [],
                    "bodySize": 0
                },
                "response": {
                    "status": 200,
                    "statusText": "OK",
                    "headers": [
                        { "name": "Content-Type", "value": "text/html" },
                        { "name": "Set-Cookie", "value": "a=1; Path=/" },
                        { "name": "Set-Cookie", "value": "b=2; Path=/" }
                    ],
                    "content": { "size": 1024, "mimeType": "text/html" }
                }
            },
            {
                "request": { "url": "https://cdn.assets.net/app.js", "headers": [] },
                "response": { "headers": [] }
            }
        ]
    }
}"#;

#[test]
fn test_parse_capture_subset() {
    let entries = har::parse_entries(CAPTURE).unwrap();
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first.request.url, "https://www.example.com/");
    assert!(first.has_header(HeaderSide::Request, "cookie"));
    assert!(first.has_header(HeaderSide::Response, "set-cookie"));

    // Both Set-Cookie records survive ingestion.
    let cookies: Vec<_> = first
        .header_values(HeaderSide::Response, "set-cookie")
        .collect();
    assert_eq!(cookies, vec!["a=1; Path=/", "b=2; Path=/"]);

    let second = &entries[1];
    assert!(second.request.headers.is_empty());
    assert!(!second.has_header(HeaderSide::Response, "set-cookie"));
}

#[test]
fn test_load_capture_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accept.har");
    std::fs::write(&path, CAPTURE).unwrap();

    let entries = har::load_entries(&path).unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_missing_capture_file() {
    let err = har::load_entries("/definitely/not/here.har").unwrap_err();
    assert!(matches!(err, AuditError::CaptureIo { .. }));
}

#[test]
fn test_malformed_capture_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.har");
    std::fs::write(&path, "{ not json").unwrap();

    let err = har::load_entries(&path).unwrap_err();
    assert!(matches!(err, AuditError::CaptureFormat { .. }));
}
