//! Capture data model and ingestion.
//!
//! A capture is an ordered sequence of [`Entry`] records, one per
//! request/response exchange. [`har`] reads the HAR subset the auditor
//! consumes; everything downstream works on [`Entry`] values regardless
//! of where they came from.

pub mod entry;
pub mod har;

pub use entry::{Entry, HeaderRecord, HeaderSide, RequestRecord, ResponseRecord};
pub use har::{load_entries, parse_entries};
