// crates/ports/src/extraction.rs
use gostats_domain::FileFacts;
use thiserror::Error;

/// The source could not be understood by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct MalformedSource {
    pub reason: String,
}

impl MalformedSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Port for turning the raw bytes of one source file into [`FileFacts`].
///
/// Implementations are pure: the same `(name, source)` always yields the same result.
pub trait UnitExtractor: Send + Sync {
    fn extract(&self, name: &str, source: &[u8]) -> Result<FileFacts, MalformedSource>;
}
