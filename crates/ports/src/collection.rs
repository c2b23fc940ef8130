// crates/ports/src/collection.rs
use gostats_domain::FileFacts;
use gostats_shared_kernel::{InfraResult, Result};

use crate::{cancel::CancelToken, filesystem::SourceEntryDto};

/// Outcome of reading and extracting a single source file.
#[derive(Debug)]
pub struct CollectedFile {
    pub entry: SourceEntryDto,
    /// `FileUnreadable` / `FileMalformed` on failure.
    pub outcome: InfraResult<FileFacts>,
}

/// Port for reading and extracting every discovered file.
///
/// Per-file failures are reported through [`CollectedFile::outcome`]; the returned
/// `Err` is reserved for failures of the collection itself (pool setup, cancellation).
/// Every input entry appears exactly once in the output; order is unspecified.
pub trait FactCollector: Send + Sync {
    fn collect(&self, files: Vec<SourceEntryDto>, cancel: &CancelToken) -> Result<Vec<CollectedFile>>;
}
