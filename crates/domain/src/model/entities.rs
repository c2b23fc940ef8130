pub mod file_facts;
pub mod manifest;
pub mod package_facts;
pub mod skipped;

pub use file_facts::{FileFacts, FileFactsBuilder};
pub use manifest::{ManifestFacts, Requirement};
pub use package_facts::PackageFacts;
pub use skipped::{SkipReason, SkippedFile};
