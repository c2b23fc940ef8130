// crates/ports/src/manifest.rs
use std::path::Path;

use gostats_domain::ManifestFacts;
use gostats_shared_kernel::Result;

/// Port for reading the manifest that identifies the project under `root`.
///
/// A missing or malformed manifest is fatal for the whole run.
pub trait ManifestReader: Send + Sync {
    fn read(&self, root: &Path) -> Result<ManifestFacts>;
}
