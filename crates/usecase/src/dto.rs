use gostats_domain::{SkippedFile, Stats};
use serde::{Deserialize, Serialize};

/// Successful gather: the statistics plus every file left out of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatherReport {
    pub stats: Stats,
    pub skipped: Vec<SkippedFile>,
}

impl GatherReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
