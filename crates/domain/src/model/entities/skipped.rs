use std::{fmt, path::PathBuf};

use gostats_shared_kernel::PackageKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Unreadable,
    Malformed,
}

/// A source file left out of the statistics, with the error that excluded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub package: PackageKey,
    pub reason: SkipReason,
    pub message: String,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.reason {
            SkipReason::Unreadable => "unreadable",
            SkipReason::Malformed => "malformed",
        };
        write!(f, "skipped {} ({kind}): {}", self.path.display(), self.message)
    }
}
