// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use gostats_shared_kernel::{PackageKey, Result};
use serde::{Deserialize, Serialize};

/// Input parameters controlling source discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkPlan {
    pub root: PathBuf,
    /// Source file extension without the dot, e.g. `go`.
    pub extension: String,
    pub include_tests: bool,
    pub follow_links: bool,
    pub include_hidden: bool,
    pub no_default_prune: bool,
    pub respect_gitignore: bool,
    pub exclude_patterns: Vec<String>,
}

impl WalkPlan {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            include_tests: true,
            follow_links: false,
            include_hidden: false,
            no_default_prune: false,
            respect_gitignore: true,
            exclude_patterns: Vec::new(),
        }
    }
}

/// A source file discovered by the walk, tagged with its package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntryDto {
    pub path: PathBuf,
    pub package: PackageKey,
    pub name: String,
}

/// A visited directory, whether or not it holds source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDirDto {
    pub key: PackageKey,
    pub name: String,
    pub path: PathBuf,
}

/// Result of a walk: every visited directory and every source file, both sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTree {
    pub packages: Vec<PackageDirDto>,
    pub files: Vec<SourceEntryDto>,
}

/// Port for discovering source files and their packages.
pub trait SourceEnumerator: Send + Sync {
    fn enumerate(&self, plan: &WalkPlan) -> Result<SourceTree>;
}
