// crates/shared-kernel/src/value_objects/package_key.rs
use std::{
    fmt,
    path::{Component, Path},
};

use serde::{Deserialize, Serialize};

/// Directory of a package relative to the project root, `/`-separated.
///
/// The root directory itself is keyed as `"."`. Keys order lexicographically,
/// which keeps parents ahead of their children.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageKey(String);

impl PackageKey {
    pub const ROOT: &'static str = ".";

    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() { Self::root() } else { Self(key) }
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Build the key of `dir` relative to `root`. Returns `None` when `dir` is outside `root`.
    pub fn from_dir(root: &Path, dir: &Path) -> Option<Self> {
        let rel = dir.strip_prefix(root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Some(Self::new(parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Last path segment, or `None` for the root key.
    pub fn last_segment(&self) -> Option<&str> {
        if self.is_root() { None } else { self.0.rsplit('/').next() }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn root_dir_maps_to_dot() {
        let root = PathBuf::from("/work/proj");
        assert_eq!(PackageKey::from_dir(&root, &root), Some(PackageKey::root()));
        assert!(PackageKey::root().is_root());
        assert_eq!(PackageKey::root().last_segment(), None);
    }

    #[test]
    fn nested_dir_is_slash_joined() {
        let root = PathBuf::from("/work/proj");
        let key = PackageKey::from_dir(&root, &root.join("internal").join("db")).unwrap();
        assert_eq!(key.as_str(), "internal/db");
        assert_eq!(key.last_segment(), Some("db"));
    }

    #[test]
    fn outside_root_is_rejected() {
        let root = PathBuf::from("/work/proj");
        assert!(PackageKey::from_dir(&root, Path::new("/elsewhere")).is_none());
    }
}
