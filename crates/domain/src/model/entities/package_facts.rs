use gostats_shared_kernel::PackageKey;
use serde::{Deserialize, Serialize};

use crate::model::{Digest, FileFacts, Metric, MetricDigests};

/// Files sharing one directory, reduced to a digest per file metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFacts {
    pub key: PackageKey,
    pub name: String,
    pub name_chars: usize,
    pub files: usize,
    pub digests: MetricDigests,
}

impl PackageFacts {
    /// Fold the files of one package. Returns `None` for a package without files.
    pub fn from_files(key: PackageKey, name: impl Into<String>, files: &[FileFacts]) -> Option<Self> {
        if files.is_empty() {
            return None;
        }

        let mut digests = MetricDigests::new();
        for metric in Metric::FILE {
            if let Some(digest) = Digest::from_observations(files.iter().map(|f| f.value(metric))) {
                digests.insert(metric, digest);
            }
        }

        let name = name.into();
        Some(Self {
            key,
            name_chars: name.chars().count(),
            name,
            files: files.len(),
            digests,
        })
    }

    /// Observation this package contributes to the project-level package digest.
    ///
    /// `NameChars` is the package's own name, `Files` its file count, and every
    /// other metric the mean over its files.
    pub fn observation(&self, metric: Metric) -> Option<usize> {
        match metric {
            Metric::NameChars => Some(self.name_chars),
            Metric::Files => Some(self.files),
            other => self.digests.get(other).map(|d| d.mean),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, code_lines: usize, functions: usize) -> FileFacts {
        FileFacts::builder(name).code_lines(code_lines).functions(functions, 0).build()
    }

    #[test]
    fn empty_package_has_no_facts() {
        assert!(PackageFacts::from_files(PackageKey::root(), "proj", &[]).is_none());
    }

    #[test]
    fn digests_cover_member_files() {
        let files = [file("a.go", 3, 1), file("b.go", 7, 2)];
        let pkg = PackageFacts::from_files(PackageKey::from("b"), "b", &files).unwrap();

        assert_eq!(pkg.files, 2);
        assert_eq!(pkg.digests.len(), Metric::FILE.len());
        let code = pkg.digests.get(Metric::CodeLines).unwrap();
        assert_eq!((code.max, code.min, code.mean, code.median), (7, 3, 5, 3));
    }

    #[test]
    fn observation_uses_own_name_and_file_count() {
        let files = [file("main.go", 10, 1)];
        let pkg = PackageFacts::from_files(PackageKey::from("cmd/server"), "server", &files).unwrap();

        assert_eq!(pkg.observation(Metric::NameChars), Some(6));
        assert_eq!(pkg.observation(Metric::Files), Some(1));
        assert_eq!(pkg.observation(Metric::CodeLines), Some(10));
    }
}
