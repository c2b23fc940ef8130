use std::collections::BTreeMap;

use gostats_shared_kernel::{ModulePath, PackageKey};
use serde::{Deserialize, Serialize};

use super::{Digest, Metric};
use crate::model::PackageFacts;

/// One digest per metric at a single grouping level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricDigests(BTreeMap<Metric, Digest>);

impl MetricDigests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Option<&Digest> {
        self.0.get(&metric)
    }

    pub fn insert(&mut self, metric: Metric, digest: Digest) {
        self.0.insert(metric, digest);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &Digest)> {
        self.0.iter().map(|(m, d)| (*m, d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Metric, Digest)> for MetricDigests {
    fn from_iter<T: IntoIterator<Item = (Metric, Digest)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Plain per-metric sums across every measured file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTotals(BTreeMap<Metric, usize>);

impl MetricTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total for `metric`; zero when nothing was added.
    pub fn get(&self, metric: Metric) -> usize {
        self.0.get(&metric).copied().unwrap_or(0)
    }

    pub fn add(&mut self, metric: Metric, value: usize) {
        *self.0.entry(metric).or_insert(0) += value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, usize)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }
}

/// Module-wide facts: identity, dependency counts and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStats {
    pub name: ModulePath,
    pub go_version: Option<String>,
    pub direct_dependencies: usize,
    pub indirect_dependencies: usize,
    pub all_dependencies: usize,
    /// Packages with at least one measured file.
    pub packages: usize,
    /// Visited directories without any measured file.
    pub empty_packages: usize,
    pub files: usize,
    pub skipped_files: usize,
    pub totals: MetricTotals,
}

/// Complete snapshot for one project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub module: ModuleStats,
    /// Digests over per-package observations ("how do packages compare").
    pub package: MetricDigests,
    /// Digests over every file, ignoring package boundaries ("how do files compare").
    pub file: MetricDigests,
    pub packages: BTreeMap<PackageKey, PackageFacts>,
}
