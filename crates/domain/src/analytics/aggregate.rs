use std::{
    collections::{BTreeMap, btree_map::Entry},
    path::Path,
};

use gostats_shared_kernel::{DomainError, DomainResult, PackageKey};

use crate::model::{
    Digest, FileFacts, ManifestFacts, Metric, MetricDigests, MetricTotals, ModuleStats, PackageFacts, Stats,
};

/// Measured files of one directory, as handed over by the collection stage.
#[derive(Debug, Clone)]
pub struct PackageFiles {
    pub key: PackageKey,
    pub name: String,
    pub files: Vec<FileFacts>,
}

impl PackageFiles {
    pub fn new(key: PackageKey, name: impl Into<String>, files: Vec<FileFacts>) -> Self {
        Self { key, name: name.into(), files }
    }
}

/// Folds per-file facts into per-package facts and the project-level [`Stats`].
pub struct Aggregator;

impl Aggregator {
    /// Run both aggregation stages.
    ///
    /// Packages without files are counted as empty and left out of every digest.
    /// Entries sharing a key are merged. Fails with `EmptyProject` when no file
    /// was measured at all.
    pub fn aggregate(
        root: &Path,
        manifest: &ManifestFacts,
        packages: Vec<PackageFiles>,
        skipped: usize,
    ) -> DomainResult<Stats> {
        let grouped = Self::group_by_key(packages);

        let files: Vec<&FileFacts> = grouped.values().flat_map(|(_, files)| files.iter()).collect();
        if files.is_empty() {
            return Err(DomainError::EmptyProject { root: root.to_path_buf(), skipped });
        }

        let totals = Self::totals(&files);
        let file = Self::file_digests(&files);
        let file_count = files.len();

        let mut empty_packages = 0usize;
        let mut package_facts = BTreeMap::new();
        for (key, (name, files)) in &grouped {
            match PackageFacts::from_files(key.clone(), name.clone(), files) {
                Some(facts) => {
                    package_facts.insert(key.clone(), facts);
                }
                None => empty_packages += 1,
            }
        }
        let package = Self::package_digests(&package_facts);

        let module = ModuleStats {
            name: manifest.module.clone(),
            go_version: manifest.go_version.clone(),
            direct_dependencies: manifest.direct_count(),
            indirect_dependencies: manifest.indirect_count(),
            all_dependencies: manifest.all_count(),
            packages: package_facts.len(),
            empty_packages,
            files: file_count,
            skipped_files: skipped,
            totals,
        };

        Ok(Stats { module, package, file, packages: package_facts })
    }

    fn group_by_key(packages: Vec<PackageFiles>) -> BTreeMap<PackageKey, (String, Vec<FileFacts>)> {
        let mut grouped: BTreeMap<PackageKey, (String, Vec<FileFacts>)> = BTreeMap::new();
        for package in packages {
            match grouped.entry(package.key) {
                Entry::Vacant(slot) => {
                    slot.insert((package.name, package.files));
                }
                Entry::Occupied(mut slot) => slot.get_mut().1.extend(package.files),
            }
        }
        grouped
    }

    fn totals(files: &[&FileFacts]) -> MetricTotals {
        let mut totals = MetricTotals::new();
        for metric in Metric::PACKAGE {
            totals.add(metric, files.iter().map(|f| f.value(metric)).sum());
        }
        totals
    }

    fn file_digests(files: &[&FileFacts]) -> MetricDigests {
        Metric::FILE
            .into_iter()
            .filter_map(|metric| {
                Digest::from_observations(files.iter().map(|f| f.value(metric))).map(|d| (metric, d))
            })
            .collect()
    }

    fn package_digests(packages: &BTreeMap<PackageKey, PackageFacts>) -> MetricDigests {
        Metric::PACKAGE
            .into_iter()
            .filter_map(|metric| {
                Digest::from_observations(packages.values().filter_map(|p| p.observation(metric)))
                    .map(|d| (metric, d))
            })
            .collect()
    }
}
