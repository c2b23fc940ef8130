use std::{collections::BTreeMap, path::Path};

use gostats_domain::{Aggregator, PackageFiles, SkipReason, SkippedFile};
use gostats_ports::{
    CancelToken, CollectedFile, FactCollector, ManifestReader, SourceEnumerator, SourceTree, WalkPlan,
};
use gostats_shared_kernel::{ErrorContext, InfrastructureError, PackageKey, Result};
use log::{debug, warn};

use crate::dto::GatherReport;

/// Capability to produce statistics for a project root.
///
/// One implementation exists per source-language backend; callers depend on this
/// trait only.
pub trait Gatherer {
    fn gather(&self, root: &Path) -> Result<GatherReport>;
}

/// Manifest → walk → collection → aggregation, wired over ports.
pub struct GatherStats<'a> {
    manifest: &'a dyn ManifestReader,
    enumerator: &'a dyn SourceEnumerator,
    collector: &'a dyn FactCollector,
    template: WalkPlan,
    cancel: CancelToken,
}

impl<'a> GatherStats<'a> {
    pub fn new(
        manifest: &'a dyn ManifestReader,
        enumerator: &'a dyn SourceEnumerator,
        collector: &'a dyn FactCollector,
        template: WalkPlan,
    ) -> Self {
        Self { manifest, enumerator, collector, template, cancel: CancelToken::new() }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn run(&self, plan: &WalkPlan) -> Result<GatherReport> {
        let root = plan.root.as_path();
        self.cancel.check()?;

        let manifest = self.manifest.read(root)?;
        debug!(
            "module {} ({} requirements)",
            manifest.module,
            manifest.requirements.len()
        );
        self.cancel.check()?;

        let tree = self
            .enumerator
            .enumerate(plan)
            .with_context(|| format!("discovering sources under {}", root.display()))?;
        debug!("discovered {} source files in {} directories", tree.files.len(), tree.packages.len());
        self.cancel.check()?;

        let SourceTree { packages, files } = tree;
        let collected = self.collector.collect(files, &self.cancel)?;
        self.cancel.check()?;

        let (packages, skipped) = group_collected(packages.into_iter().map(|p| (p.key, p.name)), collected)?;
        let stats = Aggregator::aggregate(root, &manifest, packages, skipped.len())?;
        debug!("aggregated {} files in {} packages", stats.module.files, stats.module.packages);

        Ok(GatherReport { stats, skipped })
    }
}

impl Gatherer for GatherStats<'_> {
    fn gather(&self, root: &Path) -> Result<GatherReport> {
        let mut plan = self.template.clone();
        plan.root = root.to_path_buf();
        self.run(&plan)
    }
}

/// Fan-in: place every extracted file under its package, and every per-file
/// failure into the skipped list. Any other failure aborts.
fn group_collected(
    dirs: impl IntoIterator<Item = (PackageKey, String)>,
    collected: Vec<CollectedFile>,
) -> Result<(Vec<PackageFiles>, Vec<SkippedFile>)> {
    let mut packages: BTreeMap<PackageKey, PackageFiles> = dirs
        .into_iter()
        .map(|(key, name)| (key.clone(), PackageFiles::new(key, name, Vec::new())))
        .collect();
    let mut skipped = Vec::new();

    for CollectedFile { entry, outcome } in collected {
        match outcome {
            Ok(facts) => packages
                .entry(entry.package.clone())
                .or_insert_with(|| {
                    let name = entry.package.last_segment().unwrap_or_default().to_string();
                    PackageFiles::new(entry.package.clone(), name, Vec::new())
                })
                .files
                .push(facts),
            Err(err) if err.is_per_file() => {
                let skip = to_skipped(entry.path, entry.package, &err);
                warn!("{skip}");
                skipped.push(skip);
            }
            Err(err) => return Err(err.into()),
        }
    }

    skipped.sort_by(|a, b| a.path.cmp(&b.path));
    Ok((packages.into_values().collect(), skipped))
}

fn to_skipped(path: std::path::PathBuf, package: PackageKey, err: &InfrastructureError) -> SkippedFile {
    let (reason, message) = match err {
        InfrastructureError::FileUnreadable { source, .. } => (SkipReason::Unreadable, source.to_string()),
        InfrastructureError::FileMalformed { reason, .. } => (SkipReason::Malformed, reason.clone()),
        other => (SkipReason::Unreadable, other.to_string()),
    };
    SkippedFile { path, package, reason, message }
}
