use std::path::Path;

use gostats_infra::{GoModReader, GoSourceEnumerator, GoUnitExtractor, ParallelFactCollector};
use gostats_ports::{CancelToken, WalkPlan};
use gostats_shared_kernel::{ErrorContext, Result, path::logical_absolute};
use gostats_usecase::{GatherReport, GatherStats, Gatherer};
use log::debug;

use crate::config::Config;

/// Go backend: `go.mod` reader, `ignore` walker and tree-sitter extractor behind
/// the [`Gatherer`] trait.
pub struct GoGatherer {
    manifest: GoModReader,
    enumerator: GoSourceEnumerator,
    collector: ParallelFactCollector<GoUnitExtractor>,
    template: WalkPlan,
    cancel: CancelToken,
}

impl GoGatherer {
    pub fn new(config: &Config) -> Result<Self> {
        let extractor = GoUnitExtractor::new().context("loading the Go grammar")?;
        debug!("gatherer ready: {} jobs", config.jobs);
        Ok(Self {
            manifest: GoModReader::new(),
            enumerator: GoSourceEnumerator::new(),
            collector: ParallelFactCollector::new(extractor, config.jobs),
            template: config.walk_plan(),
            cancel: CancelToken::new(),
        })
    }

    /// Token that stops any gather running on this instance once cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl Gatherer for GoGatherer {
    fn gather(&self, root: &Path) -> Result<GatherReport> {
        let root = logical_absolute(root);
        GatherStats::new(&self.manifest, &self.enumerator, &self.collector, self.template.clone())
            .with_cancel(self.cancel.clone())
            .gather(&root)
            .with_context(|| format!("gathering statistics for {}", root.display()))
    }
}

/// Gather `config.root` with `config`.
pub fn run(config: &Config) -> Result<GatherReport> {
    GoGatherer::new(config)?.gather(&config.root)
}
