//! ファイル読み込みと抽出の並列実行

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use gostats_domain::FileFacts;
use gostats_ports::{CancelToken, CollectedFile, FactCollector, SourceEntryDto, UnitExtractor};
use gostats_shared_kernel::{InfraResult, InfrastructureError as Infra, Result};
use log::debug;

use crate::persistence::FileReader;

/// Below this many files the pool is not worth building.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 10;

/// Reads every entry and hands its bytes to the extractor, on a rayon pool of
/// `jobs` threads when the `parallel` feature is on.
pub struct ParallelFactCollector<E> {
    extractor: E,
    jobs: usize,
}

impl<E: UnitExtractor> ParallelFactCollector<E> {
    pub fn new(extractor: E, jobs: usize) -> Self {
        Self { extractor, jobs: jobs.max(1) }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Read and extract one file. I/O failures become `FileUnreadable`,
    /// extractor rejections `FileMalformed`.
    fn measure(&self, entry: &SourceEntryDto) -> InfraResult<FileFacts> {
        let bytes = FileReader::read_to_end(&entry.path)
            .map_err(|source| Infra::FileUnreadable { path: entry.path.clone(), source })?;
        self.extractor
            .extract(&entry.name, &bytes)
            .map_err(|e| Infra::FileMalformed { path: entry.path.clone(), reason: e.reason })
    }

    /// 順次処理版
    fn collect_sequential(&self, files: Vec<SourceEntryDto>, cancel: &CancelToken) -> Result<Vec<CollectedFile>> {
        let mut collected = Vec::with_capacity(files.len());
        for entry in files {
            cancel.check()?;
            let outcome = self.measure(&entry);
            collected.push(CollectedFile { entry, outcome });
        }
        Ok(collected)
    }

    /// 並列処理版
    #[cfg(feature = "parallel")]
    fn collect_parallel(&self, files: Vec<SourceEntryDto>, cancel: &CancelToken) -> Result<Vec<CollectedFile>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| Infra::ThreadPoolCreation { details: e.to_string() })?;

        let results: Vec<Option<CollectedFile>> = pool.install(|| {
            files
                .into_par_iter()
                .map(|entry| {
                    if cancel.is_cancelled() {
                        return None;
                    }
                    let outcome = self.measure(&entry);
                    Some(CollectedFile { entry, outcome })
                })
                .collect()
        });

        // キャンセルされた場合は部分結果を捨てる
        cancel.check()?;
        Ok(results.into_iter().flatten().collect())
    }
}

impl<E: UnitExtractor> FactCollector for ParallelFactCollector<E> {
    fn collect(&self, files: Vec<SourceEntryDto>, cancel: &CancelToken) -> Result<Vec<CollectedFile>> {
        debug!("collecting {} files with {} jobs", files.len(), self.jobs);

        #[cfg(feature = "parallel")]
        if files.len() >= PARALLEL_THRESHOLD && self.jobs > 1 {
            return self.collect_parallel(files, cancel);
        }

        self.collect_sequential(files, cancel)
    }
}
