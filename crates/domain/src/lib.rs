//! # Domain
//!
//! Measurement model and the aggregation engine.
//!
//! - [`model`]: per-file facts, digests, package facts and the final [`Stats`] snapshot
//! - [`analytics`]: the two-stage fold from file facts to project statistics
//!
//! Nothing in this crate performs I/O or knows how facts are extracted.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;

pub use analytics::{Aggregator, PackageFiles};
pub use model::{
    Digest, FileFacts, FileFactsBuilder, ManifestFacts, Metric, MetricDigests, MetricTotals, ModuleStats,
    PackageFacts, Requirement, SkipReason, SkippedFile, Stats,
};
