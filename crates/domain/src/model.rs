pub mod entities;
pub mod value_objects;

pub use entities::{FileFacts, FileFactsBuilder, ManifestFacts, PackageFacts, Requirement, SkipReason, SkippedFile};
pub use value_objects::{Digest, Metric, MetricDigests, MetricTotals, ModuleStats, Stats, is_exported};
