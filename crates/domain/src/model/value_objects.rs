//! Value objects shared by the aggregation stages.

pub mod digest;
pub mod metric;
pub mod stats;
pub mod visibility;

pub use digest::Digest;
pub use metric::Metric;
pub use stats::{MetricDigests, MetricTotals, ModuleStats, Stats};
pub use visibility::is_exported;
