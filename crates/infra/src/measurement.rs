//! Per-file measurement: line classification, declaration extraction and the
//! collector that runs them over a whole tree.

mod collector;
mod extractor;
pub mod lines;

pub use collector::ParallelFactCollector;
pub use extractor::GoUnitExtractor;
