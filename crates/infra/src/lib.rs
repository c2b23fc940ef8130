// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod manifest;
pub mod measurement;
pub mod persistence;

pub use filesystem::GoSourceEnumerator;
pub use manifest::GoModReader;
pub use measurement::{GoUnitExtractor, ParallelFactCollector};
