// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

//! # gostats
//!
//! Structural statistics for a Go module: dependency counts from `go.mod`, and
//! declaration and line counts per file, summarised per package and per file.
//!
//! [`GoGatherer`] wires the infrastructure adapters into the gather pipeline:
//!
//! ```no_run
//! use gostats::{Config, GoGatherer, Gatherer};
//!
//! let gatherer = GoGatherer::new(&Config::default())?;
//! let report = gatherer.gather(std::path::Path::new("."))?;
//! println!("{} files", report.stats.module.files);
//! # Ok::<(), gostats::GoStatsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod format;
pub mod gatherer;
pub mod presentation;

pub use config::{Config, ConfigBuilder, OutputFormat};
pub use format::format_count;
pub use gatherer::GoGatherer;
pub use gostats_domain::{Digest, Metric, ModuleStats, PackageFacts, SkippedFile, Stats};
pub use gostats_ports::CancelToken;
pub use gostats_shared_kernel::{GoStatsError, Result};
pub use gostats_usecase::{GatherReport, Gatherer};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
