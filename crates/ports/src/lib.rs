//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`manifest`]: locating and parsing the module manifest
//! - [`filesystem`]: directory traversal and package discovery
//! - [`extraction`]: turning one file's bytes into structural facts
//! - [`collection`]: reading and extracting many files, possibly in parallel
//! - [`cancel`]: cooperative cancellation shared by every stage
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cancel;
pub mod collection;
pub mod extraction;
pub mod filesystem;
pub mod manifest;

pub use cancel::CancelToken;
pub use collection::{CollectedFile, FactCollector};
pub use extraction::{MalformedSource, UnitExtractor};
pub use filesystem::{PackageDirDto, SourceEntryDto, SourceEnumerator, SourceTree, WalkPlan};
pub use manifest::ManifestReader;
