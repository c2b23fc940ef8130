//! Module manifest adapters.

mod gomod;

pub use gomod::{GoModReader, ManifestSyntaxError, parse_go_mod};
