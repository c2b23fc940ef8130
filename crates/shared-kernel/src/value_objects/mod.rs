// crates/shared-kernel/src/value_objects/mod.rs
pub mod module_path;
pub mod package_key;

pub use module_path::ModulePath;
pub use package_key::PackageKey;
