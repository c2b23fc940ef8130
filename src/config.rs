use std::path::PathBuf;

use derive_builder::Builder;
use gostats_ports::WalkPlan;
use serde::{Deserialize, Serialize};

/// Source file extension gathered by the Go backend.
pub const GO_EXTENSION: &str = "go";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Debug dump of the statistics.
    #[default]
    Plain,
    Json,
}

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default = "true")]
    pub include_tests: bool,
    #[builder(default = "true")]
    pub respect_gitignore: bool,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub no_default_prune: bool,
    #[builder(default)]
    pub exclude: Vec<String>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            jobs: num_cpus::get(),
            include_tests: true,
            respect_gitignore: true,
            hidden: false,
            follow_links: false,
            no_default_prune: false,
            exclude: vec![],
            format: OutputFormat::Plain,
            verbose: false,
        }
    }
}

impl Config {
    /// Walk settings for `self.root`.
    pub fn walk_plan(&self) -> WalkPlan {
        WalkPlan {
            root: self.root.clone(),
            extension: GO_EXTENSION.to_string(),
            include_tests: self.include_tests,
            follow_links: self.follow_links,
            include_hidden: self.hidden,
            no_default_prune: self.no_default_prune,
            respect_gitignore: self.respect_gitignore,
            exclude_patterns: self.exclude.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();

        assert_eq!(built.root, default.root);
        assert_eq!(built.jobs, default.jobs);
        assert!(built.jobs >= 1);
        assert!(built.include_tests && built.respect_gitignore);
        assert!(!built.hidden && !built.follow_links && !built.no_default_prune);
        assert_eq!(built.format, OutputFormat::Plain);
    }

    #[test]
    fn walk_plan_carries_every_switch() {
        let config = ConfigBuilder::default()
            .root("/src/proj")
            .include_tests(false)
            .hidden(true)
            .exclude(vec!["*.pb.go".to_string()])
            .build()
            .unwrap();
        let plan = config.walk_plan();

        assert_eq!(plan.root, PathBuf::from("/src/proj"));
        assert_eq!(plan.extension, "go");
        assert!(!plan.include_tests);
        assert!(plan.include_hidden);
        assert!(plan.respect_gitignore);
        assert_eq!(plan.exclude_patterns, vec!["*.pb.go"]);
    }
}
