use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "gostats",
    version = crate::VERSION,
    about = "Go module statistics: dependencies, declarations and line counts per package and per file"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Module root (the directory holding go.mod)
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Log stage progress to stderr
    #[arg(short, long, action = ArgAction::SetTrue, help_heading = "Output")]
    pub verbose: bool,

    /// Worker threads for extraction (default: available parallelism)
    #[arg(short = 'j', long, help_heading = "Walk")]
    pub jobs: Option<usize>,

    /// Skip `_test.go` files
    #[arg(long, help_heading = "Walk")]
    pub no_tests: bool,

    /// Descend into hidden directories
    #[arg(long, help_heading = "Walk")]
    pub hidden: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Walk")]
    pub follow: bool,

    /// Also walk vendor, testdata and VCS directories
    #[arg(long, help_heading = "Walk")]
    pub no_default_prune: bool,

    /// Ignore .gitignore / .ignore rules
    #[arg(long, help_heading = "Walk")]
    pub no_gitignore: bool,

    /// Glob patterns to exclude (comma-separated or repeated). Patterns with `/` match the path.
    #[arg(long, value_delimiter = ',', help_heading = "Walk")]
    pub exclude: Vec<String>,
}
