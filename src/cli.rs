mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::CliOutputFormat;

use gostats_shared_kernel::{GoStatsError, PresentationError, Result};

use crate::config::{Config, ConfigBuilder};

const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: Option<usize>) -> Result<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }
        .into()),
        _ => Ok(()),
    }
}

impl TryFrom<Args> for Config {
    type Error = GoStatsError;

    fn try_from(args: Args) -> Result<Self> {
        validate_jobs("--jobs", args.jobs)?;

        let mut builder = ConfigBuilder::default();
        builder
            .root(args.path)
            .include_tests(!args.no_tests)
            .respect_gitignore(!args.no_gitignore)
            .hidden(args.hidden)
            .follow_links(args.follow)
            .no_default_prune(args.no_default_prune)
            .exclude(args.exclude)
            .format(args.format)
            .verbose(args.verbose);
        if let Some(jobs) = args.jobs {
            builder.jobs(jobs);
        }

        builder.build().map_err(|e| {
            PresentationError::ArgumentParsing { argument: "<config>".to_string(), reason: e.to_string() }.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::OutputFormat;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gostats").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_from_a_bare_path() {
        let config = Config::try_from(parse(&["proj"])).unwrap();

        assert_eq!(config.root, std::path::PathBuf::from("proj"));
        assert!(config.include_tests);
        assert!(config.respect_gitignore);
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.jobs, num_cpus::get());
    }

    #[test]
    fn flags_map_onto_config() {
        let args = parse(&[
            "--format", "json", "-j", "3", "--no-tests", "--no-gitignore", "--hidden", "--follow",
            "--no-default-prune", "--exclude", "*.pb.go,gen/**", "-v", "proj",
        ]);
        let config = Config::try_from(args).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.jobs, 3);
        assert!(!config.include_tests);
        assert!(!config.respect_gitignore);
        assert!(config.hidden && config.follow_links && config.no_default_prune && config.verbose);
        assert_eq!(config.exclude, vec!["*.pb.go", "gen/**"]);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let err = Config::try_from(parse(&["-j", "0", "proj"])).unwrap_err();
        assert!(matches!(err, GoStatsError::Presentation(PresentationError::InvalidValue { .. })));
    }

    #[test]
    fn exactly_one_path_is_required() {
        assert!(Args::try_parse_from(["gostats"]).is_err());
        assert!(Args::try_parse_from(["gostats", "a", "b"]).is_err());
    }
}
