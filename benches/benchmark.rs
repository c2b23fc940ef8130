use std::{hint::black_box, path::Path};

use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use gostats::cli::Args;
use gostats_domain::{Aggregator, Digest, FileFacts, ManifestFacts, PackageFiles};
use gostats_infra::measurement::lines::count_code_lines;
use gostats_shared_kernel::{ModulePath, PackageKey};

const SAMPLE: &str = r#"package sample

import (
	"fmt"
	"strings"
)

/* Greeter builds greetings.
   Block comments span lines. */
type Greeter struct{ prefix string }

// Greet returns a greeting.
func (g Greeter) Greet(name string) string {
	url := "http://example.com/*not a comment*/"
	raw := `
// inside a raw string
`
	return fmt.Sprint(g.prefix, strings.ToUpper(name), url, raw)
}
"#;

fn synthetic_packages(packages: usize, files_per_package: usize) -> Vec<PackageFiles> {
    (0..packages)
        .map(|p| {
            let files = (0..files_per_package)
                .map(|f| {
                    FileFacts::builder(format!("f{f}.go"))
                        .bytes(100 * (f + 1))
                        .lines(10 + f)
                        .code_lines(8 + f)
                        .functions(f % 5, f % 3)
                        .imports(f % 4)
                        .build()
                })
                .collect();
            PackageFiles::new(PackageKey::from(format!("pkg{p}").as_str()), format!("pkg{p}"), files)
        })
        .collect()
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["gostats", "."])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_code_lines(c: &mut Criterion) {
    let source = SAMPLE.repeat(200);
    c.bench_function("count_code_lines", |b| b.iter(|| count_code_lines(black_box(&source))));
}

fn benchmark_digest(c: &mut Criterion) {
    let observations: Vec<usize> = (0..10_000).map(|i| (i * 7919) % 1000).collect();
    c.bench_function("digest_10k", |b| {
        b.iter(|| Digest::from_observations(black_box(observations.iter().copied())))
    });
}

fn benchmark_aggregate(c: &mut Criterion) {
    let manifest = ManifestFacts {
        module: ModulePath::from("example.com/bench"),
        go_version: Some("1.22".into()),
        requirements: Vec::new(),
    };
    c.bench_function("aggregate_200x20", |b| {
        b.iter_batched(
            || synthetic_packages(200, 20),
            |packages| Aggregator::aggregate(Path::new("/bench"), &manifest, packages, 0),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_code_lines, benchmark_digest, benchmark_aggregate);
criterion_main!(benches);
