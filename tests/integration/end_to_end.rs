// tests/integration/end_to_end.rs
use gostats::{
    ConfigBuilder, Digest, GatherReport, GoGatherer, GoStatsError, Gatherer, Metric, Result, gatherer,
};
use gostats_domain::SkipReason;
use gostats_shared_kernel::{DomainError, InfrastructureError, PackageKey};

use crate::common::GoModule;

fn gather(module: &GoModule) -> Result<GatherReport> {
    let config = ConfigBuilder::default().root(module.path()).jobs(2usize).build().unwrap();
    gatherer::run(&config)
}

#[test]
fn example_module_statistics() {
    let module = GoModule::example();
    let report = gather(&module).unwrap();
    let stats = &report.stats;

    assert!(report.skipped.is_empty());
    assert_eq!(stats.module.name.as_str(), "example.mod");
    assert_eq!(stats.module.go_version.as_deref(), Some("1.22"));
    assert_eq!(stats.module.direct_dependencies, 3);
    assert_eq!(stats.module.indirect_dependencies, 2);
    assert_eq!(stats.module.all_dependencies, 5);
    assert_eq!(stats.module.files, 3);
    assert_eq!(stats.module.packages, 2);
    assert_eq!(stats.module.empty_packages, 1);
    assert_eq!(stats.module.totals.get(Metric::Functions), 4);
    assert_eq!(stats.module.totals.get(Metric::CodeLines), 15);
    assert_eq!(stats.module.totals.get(Metric::GlobalVariables), 1);
    assert_eq!(stats.module.totals.get(Metric::Imports), 1);

    assert_eq!(stats.file.get(Metric::CodeLines), Some(&Digest { max: 7, min: 3, mean: 5, median: 5 }));
    assert_eq!(stats.package.get(Metric::CodeLines), Some(&Digest::single(5)));
    assert_eq!(stats.package.get(Metric::Files), Some(&Digest { max: 2, min: 1, mean: 2, median: 1 }));

    let b = &stats.packages[&PackageKey::from("b")];
    assert_eq!(b.files, 2);
    assert_eq!(b.name, "b");
}

#[test]
fn malformed_file_is_skipped_with_partial_stats() {
    let module = GoModule::example();
    module.write("b/broken.go", "package b\n\nfunc broken( {\n");

    let report = gather(&module).unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::Malformed);
    assert_eq!(report.skipped[0].package, PackageKey::from("b"));
    assert_eq!(report.stats.module.files, 3);
    assert_eq!(report.stats.module.skipped_files, 1);
    assert_eq!(report.stats.module.totals.get(Metric::CodeLines), 15);
}

#[test]
fn module_without_sources_is_an_empty_project() {
    let module = GoModule::empty();
    module.write("go.mod", "module example.com/empty\n");
    module.write("docs/README.md", "nothing to see\n");

    let err = gather(&module).unwrap_err();
    assert!(matches!(err.root_cause(), GoStatsError::Domain(DomainError::EmptyProject { skipped: 0, .. })));
}

#[test]
fn missing_manifest_is_fatal() {
    let module = GoModule::empty();
    module.write("main.go", "package main\n\nfunc main() {}\n");

    let err = gather(&module).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        GoStatsError::Infrastructure(InfrastructureError::ManifestNotFound { .. })
    ));
    assert!(err.to_string().contains("go.mod"));
}

#[test]
fn test_files_vendor_and_testdata() {
    let module = GoModule::example();
    module.write("a/a_test.go", "package a\n\nfunc TestHello() {}\n");
    module.write("vendor/github.com/a/one/one.go", "package one\n\nfunc One() {}\n");
    module.write("a/testdata/fixture.go", "package fixture\n");

    let with_tests = gather(&module).unwrap();
    assert_eq!(with_tests.stats.module.files, 4);
    assert_eq!(with_tests.stats.module.totals.get(Metric::Functions), 5);

    let config = ConfigBuilder::default().root(module.path()).include_tests(false).build().unwrap();
    let without_tests = gatherer::run(&config).unwrap();
    assert_eq!(without_tests.stats.module.files, 3);
}

#[test]
fn cancelled_gatherer_discards_the_run() {
    let module = GoModule::example();
    let config = ConfigBuilder::default().root(module.path()).build().unwrap();
    let gatherer = GoGatherer::new(&config).unwrap();

    gatherer.cancel_token().cancel();
    assert!(gatherer.gather(module.path()).unwrap_err().is_cancelled());
}

#[test]
fn repeated_runs_are_identical() {
    let module = GoModule::example();
    for i in 0..3 {
        module.write(&format!("c/c{i}.go"), &format!("package c\n\nconst K{i} = {i}\n"));
    }
    let first = gather(&module).unwrap();
    let second = gather(&module).unwrap();
    assert_eq!(first, second);
}
