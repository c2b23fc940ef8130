// tests/integration/output_formats.rs
use gostats::{ConfigBuilder, OutputFormat, gatherer, presentation};
use serde_json::Value;

use crate::common::GoModule;

fn rendered(format: OutputFormat) -> String {
    let module = GoModule::example();
    let config = ConfigBuilder::default().root(module.path()).build().unwrap();
    let report = gatherer::run(&config).unwrap();

    let mut out = Vec::new();
    presentation::render(&report, format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn json_exposes_module_package_and_file_sections() {
    let json: Value = serde_json::from_str(&rendered(OutputFormat::Json)).unwrap();
    let stats = &json["stats"];

    assert_eq!(stats["module"]["name"], "example.mod");
    assert_eq!(stats["module"]["direct_dependencies"], 3);
    assert_eq!(stats["module"]["totals"]["functions"], 4);
    assert_eq!(stats["file"]["code_lines"]["max"], 7);
    assert_eq!(stats["file"]["code_lines"]["median"], 5);
    assert_eq!(stats["package"]["code_lines"]["mean"], 5);
    assert!(stats["packages"]["b"].is_object());
    assert_eq!(json["skipped"], Value::Array(vec![]));
}

#[test]
fn plain_lists_every_metric() {
    let text = rendered(OutputFormat::Plain);

    assert!(text.contains("Module: example.mod (go 1.22)"));
    assert!(text.contains("Dependencies: 3 direct, 2 indirect, 5 total"));
    assert!(text.contains("Packages: 2 (1 empty)"));
    for metric in gostats::Metric::PACKAGE {
        assert!(text.lines().any(|l| l.starts_with(metric.as_str())), "{metric}");
    }
}
