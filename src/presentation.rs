use std::io::Write;

use gostats_domain::{Digest, Metric, Stats};
use gostats_shared_kernel::Result;
use gostats_usecase::GatherReport;

use crate::{config::OutputFormat, format::format_count};

/// Write the report to `out` in `format`.
pub fn render(report: &GatherReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Plain => render_plain(&report.stats, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `[warn]` line per skipped file.
pub fn render_skipped(report: &GatherReport, err: &mut impl Write) -> Result<()> {
    for skipped in &report.skipped {
        writeln!(err, "[warn] {skipped}")?;
    }
    Ok(())
}

fn render_plain(stats: &Stats, out: &mut impl Write) -> Result<()> {
    let module = &stats.module;
    match &module.go_version {
        Some(go) => writeln!(out, "Module: {} (go {go})", module.name)?,
        None => writeln!(out, "Module: {}", module.name)?,
    }
    writeln!(
        out,
        "Dependencies: {} direct, {} indirect, {} total",
        module.direct_dependencies, module.indirect_dependencies, module.all_dependencies
    )?;
    writeln!(out, "Packages: {} ({} empty)", module.packages, module.empty_packages)?;
    writeln!(out, "Files: {} ({} skipped)", module.files, module.skipped_files)?;
    writeln!(
        out,
        "Lines: {} total, {} code",
        format_count(module.totals.get(Metric::Lines)),
        format_count(module.totals.get(Metric::CodeLines))
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<18} {:>10}   {:>27}   {:>27}",
        "METRIC", "TOTAL", "PACKAGE max/min/mean/med", "FILE max/min/mean/med"
    )?;
    for metric in Metric::PACKAGE {
        writeln!(
            out,
            "{:<18} {:>10}   {:>27}   {:>27}",
            metric.as_str(),
            module.totals.get(metric),
            digest_cell(stats.package.get(metric)),
            digest_cell(stats.file.get(metric)),
        )?;
    }
    Ok(())
}

fn digest_cell(digest: Option<&Digest>) -> String {
    digest.map_or_else(|| "-".to_string(), |d| format!("{}/{}/{}/{}", d.max, d.min, d.mean, d.median))
}
