// qualis/src/commands/validate.rs
//
// USE CASE: Validate every record of an input file and report the verdicts.

use std::path::PathBuf;

use anyhow::Context;
use qualis_core::application::RunReport;
use qualis_core::engine_from_file;
use qualis_core::infrastructure::{load_records, save_report};

use crate::cli::OutputFormat;

pub fn execute(
    config: PathBuf,
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    // A. Config -> Engine
    let engine = engine_from_file(&config)
        .with_context(|| format!("Failed to load validation config from {:?}", config))?;

    // B. Records
    let records = load_records(&input)
        .with_context(|| format!("Failed to load records from {:?}", input))?;

    // C. Run
    let report = RunReport::run(&engine, &records);

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print_text(&report),
    }

    if let Some(path) = output {
        save_report(&path, &report)
            .with_context(|| format!("Failed to write report to {:?}", path))?;
        if format == OutputFormat::Text {
            println!("📄 JSON report saved to {}", path.display());
        }
    }

    if !report.success() {
        eprintln!("\n❌ FAILURE. {} record(s) failed validation.", report.failed);
        // Exit with error code for CI/CD
        std::process::exit(1);
    }
    Ok(())
}

fn print_text(report: &RunReport) {
    for outcome in &report.records {
        println!("Record #{}: {}", outcome.index, outcome.result.summary_line());
        for error in outcome.result.errors() {
            println!("   ➜ {}", error);
        }
    }
    println!(
        "\n📊 {} passed, {} failed (mode: {}, scoring: {}, threshold: {:.2})",
        report.passed, report.failed, report.mode, report.scoring_mode, report.threshold
    );
}
