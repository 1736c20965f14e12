// qualis/src/commands/rules.rs
//
// USE CASE: Show how a configuration is understood once normalized.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use qualis_core::domain::config::normalize;
use qualis_core::infrastructure::config::load_validation_config;

pub fn execute(config: PathBuf) -> anyhow::Result<()> {
    let raw = load_validation_config(&config)
        .with_context(|| format!("Failed to load validation config from {:?}", config))?;
    let normalized = normalize(&raw).context("Configuration could not be normalized")?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Type", "Priority", "Constraints"]);
    for (position, rule) in normalized.evaluation_order().into_iter().enumerate() {
        table.add_row(vec![
            position.to_string(),
            rule.name.clone(),
            rule.kind.type_name().to_string(),
            rule.priority.to_string(),
            rule.kind.describe(),
        ]);
    }

    println!("{table}");
    println!(
        "Validation mode: {} | Scoring: {} | Threshold: {:.2}",
        normalized.mode, normalized.scoring.mode, normalized.scoring.threshold
    );
    Ok(())
}
