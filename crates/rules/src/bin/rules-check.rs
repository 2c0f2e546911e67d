//! rules-check: load an alarm rule file into a fresh catalog and report.
//!
//! Seeds an in-memory variable store (optional YAML file), imports every rule
//! through the same validation the gateway uses, and prints per-rule load
//! status plus catalog stats. Exits non-zero if any rule was rejected.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sentinel_core::config::{load_dotenv, Config};
use sentinel_core::MemoryStorage;
use sentinel_rules::loader::{seed_manager, LoadStatus, RuleFile, VariableFile};
use sentinel_rules::RuleManager;
use tracing::info;

// ── CLI ─────────────────────────────────────────────────────────────

/// Validate alarm rules and print catalog statistics.
#[derive(Parser, Debug)]
#[command(name = "rules-check", version, about)]
struct Cli {
    /// Rule file to load (falls back to the profiled config).
    #[arg(long, env = "SENTINEL_RULES_FILE")]
    rules: Option<PathBuf>,

    /// Variable seed file (falls back to the profiled config).
    #[arg(long, env = "SENTINEL_VARIABLES_FILE")]
    variables: Option<PathBuf>,

    /// Also list the rules affected by this variable id.
    #[arg(long)]
    variable: Option<u64>,

    /// Print the report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    load_dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    config.log_summary();

    let cli = Cli::parse();
    let rules_path = cli.rules.unwrap_or(config.rules.rules_file);
    let variables_path = cli.variables.or(config.rules.variables_file);

    let storage = match &variables_path {
        Some(path) => VariableFile::read(path)
            .with_context(|| format!("reading variables from {}", path.display()))?
            .into_storage()
            .with_context(|| format!("seeding variables from {}", path.display()))?,
        None => MemoryStorage::new(),
    };
    info!(variables = storage.len(), "variable store ready");

    let manager = RuleManager::new(Arc::new(storage));
    let file = RuleFile::read(&rules_path)
        .with_context(|| format!("reading rules from {}", rules_path.display()))?;
    let results = seed_manager(&manager, file.rules);

    let stats = manager.get_stats();
    let affected = cli.variable.map(|id| {
        let mut ids: Vec<_> = manager
            .get_rules_by_variable(id)
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        (id, ids)
    });

    if cli.json {
        let report = serde_json::json!({
            "rules_file": rules_path,
            "results": results,
            "stats": stats,
            "index": manager.index_stats(),
            "affected": affected
                .as_ref()
                .map(|(id, ids)| serde_json::json!({ "variable": id, "rules": ids })),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &results {
            match &result.status {
                LoadStatus::Loaded => println!("ok      {}", result.rule_id),
                LoadStatus::Failed { error } => println!("FAILED  {}: {}", result.rule_id, error),
            }
        }
        println!();
        println!(
            "rules: {} total, {} enabled, {} disabled",
            stats.total_rules, stats.enabled_rules, stats.disabled_rules
        );
        for category in manager.get_categories() {
            println!("  {:<16} {}", category, stats.category_count(&category));
        }
        println!("watched variables: {:?}", manager.watched_variables());
        if let Some((id, ids)) = &affected {
            println!("variable {id} -> {ids:?}");
        }
    }

    let failed = results.iter().filter(|r| !r.is_loaded()).count();
    if failed > 0 {
        anyhow::bail!("{failed} rule(s) failed to load");
    }
    Ok(())
}
