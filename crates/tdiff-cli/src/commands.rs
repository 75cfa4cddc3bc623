use std::io::Write;

use anyhow::Context;
use tdiff_diff::compare_with;
use tdiff_load::load_value;
use tdiff_report::Reporter;
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::config::DiffConfig;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Load both sources, compare them, and write the report to `out`.
///
/// Nothing is written unless both sources load and the comparison
/// completes. Divergences are a successful outcome.
pub fn run_with_output<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    debug!(?config, "resolved settings");

    let a = load_value(&cli.source_a)
        .with_context(|| format!("failed to load {}", cli.source_a.display()))?;
    let b = load_value(&cli.source_b)
        .with_context(|| format!("failed to load {}", cli.source_b.display()))?;

    let diff = compare_with(&a, &b, &config.diff_options()).context("comparison aborted")?;
    info!(
        total = diff.len(),
        type_mismatches = diff.type_mismatches(),
        missing_keys = diff.missing_keys(),
        length_mismatches = diff.length_mismatches(),
        value_mismatches = diff.value_mismatches(),
        "comparison complete"
    );

    let reporter = Reporter::new(config.max_diffs);
    match cli.format {
        OutputFormat::Text => reporter.write_text(&diff, out, config.color)?,
        OutputFormat::Json => reporter.write_json(&diff, out)?,
    }
    out.flush()?;
    Ok(())
}

/// Settings file first (if any), then command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<DiffConfig> {
    let mut config = match &cli.config {
        Some(path) => DiffConfig::load(path)?,
        None => DiffConfig::default(),
    };
    if let Some(max_diffs) = cli.max_diffs {
        config.max_diffs = max_diffs;
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = Some(max_depth);
    }
    if let Some(label) = &cli.label_a {
        config.label_a = label.clone();
    }
    if let Some(label) = &cli.label_b {
        config.label_b = label.clone();
    }
    config.color |= cli.color;
    Ok(config)
}
