use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use namecheck_core::config::{CharPolicy, CheckerConfig, OverrideEquality};
use namecheck_core::diagnostics::render::render_report;
use namecheck_core::diagnostics::Diagnostic;
use namecheck_core::model::load_graph;
use namecheck_core::services::NamingPass;
use serde::Serialize;
use tracing::info;

use crate::{load_config_or_default, sha256_file};

/// Inputs of the `check` command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub input: String,
    pub config: Option<String>,
    /// Report bad characters as one merged diagnostic.
    pub merged_chars: bool,
    /// Ignore the `exact` flag when comparing names across overrides.
    pub ignore_exact: bool,
    pub json: bool,
}

/// Machine-readable result of `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub input_sha256: String,
    pub config: CheckerConfig,
    pub declarations_checked: usize,
    pub error_count: usize,
    /// Diagnostic counts keyed by code.
    pub by_code: BTreeMap<&'static str, usize>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Effective checker policy: config file first, flags on top.
pub fn resolve_checker_config(options: &CheckOptions) -> Result<CheckerConfig> {
    let mut config = load_config_or_default(options.config.as_deref())?.checker;
    if options.merged_chars {
        config.char_policy = CharPolicy::Merged;
    }
    if options.ignore_exact {
        config.override_equality = OverrideEquality::Names;
    }
    Ok(config)
}

/// Validate every declaration of the input graph.
pub fn build_check_report(options: &CheckOptions) -> Result<CheckReport> {
    let input = Path::new(&options.input);
    let config = resolve_checker_config(options)?;
    let graph = load_graph(input)?;
    let report = NamingPass::new(&graph, config)
        .run()
        .with_context(|| format!("Validation aborted for {}", input.display()))?;
    info!(input = %input.display(), errors = report.diagnostics.len(), "check finished");

    Ok(CheckReport {
        input: options.input.clone(),
        input_sha256: sha256_file(input)?,
        config,
        declarations_checked: report.declarations_checked,
        error_count: report.diagnostics.len(),
        by_code: report.counts().into_iter().map(|(kind, n)| (kind.code(), n)).collect(),
        diagnostics: report.diagnostics,
    })
}

/// Run `check`, printing the report. Returns true when no problem was found.
pub fn check_command(options: &CheckOptions) -> Result<bool> {
    let report = build_check_report(options)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report.diagnostics));
    }
    Ok(report.error_count == 0)
}
