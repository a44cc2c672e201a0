//! Command handlers for CLI subcommands

use crate::config::{load_config, CovgapConfig, ProviderKind};
use crate::formatting::FormattingConfig;
use crate::output::{render_json, render_terminal, write_output, OutputFormat};
use crate::pipeline::analyze_report;
use crate::progress::ProgressConfig;
use crate::report::parse_report_file;
use crate::suggest::{
    build_provider, CancellationToken, RunProgress, RunnerSettings, SuggestionRunner,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `covgap parse`: print the parsed report as JSON.
pub fn handle_parse_command(report: &Path, output: Option<&Path>) -> Result<()> {
    let parsed = parse_report_file(report)?;
    write_output(&render_json(&parsed)?, output)
}

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub report: PathBuf,
    pub provider: Option<ProviderKind>,
    pub workers: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub quiet: bool,
    pub formatting: FormattingConfig,
}

/// Config from disk with command-line overrides applied on top.
pub fn resolve_config(
    explicit: Option<&Path>,
    provider: Option<ProviderKind>,
    workers: Option<usize>,
) -> Result<CovgapConfig> {
    let mut config = load_config(explicit)?;
    if let Some(kind) = provider {
        config.provider.kind = kind;
    }
    if let Some(workers) = workers {
        config.runner.workers = workers;
    }
    config.validate().context("Invalid command-line options")?;
    debug!(
        provider = ?config.provider.kind,
        workers = config.runner.workers,
        "Resolved configuration"
    );
    Ok(config)
}

/// `covgap analyze`: the full pipeline.
pub async fn handle_analyze_command(opts: AnalyzeOptions, cancel: CancellationToken) -> Result<()> {
    let config = resolve_config(opts.config.as_deref(), opts.provider, opts.workers)?;
    let report = parse_report_file(&opts.report)?;

    let provider = build_provider(&config.provider)
        .with_context(|| format!("Failed to create {:?} provider", config.provider.kind))?;
    let runner = SuggestionRunner::new(provider, RunnerSettings::from_config(&config));
    info!(design = %report.design, holes = report.uncovered_bins.len(), "Loaded report");

    let bar = ProgressConfig::from_env(opts.quiet).suggestion_bar(report.uncovered_bins.len() as u64);
    let output = analyze_report(report, &runner, &cancel, |p| match p {
        RunProgress::Started { total } => bar.set_length(total as u64),
        RunProgress::Finished { target, .. } => {
            bar.set_message(target.to_string());
            bar.inc(1);
        }
    })
    .await;
    bar.finish_and_clear();

    let content = match opts.format {
        OutputFormat::Json => render_json(&output)?,
        OutputFormat::Terminal => render_terminal(&output, &opts.formatting.formatter())?,
    };
    write_output(&content, opts.output.as_deref())
}
