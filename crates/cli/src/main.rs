use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mta_rust_extractscore_core::{
    format_output, load_metrics, validate, AnalysisConfig, ExtractionAnalyzer,
    FilterConfiguration, OutputFormat,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "extractscore")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank monolith projects by how hard they are to extract into services")]
#[command(long_about = "Reads per-project coupling, complexity, tech-debt and external API \
    counts produced by an upstream analyzer, normalizes them onto a 0-100 scale and blends \
    them into an extraction-difficulty score. Dependency namespaces are scoped with block and \
    allow lists (allow wins). Projects that cannot be scored are listed, never fatal.\n\n\
    Metrics and filter files may be JSON, YAML or TOML.")]
pub struct Args {
    /// Metrics document produced by the upstream analyzer
    pub metrics: Option<PathBuf>,

    /// Filter configuration (defaults to the built-in block list)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Csv)]
    pub format: OutputFormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parallel threads (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Treat filter validation findings as errors
    #[arg(long)]
    pub strict: bool,

    /// Only validate the filter configuration
    #[arg(long)]
    pub validate_only: bool,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_filters(path: Option<&PathBuf>) -> anyhow::Result<FilterConfiguration> {
    match path {
        Some(path) => FilterConfiguration::load(path)
            .with_context(|| format!("Failed to load filter configuration {}", path.display())),
        None => Ok(FilterConfiguration::default()),
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let filters = load_filters(args.config.as_ref())?;

    if args.validate_only {
        let findings = validate(&filters);
        for finding in &findings {
            println!("{}", finding);
        }
        if findings.is_empty() {
            println!("Filter configuration OK");
            return Ok(ExitCode::SUCCESS);
        }
        return Ok(ExitCode::FAILURE);
    }

    let Some(metrics_path) = args.metrics else {
        bail!("A metrics document is required unless --validate-only is given");
    };

    let config = AnalysisConfig::new(filters)
        .with_threads(args.threads)
        .with_strict(args.strict);
    let analyzer = ExtractionAnalyzer::new(config)?;

    let document = load_metrics(&metrics_path)
        .with_context(|| format!("Failed to load metrics {}", metrics_path.display()))?;

    // Show progress if verbose
    let spinner = if args.verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Scoring {} projects...", document.projects.len()));
        Some(pb)
    } else {
        None
    };

    let report = analyzer.analyze(&document)?;

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Scored {} projects in {}ms",
            report.records.len(),
            report.metadata.analysis_duration_ms
        ));
    }

    for failure in &report.failures {
        warn!("Not scored: {}: {}", failure.project, failure.reason);
    }

    let output = format_output(&report, args.format.into())?;

    if let Some(path) = args.output {
        fs::write(&path, &output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Output written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    if report.all_failed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
