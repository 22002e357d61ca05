mod csv;
mod json;
mod record;
mod yaml;

pub use self::csv::to_csv;
pub use json::to_json;
pub use record::{format_metric, format_score, to_record, NOT_AVAILABLE};
pub use yaml::to_yaml;

use crate::models::{AnalysisReport, EXPORT_COLUMNS};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Yaml,
    Summary,
}

/// Format an AnalysisReport according to the specified format.
///
/// CSV carries only the scored records; the other formats include failures,
/// findings and run metadata as well.
pub fn format_output(report: &AnalysisReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Csv => to_csv(&report.records),
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Generate a human-readable summary
pub fn format_summary(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(
        "Extraction Difficulty Report\n\
         ============================\n\n",
    );

    let name_width = report
        .records
        .iter()
        .map(|r| r.project_name.chars().count())
        .chain(std::iter::once(EXPORT_COLUMNS[0].len()))
        .max()
        .unwrap_or(0);

    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:>16}  {:>15}  {:>17}  {:>15}  {:>13}\n",
        "Rank",
        EXPORT_COLUMNS[0],
        EXPORT_COLUMNS[1],
        EXPORT_COLUMNS[2],
        EXPORT_COLUMNS[3],
        EXPORT_COLUMNS[4],
        EXPORT_COLUMNS[5],
    ));
    for (rank, record) in report.records.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>16}  {:>15}  {:>17}  {:>15}  {:>13}\n",
            rank + 1,
            record.project_name,
            record.extraction_score,
            record.coupling_metric,
            record.complexity_metric,
            record.tech_debt_score,
            record.external_apis,
        ));
    }
    output.push('\n');

    if !report.failures.is_empty() {
        output.push_str(&format!("Not Scored ({}):\n", report.failures.len()));
        for failure in &report.failures {
            output.push_str(&format!("  {}: {}\n", failure.project, failure.reason));
        }
        output.push('\n');
    }

    if !report.findings.is_empty() {
        output.push_str(&format!("Filter Findings ({}):\n", report.findings.len()));
        for finding in &report.findings {
            output.push_str(&format!("  {}\n", finding));
        }
        output.push('\n');
    }

    if !report.scope.is_empty() {
        output.push_str("Dependency Scope:\n");
        for scope in &report.scope {
            output.push_str(&format!(
                "  {}: {} in scope, {} excluded\n",
                scope.project, scope.in_scope, scope.excluded
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Projects Analyzed: {} ({} scored, {} failed)\n\
         Analysis Duration: {}ms\n\
         Timestamp: {}\n\
         Tool Version: {} (report format v{})\n",
        report.metadata.projects_analyzed,
        report.records.len(),
        report.failures.len(),
        report.metadata.analysis_duration_ms,
        report.metadata.timestamp,
        report.metadata.tool_version,
        report.metadata.format_version,
    ));

    output
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("CSV serialization error: {0}")]
    CsvError(#[from] ::csv::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Output is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
