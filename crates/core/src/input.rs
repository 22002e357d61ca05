//! Loading of metrics documents produced by the upstream analyzer

use crate::config::{ConfigError, DocumentFormat};
use crate::models::{MetricRange, MetricRanges, MetricsDocument, ProjectMetrics, ResolvedRanges};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse metrics document: {0}")]
    ParseError(#[from] ConfigError),
    #[error("Unsupported metrics format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid range for {metric}: min {min}, max {max}")]
    InvalidRange { metric: &'static str, min: f64, max: f64 },
}

/// Parse a metrics document from a string
pub fn parse_metrics(content: &str, format: DocumentFormat) -> Result<MetricsDocument, InputError> {
    let document: MetricsDocument = format.parse(content)?;
    check_ranges(&document.ranges)?;
    Ok(document)
}

/// Load a metrics document, picking the format from the file extension
pub fn load_metrics(path: &Path) -> Result<MetricsDocument, InputError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| InputError::UnsupportedFormat(path.display().to_string()))?;
    let content = fs::read_to_string(path)?;
    parse_metrics(&content, format)
}

fn check_ranges(ranges: &MetricRanges) -> Result<(), InputError> {
    let explicit = [
        ("coupling", ranges.coupling),
        ("complexity", ranges.complexity),
        ("tech_debt", ranges.tech_debt),
    ];
    for (metric, range) in explicit {
        if let Some(range) = range {
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(InputError::InvalidRange {
                    metric,
                    min: range.min,
                    max: range.max,
                });
            }
        }
    }
    Ok(())
}

/// Fill missing ranges with the bounds observed across `projects`, falling
/// back to 0-100 when a metric has no values at all.
pub fn resolve_ranges(ranges: &MetricRanges, projects: &[ProjectMetrics]) -> ResolvedRanges {
    let resolve = |explicit: Option<MetricRange>, pick: fn(&ProjectMetrics) -> Option<f64>| {
        explicit
            .or_else(|| MetricRange::observed(projects.iter().filter_map(pick)))
            .unwrap_or_default()
    };

    ResolvedRanges {
        coupling: resolve(ranges.coupling, |p| p.coupling),
        complexity: resolve(ranges.complexity, |p| p.complexity),
        tech_debt: resolve(ranges.tech_debt, |p| p.tech_debt),
    }
}
