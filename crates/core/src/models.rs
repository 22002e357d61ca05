use crate::filter::PatternFinding;
use serde::{Deserialize, Serialize};

/// Version of the tabular export contract. Bump when columns change.
pub const REPORT_FORMAT_VERSION: &str = "1";

/// Export columns, in order
pub const EXPORT_COLUMNS: [&str; 6] = [
    "Project Name",
    "Extraction Score",
    "Coupling Metric",
    "Complexity Metric",
    "Tech Debt Score",
    "External APIs",
];

/// Raw signals captured for one project by the upstream analyzer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawProjectMetrics {
    pub coupling: Option<f64>,
    pub complexity: Option<f64>,
    pub tech_debt: Option<f64>,
    pub external_apis: u32,
}

/// One project entry of a metrics document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    #[serde(alias = "Name", alias = "project", alias = "Project")]
    pub name: String,
    #[serde(default, alias = "Coupling")]
    pub coupling: Option<f64>,
    #[serde(default, alias = "Complexity")]
    pub complexity: Option<f64>,
    #[serde(default, alias = "techDebt", alias = "TechDebt")]
    pub tech_debt: Option<f64>,
    #[serde(default, alias = "externalApis", alias = "ExternalApis")]
    pub external_apis: u32,
    /// Dependency namespaces referenced by the project
    #[serde(default, alias = "Dependencies", skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl ProjectMetrics {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = Some(coupling);
        self
    }

    pub fn with_complexity(mut self, complexity: f64) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn with_tech_debt(mut self, tech_debt: f64) -> Self {
        self.tech_debt = Some(tech_debt);
        self
    }

    pub fn with_external_apis(mut self, count: u32) -> Self {
        self.external_apis = count;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn raw(&self) -> RawProjectMetrics {
        RawProjectMetrics {
            coupling: self.coupling,
            complexity: self.complexity,
            tech_debt: self.tech_debt,
            external_apis: self.external_apis,
        }
    }
}

/// Known bounds of a raw metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering every finite value, if any
    pub fn observed<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |range: Option<Self>, v| match range {
                Some(r) => Some(Self::new(r.min.min(v), r.max.max(v))),
                None => Some(Self::new(v, v)),
            })
    }
}

impl Default for MetricRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Optional explicit ranges per metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRanges {
    #[serde(default, alias = "Coupling", skip_serializing_if = "Option::is_none")]
    pub coupling: Option<MetricRange>,
    #[serde(default, alias = "Complexity", skip_serializing_if = "Option::is_none")]
    pub complexity: Option<MetricRange>,
    #[serde(
        default,
        alias = "techDebt",
        alias = "TechDebt",
        skip_serializing_if = "Option::is_none"
    )]
    pub tech_debt: Option<MetricRange>,
}

/// Ranges after filling gaps from observed data
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRanges {
    pub coupling: MetricRange,
    pub complexity: MetricRange,
    pub tech_debt: MetricRange,
}

/// Input document produced by the metrics analyzer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, alias = "Ranges")]
    pub ranges: MetricRanges,
    #[serde(default, alias = "Projects")]
    pub projects: Vec<ProjectMetrics>,
}

impl MetricsDocument {
    pub fn new(projects: Vec<ProjectMetrics>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }
}

/// A metric on the common 0-100 scale, or the marker that it could not be
/// measured. Zero is a real score and never stands in for `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedMetric {
    Available(f64),
    Unavailable,
}

impl NormalizedMetric {
    pub fn value(self) -> Option<f64> {
        match self {
            NormalizedMetric::Available(v) => Some(v),
            NormalizedMetric::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, NormalizedMetric::Available(_))
    }
}

/// One row of the exported report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractionScoreRecord {
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "Extraction Score")]
    pub extraction_score: String,
    #[serde(rename = "Coupling Metric")]
    pub coupling_metric: String,
    #[serde(rename = "Complexity Metric")]
    pub complexity_metric: String,
    #[serde(rename = "Tech Debt Score")]
    pub tech_debt_score: String,
    #[serde(rename = "External APIs")]
    pub external_apis: u32,
}

/// A project that could not be scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFailure {
    pub project: String,
    pub reason: String,
}

/// Dependency scope counts for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectScope {
    pub project: String,
    pub in_scope: usize,
    pub excluded: usize,
}

/// Run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub analysis_duration_ms: u64,
    pub projects_analyzed: usize,
    pub timestamp: String,
    pub tool_version: String,
    pub format_version: String,
}

impl Default for RunMetadata {
    fn default() -> Self {
        Self {
            analysis_duration_ms: 0,
            projects_analyzed: 0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            format_version: REPORT_FORMAT_VERSION.to_string(),
        }
    }
}

/// Ranked results of an analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Scored projects, most difficult to extract first
    pub records: Vec<ExtractionScoreRecord>,
    /// Projects that could not be scored
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ProjectFailure>,
    /// Filter validation findings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<PatternFinding>,
    /// Dependency scope per project that listed dependencies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<ProjectScope>,
    /// Ranges the scores were normalized against
    pub ranges: ResolvedRanges,
    pub metadata: RunMetadata,
}

impl AnalysisReport {
    /// True when at least one project was submitted and none could be scored
    pub fn all_failed(&self) -> bool {
        self.records.is_empty() && !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_range() {
        let range = MetricRange::observed([12.0, f64::NAN, 3.5, 40.0]).unwrap();
        assert_eq!(range, MetricRange::new(3.5, 40.0));
        assert!(MetricRange::observed(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_project_from_camel_case_json() {
        let json = r#"{
            "name": "Acme.Orders",
            "coupling": null,
            "complexity": 40,
            "techDebt": 12.5,
            "externalApis": 3
        }"#;
        let project: ProjectMetrics = serde_json::from_str(json).unwrap();
        let raw = project.raw();
        assert_eq!(raw.coupling, None);
        assert_eq!(raw.complexity, Some(40.0));
        assert_eq!(raw.tech_debt, Some(12.5));
        assert_eq!(raw.external_apis, 3);
    }

    #[test]
    fn test_record_serializes_with_column_names() {
        let record = ExtractionScoreRecord {
            project_name: "Acme.Orders".to_string(),
            extraction_score: "60.0".to_string(),
            coupling_metric: "N/A".to_string(),
            complexity_metric: "40.0".to_string(),
            tech_debt_score: "80.0".to_string(),
            external_apis: 2,
        };
        let json = serde_json::to_string(&record).unwrap();
        for column in EXPORT_COLUMNS {
            assert!(json.contains(&format!("\"{column}\"")), "missing {column}");
        }
    }

    #[test]
    fn test_all_failed() {
        let mut report = AnalysisReport::default();
        assert!(!report.all_failed());
        report.failures.push(ProjectFailure {
            project: "Legacy".to_string(),
            reason: "no metrics".to_string(),
        });
        assert!(report.all_failed());
    }
}
