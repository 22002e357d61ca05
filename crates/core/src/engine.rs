use crate::config::AnalysisConfig;
use crate::filter::{validate, FilterEngine, FindingKind, PatternFinding};
use crate::input::resolve_ranges;
use crate::models::{
    AnalysisReport, ExtractionScoreRecord, MetricsDocument, ProjectFailure, ProjectMetrics,
    ProjectScope, ResolvedRanges, RunMetadata,
};
use crate::output::to_record;
use crate::scoring::{aggregate_with, normalize_in, ScoreError, WeightPolicy};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Filter configuration has {} finding(s)", .0.len())]
    InvalidFilters(Vec<PatternFinding>),
    #[error("Failed to build thread pool: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}

/// Outcome of scoring one project
struct ScoredProject {
    score: f64,
    record: ExtractionScoreRecord,
}

/// Scores every project of a metrics document and ranks the results
pub struct ExtractionAnalyzer {
    config: AnalysisConfig,
    filter: FilterEngine,
    policy: WeightPolicy,
    findings: Vec<PatternFinding>,
}

impl ExtractionAnalyzer {
    /// Validate the filter configuration and prepare the analyzer.
    ///
    /// Findings are logged and kept for the report. A misplaced wildcard is
    /// always an error; in strict mode every finding is.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        let findings = validate(&config.filters);
        for finding in &findings {
            warn!("Filter configuration: {}", finding);
        }
        if config.strict && !findings.is_empty() {
            return Err(AnalysisError::InvalidFilters(findings));
        }
        let misplaced: Vec<PatternFinding> = findings
            .iter()
            .filter(|f| f.kind == FindingKind::MisplacedWildcard)
            .cloned()
            .collect();
        if !misplaced.is_empty() {
            return Err(AnalysisError::InvalidFilters(misplaced));
        }

        Ok(Self {
            filter: FilterEngine::new(config.filters.clone()),
            config,
            policy: WeightPolicy::default(),
            findings,
        })
    }

    /// Replace the default weight policy
    pub fn with_policy(mut self, policy: WeightPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn findings(&self) -> &[PatternFinding] {
        &self.findings
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    /// Score all projects. Projects that cannot be scored are reported as
    /// failures and never stop the rest of the batch.
    pub fn analyze(&self, document: &MetricsDocument) -> Result<AnalysisReport, AnalysisError> {
        let start = Instant::now();
        let ranges = resolve_ranges(&document.ranges, &document.projects);
        debug!("Normalizing against {:?}", ranges);

        let projects = &document.projects;
        let results: Vec<Result<ScoredProject, ScoreError>> = if self.config.threads == 1 {
            projects
                .iter()
                .map(|project| self.score(project, &ranges))
                .collect()
        } else if self.config.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()?;
            pool.install(|| {
                projects
                    .par_iter()
                    .map(|project| self.score(project, &ranges))
                    .collect()
            })
        } else {
            projects
                .par_iter()
                .map(|project| self.score(project, &ranges))
                .collect()
        };

        let mut scored = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (project, result) in projects.iter().zip(results) {
            match result {
                Ok(scored_project) => scored.push(scored_project),
                Err(e) => {
                    warn!("Skipping project '{}': {}", project.name, e);
                    failures.push(ProjectFailure {
                        project: project.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        rank(&mut scored);

        let scope = projects
            .iter()
            .filter(|p| !p.dependencies.is_empty())
            .map(|p| self.scope_of(p))
            .collect();

        let duration = start.elapsed();
        info!(
            "Scored {} of {} projects in {}ms",
            scored.len(),
            projects.len(),
            duration.as_millis()
        );

        Ok(AnalysisReport {
            records: scored.into_iter().map(|s| s.record).collect(),
            failures,
            findings: self.findings.clone(),
            scope,
            ranges,
            metadata: RunMetadata {
                analysis_duration_ms: duration.as_millis() as u64,
                projects_analyzed: projects.len(),
                ..Default::default()
            },
        })
    }

    /// Score a single project against the given ranges
    pub fn score_project(
        &self,
        project: &ProjectMetrics,
        ranges: &ResolvedRanges,
    ) -> Result<ExtractionScoreRecord, ScoreError> {
        self.score(project, ranges).map(|s| s.record)
    }

    fn score(
        &self,
        project: &ProjectMetrics,
        ranges: &ResolvedRanges,
    ) -> Result<ScoredProject, ScoreError> {
        let raw = project.raw();
        let coupling = normalize_in(raw.coupling, ranges.coupling);
        let complexity = normalize_in(raw.complexity, ranges.complexity);
        let tech_debt = normalize_in(raw.tech_debt, ranges.tech_debt);

        let result = aggregate_with(
            &self.policy,
            &project.name,
            coupling,
            complexity,
            tech_debt,
            raw.external_apis,
        )?;
        debug!("Project '{}' scored {:.3}", project.name, result.score);

        Ok(ScoredProject {
            score: result.score,
            record: to_record(
                &project.name,
                result.score,
                coupling,
                complexity,
                tech_debt,
                result.external_apis,
            ),
        })
    }

    fn scope_of(&self, project: &ProjectMetrics) -> ProjectScope {
        let partition = self.filter.partition(&project.dependencies);
        ProjectScope {
            project: project.name.clone(),
            in_scope: partition.in_scope.len(),
            excluded: partition.excluded.len(),
        }
    }
}

/// Hardest to extract first; equal scores ordered by name
fn rank(scored: &mut [ScoredProject]) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.record.project_name.cmp(&b.record.project_name))
    });
}
