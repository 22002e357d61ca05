use super::ScoreError;
use crate::models::NormalizedMetric;
use serde::Serialize;

/// Default weight of the coupling metric
pub const COUPLING_WEIGHT: f64 = 0.40;
/// Default weight of the complexity metric
pub const COMPLEXITY_WEIGHT: f64 = 0.30;
/// Default weight of the tech-debt metric
pub const TECH_DEBT_WEIGHT: f64 = 0.30;

/// Relative weights of the metrics blended into the extraction score.
///
/// Weights of metrics missing for a project are dropped and the rest are
/// rescaled to sum to 1, so scores stay comparable across projects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightPolicy {
    coupling: f64,
    complexity: f64,
    tech_debt: f64,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            coupling: COUPLING_WEIGHT,
            complexity: COMPLEXITY_WEIGHT,
            tech_debt: TECH_DEBT_WEIGHT,
        }
    }
}

impl WeightPolicy {
    /// Build a custom policy. Weights must be finite and non-negative, and at
    /// least one mandatory metric (complexity, tech-debt) must carry weight.
    pub fn new(coupling: f64, complexity: f64, tech_debt: f64) -> Result<Self, ScoreError> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        if !(valid(coupling) && valid(complexity) && valid(tech_debt)) {
            return Err(ScoreError::InvalidWeights(format!(
                "weights must be finite and non-negative (got {coupling}, {complexity}, {tech_debt})"
            )));
        }
        if complexity + tech_debt <= 0.0 {
            return Err(ScoreError::InvalidWeights(
                "complexity and tech-debt cannot both have zero weight".to_string(),
            ));
        }
        Ok(Self {
            coupling,
            complexity,
            tech_debt,
        })
    }

    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    pub fn tech_debt(&self) -> f64 {
        self.tech_debt
    }

    /// Weighted mean of the available metrics, or `None` when no weighted
    /// mandatory metric is available.
    fn blend(
        &self,
        coupling: NormalizedMetric,
        complexity: NormalizedMetric,
        tech_debt: NormalizedMetric,
    ) -> Option<f64> {
        let mandatory = [(complexity, self.complexity), (tech_debt, self.tech_debt)];
        if !mandatory.iter().any(|(m, w)| m.is_available() && *w > 0.0) {
            return None;
        }

        let (weighted, total) = mandatory
            .into_iter()
            .chain(std::iter::once((coupling, self.coupling)))
            .filter_map(|(metric, weight)| metric.value().map(|v| (v, weight)))
            .fold((0.0, 0.0), |(sum, total), (v, w)| (sum + v * w, total + w));

        Some((weighted / total).clamp(0.0, 100.0))
    }
}

/// Composite result for one project
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionScore {
    /// Weighted score in [0, 100], full precision
    pub score: f64,
    /// Carried alongside, never blended into `score`
    pub external_apis: u32,
}

/// Blend normalized metrics into one extraction-difficulty score.
///
/// Fails with [`ScoreError::MetricsInsufficient`] when both complexity and
/// tech-debt are unavailable.
pub fn aggregate(
    project: &str,
    coupling: NormalizedMetric,
    complexity: NormalizedMetric,
    tech_debt: NormalizedMetric,
    external_apis: u32,
) -> Result<ExtractionScore, ScoreError> {
    aggregate_with(
        &WeightPolicy::default(),
        project,
        coupling,
        complexity,
        tech_debt,
        external_apis,
    )
}

/// [`aggregate`] with an explicit weight policy
pub fn aggregate_with(
    policy: &WeightPolicy,
    project: &str,
    coupling: NormalizedMetric,
    complexity: NormalizedMetric,
    tech_debt: NormalizedMetric,
    external_apis: u32,
) -> Result<ExtractionScore, ScoreError> {
    let score = policy
        .blend(coupling, complexity, tech_debt)
        .ok_or_else(|| ScoreError::MetricsInsufficient {
            project: project.to_string(),
        })?;

    Ok(ExtractionScore {
        score,
        external_apis,
    })
}
