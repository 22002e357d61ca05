//! Normalization and aggregation of per-project metrics

mod aggregator;
mod normalizer;

pub use aggregator::{
    aggregate, aggregate_with, ExtractionScore, WeightPolicy, COMPLEXITY_WEIGHT,
    COUPLING_WEIGHT, TECH_DEBT_WEIGHT,
};
pub use normalizer::{normalize, normalize_in, SCALE_MAX};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Insufficient metrics for project '{project}': complexity and tech-debt are both unavailable")]
    MetricsInsufficient { project: String },
    #[error("Invalid weight policy: {0}")]
    InvalidWeights(String),
}
