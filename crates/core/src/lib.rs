//! MTA Rust ExtractScore Core Library
//!
//! This library ranks the projects of a monolith by how hard each one would
//! be to extract into an independently deployable service.
//!
//! # Features
//!
//! - Scope dependency namespaces with block/allow lists of exact or
//!   trailing-wildcard patterns (allow wins over block)
//! - Validate filter configurations without failing the load
//! - Normalize coupling, complexity and tech-debt onto a 0-100 scale
//! - Blend them into one extraction-difficulty score, re-weighting when
//!   coupling is unavailable
//! - Export ranked reports as CSV, JSON, YAML or a text summary
//!
//! # Example
//!
//! ```no_run
//! use mta_rust_extractscore_core::{
//!     format_output, load_metrics, AnalysisConfig, ExtractionAnalyzer, FilterConfiguration,
//!     OutputFormat,
//! };
//! use std::path::Path;
//!
//! let config = AnalysisConfig::new(FilterConfiguration::default());
//! let analyzer = ExtractionAnalyzer::new(config).unwrap();
//! let document = load_metrics(Path::new("metrics.json")).unwrap();
//! let report = analyzer.analyze(&document).unwrap();
//!
//! let csv = format_output(&report, OutputFormat::Csv).unwrap();
//! println!("{}", csv);
//! ```

pub mod config;
pub mod engine;
pub mod filter;
pub mod input;
pub mod models;
pub mod output;
pub mod scoring;

// Re-exports for convenience
pub use config::{AnalysisConfig, ConfigError, DocumentFormat, FilterConfiguration};
pub use engine::{AnalysisError, ExtractionAnalyzer};
pub use filter::{matches, validate, FilterEngine, FindingKind, PatternFinding, PatternList};
pub use input::{load_metrics, parse_metrics, InputError};
pub use models::*;
pub use output::{format_output, format_summary, to_record, FormatError, OutputFormat};
pub use scoring::{aggregate, normalize, ExtractionScore, ScoreError, WeightPolicy};
