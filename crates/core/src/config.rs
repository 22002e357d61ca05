use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// On-disk encodings accepted for configuration and metrics documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| Self::from_extension(&ext.to_string_lossy()))
    }

    /// Deserialize `content` in this format
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ConfigError> {
        Ok(match self {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        })
    }
}

/// Namespaces excluded from dependency analysis unless allowed explicitly
pub const DEFAULT_BLOCK_LIST: &[&str] = &["Microsoft.*", "System.*", "mscorlib", "netstandard"];

/// Block and allow pattern lists for dependency scoping.
///
/// A namespace matched by an allow pattern is always in scope, even when a
/// block pattern matches it too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfiguration {
    #[serde(default, alias = "blockList", alias = "BlockList")]
    pub block_list: Vec<String>,
    #[serde(default, alias = "allowList", alias = "AllowList")]
    pub allow_list: Vec<String>,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            block_list: DEFAULT_BLOCK_LIST.iter().map(|s| s.to_string()).collect(),
            allow_list: vec![],
        }
    }
}

/// Filter files may keep the lists at the top level or under `filters`,
/// not both. Unknown keys are rejected at either level.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FilterDocument {
    #[serde(default, alias = "Filters")]
    filters: Option<FilterConfiguration>,
    #[serde(default, alias = "blockList", alias = "BlockList")]
    block_list: Option<Vec<String>>,
    #[serde(default, alias = "allowList", alias = "AllowList")]
    allow_list: Option<Vec<String>>,
}

impl FilterConfiguration {
    pub fn new(block_list: Vec<String>, allow_list: Vec<String>) -> Self {
        Self {
            block_list,
            allow_list,
        }
    }

    /// Parse a filter document. Lists missing from the document are empty.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, ConfigError> {
        let document: FilterDocument = format.parse(content)?;
        match document.filters {
            Some(_) if document.block_list.is_some() || document.allow_list.is_some() => {
                Err(ConfigError::InvalidConfig(
                    "filter lists given both at the top level and under `filters`".to_string(),
                ))
            }
            Some(filters) => Ok(filters),
            None => Ok(Self::new(
                document.block_list.unwrap_or_default(),
                document.allow_list.unwrap_or_default(),
            )),
        }
    }

    /// Load a filter document, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }
}

/// Configuration for an analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Dependency scoping rules
    pub filters: FilterConfiguration,
    /// Number of threads (0 = auto)
    pub threads: usize,
    /// Treat filter validation findings as fatal
    pub strict: bool,
}

impl AnalysisConfig {
    pub fn new(filters: FilterConfiguration) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
