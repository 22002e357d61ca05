use super::FormatError;
use crate::models::AnalysisReport;

/// Serialize an AnalysisReport to YAML
pub fn to_yaml(report: &AnalysisReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}
