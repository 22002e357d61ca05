use super::FormatError;
use crate::models::AnalysisReport;

/// Serialize an AnalysisReport to pretty-printed JSON
pub fn to_json(report: &AnalysisReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}
