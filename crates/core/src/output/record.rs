use crate::models::{ExtractionScoreRecord, NormalizedMetric};

/// Marker written for metrics that could not be measured
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a score with exactly one decimal digit, clamped to 0-100
pub fn format_score(value: f64) -> String {
    // + 0.0 turns -0.0 into 0.0
    format!("{:.1}", value.clamp(0.0, 100.0) + 0.0)
}

/// Format a normalized metric, or `N/A` when unavailable
pub fn format_metric(metric: NormalizedMetric) -> String {
    match metric {
        NormalizedMetric::Available(v) => format_score(v),
        NormalizedMetric::Unavailable => NOT_AVAILABLE.to_string(),
    }
}

/// Build the exported row for one project. The project name is passed
/// through unchanged, even when empty.
pub fn to_record(
    project_name: &str,
    extraction_score: f64,
    coupling: NormalizedMetric,
    complexity: NormalizedMetric,
    tech_debt: NormalizedMetric,
    external_apis: u32,
) -> ExtractionScoreRecord {
    ExtractionScoreRecord {
        project_name: project_name.to_string(),
        extraction_score: format_score(extraction_score),
        coupling_metric: format_metric(coupling),
        complexity_metric: format_metric(complexity),
        tech_debt_score: format_metric(tech_debt),
        external_apis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalizedMetric::{Available, Unavailable};

    #[test]
    fn test_one_decimal() {
        assert_eq!(format_score(73.4), "73.4");
        assert_eq!(format_score(60.0), "60.0");
        assert_eq!(format_score(36.0 / 0.6), "60.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(100.0), "100.0");
        assert_eq!(format_score(12.96), "13.0");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_score(-0.0), "0.0");
    }

    #[test]
    fn test_unavailable_is_marker_not_zero() {
        assert_eq!(format_metric(Unavailable), "N/A");
        assert_eq!(format_metric(Available(0.0)), "0.0");
    }

    #[test]
    fn test_missing_coupling_record() {
        let record = to_record("Acme.Orders", 60.0, Unavailable, Available(40.0), Available(80.0), 3);
        assert_eq!(record.project_name, "Acme.Orders");
        assert_eq!(record.extraction_score, "60.0");
        assert_eq!(record.coupling_metric, "N/A");
        assert_eq!(record.complexity_metric, "40.0");
        assert_eq!(record.tech_debt_score, "80.0");
        assert_eq!(record.external_apis, 3);
    }

    #[test]
    fn test_empty_name_passes_through() {
        let record = to_record("", 10.0, Available(1.0), Available(2.0), Available(3.0), 0);
        assert_eq!(record.project_name, "");
    }

    #[test]
    fn test_serializing_twice_is_identical() {
        let first = to_record("Acme.Billing", 56.25, Available(50.0), Available(40.0), Available(80.0), 2);
        let second = to_record("Acme.Billing", 56.25, Available(50.0), Available(40.0), Available(80.0), 2);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
