use super::FormatError;
use crate::models::ExtractionScoreRecord;

/// Write records as CSV with a header row of the export column names
pub fn to_csv(records: &[ExtractionScoreRecord]) -> Result<String, FormatError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    if records.is_empty() {
        writer.write_record(crate::models::EXPORT_COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::CsvError(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalizedMetric::{Available, Unavailable};
    use crate::output::to_record;

    const HEADER: &str =
        "Project Name,Extraction Score,Coupling Metric,Complexity Metric,Tech Debt Score,External APIs";

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            to_record("Acme.Orders", 60.0, Unavailable, Available(40.0), Available(80.0), 2),
            to_record("Acme.Billing", 12.34, Available(5.0), Available(10.0), Available(20.0), 0),
        ];

        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "Acme.Orders,60.0,N/A,40.0,80.0,2");
        assert_eq!(lines[2], "Acme.Billing,12.3,5.0,10.0,20.0,0");
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), HEADER);
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let records = vec![to_record("Acme, Legacy", 1.0, Unavailable, Available(1.0), Available(1.0), 0)];
        let csv = to_csv(&records).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("\"Acme, Legacy\","));
    }

    #[test]
    fn test_identical_input_identical_bytes() {
        let records = vec![to_record("Acme.Orders", 73.44, Available(1.0), Available(2.0), Unavailable, 9)];
        assert_eq!(to_csv(&records).unwrap(), to_csv(&records).unwrap());
    }
}
