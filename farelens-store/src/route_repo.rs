use std::fs::File;
use std::io::Read;
use std::path::Path;

use farelens_core::routes::{RouteRecord, RouteTable};

use crate::ArtifactError;

const SOURCE_COLUMN: &str = "SOURCE CITY";
const DESTINATION_COLUMN: &str = "DESTINATION CITY";
const DURATION_COLUMN: &str = "MIN_DURATION";

/// Load the route reference table from a CSV file on disk.
pub fn load_route_table(path: &Path) -> Result<RouteTable, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_route_table(file)?;
    tracing::info!(
        path = %path.display(),
        routes = table.len(),
        "route table loaded"
    );
    Ok(table)
}

/// Parse the route table from any reader.
///
/// Header names are case-insensitive: they are normalized to uppercase
/// before the required columns are located. City values keep whatever
/// case the file carries.
pub fn read_route_table<R: Read>(reader: R) -> Result<RouteTable, ArtifactError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_uppercase())
        .collect();

    let column_index = |name: &'static str| -> Result<usize, ArtifactError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(ArtifactError::MissingColumn(name))
    };

    let source_idx = column_index(SOURCE_COLUMN)?;
    let destination_idx = column_index(DESTINATION_COLUMN)?;
    let duration_idx = column_index(DURATION_COLUMN)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let field = |idx: usize| -> Result<&str, ArtifactError> {
            row.get(idx).ok_or_else(|| ArtifactError::BadRecord {
                line,
                reason: "row is shorter than the header".to_string(),
            })
        };

        let duration_raw = field(duration_idx)?;
        let min_duration_hours: f64 =
            duration_raw
                .trim()
                .parse()
                .map_err(|_| ArtifactError::BadRecord {
                    line,
                    reason: format!("{} {:?} is not a number", DURATION_COLUMN, duration_raw),
                })?;

        records.push(RouteRecord {
            source_city: field(source_idx)?.trim().to_string(),
            destination_city: field(destination_idx)?.trim().to_string(),
            min_duration_hours,
        });
    }

    Ok(RouteTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_well_formed_table() {
        let csv = "SOURCE CITY,DESTINATION CITY,MIN_DURATION\n\
                   Delhi,Mumbai,2.0\n\
                   Mumbai,Delhi,2.17\n";
        let table = read_route_table(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        let resolved = table.duration_for("Delhi", "Mumbai");
        assert_eq!(resolved.hours, 2.0);
        assert!(!resolved.fallback);
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let csv = "source city,Destination City,min_duration\n\
                   Delhi,Kolkata,2.25\n";
        let table = read_route_table(csv.as_bytes()).unwrap();
        assert_eq!(table.duration_for("Delhi", "Kolkata").hours, 2.25);
    }

    #[test]
    fn test_city_values_keep_their_case() {
        let csv = "SOURCE CITY,DESTINATION CITY,MIN_DURATION\n\
                   New Delhi,Mumbai,2.1\n";
        let table = read_route_table(csv.as_bytes()).unwrap();
        assert_eq!(table.source_cities(), vec!["New Delhi"]);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "SOURCE CITY,DESTINATION CITY\nDelhi,Mumbai\n";
        let err = read_route_table(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::MissingColumn("MIN_DURATION")));
    }

    #[test]
    fn test_unparseable_duration_is_fatal() {
        let csv = "SOURCE CITY,DESTINATION CITY,MIN_DURATION\n\
                   Delhi,Mumbai,fast\n";
        let err = read_route_table(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::BadRecord { .. }));
    }
}
