use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use super::DataError;
use super::model::{CrimeDataset, CrimeRecord};
use crate::config::REQUIRED_COLUMNS;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Download the CSV at `url` and parse it.
///
/// Any transport error or non-success status aborts the run; no retries.
pub fn fetch_dataset(url: &str) -> Result<CrimeDataset> {
    info!("Fetching dataset from {url}");
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("downloading {url}"))?;

    load_reader(response).with_context(|| format!("parsing CSV from {url}"))
}

/// Load the dataset from a local CSV file.
#[allow(dead_code)] // offline runs against generate_sample output
pub fn load_file(path: &Path) -> Result<CrimeDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_reader(file).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.
/// `Year`, `States/UTs`, `Murder`, `Rape`, `Kidnapping & Abduction` and
/// `Robbery` must be present; every other column is ignored.
pub fn load_reader<R: Read>(reader: R) -> Result<CrimeDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required.to_string()).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CrimeRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        debug!("row {row_no}: {} {}", record.region, record.year);
        records.push(record);
    }

    info!("Loaded {} rows", records.len());
    Ok(CrimeDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Offense;

    const SAMPLE: &str = "\
States/UTs,District,Year,Murder,Rape,Kidnapping & Abduction,Robbery
Kerala,TOTAL,2011,365,1132,261,1028
Bihar,TOTAL,2011,3198,934,4268,1250
Kerala,TOTAL,2012,374,1019,,876
";

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[1].region, "Bihar");
        assert_eq!(ds.records[1].year, 2011);
        assert_eq!(ds.records[1].count(Offense::KidnappingAbduction), 4268);
    }

    #[test]
    fn blank_cell_loads_as_missing() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.records[2].kidnapping, None);
        assert_eq!(ds.records[2].count(Offense::KidnappingAbduction), 0);
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "States/UTs,Year,Murder,Rape,Robbery\nGoa,2012,1,2,3\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        match err.downcast_ref::<DataError>() {
            Some(DataError::MissingColumn(col)) => assert_eq!(col, "Kidnapping & Abduction"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_count_is_a_parse_error() {
        let csv = "States/UTs,Year,Murder,Rape,Kidnapping & Abduction,Robbery\n\
                   Goa,2012,many,2,3,4\n";
        assert!(load_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crime_data.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_file(Path::new("/nonexistent/crime.csv")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/crime.csv"));
    }
}
