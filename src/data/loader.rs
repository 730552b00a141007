use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::record::Record;
use crate::error::DataError;

/// Department table shipped with the binary.
const BUNDLED_TABLE: &str = include_str!("../../data/departamentos_colombia.csv");

/// Load the record table from `path`, or the bundled table when `None`.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Record>, DataError> {
    match path {
        Some(path) => load_records_from_path(path),
        None => parse_records(BUNDLED_TABLE.as_bytes()),
    }
}

pub fn load_records_from_path(path: &Path) -> Result<Vec<Record>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(file)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Parse CSV with a header row into records, preserving row order.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in csv_reader.deserialize().enumerate() {
        let row = i + 1;
        let record: Record = result.map_err(|source| DataError::Csv { row, source })?;
        record.validate(row)?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataError::EmptyTable);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "departamento,capital,aeropuerto,lugar_aeropuerto,iata,altitud,latitud,longitud\n";

    #[test]
    fn test_bundled_table_loads() {
        let records = load_records(None).unwrap();
        assert!(records.len() >= 30);
        assert_eq!(records[0].department, "Amazonas");
        assert!(records.iter().any(|r| r.iata == "BOG" && r.capital == "Bogotá"));
    }

    #[test]
    fn test_parse_preserves_order() {
        let csv = format!(
            "{}Meta,Villavicencio,Aeropuerto Vanguardia,Villavicencio,VVC,423,4.1679,-73.6138\n\
             Huila,Neiva,Aeropuerto Benito Salas,Neiva,NVA,439,2.9501,-75.2940\n",
            HEADER
        );
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].iata, "VVC");
        assert_eq!(records[1].iata, "NVA");
        assert_eq!(records[1].altitude, 439.0);
    }

    #[test]
    fn test_english_headers_accepted() {
        let csv = "department,capital,airport,airport_city,iata,altitude,latitude,longitude\n\
                   Huila,Neiva,Aeropuerto Benito Salas,Neiva,NVA,439,2.9501,-75.2940\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].airport_city, "Neiva");
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "departamento,capital,aeropuerto,lugar_aeropuerto,iata,altitud,latitud\n\
                   Huila,Neiva,Aeropuerto Benito Salas,Neiva,NVA,439,2.9501\n";
        let err = parse_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv { row: 1, .. }));
    }

    #[test]
    fn test_non_numeric_altitude_is_error() {
        let csv = format!("{}Huila,Neiva,Aeropuerto Benito Salas,Neiva,NVA,high,2.9501,-75.2940\n", HEADER);
        assert!(matches!(
            parse_records(csv.as_bytes()),
            Err(DataError::Csv { .. })
        ));
    }

    #[test]
    fn test_empty_field_is_error() {
        let csv = format!("{}Huila,,Aeropuerto Benito Salas,Neiva,NVA,439,2.9501,-75.2940\n", HEADER);
        let err = parse_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::EmptyField { row: 1, column: "capital" }));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        assert!(matches!(
            parse_records(HEADER.as_bytes()),
            Err(DataError::EmptyTable)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_table.csv");
        assert!(matches!(
            load_records(Some(&path)),
            Err(DataError::Io { .. })
        ));
    }
}
