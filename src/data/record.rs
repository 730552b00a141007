use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::geo::GeoPoint;

/// One row of the department table.
///
/// Column names follow the Spanish headers of the bundled CSV; the English
/// names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename(deserialize = "departamento"), alias = "department")]
    pub department: String,
    pub capital: String,
    #[serde(rename(deserialize = "aeropuerto"), alias = "airport")]
    pub airport: String,
    #[serde(rename(deserialize = "lugar_aeropuerto"), alias = "airport_city")]
    pub airport_city: String,
    #[serde(alias = "IATA")]
    pub iata: String,
    #[serde(rename(deserialize = "altitud"), alias = "altitude")]
    pub altitude: f64,
    #[serde(rename(deserialize = "latitud"), alias = "latitude")]
    pub latitude: f64,
    #[serde(rename(deserialize = "longitud"), alias = "longitude")]
    pub longitude: f64,
}

impl Record {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// One-line description shown for a map marker.
    pub fn marker_label(&self) -> String {
        format!("{} - {} - Altitude: {} m", self.department, self.capital, self.altitude)
    }

    /// Check that every field carries a usable value.
    /// `row` is the 1-based data row, used in the error.
    pub fn validate(&self, row: usize) -> Result<(), DataError> {
        let text_fields = [
            ("department", &self.department),
            ("capital", &self.capital),
            ("airport", &self.airport),
            ("airport_city", &self.airport_city),
            ("iata", &self.iata),
        ];
        for (column, value) in text_fields {
            if value.trim().is_empty() {
                return Err(DataError::EmptyField { row, column });
            }
        }

        let numeric_fields = [
            ("altitude", self.altitude),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
        ];
        for (column, value) in numeric_fields {
            if !value.is_finite() {
                return Err(DataError::NonFinite { row, column });
            }
        }

        Ok(())
    }
}
