use super::mode::Mode;
use crate::data::Record;
use crate::geo::GeoPoint;

/// The value a question expects back.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Compared ignoring case and surrounding whitespace.
    Text(String),
    /// Compared with a fixed absolute tolerance.
    Numeric(f64),
    /// Compared by great-circle distance to the last selected map point.
    Coordinate(GeoPoint),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    /// `None` when there is nothing to check (practice, unknown mode).
    pub expected: Option<Answer>,
}

impl Question {
    pub fn empty() -> Self {
        Self {
            prompt: String::new(),
            expected: None,
        }
    }

    pub fn generate(record: &Record, mode: Mode) -> Self {
        let (prompt, expected) = match mode {
            Mode::Departments => (
                format!("Which department is the city of {} in?", record.airport_city),
                Some(Answer::Text(record.department.clone())),
            ),
            Mode::Capitals => (
                format!("What is the capital of the department of {}?", record.department),
                Some(Answer::Text(record.capital.clone())),
            ),
            Mode::Airports => (
                format!("Which city is the airport {} located in?", record.airport),
                Some(Answer::Text(record.airport_city.clone())),
            ),
            Mode::IataCodes => (
                format!("What is the IATA code of the airport in {}?", record.airport_city),
                Some(Answer::Text(record.iata.clone())),
            ),
            Mode::Altitude => (
                format!(
                    "What is the approximate altitude of the airport {} (in meters)?",
                    record.airport
                ),
                Some(Answer::Numeric(record.altitude)),
            ),
            Mode::Practice => (practice_sheet(record), None),
            Mode::Distance => (
                format!("Select the city of the airport {} on the map.", record.airport),
                Some(Answer::Coordinate(record.location())),
            ),
        };
        Self { prompt, expected }
    }

    pub fn is_checkable(&self) -> bool {
        self.expected.is_some()
    }
}

/// Generate a question from a mode name; unknown names give an empty question.
pub fn generate_named(record: &Record, mode_name: &str) -> Question {
    match Mode::parse(mode_name) {
        Some(mode) => Question::generate(record, mode),
        None => Question::empty(),
    }
}

fn practice_sheet(record: &Record) -> String {
    format!(
        "Department: {}\nCapital: {}\nAirport: {}\nAirport city: {}\nIATA code: {}\nAltitude: {} m",
        record.department,
        record.capital,
        record.airport,
        record.airport_city,
        record.iata,
        record.altitude
    )
}
