use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Quiz category: selects which record fields become prompt and answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Departments,
    Capitals,
    Airports,
    #[serde(alias = "iata")]
    #[value(alias = "iata")]
    IataCodes,
    Practice,
    Distance,
    Altitude,
}

impl Mode {
    /// Selector order shown in the interface.
    pub const ALL: [Mode; 7] = [
        Mode::Departments,
        Mode::Capitals,
        Mode::Airports,
        Mode::IataCodes,
        Mode::Practice,
        Mode::Distance,
        Mode::Altitude,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Departments => "Departments",
            Mode::Capitals => "Capitals",
            Mode::Airports => "Airports",
            Mode::IataCodes => "IATA Codes",
            Mode::Practice => "Practice",
            Mode::Distance => "Distance",
            Mode::Altitude => "Altitude",
        }
    }

    /// Lenient name lookup: labels, kebab-case names and the Spanish
    /// selector names are all accepted, ignoring case.
    pub fn parse(name: &str) -> Option<Mode> {
        let key = name.trim().to_lowercase().replace(['_', ' '], "-");
        let mode = match key.as_str() {
            "departments" | "departamentos" => Mode::Departments,
            "capitals" | "capitales" => Mode::Capitals,
            "airports" | "aeropuertos" => Mode::Airports,
            "iata-codes" | "iata" | "códigos-iata" | "codigos-iata" => Mode::IataCodes,
            "practice" | "práctica" | "practica" => Mode::Practice,
            "distance" | "distancia" => Mode::Distance,
            "altitude" | "altitud" => Mode::Altitude,
            _ => return None,
        };
        Some(mode)
    }

    pub fn next(self) -> Mode {
        let i = self.position();
        Mode::ALL[(i + 1) % Mode::ALL.len()]
    }

    pub fn previous(self) -> Mode {
        let i = self.position();
        Mode::ALL[(i + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }

    pub fn position(self) -> usize {
        Mode::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Modes answered by typing into the text field.
    pub fn takes_text_answer(self) -> bool {
        !matches!(self, Mode::Practice | Mode::Distance)
    }
}

/// Difficulty selector. Accepted and displayed, but it changes nothing:
/// tolerance, reward and question order are the same at every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
