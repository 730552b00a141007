use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::quiz::{Difficulty, Mode};
use crate::session::DEFAULT_FEEDBACK_DELAY;

pub const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// CSV table to quiz on; the bundled table is used when unset.
    pub data_path: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub difficulty: Option<Difficulty>,
    /// Humantime duration, e.g. "5s" or "1500ms".
    pub feedback_delay: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub theme: Option<ThemeMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl Config {
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Departments)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }

    pub fn feedback_delay(&self) -> anyhow::Result<Duration> {
        match &self.feedback_delay {
            Some(s) => Ok(humantime::parse_duration(s.trim())?),
            None => Ok(DEFAULT_FEEDBACK_DELAY),
        }
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }
}
