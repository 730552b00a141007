//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::quiz::Verdict;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Map markers: gray until selected, then blue
    pub marker_unselected: Color,
    pub marker_selected: Color,
    pub map_cursor: Color,
    pub map_outline: Color,

    // Answer feedback
    pub correct: Color,
    pub incorrect: Color,
    pub invalid: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub score_color: Color,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            marker_unselected: Color::Gray,
            marker_selected: Color::Blue,
            map_cursor: Color::Yellow,
            map_outline: Color::Indexed(240),
            correct: Color::Green,
            incorrect: Color::Red,
            invalid: Color::Yellow,
            muted: Color::Gray,
            title_color: Color::Cyan,
            score_color: Color::Green,
            tab_active_style: Style::new().fg(Color::Cyan).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    pub fn light() -> Self {
        Self {
            marker_unselected: Color::DarkGray,
            marker_selected: Color::Blue,
            map_cursor: Color::Magenta,
            map_outline: Color::Indexed(248),
            correct: Color::Green,
            incorrect: Color::Red,
            invalid: Color::Indexed(130),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            score_color: Color::Indexed(28),
            tab_active_style: Style::new().fg(Color::Blue).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    pub fn verdict_color(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Correct => self.correct,
            Verdict::Incorrect => self.incorrect,
            Verdict::InvalidInput => self.invalid,
        }
    }
}

/// Pick a palette. `Auto` asks the terminal for its background luma and
/// falls back to dark when the terminal does not answer.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                tracing::debug!("terminal background detection failed: {}", e);
                ThemeColors::dark()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_gray_and_blue() {
        for theme in [ThemeColors::dark(), ThemeColors::light()] {
            assert_eq!(theme.marker_selected, Color::Blue);
            assert!(matches!(theme.marker_unselected, Color::Gray | Color::DarkGray));
        }
    }

    #[test]
    fn test_verdict_colors() {
        let theme = ThemeColors::dark();
        assert_eq!(theme.verdict_color(Verdict::Correct), Color::Green);
        assert_eq!(theme.verdict_color(Verdict::Incorrect), Color::Red);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(resolve_theme(ThemeMode::Light).title_color, Color::Blue);
        assert_eq!(resolve_theme(ThemeMode::Dark).title_color, Color::Cyan);
    }
}
