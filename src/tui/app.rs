use ratatui::layout::Rect;
use std::time::Instant;

use super::map;
use super::theme::ThemeColors;
use crate::geo::GeoPoint;
use crate::quiz::{Difficulty, Mode, Question};
use crate::session::Session;

/// How long status bar messages stay visible, in seconds.
const FLASH_SECS: u64 = 3;

pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub show_instructions: bool,
    pub answer_input: String,
    pub map_cursor: GeoPoint,
    pub cursor_marker: Option<usize>,
    /// Inner map area from the last draw, used to resolve mouse clicks.
    pub map_area: Option<Rect>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(session: Session, mode: Mode, difficulty: Difficulty, theme: ThemeColors) -> Self {
        let mut app = Self {
            session,
            mode,
            difficulty,
            show_instructions: false,
            answer_input: String::new(),
            map_cursor: map::map_center(),
            cursor_marker: None,
            map_area: None,
            flash_message: None,
            should_quit: false,
            theme,
        };
        app.rerun();
        app
    }

    pub fn question(&self) -> Question {
        self.session.current_question(self.mode)
    }

    /// Whether typed characters go into the answer field right now.
    pub fn accepts_text(&self) -> bool {
        self.mode.takes_text_answer() && self.session.is_awaiting_answer() && !self.show_instructions
    }

    /// Submit the typed answer, or the last selected point in Distance mode.
    /// In Practice mode there is nothing to check, so this moves on instead.
    pub fn submit(&mut self) {
        self.submit_at(Instant::now());
    }

    pub fn submit_at(&mut self, now: Instant) {
        if self.mode == Mode::Practice {
            self.next_question();
            return;
        }
        if self.session.submit(self.mode, &self.answer_input, now).is_some() {
            self.answer_input.clear();
        }
        self.rerun();
    }

    /// Skip to the next question without answering.
    pub fn next_question(&mut self) {
        self.session.skip();
        self.answer_input.clear();
        self.rerun();
    }

    pub fn next_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn previous_mode(&mut self) {
        self.set_mode(self.mode.previous());
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            self.mode = mode;
            self.answer_input.clear();
            tracing::debug!(mode = mode.label(), "mode changed");
        }
        self.rerun();
    }

    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
        self.show_flash(format!("Difficulty: {}", self.difficulty.label()));
        self.rerun();
    }

    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
        self.rerun();
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.answer_input.clear();
        self.show_flash("Score reset".to_string());
        self.rerun();
    }

    pub fn push_char(&mut self, c: char) {
        if self.accepts_text() {
            self.answer_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.accepts_text() {
            self.answer_input.pop();
        }
    }

    /// Advance past expired feedback and expire old flash messages.
    pub fn on_tick(&mut self, now: Instant) {
        if self.session.poll(now) {
            self.answer_input.clear();
        }
        self.update_flash();
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    /// Move the map cursor by whole steps (Distance mode only).
    pub fn move_cursor(&mut self, lat_steps: i32, lon_steps: i32) {
        if self.mode != Mode::Distance {
            return;
        }
        let moved = GeoPoint::new(
            self.map_cursor.lat + lat_steps as f64 * map::CURSOR_STEP_DEG,
            self.map_cursor.lon + lon_steps as f64 * map::CURSOR_STEP_DEG,
        );
        self.map_cursor = map::clamp_to_bounds(moved);
        self.cursor_marker = None;
    }

    /// Jump the cursor to the next (or previous) airport in table order.
    pub fn jump_marker(&mut self, forward: bool) {
        let count = self.session.records().len();
        if self.mode != Mode::Distance || count == 0 {
            return;
        }
        let next = match (self.cursor_marker, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.cursor_marker = Some(next);
        self.map_cursor = self.session.records()[next].location();
    }

    /// Toggle the point under the map cursor.
    pub fn toggle_cursor_point(&mut self) {
        let point = self.map_cursor;
        self.toggle_point(point);
    }

    /// Info line for the airport under the cursor, if the cursor sits on one.
    pub fn marker_info(&self) -> Option<String> {
        if self.mode != Mode::Distance {
            return None;
        }
        self.cursor_marker
            .and_then(|i| self.session.records().get(i))
            .map(|r| r.marker_label())
    }

    /// Toggle the point under a mouse click at (`column`, `row`).
    pub fn click_map(&mut self, column: u16, row: u16) {
        if self.mode != Mode::Distance {
            return;
        }
        let Some(area) = self.map_area else {
            return;
        };
        if let Some(point) = map::click_target(area, column, row, self.session.records()) {
            self.map_cursor = point;
            self.cursor_marker = self
                .session
                .records()
                .iter()
                .position(|r| r.location() == point);
            self.toggle_point(point);
        }
    }

    fn toggle_point(&mut self, point: GeoPoint) {
        if self.mode != Mode::Distance || !self.session.is_awaiting_answer() {
            return;
        }
        self.session.toggle_point(point);
        self.rerun();
    }

    /// Every user action re-renders the page, and every render merges the
    /// current score into the best-scores list.
    fn rerun(&mut self) {
        self.session.refresh_best_scores();
    }
}
