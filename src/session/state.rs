//! Quiz session: question index, score, best scores, map selection and the
//! answer/feedback phase.

use std::time::{Duration, Instant};

use super::best_scores::merge_best_scores;
use crate::data::Record;
use crate::geo::GeoPoint;
use crate::quiz::{evaluate, Evaluation, Mode, Question};

/// Points awarded for a correct answer.
pub const REWARD: u32 = 10;

/// How long feedback stays on screen before the next question.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    AwaitingAnswer,
    /// Feedback is showing; the session advances once `advance_at` passes.
    Evaluated {
        evaluation: Evaluation,
        advance_at: Instant,
        clear_points: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
    index: usize,
    score: u32,
    best_scores: Vec<u32>,
    selected_points: Vec<GeoPoint>,
    phase: Phase,
    feedback_delay: Duration,
}

impl Session {
    /// `records` must be non-empty; the loader rejects empty tables.
    pub fn new(records: Vec<Record>, feedback_delay: Duration) -> Self {
        Self {
            records,
            index: 0,
            score: 0,
            best_scores: Vec::new(),
            selected_points: Vec::new(),
            phase: Phase::AwaitingAnswer,
            feedback_delay,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_scores(&self) -> &[u32] {
        &self.best_scores
    }

    pub fn selected_points(&self) -> &[GeoPoint] {
        &self.selected_points
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self.phase, Phase::AwaitingAnswer)
    }

    pub fn current_record(&self) -> Option<&Record> {
        self.records.get(self.index)
    }

    pub fn current_question(&self, mode: Mode) -> Question {
        self.current_record()
            .map(|record| Question::generate(record, mode))
            .unwrap_or_else(Question::empty)
    }

    /// Most recently selected map point.
    pub fn last_point(&self) -> Option<GeoPoint> {
        self.selected_points.last().copied()
    }

    pub fn is_selected(&self, point: &GeoPoint) -> bool {
        self.selected_points.contains(point)
    }

    /// Evaluate `text` (or the last selected point) for the current question.
    ///
    /// Returns the evaluation when one took place. Submissions while feedback
    /// is showing, in practice mode, or on the map with nothing selected are
    /// ignored.
    pub fn submit(&mut self, mode: Mode, text: &str, now: Instant) -> Option<Evaluation> {
        if !self.is_awaiting_answer() {
            return None;
        }

        let question = self.current_question(mode);
        let evaluation = evaluate(question.expected.as_ref(), text, self.last_point())?;

        if evaluation.is_correct() {
            self.score += REWARD;
        }
        tracing::debug!(
            index = self.index,
            mode = mode.label(),
            verdict = ?evaluation.verdict,
            score = self.score,
            "answer evaluated"
        );

        self.phase = Phase::Evaluated {
            evaluation: evaluation.clone(),
            advance_at: now + self.feedback_delay,
            clear_points: mode == Mode::Distance,
        };
        Some(evaluation)
    }

    /// Advance once the feedback deadline has passed. Returns true if it did.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Evaluated { advance_at, .. } if now >= advance_at => {
                self.finish_evaluated();
                true
            }
            _ => false,
        }
    }

    /// Move to the next question without evaluating.
    ///
    /// A pending feedback timer is cancelled and its advance happens now.
    pub fn skip(&mut self) {
        if matches!(self.phase, Phase::Evaluated { .. }) {
            self.finish_evaluated();
        } else {
            self.advance();
        }
    }

    /// Add `point` to the selection, or remove it if already selected.
    /// Returns whether the point is selected afterwards.
    pub fn toggle_point(&mut self, point: GeoPoint) -> bool {
        if let Some(pos) = self.selected_points.iter().position(|p| *p == point) {
            self.selected_points.remove(pos);
            false
        } else {
            self.selected_points.push(point);
            true
        }
    }

    /// Start over from the first question with a zero score.
    /// The best-scores list is kept.
    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.selected_points.clear();
        self.phase = Phase::AwaitingAnswer;
    }

    /// Merge the current score into the best-scores list.
    pub fn refresh_best_scores(&mut self) {
        self.best_scores = merge_best_scores(&self.best_scores, self.score);
    }

    fn finish_evaluated(&mut self) {
        if let Phase::Evaluated { clear_points, .. } = self.phase {
            if clear_points {
                self.selected_points.clear();
            }
        }
        self.phase = Phase::AwaitingAnswer;
        self.advance();
    }

    fn advance(&mut self) {
        self.index += 1;
        if self.index >= self.records.len() {
            self.index = 0;
        }
    }
}
