pub mod best_scores;
pub mod state;

pub use best_scores::{merge_best_scores, MAX_BEST_SCORES};
pub use state::{Phase, Session, DEFAULT_FEEDBACK_DELAY, REWARD};
