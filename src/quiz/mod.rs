pub mod evaluate;
pub mod mode;
pub mod question;

pub use evaluate::{evaluate, Evaluation, Verdict, ALTITUDE_TOLERANCE_M, DISTANCE_THRESHOLD_KM};
pub use mode::{Difficulty, Mode};
pub use question::{generate_named, Answer, Question};
