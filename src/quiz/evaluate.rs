use super::question::Answer;
use crate::geo::GeoPoint;

/// Allowed deviation for altitude answers, in meters (inclusive).
pub const ALTITUDE_TOLERANCE_M: f64 = 50.0;

/// A map answer counts only when strictly closer than this, in kilometers.
pub const DISTANCE_THRESHOLD_KM: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The submission could not be read (non-numeric altitude).
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub feedback: String,
    pub distance_km: Option<f64>,
}

impl Evaluation {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    fn new(verdict: Verdict, feedback: String) -> Self {
        Self {
            verdict,
            feedback,
            distance_km: None,
        }
    }
}

/// Check a submission against the expected answer.
///
/// Returns `None` when no evaluation takes place: there is no expected answer,
/// or a map answer was submitted with no point selected.
pub fn evaluate(
    expected: Option<&Answer>,
    text: &str,
    last_point: Option<GeoPoint>,
) -> Option<Evaluation> {
    match expected? {
        Answer::Text(answer) => Some(evaluate_text(answer, text)),
        Answer::Numeric(value) => Some(evaluate_numeric(*value, text)),
        Answer::Coordinate(target) => last_point.map(|p| evaluate_point(target, &p)),
    }
}

pub fn text_matches(expected: &str, submitted: &str) -> bool {
    expected.trim().to_lowercase() == submitted.trim().to_lowercase()
}

pub fn within_tolerance(expected: f64, submitted: f64) -> bool {
    (submitted - expected).abs() <= ALTITUDE_TOLERANCE_M
}

pub fn within_distance(distance_km: f64) -> bool {
    distance_km < DISTANCE_THRESHOLD_KM
}

fn evaluate_text(expected: &str, submitted: &str) -> Evaluation {
    if text_matches(expected, submitted) {
        Evaluation::new(Verdict::Correct, "Correct!".to_string())
    } else {
        Evaluation::new(
            Verdict::Incorrect,
            format!("Incorrect! The correct answer was: {}", expected),
        )
    }
}

fn evaluate_numeric(expected: f64, submitted: &str) -> Evaluation {
    let value = match submitted.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Evaluation::new(Verdict::InvalidInput, "Enter a valid number.".to_string());
        }
    };

    if within_tolerance(expected, value) {
        Evaluation::new(
            Verdict::Correct,
            format!("Correct! The altitude was {} m.", expected),
        )
    } else {
        Evaluation::new(
            Verdict::Incorrect,
            format!("Incorrect! The correct altitude was {} m.", expected),
        )
    }
}

fn evaluate_point(target: &GeoPoint, selected: &GeoPoint) -> Evaluation {
    let distance = target.distance_km(selected);
    let mut evaluation = if within_distance(distance) {
        Evaluation::new(
            Verdict::Correct,
            format!("Correct! You are {:.2} km from the airport.", distance),
        )
    } else {
        Evaluation::new(
            Verdict::Incorrect,
            format!(
                "Incorrect! You are {:.2} km away. The airport is at ({:.4}, {:.4}).",
                distance, target.lat, target.lon
            ),
        )
    };
    evaluation.distance_km = Some(distance);
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::degrees_of_latitude;

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    #[test]
    fn test_text_ignores_case_and_whitespace() {
        let result = evaluate(Some(&text("Bogotá")), " bogotá ", None).unwrap();
        assert!(result.is_correct());
        assert_eq!(result.feedback, "Correct!");
    }

    #[test]
    fn test_text_accented_uppercase() {
        assert!(text_matches("Bogotá", "BOGOTÁ"));
        assert!(text_matches("bog", "BOG\t"));
    }

    #[test]
    fn test_text_mismatch_shows_answer() {
        let result = evaluate(Some(&text("Neiva")), "Ibagué", None).unwrap();
        assert_eq!(result.verdict, Verdict::Incorrect);
        assert!(result.feedback.contains("Neiva"));
    }

    #[test]
    fn test_altitude_boundary_is_inclusive() {
        let expected = Answer::Numeric(2640.0);
        assert!(evaluate(Some(&expected), "2690", None).unwrap().is_correct());
        assert!(evaluate(Some(&expected), "2590", None).unwrap().is_correct());
        assert_eq!(
            evaluate(Some(&expected), "2691", None).unwrap().verdict,
            Verdict::Incorrect
        );
    }

    #[test]
    fn test_altitude_accepts_padded_decimal() {
        let expected = Answer::Numeric(2548.0);
        assert!(evaluate(Some(&expected), " 2560.5 ", None).unwrap().is_correct());
    }

    #[test]
    fn test_altitude_non_numeric_is_invalid_input() {
        let expected = Answer::Numeric(2548.0);
        let result = evaluate(Some(&expected), "very high", None).unwrap();
        assert_eq!(result.verdict, Verdict::InvalidInput);
        assert_eq!(result.feedback, "Enter a valid number.");

        let result = evaluate(Some(&expected), "NaN", None).unwrap();
        assert_eq!(result.verdict, Verdict::InvalidInput);
    }

    #[test]
    fn test_distance_threshold_is_strict() {
        assert!(!within_distance(20.0));
        assert!(within_distance(19.99));
    }

    #[test]
    fn test_distance_near_point_is_correct() {
        let target = GeoPoint::new(4.7016, -74.1469);
        let near = GeoPoint::new(4.7016 + degrees_of_latitude(19.9), -74.1469);
        let result = evaluate(Some(&Answer::Coordinate(target)), "", Some(near)).unwrap();
        assert!(result.is_correct());
        let d = result.distance_km.unwrap();
        assert!((d - 19.9).abs() < 1e-6);
    }

    #[test]
    fn test_distance_far_point_is_incorrect() {
        let target = GeoPoint::new(4.7016, -74.1469);
        let far = GeoPoint::new(4.7016 + degrees_of_latitude(20.1), -74.1469);
        let result = evaluate(Some(&Answer::Coordinate(target)), "", Some(far)).unwrap();
        assert_eq!(result.verdict, Verdict::Incorrect);
        assert!(result.feedback.contains("20.10 km"));
    }

    #[test]
    fn test_distance_without_selection_is_not_evaluated() {
        let target = GeoPoint::new(4.7016, -74.1469);
        assert!(evaluate(Some(&Answer::Coordinate(target)), "Bogotá", None).is_none());
    }

    #[test]
    fn test_no_expected_answer_is_not_evaluated() {
        assert!(evaluate(None, "anything", Some(GeoPoint::new(0.0, 0.0))).is_none());
    }
}
