//! Answer comparison and running accuracy.

use serde::Serialize;

use crate::api::types::{Comparison, ScoreOutcome};
use crate::core::extract::{DEFAULT_DELIMITER, extract_answer_with};
use crate::core::normalize::normalize;

/// Compare two extracted answers.
///
/// Both are normalized first. If both parse as `f64` they are compared as
/// numbers (`"6"` equals `"6.0"`); otherwise the normalized strings must be
/// identical. Two empty answers therefore compare equal.
pub fn score_answers(predicted: &str, reference: &str) -> ScoreOutcome {
    let predicted = normalize(predicted);
    let reference = normalize(reference);

    let (comparison, correct) = match (predicted.parse::<f64>(), reference.parse::<f64>()) {
        (Ok(p), Ok(r)) => (Comparison::Numeric, p == r),
        _ => (Comparison::Textual, predicted == reference),
    };

    ScoreOutcome {
        predicted,
        reference,
        comparison,
        correct,
    }
}

/// Whether a model response and a reference text state the same answer.
pub fn score_equivalent(model_text: &str, reference_text: &str) -> bool {
    score_equivalent_with(model_text, reference_text, DEFAULT_DELIMITER)
}

/// [`score_equivalent`] with an explicit delimiter phrase.
pub fn score_equivalent_with(model_text: &str, reference_text: &str, delimiter: &str) -> bool {
    let predicted = extract_answer_with(model_text, delimiter);
    let reference = extract_answer_with(reference_text, delimiter);
    score_answers(&predicted, &reference).correct
}

/// Running correct/total tally over a benchmark run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    correct: usize,
    total: usize,
}

impl Accuracy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Accuracy as a percentage. Returns 0.0 before anything is recorded.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn reset(&mut self) {
        self.correct = 0;
        self.total = 0;
    }
}
