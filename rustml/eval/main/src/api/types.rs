//! Public data types and configuration for GSM8K evaluation

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::error::{EvalError, EvalResult};
use crate::core::extract::{DEFAULT_DELIMITER, extract_answer};
use crate::core::prompt::{DEFAULT_STOP_SEQUENCE, FEW_SHOT_EXEMPLARS};
use crate::core::score::Accuracy;

/// Marker separating the worked solution from the final answer in GSM8K.
pub const REFERENCE_MARKER: &str = "####";

/// A single GSM8K problem, one line of the dataset's JSONL file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Gsm8kProblem {
    /// The word problem shown to the model
    pub question: String,
    /// Worked solution ending in `#### <answer>`
    pub answer: String,
}

impl Gsm8kProblem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Extract the reference answer (unnormalized).
    ///
    /// Only the text after the last `####` marker is searched; an answer field
    /// without a marker is searched whole.
    pub fn reference_answer(&self) -> String {
        let tail = self
            .answer
            .rsplit_once(REFERENCE_MARKER)
            .map_or(self.answer.as_str(), |(_, tail)| tail);
        extract_answer(tail)
    }
}

/// How two extracted answers were compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Both sides parsed as numbers and were compared numerically.
    Numeric,
    /// At least one side was not a number; compared as exact strings.
    Textual,
}

/// Result of comparing a predicted answer against a reference answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    /// Normalized answer extracted from the model output
    pub predicted: String,
    /// Normalized answer extracted from the reference
    pub reference: String,
    pub comparison: Comparison,
    pub correct: bool,
}

/// Per-problem record of an evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    pub index: usize,
    pub question: String,
    /// Model response after truncation at the stop sequence
    pub response: String,
    pub outcome: ScoreOutcome,
    /// Generator failure for this problem, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of an evaluation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvalSummary {
    pub accuracy: Accuracy,
    pub cases: Vec<CaseRecord>,
}

impl EvalSummary {
    /// Records that were scored incorrect.
    pub fn failures(&self) -> impl Iterator<Item = &CaseRecord> {
        self.cases.iter().filter(|c| !c.outcome.correct)
    }
}

/// Evaluation loop configuration.
///
/// Loadable from a JSON file; missing fields take their defaults and unknown
/// fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Phrase anchoring the model's final answer
    pub delimiter: String,
    /// Generated text is cut at the first occurrence of this sequence
    pub stop_sequence: String,
    /// Number of chain-of-thought exemplars in the prompt (0..=8)
    pub num_shots: usize,
    /// Evaluate at most this many problems
    pub limit: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            stop_sequence: DEFAULT_STOP_SEQUENCE.to_string(),
            num_shots: FEW_SHOT_EXEMPLARS.len(),
            limit: None,
        }
    }
}

impl EvalConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        let p = path.as_ref();
        let reader = BufReader::new(File::open(p)?);
        let config: Self = serde_json::from_reader(reader).map_err(|e| {
            EvalError::InvalidConfig(format!("{}: {}", p.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_stop_sequence(mut self, stop: impl Into<String>) -> Self {
        self.stop_sequence = stop.into();
        self
    }

    pub fn with_num_shots(mut self, num_shots: usize) -> Self {
        self.num_shots = num_shots;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> EvalResult<()> {
        if self.num_shots > FEW_SHOT_EXEMPLARS.len() {
            return Err(EvalError::InvalidConfig(format!(
                "num_shots must be at most {}, got {}",
                FEW_SHOT_EXEMPLARS.len(),
                self.num_shots
            )));
        }
        if self.stop_sequence.is_empty() {
            return Err(EvalError::InvalidConfig(
                "stop_sequence must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
