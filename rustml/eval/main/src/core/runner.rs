//! Sequential GSM8K evaluation loop.

use crate::api::error::EvalResult;
use crate::api::types::{CaseRecord, EvalConfig, EvalSummary, Gsm8kProblem};
use crate::core::extract::extract_answer_with;
use crate::core::prompt::{build_prompt, truncate_response};
use crate::core::score::{Accuracy, score_answers};
use crate::spi::contract::Generator;

/// Runs problems through a [`Generator`] one at a time and scores each
/// response against the problem's reference answer.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `problems` in order.
    ///
    /// Fails only on an invalid configuration. A generator error on one
    /// problem is recorded on its [`CaseRecord`], scored as an empty response,
    /// and the loop moves on to the next problem.
    pub fn run(
        &self,
        problems: &[Gsm8kProblem],
        generator: &mut dyn Generator,
    ) -> EvalResult<EvalSummary> {
        self.config.validate()?;

        let count = self
            .config
            .limit
            .map_or(problems.len(), |l| l.min(problems.len()));
        let mut accuracy = Accuracy::new();
        let mut cases = Vec::with_capacity(count);

        for (index, problem) in problems.iter().take(count).enumerate() {
            let prompt = build_prompt(&problem.question, self.config.num_shots);

            let (raw, error) = match generator.generate(&prompt) {
                Ok(text) => (text, None),
                Err(e) => {
                    log::warn!("task {}: generation failed: {}", index, e);
                    (String::new(), Some(e.to_string()))
                }
            };
            let response = truncate_response(&raw, &self.config.stop_sequence);

            let predicted = extract_answer_with(response, &self.config.delimiter);
            let outcome = score_answers(&predicted, &problem.reference_answer());
            accuracy.record(outcome.correct);

            if !outcome.correct {
                log::debug!(
                    "task {}: predicted {:?}, expected {:?} ({:?})",
                    index,
                    outcome.predicted,
                    outcome.reference,
                    outcome.comparison,
                );
            }
            log::info!("task {} | accuracy {:.2}%", index, accuracy.percent());

            cases.push(CaseRecord {
                index,
                question: problem.question.clone(),
                response: response.to_string(),
                outcome,
                error,
            });
        }

        log::info!(
            "Evaluated {} problems: {}/{} correct ({:.2}%)",
            accuracy.total(),
            accuracy.correct(),
            accuracy.total(),
            accuracy.percent(),
        );

        Ok(EvalSummary { accuracy, cases })
    }
}
