//! Generator backed by pre-recorded responses.

use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::api::error::{EvalError, EvalResult};
use crate::core::dataset::parse_jsonl;
use crate::spi::contract::Generator;

#[derive(Deserialize)]
struct RecordedResponse {
    response: String,
}

/// Replays responses in order, ignoring the prompt.
///
/// Used to score output produced by an external sampler. Each call consumes
/// one response; calls past the end fail with a generation error.
#[derive(Debug, Clone, Default)]
pub struct ReplayGenerator {
    responses: VecDeque<String>,
    served: usize,
}

impl ReplayGenerator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: responses.into(),
            served: 0,
        }
    }

    /// Load responses from a JSONL file of `{"response": "..."}` objects.
    pub fn from_jsonl<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        let p = path.as_ref();
        let reader = BufReader::new(File::open(p)?);
        let records: Vec<RecordedResponse> = parse_jsonl(reader)?;
        log::info!("Loaded {} recorded responses from {}", records.len(), p.display());
        Ok(Self::new(records.into_iter().map(|r| r.response).collect()))
    }

    /// Responses not yet served.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Generator for ReplayGenerator {
    fn generate(&mut self, _prompt: &str) -> EvalResult<String> {
        let response = self.responses.pop_front().ok_or_else(|| {
            EvalError::GenerationError(format!(
                "no recorded response for request {}",
                self.served + 1
            ))
        })?;
        self.served += 1;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_replays_in_order_then_fails() {
        let mut g = ReplayGenerator::new(vec!["a".into(), "b".into()]);
        assert_eq!(g.generate("p1").unwrap(), "a");
        assert_eq!(g.remaining(), 1);
        assert_eq!(g.generate("p2").unwrap(), "b");
        let err = g.generate("p3").unwrap_err();
        match err {
            EvalError::GenerationError(msg) => assert!(msg.contains("request 3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_jsonl() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, r#"{{"response": "The answer is 6."}}"#).unwrap();
        writeln!(f).unwrap();
        writeln!(f, r#"{{"response": "It is 7.", "id": 2}}"#).unwrap();
        let mut g = ReplayGenerator::from_jsonl(f.path()).unwrap();
        assert_eq!(g.remaining(), 2);
        assert_eq!(g.generate("").unwrap(), "The answer is 6.");
        assert_eq!(g.generate("").unwrap(), "It is 7.");
    }
}
