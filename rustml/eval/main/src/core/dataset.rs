//! GSM8K dataset loading (JSONL, one problem per line).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::api::error::{EvalError, EvalResult};
use crate::api::types::Gsm8kProblem;

/// Load GSM8K problems from a JSONL file.
pub fn load_problems<P: AsRef<Path>>(path: P) -> EvalResult<Vec<Gsm8kProblem>> {
    let p = path.as_ref();
    let file = File::open(p)?;
    let problems = parse_problems(BufReader::new(file))?;
    log::info!("Loaded {} problems from {}", problems.len(), p.display());
    Ok(problems)
}

/// Parse GSM8K problems from JSONL. Blank lines are skipped; unknown fields
/// are ignored.
pub fn parse_problems<R: BufRead>(reader: R) -> EvalResult<Vec<Gsm8kProblem>> {
    parse_jsonl(reader)
}

/// Deserialize each non-blank line of `reader` as a `T`.
pub(crate) fn parse_jsonl<T: DeserializeOwned, R: BufRead>(reader: R) -> EvalResult<Vec<T>> {
    let mut items = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item = serde_json::from_str(line)
            .map_err(|e| EvalError::ParseError(format!("line {}: {}", i + 1, e)))?;
        items.push(item);
    }
    Ok(items)
}
