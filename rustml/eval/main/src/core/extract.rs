//! Answer selection for free-form model output.
//!
//! The selector is a best-effort heuristic, not a parser. Generated
//! explanations restate intermediate numbers before the final answer, so the
//! first number after the last delimiter phrase is preferred; when the model
//! does not use the phrase, the last number in the text is taken instead. A
//! number in prose after the delimiter that is not the intended answer will
//! still be picked.

use crate::core::numbers::find_numbers;

/// Phrase the few-shot exemplars use to introduce the final answer.
pub const DEFAULT_DELIMITER: &str = "The answer is";

/// Extract the answer using [`DEFAULT_DELIMITER`].
pub fn extract_answer(text: &str) -> String {
    extract_answer_with(text, DEFAULT_DELIMITER)
}

/// Extract the answer anchored on a caller-supplied delimiter phrase.
///
/// 1. If `delimiter` occurs, the first number after its last occurrence.
/// 2. Otherwise, or if nothing numeric follows it, the last number anywhere
///    in `text`.
/// 3. An empty string when `text` contains no number at all.
///
/// An empty `delimiter` is treated as absent.
pub fn extract_answer_with(text: &str, delimiter: &str) -> String {
    if !delimiter.is_empty() {
        if let Some((_, tail)) = text.rsplit_once(delimiter) {
            if let Some(first) = find_numbers(tail).first() {
                return (*first).to_string();
            }
        }
    }
    find_numbers(text)
        .last()
        .map(|s| (*s).to_string())
        .unwrap_or_default()
}
