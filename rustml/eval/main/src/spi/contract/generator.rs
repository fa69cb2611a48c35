use crate::api::error::EvalResult;

/// Text generation backend driven by the evaluation loop.
///
/// Implementations own whatever model, tokenizer and sampling state they
/// need; the evaluator only hands over a prompt and reads back the
/// continuation (without the prompt).
pub trait Generator {
    /// Generate a continuation for `prompt`.
    fn generate(&mut self, prompt: &str) -> EvalResult<String>;
}

impl<F> Generator for F
where
    F: FnMut(&str) -> EvalResult<String>,
{
    fn generate(&mut self, prompt: &str) -> EvalResult<String> {
        self(prompt)
    }
}
