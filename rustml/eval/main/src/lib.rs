//! # RustML Eval
//!
//! GSM8K answer extraction and scoring for free-form model output.
//!
//! This crate provides:
//! - A number tokenizer and the "The answer is" answer selector
//! - Thousands-separator normalization and numeric/textual answer comparison
//! - GSM8K JSONL loading, few-shot chain-of-thought prompts, and a sequential
//!   evaluation loop driven by any [`Generator`]
//!
//! ## Example
//!
//! ```rust
//! use rustml_eval::{extract_answer, score_equivalent};
//!
//! let response = "So, they planted 21 - 15 = 6 trees. The answer is 6.";
//! assert_eq!(extract_answer(response), "6");
//! assert!(score_equivalent(response, "6.0"));
//! ```
//!
//! Running a full benchmark against recorded model output:
//!
//! ```rust,ignore
//! use rustml_eval::{EvalConfig, Evaluator, ReplayGenerator, load_problems};
//!
//! let problems = load_problems("gsm8k_test.jsonl")?;
//! let mut generator = ReplayGenerator::from_jsonl("responses.jsonl")?;
//! let summary = Evaluator::new(EvalConfig::default()).run(&problems, &mut generator)?;
//! println!("{:.2}%", summary.accuracy.percent());
//! ```

pub mod api;
pub(crate) mod core;
pub mod spi;
mod saf;

pub use saf::*;
