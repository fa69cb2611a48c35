//! Facade re-exports for rustml-eval

pub use crate::api::error::*;
pub use crate::api::types::*;
pub use crate::core::dataset::{load_problems, parse_problems};
pub use crate::core::extract::{DEFAULT_DELIMITER, extract_answer, extract_answer_with};
pub use crate::core::normalize::normalize;
pub use crate::core::numbers::find_numbers;
pub use crate::core::prompt::{
    DEFAULT_STOP_SEQUENCE, FEW_SHOT_EXEMPLARS, PREAMBLE, build_prompt, truncate_response,
};
pub use crate::core::replay::ReplayGenerator;
pub use crate::core::runner::Evaluator;
pub use crate::core::score::{Accuracy, score_answers, score_equivalent, score_equivalent_with};
pub use crate::spi::contract::Generator;
