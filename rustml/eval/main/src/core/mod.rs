pub mod dataset;
pub mod extract;
pub mod normalize;
pub mod numbers;
pub mod prompt;
pub mod replay;
pub mod runner;
pub mod score;
