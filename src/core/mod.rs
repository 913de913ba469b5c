pub mod baseline;
pub mod engine;
pub mod intent;
pub mod metrics;
pub mod normalizer;
pub mod rules;
pub mod vocabulary;

pub use crate::domain::model::{BuildingFacts, Comparison, RawFacts, RuleAnswer};
pub use crate::domain::ports::AnswerStrategy;
pub use crate::utils::error::Result;
