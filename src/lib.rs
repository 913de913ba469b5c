pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use core::{
    baseline::BaselineResponder,
    engine::{AnswerMode, QaEngine},
    metrics::{MetricsBoard, MetricsFormat, METRICS},
    normalizer::normalize,
    rules::RuleEvaluator,
    vocabulary::Vocabulary,
};
pub use domain::model::{BuildingFacts, Comparison, RawFacts, RuleAnswer};
pub use utils::error::{QaError, Result};
