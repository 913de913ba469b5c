use crate::core::vocabulary::{contains_any, Vocabulary};
use crate::domain::model::BuildingFacts;
use crate::domain::ports::AnswerStrategy;

pub const YEAR_MARKER_HEDGE: &str = "It seems the building follows some seismic rules, \
but I cannot clearly determine if it matches the 2000 standard.";
pub const SEISMIC_HEDGE: &str = "The building may have certain seismic considerations, \
but I'm not fully sure without more details.";
pub const GENERIC_HEDGE: &str =
    "I'm not certain. I might need additional context to answer precisely.";

/// Answers without any structured knowledge. Facts are never consulted.
#[derive(Debug, Clone)]
pub struct BaselineResponder {
    year_marker: String,
    seismic_terms: Vec<String>,
}

impl BaselineResponder {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            year_marker: vocabulary.year_marker.trim().to_string(),
            seismic_terms: vocabulary.seismic_terms.clone(),
        }
    }

    pub fn baseline(&self, question: &str) -> &'static str {
        if question.contains(&self.year_marker) {
            YEAR_MARKER_HEDGE
        } else if contains_any(question, &self.seismic_terms) {
            SEISMIC_HEDGE
        } else {
            GENERIC_HEDGE
        }
    }
}

impl Default for BaselineResponder {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

impl AnswerStrategy for BaselineResponder {
    fn name(&self) -> &str {
        "baseline"
    }

    fn respond(&self, question: &str, _facts: &BuildingFacts) -> String {
        self.baseline(question).to_string()
    }
}
