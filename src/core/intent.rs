use crate::core::vocabulary::Vocabulary;
use crate::domain::model::Intent;
use crate::utils::error::{QaError, Result};
use regex::{Regex, RegexBuilder};

/// Maps a question to an [`Intent`] using two named predicates.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    year_marker: String,
    compliance_wording: Regex,
}

impl IntentClassifier {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let alternatives: Vec<String> = vocabulary
            .compliance_terms
            .iter()
            .map(|term| regex::escape(term.trim()))
            .collect();

        let compliance_wording = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()
            .map_err(|e| QaError::ConfigValidationError {
                field: "vocabulary.compliance_terms".to_string(),
                message: format!("Could not build matcher: {}", e),
            })?;

        Ok(Self {
            year_marker: vocabulary.year_marker.trim().to_string(),
            compliance_wording,
        })
    }

    pub fn mentions_year_marker(&self, question: &str) -> bool {
        question.contains(&self.year_marker)
    }

    pub fn mentions_compliance_wording(&self, question: &str) -> bool {
        self.compliance_wording.is_match(question)
    }

    /// Both predicates must hold, in either order, for a verdict question.
    pub fn classify(&self, question: &str) -> Intent {
        let intent =
            if self.mentions_year_marker(question) && self.mentions_compliance_wording(question) {
                Intent::ComplianceVerdict
            } else {
                Intent::GeneralExplanation
            };

        tracing::debug!("Classified question as {:?}", intent);
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&Vocabulary::default()).unwrap()
    }

    #[test]
    fn test_verdict_phrasings() {
        let c = classifier();
        assert_eq!(
            c.classify("Does this building satisfy the 2000 seismic standard?"),
            Intent::ComplianceVerdict
        );
        assert_eq!(c.classify("Is it built to 2000 criteria?"), Intent::ComplianceVerdict);
        assert_eq!(c.classify("Does it MEET the 2000 rules?"), Intent::ComplianceVerdict);
        assert_eq!(
            c.classify("この建物は2000年の耐震基準を満たしていますか？"),
            Intent::ComplianceVerdict
        );
    }

    #[test]
    fn test_general_phrasings() {
        let c = classifier();
        assert_eq!(c.classify("Tell me about this building."), Intent::GeneralExplanation);
        assert_eq!(c.classify("Does it satisfy the standard?"), Intent::GeneralExplanation);
        assert_eq!(c.classify("Was it renovated in 2000?"), Intent::GeneralExplanation);
    }

    #[test]
    fn test_named_predicates() {
        let c = classifier();
        assert!(c.mentions_year_marker("the 2000 revision"));
        assert!(!c.mentions_year_marker("the 1981 revision"));
        assert!(c.mentions_compliance_wording("is it compliant"));
        assert!(!c.mentions_compliance_wording("how tall is it"));
    }

    #[test]
    fn test_terms_are_matched_literally() {
        let vocabulary = Vocabulary {
            compliance_terms: vec!["code (2000)".to_string()],
            ..Default::default()
        };
        let c = IntentClassifier::new(&vocabulary).unwrap();
        assert!(c.mentions_compliance_wording("per building code (2000)"));
        assert!(!c.mentions_compliance_wording("per building code 2000"));
    }
}
