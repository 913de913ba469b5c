use crate::domain::model::TechniqueLabel;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// Keyword lists the rule evaluator, intent classifier and baseline match against.
///
/// All matching is substring based and case-insensitive. The defaults cover
/// English wording plus the Japanese building-code terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Device keywords that imply a base-isolated structure.
    pub base_isolation: Vec<String>,
    /// Device keywords that imply a damped (vibration control) structure.
    pub damping: Vec<String>,
    /// Question words the baseline treats as "about seismic design".
    pub seismic_terms: Vec<String>,
    /// Question words that, next to the year marker, ask for a compliance verdict.
    pub compliance_terms: Vec<String>,
    pub year_marker: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            base_isolation: strings(&["isolation", "免震"]),
            damping: strings(&["damp", "制震"]),
            seismic_terms: strings(&["seismic", "earthquake", "耐震"]),
            compliance_terms: strings(&[
                "satisf", "standard", "criteria", "criterion", "meet", "comply", "complian", "満た",
                "基準",
            ]),
            year_marker: "2000".to_string(),
        }
    }
}

impl Vocabulary {
    pub fn keywords_for(&self, label: TechniqueLabel) -> &[String] {
        match label {
            TechniqueLabel::BaseIsolation => &self.base_isolation,
            TechniqueLabel::Damping => &self.damping,
        }
    }
}

impl Validate for Vocabulary {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("vocabulary.base_isolation", &self.base_isolation)?;
        validate_non_empty_list("vocabulary.damping", &self.damping)?;
        validate_non_empty_list("vocabulary.seismic_terms", &self.seismic_terms)?;
        validate_non_empty_list("vocabulary.compliance_terms", &self.compliance_terms)?;
        validate_non_empty_string("vocabulary.year_marker", &self.year_marker)?;
        Ok(())
    }
}

/// Case-insensitive substring test against any of `terms`.
pub fn contains_any(haystack: &str, terms: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    terms
        .iter()
        .any(|term| haystack.contains(&term.to_lowercase()))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
