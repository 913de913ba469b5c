use crate::core::intent::IntentClassifier;
use crate::core::vocabulary::{contains_any, Vocabulary};
use crate::domain::model::{
    BuildingFacts, Intent, RuleAnswer, SeismicStandardCategory, TechniqueLabel, Verdict,
};
use crate::domain::ports::AnswerStrategy;
use crate::utils::error::Result;

/// Answers from structured facts with a fixed rule set.
///
/// Category comes from the construction year, techniques from device
/// keywords, and the question decides between a compliance verdict and a
/// general summary. The output always carries the facts it was derived from.
#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    vocabulary: Vocabulary,
    classifier: IntentClassifier,
}

impl RuleEvaluator {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let classifier = IntentClassifier::new(&vocabulary)?;
        Ok(Self {
            vocabulary,
            classifier,
        })
    }

    pub fn derive_category(facts: &BuildingFacts) -> Option<SeismicStandardCategory> {
        facts.year.map(SeismicStandardCategory::from_year)
    }

    /// At most one label per family, base-isolation first.
    pub fn derive_techniques(&self, facts: &BuildingFacts) -> Vec<TechniqueLabel> {
        TechniqueLabel::ALL
            .into_iter()
            .filter(|label| {
                let keywords = self.vocabulary.keywords_for(*label);
                facts
                    .devices
                    .iter()
                    .any(|device| contains_any(device, keywords))
            })
            .collect()
    }

    pub fn answer(&self, question: &str, facts: &BuildingFacts) -> RuleAnswer {
        let category = Self::derive_category(facts);
        let techniques = self.derive_techniques(facts);
        let intent = self.classifier.classify(question);

        tracing::debug!(
            "Derived category={:?}, techniques={:?}",
            category,
            techniques
        );

        let (verdict, evidence) = match intent {
            Intent::ComplianceVerdict => {
                let verdict = if category == Some(SeismicStandardCategory::Standard2000) {
                    Verdict::Yes
                } else {
                    Verdict::NoOrUnknown
                };
                (Some(verdict), verdict_evidence(facts, category, &techniques))
            }
            Intent::GeneralExplanation => (None, general_evidence(facts, category, &techniques)),
        };

        RuleAnswer {
            intent,
            category,
            techniques,
            verdict,
            evidence,
        }
    }

    pub fn evaluate(&self, question: &str, facts: &BuildingFacts) -> String {
        self.answer(question, facts).render()
    }
}

impl AnswerStrategy for RuleEvaluator {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn respond(&self, question: &str, facts: &BuildingFacts) -> String {
        self.evaluate(question, facts)
    }
}

fn join_labels(techniques: &[TechniqueLabel]) -> String {
    techniques
        .iter()
        .map(TechniqueLabel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn verdict_evidence(
    facts: &BuildingFacts,
    category: Option<SeismicStandardCategory>,
    techniques: &[TechniqueLabel],
) -> Vec<String> {
    let mut lines = Vec::new();

    if let (Some(year), Some(category)) = (facts.year, category) {
        lines.push(format!("year: {} → {}", year, category));
    }
    if let Some(grade) = &facts.grade {
        lines.push(format!("grade: {}", grade));
    }
    if !techniques.is_empty() {
        lines.push(format!("technique: {}", join_labels(techniques)));
    }
    if let Some(area) = &facts.area {
        lines.push(format!("area: {}", area));
    }

    lines
}

fn general_evidence(
    facts: &BuildingFacts,
    category: Option<SeismicStandardCategory>,
    techniques: &[TechniqueLabel],
) -> Vec<String> {
    let mut lines = Vec::new();

    if let (Some(year), Some(category)) = (facts.year, category) {
        lines.push(format!("year: {} (category: {})", year, category));
    }
    if let Some(grade) = &facts.grade {
        lines.push(format!("grade: {}", grade));
    }
    if !facts.devices.is_empty() {
        lines.push(format!("devices: {}", facts.devices.join(", ")));
    }
    if !techniques.is_empty() {
        lines.push(format!("technique: {}", join_labels(techniques)));
    }
    if let Some(area) = &facts.area {
        lines.push(format!("area: {}", area));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NO_SUPPORTING_DATA;

    const VERDICT_QUESTION: &str = "Does this building satisfy the 2000 seismic standard?";

    fn evaluator() -> RuleEvaluator {
        RuleEvaluator::new(Vocabulary::default()).unwrap()
    }

    fn tokyo_facts() -> BuildingFacts {
        BuildingFacts {
            year: Some(2010),
            grade: Some("grade 3".to_string()),
            devices: vec!["base-isolation support".to_string()],
            area: Some("Tokyo".to_string()),
        }
    }

    #[test]
    fn test_verdict_example() {
        let output = evaluator().evaluate(VERDICT_QUESTION, &tokyo_facts());
        assert_eq!(
            output,
            "yes.\nyear: 2010 → 2000-standard\ngrade: grade 3\ntechnique: base-isolation\narea: Tokyo"
        );
    }

    #[test]
    fn test_verdict_is_negative_for_older_or_unknown_year() {
        let e = evaluator();

        let older = BuildingFacts {
            year: Some(1995),
            ..tokyo_facts()
        };
        let answer = e.answer(VERDICT_QUESTION, &older);
        assert_eq!(answer.verdict, Some(Verdict::NoOrUnknown));
        assert!(e
            .evaluate(VERDICT_QUESTION, &older)
            .starts_with("no (or unknown).\nyear: 1995 → 1981-standard"));

        let unknown = BuildingFacts {
            year: None,
            ..tokyo_facts()
        };
        assert_eq!(
            e.evaluate(VERDICT_QUESTION, &unknown),
            "no (or unknown).\ngrade: grade 3\ntechnique: base-isolation\narea: Tokyo"
        );
    }

    #[test]
    fn test_verdict_with_no_facts_is_single_line() {
        let output = evaluator().evaluate(VERDICT_QUESTION, &BuildingFacts::default());
        assert_eq!(output, "no (or unknown).");
    }

    #[test]
    fn test_technique_labels_collapse_per_family() {
        let facts = BuildingFacts {
            devices: vec![
                "oil damper".to_string(),
                "lead rubber base-isolation bearing".to_string(),
                "base-isolation support".to_string(),
                "viscous damping wall".to_string(),
            ],
            ..Default::default()
        };

        let techniques = evaluator().derive_techniques(&facts);
        assert_eq!(
            techniques,
            vec![TechniqueLabel::BaseIsolation, TechniqueLabel::Damping]
        );
    }

    #[test]
    fn test_japanese_device_names() {
        let facts = BuildingFacts {
            devices: vec!["免震支承".to_string(), "制震ダンパー".to_string()],
            ..Default::default()
        };
        assert_eq!(evaluator().derive_techniques(&facts).len(), 2);
    }

    #[test]
    fn test_general_mode_lists_present_facts() {
        let output = evaluator().evaluate("Tell me about this building.", &tokyo_facts());
        assert_eq!(
            output,
            "answer based on the following evidence:\n\
             year: 2010 (category: 2000-standard)\n\
             grade: grade 3\n\
             devices: base-isolation support\n\
             technique: base-isolation\n\
             area: Tokyo"
        );
    }

    #[test]
    fn test_general_mode_without_facts() {
        let output = evaluator().evaluate("Tell me about this building.", &BuildingFacts::default());
        assert_eq!(output, NO_SUPPORTING_DATA);
    }

    #[test]
    fn test_unmatched_devices_are_listed_without_technique() {
        let facts = BuildingFacts {
            devices: vec!["sprinkler".to_string()],
            ..Default::default()
        };
        let output = evaluator().evaluate("What is installed?", &facts);
        assert_eq!(
            output,
            "answer based on the following evidence:\ndevices: sprinkler"
        );
    }
}
