use crate::core::baseline::BaselineResponder;
use crate::core::rules::RuleEvaluator;
use crate::core::vocabulary::Vocabulary;
use crate::domain::model::{BuildingFacts, Comparison, RuleAnswer};
use crate::domain::ports::AnswerStrategy;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Which strategies to run for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AnswerMode {
    Baseline,
    Rules,
    #[default]
    Both,
}

impl AnswerMode {
    fn runs_baseline(&self) -> bool {
        matches!(self, AnswerMode::Baseline | AnswerMode::Both)
    }

    fn runs_rules(&self) -> bool {
        matches!(self, AnswerMode::Rules | AnswerMode::Both)
    }
}

/// Puts the baseline and the rule-based strategy side by side.
pub struct QaEngine<B: AnswerStrategy, R: AnswerStrategy> {
    baseline: B,
    rules: R,
}

impl QaEngine<BaselineResponder, RuleEvaluator> {
    pub fn from_vocabulary(vocabulary: Vocabulary) -> Result<Self> {
        let baseline = BaselineResponder::new(&vocabulary);
        let rules = RuleEvaluator::new(vocabulary)?;
        Ok(Self::new(baseline, rules))
    }
}

impl<B: AnswerStrategy, R: AnswerStrategy> QaEngine<B, R> {
    pub fn new(baseline: B, rules: R) -> Self {
        Self { baseline, rules }
    }

    fn run_baseline(
        &self,
        question: &str,
        facts: &BuildingFacts,
        mode: AnswerMode,
    ) -> Option<String> {
        mode.runs_baseline().then(|| {
            let answer = self.baseline.respond(question, facts);
            tracing::debug!("{} answer: {} chars", self.baseline.name(), answer.len());
            answer
        })
    }

    pub fn compare(&self, question: &str, facts: &BuildingFacts, mode: AnswerMode) -> Comparison {
        tracing::info!("Answering question in {:?} mode", mode);

        let baseline = self.run_baseline(question, facts, mode);

        let rule_based = mode.runs_rules().then(|| {
            let answer = self.rules.respond(question, facts);
            tracing::debug!("{} answer: {} chars", self.rules.name(), answer.len());
            answer
        });

        Comparison {
            question: question.to_string(),
            baseline,
            rule_based,
        }
    }
}

impl<B: AnswerStrategy> QaEngine<B, RuleEvaluator> {
    /// Same as [`QaEngine::compare`], plus the structured rule answer the
    /// rule-based text was rendered from. Rules are evaluated once.
    pub fn compare_with_derivation(
        &self,
        question: &str,
        facts: &BuildingFacts,
        mode: AnswerMode,
    ) -> (Comparison, Option<RuleAnswer>) {
        tracing::info!("Answering question in {:?} mode with derivation", mode);

        let baseline = self.run_baseline(question, facts, mode);
        let derivation = mode
            .runs_rules()
            .then(|| self.rules.answer(question, facts));

        let comparison = Comparison {
            question: question.to_string(),
            baseline,
            rule_based: derivation.as_ref().map(RuleAnswer::render),
        };

        (comparison, derivation)
    }
}
