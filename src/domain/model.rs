use serde::{Deserialize, Serialize};
use std::fmt;

/// Unnormalized input as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFacts {
    #[serde(
        default,
        deserialize_with = "crate::core::normalizer::deserialize_raw_year"
    )]
    pub year: Option<i32>,
    #[serde(default)]
    pub grade: String,
    /// Comma-separated device descriptions.
    #[serde(default)]
    pub devices: String,
    #[serde(default)]
    pub area: String,
}

/// Normalized building attributes fed to the rule evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingFacts {
    pub year: Option<i32>,
    pub grade: Option<String>,
    pub devices: Vec<String>,
    pub area: Option<String>,
}

impl BuildingFacts {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.grade.is_none() && self.devices.is_empty() && self.area.is_none()
    }
}

/// Regulatory era a building falls under, by construction year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeismicStandardCategory {
    #[serde(rename = "pre-1981-standard")]
    Pre1981,
    #[serde(rename = "1981-standard")]
    Standard1981,
    #[serde(rename = "2000-standard")]
    Standard2000,
}

impl SeismicStandardCategory {
    pub fn from_year(year: i32) -> Self {
        if year < 1981 {
            SeismicStandardCategory::Pre1981
        } else if year < 2000 {
            SeismicStandardCategory::Standard1981
        } else {
            SeismicStandardCategory::Standard2000
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeismicStandardCategory::Pre1981 => "pre-1981-standard",
            SeismicStandardCategory::Standard1981 => "1981-standard",
            SeismicStandardCategory::Standard2000 => "2000-standard",
        }
    }
}

impl fmt::Display for SeismicStandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural mitigation technique inferred from device descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechniqueLabel {
    BaseIsolation,
    Damping,
}

impl TechniqueLabel {
    /// Scan order used when deriving labels.
    pub const ALL: [TechniqueLabel; 2] = [TechniqueLabel::BaseIsolation, TechniqueLabel::Damping];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueLabel::BaseIsolation => "base-isolation",
            TechniqueLabel::Damping => "damping",
        }
    }
}

impl fmt::Display for TechniqueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "Does this building satisfy the 2000 standard?"
    ComplianceVerdict,
    GeneralExplanation,
}

/// The negative branch covers both "fails" and "not enough data".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Yes,
    NoOrUnknown,
}

impl Verdict {
    pub fn as_line(&self) -> &'static str {
        match self {
            Verdict::Yes => "yes.",
            Verdict::NoOrUnknown => "no (or unknown).",
        }
    }
}

pub const GENERAL_HEADER: &str = "answer based on the following evidence:";
pub const NO_SUPPORTING_DATA: &str = "no supporting data.";

/// Structured result of a rule evaluation, before rendering to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAnswer {
    pub intent: Intent,
    pub category: Option<SeismicStandardCategory>,
    pub techniques: Vec<TechniqueLabel>,
    pub verdict: Option<Verdict>,
    /// Derivation trail, one entry per line of output.
    pub evidence: Vec<String>,
}

impl RuleAnswer {
    /// Plain multi-line rendering shown to the user.
    pub fn render(&self) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(self.evidence.len() + 1);

        match (self.intent, self.verdict) {
            (Intent::ComplianceVerdict, Some(verdict)) => lines.push(verdict.as_line()),
            _ if self.evidence.is_empty() => return NO_SUPPORTING_DATA.to_string(),
            _ => lines.push(GENERAL_HEADER),
        }

        lines.extend(self.evidence.iter().map(String::as_str));
        lines.join("\n")
    }
}

/// Both strategies' answers to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub question: String,
    pub baseline: Option<String>,
    pub rule_based: Option<String>,
}
