use crate::core::engine::AnswerMode;
use crate::core::metrics::MetricsFormat;
use crate::core::vocabulary::Vocabulary;
use crate::domain::model::RawFacts;
use crate::utils::error::{QaError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_QUESTION: &str = "Does this building satisfy the 2000 seismic standard?";
pub const MIN_CHART_WIDTH: usize = 10;
pub const MAX_CHART_WIDTH: usize = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub demo: DemoConfig,
    /// Missing section falls back to the demo building; missing keys are absent facts.
    #[serde(default = "demo_facts")]
    pub facts: RawFacts,
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub question: Option<String>,
    pub mode: Option<AnswerMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: usize,
    pub format: MetricsFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 40,
            format: MetricsFormat::Chart,
        }
    }
}

/// The building pre-filled in the poster demo.
pub fn demo_facts() -> RawFacts {
    RawFacts {
        year: Some(2010),
        grade: "grade 3".to_string(),
        devices: "base-isolation support".to_string(),
        area: "Tokyo".to_string(),
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            demo: DemoConfig::default(),
            facts: demo_facts(),
            vocabulary: Vocabulary::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QaError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(question) = &self.demo.question {
            validate_non_empty_string("demo.question", question)?;
        }

        validate_range("chart.width", self.chart.width, MIN_CHART_WIDTH, MAX_CHART_WIDTH)?;

        self.vocabulary.validate()
    }

    pub fn question(&self) -> &str {
        self.demo.question.as_deref().unwrap_or(DEFAULT_QUESTION)
    }

    pub fn mode(&self) -> AnswerMode {
        self.demo.mode.unwrap_or_default()
    }

    pub fn chart_width(&self) -> usize {
        self.chart.width
    }

    pub fn metrics_format(&self) -> MetricsFormat {
        self.chart.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
