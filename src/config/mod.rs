pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::engine::AnswerMode;
#[cfg(feature = "cli")]
use crate::core::metrics::MetricsFormat;
#[cfg(feature = "cli")]
use crate::core::normalizer::parse_year_text;
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// How answers are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "seismic-qa")]
#[command(about = "Compare plain and rule-based answers to seismic compliance questions")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Question to answer
    #[arg(short, long)]
    pub question: Option<String>,

    /// Construction year (empty or 0 means unknown)
    #[arg(long)]
    pub year: Option<String>,

    /// Seismic grade, free text
    #[arg(long)]
    pub grade: Option<String>,

    /// Installed devices, comma separated
    #[arg(long)]
    pub devices: Option<String>,

    /// Building location
    #[arg(long)]
    pub area: Option<String>,

    /// Which strategies to run
    #[arg(long, value_enum)]
    pub mode: Option<AnswerMode>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the evaluation metrics
    #[arg(long)]
    pub metrics: bool,

    #[arg(long, value_enum)]
    pub metrics_format: Option<MetricsFormat>,

    #[arg(long)]
    pub chart_width: Option<usize>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command-line values win over the config file.
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(question) = &self.question {
            config.demo.question = Some(question.clone());
        }
        if let Some(mode) = self.mode {
            config.demo.mode = Some(mode);
        }
        if let Some(year) = &self.year {
            config.facts.year = parse_year_text(year);
        }
        if let Some(grade) = &self.grade {
            config.facts.grade = grade.clone();
        }
        if let Some(devices) = &self.devices {
            config.facts.devices = devices.clone();
        }
        if let Some(area) = &self.area {
            config.facts.area = area.clone();
        }
        if let Some(format) = self.metrics_format {
            config.chart.format = format;
        }
        if let Some(width) = self.chart_width {
            config.chart.width = width;
        }
    }

    pub fn load(&self) -> crate::utils::error::Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        self.apply_to(&mut config);
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_cli_overrides_config() {
        let cli = CliConfig::parse_from([
            "seismic-qa",
            "--question",
            "What about it?",
            "--year",
            "0",
            "--devices",
            "oil damper",
            "--mode",
            "rules",
            "--chart-width",
            "20",
        ]);

        let config = cli.load().unwrap();

        assert_eq!(config.question(), "What about it?");
        assert_eq!(config.facts.year, None);
        assert_eq!(config.facts.devices, "oil damper");
        assert_eq!(config.facts.grade, "grade 3");
        assert_eq!(config.mode(), AnswerMode::Rules);
        assert_eq!(config.chart_width(), 20);
    }

    #[test]
    fn test_cli_override_can_fail_validation() {
        let cli = CliConfig::parse_from(["seismic-qa", "--chart-width", "500"]);
        let config = cli.load().unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_flags() {
        let cli = CliConfig::parse_from([
            "seismic-qa",
            "--format",
            "json",
            "--metrics-format",
            "tsv",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.metrics_format, Some(MetricsFormat::Tsv));
        assert!(!cli.metrics);
    }
}
