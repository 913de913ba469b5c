//! Precomputed evaluation scores comparing the two answer strategies.
//!
//! The numbers are averages over ten evaluation runs and are compiled in;
//! nothing here is computed from live answers.

use crate::utils::error::{QaError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub baseline: f64,
    pub rule_based: f64,
}

impl Metric {
    pub fn delta(&self) -> f64 {
        self.rule_based - self.baseline
    }
}

pub static METRICS: [Metric; 6] = [
    Metric { name: "EditSim", baseline: 0.143, rule_based: 0.342 },
    Metric { name: "Token-F1", baseline: 0.105, rule_based: 0.336 },
    Metric { name: "Jaccard", baseline: 0.049, rule_based: 0.229 },
    Metric { name: "ROUGE-L", baseline: 0.063, rule_based: 0.268 },
    Metric { name: "chrF", baseline: 0.153, rule_based: 0.383 },
    Metric { name: "BERTScore", baseline: 0.569, rule_based: 0.765 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MetricsFormat {
    #[default]
    Chart,
    Csv,
    Tsv,
    Json,
}

#[derive(Debug, Serialize)]
struct MetricRow {
    metric: &'static str,
    baseline: f64,
    rule_based: f64,
    delta: f64,
}

impl From<&Metric> for MetricRow {
    fn from(metric: &Metric) -> Self {
        Self {
            metric: metric.name,
            baseline: round3(metric.baseline),
            rule_based: round3(metric.rule_based),
            delta: round3(metric.delta()),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Renders [`METRICS`] as a grouped bar chart or as a table.
#[derive(Debug, Clone)]
pub struct MetricsBoard {
    chart_width: usize,
}

impl MetricsBoard {
    pub fn new(chart_width: usize) -> Self {
        Self { chart_width }
    }

    pub fn metrics(&self) -> &'static [Metric] {
        &METRICS
    }

    pub fn lookup(&self, name: &str) -> Option<&'static Metric> {
        METRICS.iter().find(|m| m.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Metrics ordered by improvement, largest first.
    pub fn highlights(&self, count: usize) -> Vec<&'static Metric> {
        let mut ranked: Vec<&'static Metric> = METRICS.iter().collect();
        ranked.sort_by(|a, b| b.delta().total_cmp(&a.delta()));
        ranked.truncate(count);
        ranked
    }

    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .highlights(2)
            .iter()
            .map(|m| format!("{} {:.3} → {:.3}", m.name, m.baseline, m.rule_based))
            .collect();
        format!("largest improvements: {}", parts.join(", "))
    }

    pub fn render(&self, format: MetricsFormat) -> Result<String> {
        tracing::debug!("Rendering metrics as {:?}", format);
        match format {
            MetricsFormat::Chart => Ok(self.render_chart()),
            MetricsFormat::Csv => self.render_delimited(b','),
            MetricsFormat::Tsv => self.render_delimited(b'\t'),
            MetricsFormat::Json => self.render_json(),
        }
    }

    fn bar(&self, score: f64, fill: char) -> String {
        let filled = (score.clamp(0.0, 1.0) * self.chart_width as f64).round() as usize;
        let mut bar: String = std::iter::repeat(fill).take(filled).collect();
        bar.extend(std::iter::repeat(' ').take(self.chart_width - filled));
        bar
    }

    pub fn render_chart(&self) -> String {
        let name_width = METRICS.iter().map(|m| m.name.len()).max().unwrap_or(0);
        let mut lines = vec![format!(
            "score (0.0 - 1.0)   ░ baseline   █ rule-based   width={}",
            self.chart_width
        )];

        for metric in &METRICS {
            lines.push(format!(
                "{:<name_width$} |{}| {:.3}",
                metric.name,
                self.bar(metric.baseline, '░'),
                metric.baseline,
            ));
            lines.push(format!(
                "{:<name_width$} |{}| {:.3}",
                "",
                self.bar(metric.rule_based, '█'),
                metric.rule_based,
            ));
        }

        lines.push(self.summary());
        lines.join("\n")
    }

    fn render_delimited(&self, delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        for metric in &METRICS {
            writer.serialize(MetricRow::from(metric))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| QaError::IoError(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| QaError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    fn render_json(&self) -> Result<String> {
        let rows: Vec<MetricRow> = METRICS.iter().map(MetricRow::from).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}

impl Default for MetricsBoard {
    fn default() -> Self {
        Self::new(40)
    }
}
