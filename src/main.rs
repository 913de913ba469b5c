use anyhow::Context;
use clap::Parser;
use seismic_qa::utils::{logger, validation::Validate};
use seismic_qa::{
    normalize, BuildingFacts, CliConfig, MetricsBoard, MetricsFormat, OutputFormat, QaEngine,
    QaError, RuleAnswer,
};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    question: &'a str,
    facts: &'a BuildingFacts,
    baseline: Option<String>,
    rule_based: Option<String>,
    derivation: Option<RuleAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<serde_json::Value>,
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli.load().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("✅ Configuration loaded and validated");

    let engine = QaEngine::from_vocabulary(config.vocabulary.clone())
        .context("Failed to build the rule evaluator")?;
    let facts = normalize(&config.facts);
    let question = config.question();
    let board = MetricsBoard::new(config.chart_width());

    match cli.format {
        OutputFormat::Text => {
            let comparison = engine.compare(question, &facts, config.mode());
            println!("question: {}", comparison.question);
            if let Some(answer) = &comparison.baseline {
                println!();
                println!("[baseline]");
                println!("{}", answer);
            }
            if let Some(answer) = &comparison.rule_based {
                println!();
                println!("[rule-based]");
                println!("{}", answer);
            }
            if cli.metrics {
                println!();
                println!("{}", board.render(config.metrics_format())?);
            }
        }
        OutputFormat::Json => {
            let (comparison, derivation) =
                engine.compare_with_derivation(question, &facts, config.mode());
            let metrics = if cli.metrics {
                let rendered = board.render(MetricsFormat::Json)?;
                Some(serde_json::from_str(&rendered)?)
            } else {
                None
            };

            let report = JsonReport {
                question,
                facts: &facts,
                baseline: comparison.baseline,
                rule_based: comparison.rule_based,
                derivation,
                metrics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting seismic-qa");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<QaError>() {
            Some(qa_error) => {
                tracing::error!("❌ {:#}", e);
                tracing::error!("💡 Suggestion: {}", qa_error.recovery_suggestion());
                eprintln!("❌ {}", qa_error.user_friendly_message());
                eprintln!("💡 {}", qa_error.recovery_suggestion());
                std::process::exit(qa_error.exit_code());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
