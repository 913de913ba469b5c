use seismic_qa::utils::validation::Validate;
use seismic_qa::{normalize, AnswerMode, QaEngine, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_drives_answers() {
    let file = write_config(
        r#"
[demo]
question = "この建物は2000年の耐震基準を満たしていますか？"
mode = "both"

[facts]
year = 1978
grade = "耐震等級1"
devices = "免震支承"
area = "東京都"
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());

    let engine = QaEngine::from_vocabulary(config.vocabulary.clone()).unwrap();
    let facts = normalize(&config.facts);
    let comparison = engine.compare(config.question(), &facts, config.mode());

    assert_eq!(
        comparison.rule_based.as_deref(),
        Some(
            "no (or unknown).\nyear: 1978 → pre-1981-standard\ngrade: 耐震等級1\ntechnique: base-isolation\narea: 東京都"
        )
    );
    assert!(comparison.baseline.unwrap().contains("2000 standard"));
}

#[test]
fn test_custom_vocabulary_changes_matching() {
    let file = write_config(
        r#"
[demo]
question = "Does it conform to the 2000 rules?"
mode = "rules"

[facts]
year = 2003
devices = "tuned mass absorber"

[vocabulary]
damping = ["absorber"]
compliance_terms = ["conform"]
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.mode(), AnswerMode::Rules);

    let engine = QaEngine::from_vocabulary(config.vocabulary.clone()).unwrap();
    let comparison = engine.compare(config.question(), &normalize(&config.facts), config.mode());

    assert!(comparison.baseline.is_none());
    assert_eq!(
        comparison.rule_based.as_deref(),
        Some("yes.\nyear: 2003 → 2000-standard\ntechnique: damping")
    );
}

#[test]
fn test_shipped_example_config_loads_clean_facts() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/seismic-qa.example.toml");

    let config = TomlConfig::from_file(path).unwrap();
    assert!(config.validate().is_ok());

    let facts = normalize(&config.facts);
    assert_eq!(facts.year, Some(2010));
    assert_eq!(facts.grade.as_deref(), Some("grade 3"));
    assert_eq!(facts.devices, vec!["base-isolation support", "oil damper"]);
    assert_eq!(facts.area.as_deref(), Some("Tokyo"));

    let engine = QaEngine::from_vocabulary(config.vocabulary.clone()).unwrap();
    let answer = engine
        .compare(config.question(), &facts, config.mode())
        .rule_based
        .unwrap();
    assert!(!answer.contains("${"));
    assert_eq!(
        answer,
        "yes.\nyear: 2010 → 2000-standard\ngrade: grade 3\ntechnique: base-isolation, damping\narea: Tokyo"
    );
}

#[test]
fn test_text_year_in_config_file() {
    let file = write_config(
        r#"
[facts]
year = "unknown"
devices = "viscous damper"
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    let facts = normalize(&config.facts);
    assert_eq!(facts.year, None);

    let engine = QaEngine::from_vocabulary(config.vocabulary.clone()).unwrap();
    let comparison = engine.compare(config.question(), &facts, AnswerMode::Rules);
    assert_eq!(
        comparison.rule_based.as_deref(),
        Some("no (or unknown).\ntechnique: damping")
    );
}

#[test]
fn test_invalid_vocabulary_is_rejected() {
    let file = write_config(
        r#"
[vocabulary]
seismic_terms = []
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}
