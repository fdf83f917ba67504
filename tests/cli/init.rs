use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["ignores", "includes", "ignoreTexts", "finishedOnly", "checks"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["finishedOnly"], false);
    assert_eq!(
        parsed["checks"].as_array().map(Vec::len),
        Some(6),
        "all rules enabled by default"
    );

    // 2-space indentation
    assert!(content.contains("\n  \"ignores\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .tscatrc.json\n");
    assert!(test.root().join(".tscatrc.json").exists());

    let content = test.read_file(".tscatrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: .tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_created_config_is_loaded() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;

    let output = run(test.command().args(["check", "-v"]))?;

    assert_eq!(output.code, Some(0));
    assert!(!output.stderr.contains("using default configuration"));

    Ok(())
}
