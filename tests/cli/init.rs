use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, SR_CATALOG, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!(["**/*.ts"]));
    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );
    assert_eq!(parsed["catalogsRoot"], "./");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .tscatrc.json\n");
    assert!(test.root().join(".tscatrc.json").exists());
    assert_config_content(&test.read_file(".tscatrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "Error: .tscatrc.json already exists\n");
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file("translations/app_sr.ts", SR_CATALOG)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );
    assert!(output.stdout.contains("translations/app_sr.ts"));

    Ok(())
}
