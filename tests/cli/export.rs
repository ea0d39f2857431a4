use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, SR_CATALOG, run};

#[test]
fn test_export_json() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let output = run(test.command().args(["export", "app_sr.ts"]))?;

    assert_eq!(output.code, Some(0));
    let value: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value["language"], "sr_RS");
    assert_eq!(value["contexts"][0]["name"], "About");
    assert_eq!(
        value["contexts"][0]["messages"][0],
        json!({"source": "Version %1", "translation": "Verzija %1", "status": "finished"})
    );
    assert_eq!(
        value["contexts"][1]["messages"][0]["translation"],
        json!(["%n greška u %1", "%n greške u %1", "%n grešaka u %1"])
    );
    assert_eq!(value["contexts"][1]["messages"][1]["status"], "vanished");
    Ok(())
}

#[test]
fn test_export_finished_only() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let output = run(test.command().args(["export", "app_sr.ts", "--finished-only"]))?;

    let value: Value = serde_json::from_str(&output.stdout)?;
    let sources: Vec<&str> = value["contexts"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|ctx| ctx["messages"].as_array().into_iter().flatten())
        .filter_map(|msg| msg["source"].as_str())
        .collect();
    assert_eq!(sources, vec!["Version %1", "%n error(s) in %1"]);
    Ok(())
}

#[test]
fn test_export_missing_catalog_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().args(["export", "missing.ts"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("catalog not found"));
    Ok(())
}
