use anyhow::Result;

use crate::{CliTest, SR_CATALOG, run};

/// Same content as `SR_CATALOG`, without declaration and indentation.
const COMPACT_CATALOG: &str = r#"<TS version="2.1" language="sr_RS"><context><name>About</name><message><source>Version %1</source><translation>Verzija %1</translation></message><message><source>Results</source><translation type="vanished">Rezultati</translation></message></context></TS>"#;

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", COMPACT_CATALOG)?;

    let output = run(test.command().args(["normalize", "app_sr.ts"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("- app_sr.ts"));
    assert!(output.stdout.contains("Would normalize 1 catalog(s)."));
    assert_eq!(test.read_file("app_sr.ts")?, COMPACT_CATALOG);
    Ok(())
}

#[test]
fn test_apply_is_stable() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", COMPACT_CATALOG)?;

    let output = run(test.command().args(["normalize", "app_sr.ts", "--apply"]))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Normalized 1 catalog(s)."));

    let written = test.read_file("app_sr.ts")?;
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n"));
    assert!(written.contains("<translation type=\"vanished\">Rezultati</translation>"));

    let output = run(test.command().args(["normalize", "app_sr.ts"]))?;
    assert!(output.stdout.contains("1 catalog(s) already normalized"));
    Ok(())
}

#[test]
fn test_drop_vanished() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let output = run(test.command().args([
        "normalize",
        "app_sr.ts",
        "--drop-vanished",
        "--apply",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("(1 vanished message(s) dropped)"));
    let written = test.read_file("app_sr.ts")?;
    assert!(!written.contains("Rezultati"));
    assert!(written.contains("Verzija %1"));
    Ok(())
}

#[test]
fn test_unparsable_catalog_is_reported() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", COMPACT_CATALOG)?;
    test.write_file("broken.ts", "<TS><context>")?;

    let output = run(test.command().args(["normalize", "broken.ts", "app_sr.ts", "--apply"]))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> broken.ts:"));
    assert_eq!(test.read_file("broken.ts")?, "<TS><context>");
    assert_ne!(test.read_file("app_sr.ts")?, COMPACT_CATALOG);
    Ok(())
}

#[test]
fn test_missing_catalog_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().args(["normalize", "missing.ts"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("missing.ts"));
    Ok(())
}
