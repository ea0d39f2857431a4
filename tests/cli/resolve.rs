use anyhow::Result;

use crate::{CliTest, SR_CATALOG, run};

#[test]
fn test_finished_translation() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let output = run(test.command().args([
        "resolve",
        "app_sr.ts",
        "--context",
        "About",
        "Version %1",
        "2.13",
    ]))?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim_end(), @"Verzija 2.13");
    Ok(())
}

#[test]
fn test_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let output = run(test.command().args([
        "resolve",
        "app_sr.ts",
        "--context",
        "About",
        "About Cppcheck",
    ]))?;

    assert_eq!(output.stdout, "About Cppcheck\n");
    Ok(())
}

#[test]
fn test_plural() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let resolve = |count: &str| {
        run(test.command().args([
            "resolve",
            "app_sr.ts",
            "--context",
            "ResultsView",
            "--count",
            count,
            "%n error(s) in %1",
            "main.c",
        ]))
    };

    assert_eq!(resolve("1")?.stdout, "1 greška u main.c\n");
    assert_eq!(resolve("3")?.stdout, "3 greške u main.c\n");
    assert_eq!(resolve("12")?.stdout, "12 grešaka u main.c\n");
    Ok(())
}

#[test]
fn test_missing_catalog_falls_back() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().args([
        "resolve",
        "missing.ts",
        "--context",
        "About",
        "Version %1",
        "2.13",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Version 2.13\n");
    assert!(output.stderr.contains("catalog not found"));
    Ok(())
}

#[test]
fn test_malformed_catalog_falls_back() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", "<TS><context><name>About</name>")?;

    let output = run(test.command().args([
        "resolve",
        "app_sr.ts",
        "--context",
        "About",
        "About",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "About\n");
    assert!(output.stderr.contains("catalog rejected"));
    Ok(())
}
