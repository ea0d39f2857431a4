use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, SR_CATALOG, run};

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="de">
<context>
    <name>About</name>
    <message>
        <source>Version %1</source>
        <translation>Version %1</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 catalog - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_warnings_only_exit_zero() -> Result<()> {
    let test = CliTest::with_file("translations/app_sr.ts", SR_CATALOG)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r#"
    warning: "About Cppcheck"  unfinished
      --> translations/app_sr.ts:11
       = context: About
       = note: no translation yet

    warning: "Results"  vanished
      --> translations/app_sr.ts:26
       = context: ResultsView
       = note: marked vanished
       = hint: run `tscat normalize --drop-vanished --apply` to remove

    ✘ 2 problems (0 errors, 2 warnings)
    "#);
    Ok(())
}

#[test]
fn test_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file(
        "app_sr.ts",
        r#"<TS version="2.1" language="sr">
<context>
    <name>About</name>
    <message>
        <source>Visit %1 at %2</source>
        <translation>Posetite %1</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r#"
    error: "Visit %1 at %2"  placeholder
      --> app_sr.ts:4
      = context: About
      = note: translation: missing %2
      = hint: arguments without a placeholder are dropped at runtime

    ✘ 1 problems (1 error, 0 warnings)
    "#);
    Ok(())
}

#[test]
fn test_duplicate_source() -> Result<()> {
    let test = CliTest::with_file(
        "app_sr.ts",
        r#"<TS version="2.1" language="sr">
<context>
    <name>MainWindow</name>
    <message>
        <source>Open</source>
        <translation>Otvori</translation>
    </message>
    <message>
        <source>Open</source>
        <translation>Otvaranje</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(test.check_command().arg("duplicate"))?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r#"
    error: "Open"  duplicate
      --> app_sr.ts:8
      = context: MainWindow
      = note: translated differently at line 4
      = hint: only the first occurrence is used

    ✘ 1 problems (1 error, 0 warnings)
    "#);
    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("translations/app_sr.ts", SR_CATALOG)?;

    let output = run(test.check_command().arg("vanished"))?;

    assert!(output.stdout.contains("vanished"));
    assert!(!output.stdout.contains("unfinished"));
    Ok(())
}

#[test]
fn test_malformed_catalog_is_parse_error() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", "<TS>\n<context>\n<name>About</name>\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> app_sr.ts:"));
    Ok(())
}

#[test]
fn test_typescript_sources_are_skipped() -> Result<()> {
    let test = CliTest::with_file("src/main.ts", "export const answer = 42;\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 0 catalogs"));
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["old/**"] }"#)?;
    test.write_file("old/app_sr.ts", SR_CATALOG)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 0 catalogs"));
    Ok(())
}

#[test]
fn test_root_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", r#"{ "catalogsRoot": "missing" }"#)?;
    test.write_file("gui/app_sr.ts", SR_CATALOG)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("catalogs root is not a directory"));

    let output = run(test.check_command().args(["--root", "gui", "vanished"]))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("--> gui/app_sr.ts:26"));
    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{ not json")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error:"));
    Ok(())
}

#[test]
fn test_plural_forms() -> Result<()> {
    let test = CliTest::with_file(
        "app_cs.ts",
        r#"<TS version="2.1" language="cs_CZ">
<context>
    <name>ResultsView</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n soubor</numerusform>
            <numerusform>%n soubory</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(test.check_command().arg("plural-forms"))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r#"
    warning: "%n file(s)"  plural-forms
      --> app_cs.ts:4
      = context: ResultsView
      = note: 2 plural form(s), "cs_CZ" uses 3
      = hint: counts without a form show the source text

    ✘ 1 problems (0 errors, 1 warning)
    "#);
    Ok(())
}

#[test]
fn test_verbose_logs_config_source() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;

    let output = run(test.check_command().arg("-v"))?;
    assert!(output.stderr.contains("no .tscatrc.json found, using defaults"));

    test.write_file(".tscatrc.json", "{}")?;
    let output = run(test.check_command().arg("-v"))?;
    assert!(output.stderr.contains("loaded config"));
    assert!(!output.stderr.contains("using defaults"));

    let output = run(&mut test.check_command())?;
    assert!(!output.stderr.contains("loaded config"));
    Ok(())
}
