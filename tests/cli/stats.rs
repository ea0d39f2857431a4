use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, SR_CATALOG, run};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("translations/app_sr.ts", SR_CATALOG)?;

    let output = run(test.command().arg("stats"))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    catalog                 language  contexts  messages  finished  unfinished  vanished   done
    translations/app_sr.ts  sr_RS            2         4         2           1         1  66.7%
    ");
    Ok(())
}

#[test]
fn test_stats_reports_unparsable_catalogs() -> Result<()> {
    let test = CliTest::with_file("app_sr.ts", SR_CATALOG)?;
    test.write_file("broken.ts", "<TS><context>")?;

    let output = run(test.command().arg("stats"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("app_sr.ts"));
    assert!(!output.stdout.contains("broken.ts"));
    assert!(output.stderr.contains("1 file(s) could not be parsed"));

    let output = run(test.command().args(["stats", "-v"]))?;
    assert!(output.stderr.contains("warning: broken.ts:"));
    Ok(())
}

#[test]
fn test_stats_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("stats"))?;

    assert_eq!(output.stdout, "No catalogs found.\n");
    Ok(())
}
