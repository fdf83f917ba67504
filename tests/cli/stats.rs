use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, FIXTURE_PATH, catalog, run};

#[test]
fn test_stats_text() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(&mut test.stats_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        format!(
            "./{} [de_DE]: 259/260 finished (99.6%), 0 unfinished, 1 empty, 23 vanished\n",
            FIXTURE_PATH
        )
    );

    Ok(())
}

#[test]
fn test_stats_json_with_total() -> Result<()> {
    let test = CliTest::with_fixture()?;
    test.write_file(
        "i18n/bimsemantic_fr.ts",
        &catalog(
            "fr_FR",
            r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Close</source>
        <translation>Fermer</translation>
    </message>
    <message>
        <source>Save</source>
        <translation type="unfinished"></translation>
    </message>
</context>
"#,
        ),
    )?;

    let output = run(test.stats_command().arg("--json"))?;

    assert_eq!(output.code, Some(0));
    let value: Value = serde_json::from_str(&output.stdout).context("stats --json output")?;

    let files = value["files"].as_array().context("files array")?;
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["language"], "de_DE");
    assert_eq!(files[1]["path"], "./i18n/bimsemantic_fr.ts");
    assert_eq!(files[1]["finished"], 1);
    assert_eq!(files[1]["unfinished"], 1);
    assert_eq!(files[1]["coverage"], 50.0);

    assert_eq!(value["total"]["total"], 262);
    assert_eq!(value["total"]["finished"], 260);
    assert_eq!(value["total"]["vanished"], 23);

    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.stats_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "No catalogs found\n");

    Ok(())
}
