use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, FIXTURE_PATH, catalog, run};

fn drafts() -> String {
    catalog(
        "de_DE",
        r#"<context>
    <name>Toolbar</name>
    <message>
        <source>Save</source>
        <translation type="unfinished">Speichern</translation>
    </message>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n Datei</numerusform>
            <numerusform>%n Dateien</numerusform>
        </translation>
    </message>
    <message>
        <source>Open</source>
        <comment>verb</comment>
        <translation>Öffnen</translation>
    </message>
</context>
"#,
    )
}

#[test]
fn test_lookup_with_argument() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.lookup_command().args([
        FIXTURE_PATH,
        "MainWindow",
        "Open file %s",
        "model.ifc",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Öffne Datei model.ifc\n");
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_lookup_keeps_mnemonic() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.lookup_command().args([FIXTURE_PATH, "MainWindow", "&File"]))?;

    assert_eq!(output.stdout, "&Datei\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test
        .lookup_command()
        .args([FIXTURE_PATH, "MainWindow", "Not in the catalog"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Not in the catalog\n");
    assert!(output.stderr.contains("note: no translation found"));

    Ok(())
}

#[test]
fn test_lookup_ignores_vanished_and_empty() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let vanished = run(test
        .lookup_command()
        .args([FIXTURE_PATH, "ColumnsTreeModel", "Type"]))?;
    let empty = run(test
        .lookup_command()
        .args([FIXTURE_PATH, "OverviewTreeModel", "IFC Version"]))?;

    assert_eq!(vanished.stdout, "Type\n");
    assert_eq!(empty.stdout, "IFC Version\n");

    Ok(())
}

#[test]
fn test_lookup_unfinished() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &drafts())?;

    let output = run(test.lookup_command().args(["app_de.ts", "Toolbar", "Save"]))?;
    assert_eq!(output.stdout, "Speichern\n");

    let output = run(test
        .lookup_command()
        .args(["app_de.ts", "Toolbar", "Save", "--finished-only"]))?;
    assert_eq!(output.stdout, "Save\n");

    Ok(())
}

#[test]
fn test_lookup_finished_only_from_config() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &drafts())?;
    test.write_file(".tscatrc.json", r#"{ "finishedOnly": true }"#)?;

    let output = run(test.lookup_command().args(["app_de.ts", "Toolbar", "Save"]))?;

    assert_eq!(output.stdout, "Save\n");

    Ok(())
}

#[test]
fn test_lookup_plural() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &drafts())?;

    let one = run(test
        .lookup_command()
        .args(["app_de.ts", "Toolbar", "%n file(s)", "-n", "1"]))?;
    let many = run(test
        .lookup_command()
        .args(["app_de.ts", "Toolbar", "%n file(s)", "-n", "3"]))?;

    assert_eq!(one.stdout, "1 Datei\n");
    assert_eq!(many.stdout, "3 Dateien\n");

    Ok(())
}

#[test]
fn test_lookup_comment() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &drafts())?;

    let output = run(test
        .lookup_command()
        .args(["app_de.ts", "Toolbar", "Open", "--comment", "verb"]))?;

    assert_eq!(output.stdout, "Öffnen\n");

    Ok(())
}

#[test]
fn test_lookup_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.lookup_command().args(["missing.ts", "Ctx", "Text"]))?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("Error: Failed to load catalog missing.ts")
    );

    Ok(())
}
