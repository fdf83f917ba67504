use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, FIXTURE, FIXTURE_PATH, catalog, run};

#[test]
fn test_clean_dry_run() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(&mut test.clean_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(&format!(
        "  - ./{}:17  ColumnsTreeModel \"Type\"",
        FIXTURE_PATH
    )));
    assert!(
        output
            .stdout
            .contains("Would delete 23 vanished message(s) in 1 file(s).")
    );
    assert!(output.stdout.contains("  - 3 context(s) would become empty"));
    assert!(
        output
            .stdout
            .contains("Run with --apply to delete these messages.")
    );

    // Dry run leaves the catalog untouched.
    assert_eq!(test.read_file(FIXTURE_PATH)?, FIXTURE);

    Ok(())
}

#[test]
fn test_clean_apply() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.clean_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Deleted 23 vanished message(s) in 1 file(s).")
    );
    assert!(output.stdout.contains("  - 3 empty context(s) removed"));

    let cleaned = test.read_file(FIXTURE_PATH)?;
    assert!(!cleaned.contains("type=\"vanished\""));
    assert_eq!(cleaned.matches("<message>").count(), 260);
    assert_eq!(cleaned.matches("<context>").count(), 24);
    assert!(!cleaned.contains("<name>ContextMixin</name>"));
    assert!(cleaned.contains("<source>Open file %s</source>"));

    // Nothing left to do on a second run.
    let output = run(test.clean_command().arg("--apply"))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} No vanished messages in 1 catalog\n"
    );
    assert_eq!(test.read_file(FIXTURE_PATH)?, cleaned);

    Ok(())
}

#[test]
fn test_clean_keeps_other_catalogs_untouched() -> Result<()> {
    let live = catalog(
        "fr_FR",
        r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Close</source>
        <translation>Fermer</translation>
    </message>
</context>
"#,
    );
    let test = CliTest::with_fixture()?;
    test.write_file("i18n/bimsemantic_fr.ts", &live)?;

    let output = run(test.clean_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("in 1 file(s)."));
    assert_eq!(test.read_file("i18n/bimsemantic_fr.ts")?, live);

    Ok(())
}

#[test]
fn test_clean_parse_error_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("broken_de.ts", "<?xml version=\"1.0\"?>\n<TS><context>")?;

    let output = run(&mut test.clean_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No vanished messages in 0 catalogs"));
    assert!(
        output
            .stderr
            .contains("1 file(s) could not be parsed (use -v for details)")
    );

    let output = run(test.clean_command().arg("-v"))?;
    assert!(output.stderr.contains("Failed to parse ./broken_de.ts"));

    Ok(())
}

#[test]
fn test_clean_apply_keeps_markup_of_remaining_messages() -> Result<()> {
    let kept = r#"<context>
    <name>MainWindow</name>
    <message>
        <location filename="../ui/mainwindow.py" line="+12"/>
        <source>Open file %s</source>
        <extra-po-flags>c-format</extra-po-flags>
        <translation variants="yes"><lengthvariant>Öffne Datei %s</lengthvariant><lengthvariant>Öffnen %s</lengthvariant></translation>
        <userdata>kept</userdata>
    </message>
    <message>
        <location filename="../ui/mainwindow.py"/>
        <source>Close</source>
        <translation>Schließen</translation>
    </message>
"#;
    let vanished = r#"    <message>
        <source>Type</source>
        <translation type="vanished">Typ</translation>
    </message>
"#;
    let content = catalog("de_DE", &format!("{}{}</context>\n", kept, vanished));
    let test = CliTest::with_file("app_de.ts", &content)?;

    let output = run(test.clean_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Deleted 1 vanished message(s) in 1 file(s).")
    );
    assert_eq!(
        test.read_file("app_de.ts")?,
        catalog("de_DE", &format!("{}</context>\n", kept))
    );

    Ok(())
}
