use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, FIXTURE_PATH, catalog, run};

fn main_window(messages: &str) -> String {
    catalog(
        "de_DE",
        &format!(
            "<context>\n    <name>MainWindow</name>\n{}</context>\n",
            messages
        ),
    )
}

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/app_de.ts",
        &main_window(
            r#"    <message>
        <location filename="../main.py" line="12"/>
        <source>Open file %s</source>
        <translation>Öffne Datei %s</translation>
    </message>
"#,
        ),
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Checked 1 catalog - no issues found\n");

    Ok(())
}

#[test]
fn test_vanished_in_real_catalog() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.check_command().arg("vanished"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Type\"  vanished"));
    assert!(output
        .stdout
        .contains(&format!("  --> ./{}:17:9", FIXTURE_PATH)));
    assert!(output
        .stdout
        .contains("   = hint: run `tscat clean --apply` to drop vanished messages"));
    assert!(
        output
            .stdout
            .ends_with("\u{2718} 23 problems (0 errors, 23 warnings)\n")
    );

    Ok(())
}

#[test]
fn test_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &main_window(
            r#"    <message>
        <source>Open file %s</source>
        <translation>Öffne Datei</translation>
    </message>
"#,
        ),
    )?;

    let output = run(test.check_command().arg("placeholder-mismatch"))?;

    assert_eq!(output.code, Some(1));
    let expected = "\
error: \"Open file %s\"  placeholder-mismatch
  --> ./app_de.ts:8:9
  |
8 |         <translation>Öffne Datei</translation>
  |         ^
  = note: source has [1x %s], translation \"Öffne Datei\" has [none]

\u{2718} 1 problem (1 error, 0 warnings)
";
    assert_eq!(output.stdout, expected);

    Ok(())
}

#[test]
fn test_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &main_window(
            r#"    <message>
        <source>Save</source>
        <translation type="unfinished"></translation>
    </message>
"#,
        ),
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Save\"  unfinished"));
    assert!(output.stdout.contains("= note: in context MainWindow"));

    Ok(())
}

#[test]
fn test_duplicate_and_numerus() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &main_window(
            r#"    <message>
        <source>Close</source>
        <translation>Schließen</translation>
    </message>
    <message>
        <source>Close</source>
        <translation>Zumachen</translation>
    </message>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n Datei</numerusform>
        </translation>
    </message>
"#,
        ),
    )?;

    let output = run(test.check_command().args(["duplicate", "numerus-forms"]))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"Close\"  duplicate"));
    assert!(output.stdout.contains("first defined at line 6"));
    assert!(output.stdout.contains("error: \"%n file(s)\"  numerus-forms"));
    assert!(output.stdout.contains("de_DE expects 2 forms, found 1"));
    assert!(output.stdout.contains("2 problems (2 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_untranslated_respects_ignore_texts() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &main_window(
            r#"    <message>
        <source>Name</source>
        <translation>Name</translation>
    </message>
    <message>
        <source>Status</source>
        <translation>Status</translation>
    </message>
"#,
        ),
    )?;
    test.write_file(".tscatrc.json", r#"{ "ignoreTexts": ["Status"] }"#)?;

    let output = run(test.check_command().arg("untranslated"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Name\"  untranslated"));
    assert!(!output.stdout.contains("\"Status\""));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_config_selects_checks() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &main_window(
            r#"    <message>
        <source>Old</source>
        <translation type="vanished">Alt</translation>
    </message>
    <message>
        <source>Draft</source>
        <translation type="unfinished"></translation>
    </message>
"#,
        ),
    )?;
    test.write_file(".tscatrc.json", r#"{ "checks": ["unfinished"] }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"Draft\"  unfinished"));
    assert!(!output.stdout.contains("vanished"));

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::with_file("broken_de.ts", "<?xml version=\"1.0\"?>\n<TS><context>")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("  --> ./broken_de.ts\n"));

    Ok(())
}

#[test]
fn test_typescript_sources_are_skipped() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export const answer: number = 42;\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 0 catalogs - no issues found"));

    Ok(())
}

#[test]
fn test_path_option() -> Result<()> {
    let test = CliTest::with_fixture()?;

    let output = run(test.check_command().args(["vanished", "--path", "i18n"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("i18n/bimsemantic_de.ts:17:9"));

    Ok(())
}

#[test]
fn test_missing_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command().args(["--path", "missing"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Directory not found: missing"));

    Ok(())
}
