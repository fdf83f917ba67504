use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "clean", "lookup", "stats", "init"] {
        assert!(
            output.stdout.contains(command),
            "help should list `{}`:\n{}",
            command,
            output.stdout
        );
    }

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));

    Ok(())
}

#[test]
fn test_unknown_rule_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command().arg("spelling"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("invalid value 'spelling'"));

    Ok(())
}
