use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod clean;
mod help;
mod init;
mod lookup;
mod stats;

const BIN_NAME: &str = "tscat";

/// lupdate output for a real project, 283 messages of which 23 are vanished.
pub const FIXTURE: &str = include_str!("../fixtures/bimsemantic_de.ts");
pub const FIXTURE_PATH: &str = "i18n/bimsemantic_de.ts";

/// Wrap `body` in the header lupdate writes; the body starts on line 4.
pub fn catalog(language: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\">\n{}</TS>\n",
        language, body
    )
}

pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops config lookup from leaving the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn with_fixture() -> Result<Self> {
        Self::with_file(FIXTURE_PATH, FIXTURE)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn lookup_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("lookup");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn run(cmd: &mut Command) -> Result<CliOutput> {
    let output = cmd.output().context("Failed to run tscat")?;
    Ok(CliOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}
