use serde::Serialize;

use super::super::exit_status::ExitStatus;
use crate::issues::{Issue, VanishedIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Clean(CleanSummary),
    Lookup(LookupSummary),
    Stats(StatsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CleanSummary {
    /// Vanished messages found (dry-run) or removed (`--apply`).
    pub vanished_count: usize,
    /// Contexts left without messages and dropped with them.
    pub context_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub vanished_issues: Vec<VanishedIssue>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub text: String,
    /// False when the source was returned unchanged.
    pub found: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub files: Vec<FileStats>,
    pub total: CatalogStats,
    #[serde(skip)]
    pub as_json: bool,
}

/// Message counts of one catalog. Vanished messages are excluded from
/// `total` and the coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    /// Live messages without any translated text.
    pub empty: usize,
    /// Finished share of live messages, in percent.
    pub coverage: f64,
}

impl std::ops::AddAssign<&CatalogStats> for CatalogStats {
    fn add_assign(&mut self, other: &CatalogStats) {
        self.total += other.total;
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.vanished += other.vanished;
        self.empty += other.empty;
    }
}

#[derive(Debug, Serialize)]
pub struct FileStats {
    pub path: String,
    pub language: Option<String>,
    #[serde(flatten)]
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tscat commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Issues found by the command.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were loaded.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors {
            ExitStatus::from_error_count(self.error_count)
        } else {
            ExitStatus::Success
        }
    }
}
