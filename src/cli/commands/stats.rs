use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CatalogStats, CommandResult, CommandSummary, FileStats, StatsSummary, helper::finish};
use crate::{
    catalog::{TranslationCatalog, TranslationStatus},
    context::CheckContext,
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let files: Vec<FileStats> = ctx
        .files
        .iter()
        .map(|file| FileStats {
            path: file.path.clone(),
            language: file.catalog.language.clone(),
            stats: catalog_stats(&file.catalog),
        })
        .collect();

    let mut total = CatalogStats::default();
    for file in &files {
        total += &file.stats;
    }
    total.coverage = coverage(total.finished, total.total);

    let issues: Vec<Issue> = ctx
        .parse_errors
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            files,
            total,
            as_json: cmd.json,
        }),
        issues,
        ctx.files.len(),
        false,
    ))
}

/// Count messages by state.
///
/// `finished` requires a non-empty translation; a finished message with no
/// text counts as `empty` only.
pub fn catalog_stats(catalog: &TranslationCatalog) -> CatalogStats {
    let mut stats = CatalogStats::default();

    for (_, message) in catalog.messages() {
        if message.is_vanished() {
            stats.vanished += 1;
            continue;
        }
        stats.total += 1;
        if message.translation.is_empty() {
            stats.empty += 1;
        }
        match message.status {
            TranslationStatus::Finished if !message.translation.is_empty() => stats.finished += 1,
            TranslationStatus::Unfinished => stats.unfinished += 1,
            _ => {}
        }
    }

    stats.coverage = coverage(stats.finished, stats.total);
    stats
}

/// Percentage with one decimal; an empty catalog is fully covered.
fn coverage(finished: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (finished as f64 * 1000.0 / total as f64).round() / 10.0
}
