use std::{
    collections::{BTreeMap, HashSet},
    fs,
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    catalog::editor::delete_messages,
    issues::MessageContext,
    utils::display_text,
};

/// Low-level catalog edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Delete a vanished message; its context goes too once empty.
    DeleteVanished { context: MessageContext },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::DeleteVanished { context } => &context.location.file_path,
        }
    }

    pub fn preview(&self) {
        match self {
            Operation::DeleteVanished { context } => {
                println!(
                    "  {} {}:{}  {} \"{}\"",
                    "-".red(),
                    context.location.file_path,
                    context.location.line,
                    context.context_name.dimmed(),
                    display_text(&context.source, 60)
                );
            }
        }
    }

    /// Apply all operations targeting one file and write it back once.
    ///
    /// Returns the number of messages actually removed.
    pub fn apply_to_file(file_path: &str, ops: &[&Operation]) -> Result<usize> {
        let lines: HashSet<usize> = ops
            .iter()
            .map(|op| match op {
                Operation::DeleteVanished { context } => context.location.line,
            })
            .collect();

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path))?;

        // Issues point at the <translation> element, or at <message> when absent.
        let (edited, removed) = delete_messages(&content, |_, message| {
            let line = message.translation_span.unwrap_or(message.span).line;
            message.is_vanished() && lines.contains(&line)
        })
        .with_context(|| format!("Failed to parse {}", file_path))?;

        if removed > 0 {
            fs::write(file_path, edited)
                .with_context(|| format!("Failed to write {}", file_path))?;
        }
        Ok(removed)
    }
}

/// Group operations per file in path order.
pub(crate) fn group_by_file(ops: &[Operation]) -> BTreeMap<&str, Vec<&Operation>> {
    let mut grouped: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        grouped.entry(op.file_path()).or_default().push(op);
    }
    grouped
}
