use anyhow::{Context, Ok, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::{
    config::load_config,
    lookup::{LookupOptions, Translator},
    placeholder::{self, Arg},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let finished_only = cmd.finished_only || configured_finished_only(&cmd)?;
    let translator = Translator::load(&cmd.file, LookupOptions { finished_only })
        .with_context(|| format!("Failed to load catalog {}", cmd.file.display()))?;

    let comment = cmd.comment.as_deref();
    let found = translator
        .find(&cmd.context, &cmd.source, comment)
        .is_some();

    let template = match cmd.count {
        Some(n) => translator.translate_plural(&cmd.context, &cmd.source, comment, n),
        None => translator
            .translate_disambiguated(&cmd.context, &cmd.source, comment)
            .into(),
    };

    let args: Vec<Arg<'_>> = cmd.args.iter().map(Arg::from).collect();
    let text = if args.is_empty() {
        template.into_owned()
    } else {
        placeholder::format(&template, &args)
    };

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text, found }),
        Vec::new(),
        1,
        true,
    ))
}

/// `finishedOnly` from the config next to the catalog, if any.
fn configured_finished_only(cmd: &LookupCommand) -> Result<bool> {
    let dir = match cmd.file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    Ok(load_config(&dir)?.config.finished_only)
}
