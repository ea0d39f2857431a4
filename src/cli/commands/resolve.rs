use anyhow::Result;

use super::super::{args::ResolveCommand, exit_status::ExitStatus};
use crate::core::{Translator, load_catalog_or_default};

/// Print the display text for one message.
///
/// Behaves like the application at runtime: a missing or malformed catalog
/// is logged and the source text is printed instead.
pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let catalog = load_catalog_or_default(&cmd.catalog);
    let translator = Translator::new(&catalog);

    let text = match cmd.count {
        Some(count) => {
            translator.resolve_plural(&cmd.context, &cmd.source, &cmd.comment, count, &cmd.args)
        }
        None => translator.resolve_disambiguated(&cmd.context, &cmd.source, &cmd.comment, &cmd.args),
    };
    println!("{}", text);

    Ok(ExitStatus::Success)
}
