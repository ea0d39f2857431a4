//! JSON export of one catalog.

use anyhow::{Context, Result};
use serde::Serialize;

use super::super::{args::ExportCommand, exit_status::ExitStatus};
use crate::core::{Catalog, Message, Translation, TranslationStatus, load_catalog};

#[derive(Debug, Serialize)]
struct ExportedCatalog<'a> {
    language: Option<&'a str>,
    #[serde(rename = "sourceLanguage", skip_serializing_if = "Option::is_none")]
    source_language: Option<&'a str>,
    contexts: Vec<ExportedContext<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportedContext<'a> {
    name: &'a str,
    messages: Vec<ExportedMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportedMessage<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    translation: &'a Translation,
    status: TranslationStatus,
}

impl<'a> From<&'a Message> for ExportedMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            source: &message.source,
            comment: message.comment.as_deref().filter(|c| !c.is_empty()),
            translation: &message.translation,
            status: message.status,
        }
    }
}

/// Build the export document, keeping only finished messages if asked.
fn export_catalog(catalog: &Catalog, finished_only: bool) -> ExportedCatalog<'_> {
    let contexts = catalog
        .contexts
        .iter()
        .map(|ctx| ExportedContext {
            name: &ctx.name,
            messages: ctx
                .messages
                .iter()
                .filter(|msg| !finished_only || msg.is_finished())
                .map(ExportedMessage::from)
                .collect(),
        })
        .filter(|ctx| !ctx.messages.is_empty())
        .collect();

    ExportedCatalog {
        language: catalog.language.as_deref(),
        source_language: catalog.source_language.as_deref(),
        contexts,
    }
}

pub fn export(cmd: ExportCommand) -> Result<ExitStatus> {
    let catalog = load_catalog(&cmd.catalog)?;
    let document = export_catalog(&catalog, cmd.finished_only);
    let json = serde_json::to_string_pretty(&document).context("Failed to serialize catalog")?;
    println!("{}", json);
    Ok(ExitStatus::Success)
}
