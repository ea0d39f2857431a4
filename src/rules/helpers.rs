//! Helper functions shared by rule implementations.

use crate::{core::Message, issues::MessageContext};

/// Issue context for `message` of `context` in `file_path`.
///
/// Messages built in memory carry no line; they are reported at line 1.
pub fn message_context(file_path: &str, context: &str, message: &Message) -> MessageContext {
    MessageContext::new(
        file_path,
        message.line.unwrap_or(1),
        context,
        message.source.clone(),
    )
}
