//! Maps backend response payloads onto the transcript's [`ChatMessage`] model.
//!
//! | source kind        | body        | field mapping                          |
//! |--------------------|-------------|----------------------------------------|
//! | `message`          | `Text`      | `text` → `content`                     |
//! | `code-diff`        | `CodeDiff`  | verbatim, `solution_count` dropped     |
//! | `summary`          | `Block`     | `title`, `content`                     |
//! | `agent-suggestion` | `Block`     | `title`, `text` → `content`            |
//!
//! Every other kind is rejected with [`AssistantError::UnknownMessageType`].

use serde_json::Value;

use flow_assist_protocol::ResponsePayload;

use super::types::{ChatMessage, MessageBody, QuickReply};
use crate::assistant::error::AssistantError;

/// Normalize one response payload into a transcript message.
///
/// The result is always unread, whatever its role. Nothing is produced for a
/// payload that fails, so callers never hold a half-built message.
pub fn normalize(response: &ResponsePayload, id: &str) -> Result<ChatMessage, AssistantError> {
    let (role, body) = match response {
        ResponsePayload::Message(msg) => (
            msg.role,
            MessageBody::Text {
                content: msg.text.clone(),
                quick_replies: copy_quick_replies(msg.quick_replies.as_deref()),
            },
        ),
        ResponsePayload::CodeDiff(diff) => (
            diff.role,
            MessageBody::CodeDiff {
                description: diff.description.clone(),
                code_diff: diff.code_diff.clone(),
                suggestion_id: diff.suggestion_id.clone(),
                quick_replies: copy_quick_replies(diff.quick_replies.as_deref()),
            },
        ),
        ResponsePayload::Summary(summary) => (
            summary.role,
            MessageBody::Block {
                title: summary.title.clone(),
                content: summary.content.clone(),
                quick_replies: copy_quick_replies(summary.quick_replies.as_deref()),
            },
        ),
        ResponsePayload::AgentSuggestion(suggestion) => (
            suggestion.role,
            MessageBody::Block {
                title: suggestion.title.clone(),
                content: suggestion.text.clone(),
                quick_replies: copy_quick_replies(suggestion.quick_replies.as_deref()),
            },
        ),
        ResponsePayload::Unknown { kind, .. } => {
            return Err(AssistantError::UnknownMessageType { kind: kind.clone() });
        }
    };

    Ok(ChatMessage {
        id: id.to_string(),
        role,
        read: false,
        body,
    })
}

/// Decode and normalize a raw JSON payload in one step.
pub fn normalize_value(value: &Value, id: &str) -> Result<ChatMessage, AssistantError> {
    let payload = ResponsePayload::from_value(value)?;
    normalize(&payload, id)
}

// An empty list collapses to `None` so the field is absent or non-empty.
fn copy_quick_replies(replies: Option<&[QuickReply]>) -> Option<Vec<QuickReply>> {
    replies.filter(|r| !r.is_empty()).map(<[QuickReply]>::to_vec)
}
