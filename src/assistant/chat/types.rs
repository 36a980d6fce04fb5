//! Core message types for the chat transcript.

use serde::{Deserialize, Serialize};

pub use flow_assist_protocol::{QuickReply, Role};

/// The renderable payload of a [`ChatMessage`]. Exactly one shape per message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessageBody {
    /// Plain text.
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quick_replies: Option<Vec<QuickReply>>,
    },
    /// A proposed code change rendered as a diff.
    #[serde(rename_all = "camelCase")]
    CodeDiff {
        description: String,
        code_diff: String,
        suggestion_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quick_replies: Option<Vec<QuickReply>>,
    },
    /// A titled card (summaries and agent suggestions).
    #[serde(rename_all = "camelCase")]
    Block {
        title: String,
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quick_replies: Option<Vec<QuickReply>>,
    },
}

impl MessageBody {
    /// The render discriminator (`text`, `code-diff` or `block`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::CodeDiff { .. } => "code-diff",
            Self::Block { .. } => "block",
        }
    }

    /// Quick replies attached to this payload, if any.
    pub fn quick_replies(&self) -> Option<&[QuickReply]> {
        match self {
            Self::Text { quick_replies, .. }
            | Self::CodeDiff { quick_replies, .. }
            | Self::Block { quick_replies, .. } => quick_replies.as_deref(),
        }
    }
}

/// A normalized entry of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Caller-assigned id. Messages from one batch share it.
    pub id: String,
    pub role: Role,
    /// Whether the user has seen this message.
    pub read: bool,
    #[serde(flatten)]
    pub body: MessageBody,
}

impl ChatMessage {
    /// A text message typed by the user. User turns are born read.
    pub fn user_text(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::User,
            read: true,
            body: MessageBody::Text {
                content: content.into(),
                quick_replies: None,
            },
        }
    }

    /// An unread assistant text message without quick replies.
    pub fn assistant_text(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            read: false,
            body: MessageBody::Text {
                content: content.into(),
                quick_replies: None,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        self.body.kind()
    }

    pub fn quick_replies(&self) -> Option<&[QuickReply]> {
        self.body.quick_replies()
    }
}
