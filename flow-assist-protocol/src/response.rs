//! Response payloads sent by the assistant backend.
//!
//! Every payload is a JSON object with a `"type"` discriminator. Known kinds
//! are decoded into typed bodies; anything else is preserved as
//! [`ResponsePayload::Unknown`] so the consumer decides how to reject it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PayloadError;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Typed by the person using the editor.
    User,
    /// Produced by the assistant backend.
    #[default]
    Assistant,
    /// Injected by the client itself.
    System,
}

/// A suggested follow-up the user can click instead of typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Chip label, also sent back as the message text.
    pub text: String,
    /// Backend-defined reply category, echoed when the chip is clicked.
    #[serde(rename = "type")]
    pub kind: String,
}

/// `type: "message"`: plain assistant text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResponse {
    #[serde(default)]
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

/// `type: "code-diff"`: a proposed change to a node's code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeDiffResponse {
    #[serde(default)]
    pub role: Role,
    pub description: String,
    /// Unified-diff text.
    pub code_diff: String,
    pub suggestion_id: String,
    /// Number of alternative solutions the backend produced.
    #[serde(
        rename = "solution_count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub solution_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

/// `type: "summary"`: a titled recap of the conversation so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(default)]
    pub role: Role,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

/// `type: "agent-suggestion"`: a titled recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSuggestionResponse {
    #[serde(default)]
    pub role: Role,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

/// A parsed response payload. Not serde-tagged because unknown kinds must
/// survive decoding with their discriminator intact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ResponsePayload {
    /// `type: "message"`
    Message(TextResponse),
    /// `type: "code-diff"`
    CodeDiff(CodeDiffResponse),
    /// `type: "summary"`
    Summary(SummaryResponse),
    /// `type: "agent-suggestion"`
    AgentSuggestion(AgentSuggestionResponse),
    /// Unrecognized payload kind, preserved as raw JSON.
    Unknown { kind: String, raw: Value },
}

impl ResponsePayload {
    /// Parse a payload from its raw JSON [`Value`].
    ///
    /// A missing or non-string `"type"` is treated as an unknown kind with an
    /// empty name. A known kind whose body is malformed is an error.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        let kind = value.get("type").and_then(|v| v.as_str()).unwrap_or("");

        let payload = match kind {
            "message" => Self::Message(decode_body(kind, value)?),
            "code-diff" => Self::CodeDiff(decode_body(kind, value)?),
            "summary" => Self::Summary(decode_body(kind, value)?),
            "agent-suggestion" => Self::AgentSuggestion(decode_body(kind, value)?),
            _ => Self::Unknown {
                kind: kind.to_string(),
                raw: value.clone(),
            },
        };
        Ok(payload)
    }

    /// The wire discriminator of this payload.
    pub fn kind(&self) -> &str {
        match self {
            Self::Message(_) => "message",
            Self::CodeDiff(_) => "code-diff",
            Self::Summary(_) => "summary",
            Self::AgentSuggestion(_) => "agent-suggestion",
            Self::Unknown { kind, .. } => kind,
        }
    }
}

impl TryFrom<Value> for ResponsePayload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn decode_body<T: DeserializeOwned>(kind: &str, value: &Value) -> Result<T, PayloadError> {
    serde_json::from_value(value.clone()).map_err(|source| {
        log::debug!("Rejecting malformed '{kind}' payload: {source}");
        PayloadError::Invalid {
            kind: kind.to_string(),
            source,
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
