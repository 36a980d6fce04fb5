//! Outgoing chat requests and the node error context that seeds a session.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::response::Role;

/// The error a workflow node raised, as reported by the editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeErrorInfo {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The node that raised the error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    /// The node's parameter object, passed through untouched.
    #[serde(default)]
    pub parameters: Value,
    /// Canvas coordinates `[x, y]`.
    #[serde(default)]
    pub position: [f64; 2],
}

/// Everything the backend needs to start an error-helper session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    pub error: NodeErrorInfo,
    pub node: NodeInfo,
}

/// Identity hints sent with a session start.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// A request body sent to the assistant backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChatRequest {
    /// Open a new session seeded with a node error.
    InitErrorHelper {
        role: Role,
        user: UserInfo,
        error: NodeErrorInfo,
        node: NodeInfo,
    },
    /// Continue an existing session with a user turn.
    Message {
        role: Role,
        text: String,
        /// Set when the text came from a quick-reply chip.
        #[serde(
            rename = "quickReplyType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        quick_reply_type: Option<String>,
    },
}

impl ChatRequest {
    /// Build the session-opening request for an error context.
    pub fn init_error_helper(context: &ErrorContext, user: UserInfo) -> Self {
        Self::InitErrorHelper {
            role: Role::User,
            user,
            error: context.error.clone(),
            node: context.node.clone(),
        }
    }

    /// Build a free-text user turn.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message {
            role: Role::User,
            text: text.into(),
            quick_reply_type: None,
        }
    }

    /// Build a user turn from a clicked quick reply.
    pub fn quick_reply(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::Message {
            role: Role::User,
            text: text.into(),
            quick_reply_type: Some(kind.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> ErrorContext {
        ErrorContext {
            error: NodeErrorInfo {
                message: "Cannot read properties of undefined".to_string(),
                description: Some("Check the expression".to_string()),
                name: Some("NodeOperationError".to_string()),
            },
            node: NodeInfo {
                id: "node-1".to_string(),
                node_type: "n8n-nodes-base.code".to_string(),
                name: "Code".to_string(),
                parameters: serde_json::json!({ "jsCode": "return items;" }),
                position: [250.0, 300.0],
            },
        }
    }

    #[test]
    fn test_init_error_helper_serialization() {
        let request = ChatRequest::init_error_helper(
            &sample_context(),
            UserInfo {
                first_name: Some("Ada".to_string()),
            },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "init-error-helper");
        assert_eq!(json["role"], "user");
        assert_eq!(json["user"]["firstName"], "Ada");
        assert_eq!(json["node"]["type"], "n8n-nodes-base.code");
        assert_eq!(json["node"]["position"][1], 300.0);
        assert_eq!(json["error"]["description"], "Check the expression");
    }

    #[test]
    fn test_message_omits_absent_quick_reply_type() {
        let json = serde_json::to_string(&ChatRequest::message("why?")).unwrap();
        assert!(json.contains(r#""type":"message""#));
        assert!(!json.contains("quickReplyType"));

        let json = serde_json::to_string(&ChatRequest::quick_reply("Thanks", "resolved")).unwrap();
        assert!(json.contains(r#""quickReplyType":"resolved""#));
    }

    #[test]
    fn test_error_context_deserialization_defaults() {
        let json = r#"{
            "error": { "message": "boom" },
            "node": { "id": "n", "type": "t", "name": "Node" }
        }"#;
        let context: ErrorContext = serde_json::from_str(json).unwrap();
        assert!(context.error.description.is_none());
        assert_eq!(context.node.position, [0.0, 0.0]);
        assert!(context.node.parameters.is_null());
    }
}
