use serde::{Deserialize, Serialize};

/// One turn in a session, authored by the user or the assistant.
///
/// Stored as `<root>/message/<sessionID>/<messageID>.json`. Messages within a
/// session are ordered by `time.created` ascending; that is the canonical
/// transcript order regardless of file enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub time: MessageTime,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub model: Option<ModelRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MessageTime {
    /// Epoch milliseconds
    pub created: i64,
    /// Epoch milliseconds, absent while the message is still streaming
    #[serde(default)]
    pub completed: Option<i64>,
}

/// Provider/model pair recorded on assistant messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRef {
    #[serde(rename = "providerID")]
    pub provider_id: String,
    #[serde(rename = "modelID")]
    pub model_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        let msg: Message = serde_json::from_str(
            r#"{"id":"msg_1","role":"assistant","time":{"created":100,"completed":200},
                "agent":"build","model":{"providerID":"anthropic","modelID":"sonnet"}}"#,
        )
        .unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.time.completed, Some(200));
        assert_eq!(msg.model.unwrap().provider_id, "anthropic");
    }

    #[test]
    fn test_optional_fields_default_to_absent() {
        let msg: Message =
            serde_json::from_str(r#"{"id":"msg_2","role":"user","time":{"created":100}}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert!(msg.time.completed.is_none());
        assert!(msg.agent.is_none());
        assert!(msg.model.is_none());
    }
}
