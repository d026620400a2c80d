use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A single chat turn as held by the store.
///
/// `id` is assigned by the caller; the store never checks it for
/// uniqueness. Decoding is lenient: a missing or `null` field takes its
/// default, so stored histories are adopted without per-field checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Message {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub role: Role,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub state: MessageState,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Message {
    pub fn new(id: i64, role: Role, content: impl Into<String>, state: MessageState) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            state,
        }
    }

    /// A completed user message.
    pub fn user(id: i64, content: impl Into<String>) -> Self {
        Self::new(id, Role::User, content, MessageState::Complete)
    }

    /// A completed assistant message.
    pub fn assistant(id: i64, content: impl Into<String>) -> Self {
        Self::new(id, Role::Assistant, content, MessageState::Complete)
    }

    pub fn with_state(mut self, state: MessageState) -> Self {
        self.state = state;
        self
    }

    /// Overwrite the fields present in `patch`, keeping the rest.
    pub fn apply(&mut self, patch: MessagePatch) {
        patch.apply_to(self);
    }
}

/// Who authored a message.
///
/// Encoded as a bare string on the wire. Strings other than the known
/// roles are kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Assistant,
    User,
    System,
    Other(String),
}

/// An absent role decodes as the empty string.
impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Assistant => "assistant",
            Role::User => "user",
            Role::System => "system",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "assistant" => Role::Assistant,
            "user" => Role::User,
            "system" => Role::System,
            _ => Role::Other(s),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of a message, e.g. still streaming from the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageState {
    Complete,
    Streaming,
    Other(String),
}

/// An absent state decodes as the empty string.
impl Default for MessageState {
    fn default() -> Self {
        MessageState::Other(String::new())
    }
}

impl MessageState {
    pub fn as_str(&self) -> &str {
        match self {
            MessageState::Complete => "complete",
            MessageState::Streaming => "streaming",
            MessageState::Other(s) => s,
        }
    }
}

impl From<String> for MessageState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "complete" => MessageState::Complete,
            "streaming" => MessageState::Streaming,
            _ => MessageState::Other(s),
        }
    }
}

impl From<&str> for MessageState {
    fn from(s: &str) -> Self {
        MessageState::from(s.to_string())
    }
}

impl From<MessageState> for String {
    fn from(state: MessageState) -> Self {
        match state {
            MessageState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MessageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial [`Message`]: only the `Some` fields are written on apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MessageState>,
}

impl MessagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn role(mut self, role: impl Into<Role>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn state(mut self, state: impl Into<MessageState>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.role.is_none() && self.content.is_none() && self.state.is_none()
    }

    pub fn apply_to(self, message: &mut Message) {
        if let Some(id) = self.id {
            message.id = id;
        }
        if let Some(role) = self.role {
            message.role = role;
        }
        if let Some(content) = self.content {
            message.content = content;
        }
        if let Some(state) = self.state {
            message.state = state;
        }
    }
}
