use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use uuid::timestamp::context::ContextV7;
use uuid::{Timestamp, Uuid};

/// Speaker of a chat turn. The wire names (`user` / `model`) match what the
/// upstream generative-language API expects, so turns map onto the request
/// payload without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque message identifier. UUID v7, so identifiers are unique and sort in
/// creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn generate() -> Self {
        // Shared v7 context: ids generated within the same millisecond still
        // sort in creation order.
        // ContextV7 is not Sync, so the shared context lives behind a Mutex.
        static CONTEXT: OnceLock<Mutex<ContextV7>> = OnceLock::new();
        let context = CONTEXT.get_or_init(|| Mutex::new(ContextV7::new()));
        let guard = context.lock().expect("uuid v7 context lock poisoned");
        Self(Uuid::new_v7(Timestamp::now(&*guard)))
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    role: Role,
    text: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn turn(&self) -> ChatTurn {
        ChatTurn::new(self.role, self.text.clone())
    }
}

/// The `{role, text}` pair passed to the proxy and mapped turn-for-turn onto
/// the upstream request. Carries no identifier: only order and speaker matter
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    role: Role,
    text: String,
}

impl ChatTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only, in-memory message list for one session. Insertion order is
/// turn order; nothing is persisted across runs.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(ChatMessage::user(text))
    }

    pub fn push_model(&mut self, text: impl Into<String>) -> MessageId {
        self.push(ChatMessage::model(text))
    }

    fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = message.id();
        self.messages.push(message);
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Project the full turn sequence, in order, for the next request.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages.iter().map(ChatMessage::turn).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
