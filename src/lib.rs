pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    ChatTransport, SendMessageUseCase, APOLOGY_REPLY, DEMO_MODE_REPLY, FILLER_REPLY,
};

pub use connector::{GeminiTransport, MockTransport, RecordedCall};

pub use domain::{
    ApiKey, ChatConfig, ChatMessage, ChatTurn, Conversation, DomainError, MessageId, Persona,
    Role, DEFAULT_BASE_URL, DEFAULT_MODEL, REPLY_WORD_LIMIT,
};
