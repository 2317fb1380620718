use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{ChatTurn, DomainError, Persona, Role};

/// Reply shown when no API key is configured. No network call is attempted.
pub const DEMO_MODE_REPLY: &str = "I'm currently in demo mode (no API key configured). \
     But I'd love to chat about design in a real deployment.";

/// Reply shown when the model answered with no usable text.
pub const FILLER_REPLY: &str = "I'm contemplating that. Ask me something else.";

/// Reply shown when the upstream exchange failed.
pub const APOLOGY_REPLY: &str =
    "I seem to be having trouble connecting to my thought process right now.";

/// Sends one user utterance plus the prior turn history to the model and
/// returns the reply.
///
/// Stateless between invocations: all conversation state is supplied by the
/// caller, and each call issues at most one upstream request. There is no
/// retry, no streaming, and no truncation of long histories — the full
/// sequence is forwarded every time, as the site always did.
///
/// Two surfaces:
/// - [`execute`](Self::execute) returns a typed result so callers can tell
///   `Unconfigured`, `TransportError`, and `EmptyResponse` apart;
/// - [`reply_text`](Self::reply_text) collapses those into the three fixed
///   human-readable strings the chat widget renders.
pub struct SendMessageUseCase {
    transport: Option<Arc<dyn ChatTransport>>,
    persona: Persona,
}

impl SendMessageUseCase {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport: Some(transport),
            persona: Persona::default(),
        }
    }

    /// Build the demo-mode variant used when no credential is available.
    /// Every send short-circuits to [`DomainError::Unconfigured`] without a
    /// network attempt.
    pub fn unconfigured() -> Self {
        Self {
            transport: None,
            persona: Persona::default(),
        }
    }

    /// Wire a transport only when one is available, e.g. from
    /// `GeminiTransport::from_config`.
    pub fn with_optional_transport(transport: Option<Arc<dyn ChatTransport>>) -> Self {
        Self {
            transport,
            persona: Persona::default(),
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Send `utterance` with the prior `history` and return the reply text.
    ///
    /// The upstream payload is `history` mapped turn-for-turn, with the new
    /// user turn appended last: N history turns become exactly N+1 payload
    /// turns, order preserved.
    pub async fn execute(
        &self,
        utterance: &str,
        history: &[ChatTurn],
    ) -> Result<String, DomainError> {
        let Some(transport) = self.transport.as_ref() else {
            return Err(DomainError::Unconfigured);
        };

        let mut turns: Vec<ChatTurn> = Vec::with_capacity(history.len() + 1);
        turns.extend_from_slice(history);
        turns.push(ChatTurn::new(Role::User, utterance));

        debug!(
            "Sending {} turns to {} (history={})",
            turns.len(),
            transport.model_name(),
            history.len()
        );

        let system = self.persona.system_instruction();
        let reply = transport.generate(&system, &turns).await.map_err(|e| {
            warn!("Chat transport failed: {e}");
            e
        })?;

        if reply.trim().is_empty() {
            return Err(DomainError::EmptyResponse);
        }

        Ok(reply)
    }

    /// The legacy string contract: always returns something renderable,
    /// collapsing every failure into one of the fixed replies.
    pub async fn reply_text(&self, utterance: &str, history: &[ChatTurn]) -> String {
        match self.execute(utterance, history).await {
            Ok(text) => text,
            Err(DomainError::Unconfigured) => DEMO_MODE_REPLY.to_string(),
            Err(DomainError::EmptyResponse) => FILLER_REPLY.to_string(),
            Err(_) => APOLOGY_REPLY.to_string(),
        }
    }
}
