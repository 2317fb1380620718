use async_trait::async_trait;

use crate::domain::{ChatTurn, DomainError};

/// An interface for sending an ordered turn sequence to a hosted
/// generative-language model and receiving its reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::SendMessageUseCase`]) remain
/// decoupled from any particular provider or HTTP client library, and tests
/// substitute a scripted implementation instead of touching the network.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send the `system` instruction and the ordered `turns` and return the
    /// model's reply text.
    ///
    /// `turns` is the full conversation so far with the newest user turn
    /// last; the transport must preserve its order on the wire. An `Ok`
    /// result may carry an empty string when the model produced no text —
    /// classifying that is the caller's job.
    async fn generate(&self, system: &str, turns: &[ChatTurn]) -> Result<String, DomainError>;

    /// Name of the model this transport targets (for logging).
    fn model_name(&self) -> &str;
}
