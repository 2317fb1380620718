use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::{ChatTurn, DomainError};

/// What the mock does when asked to generate.
enum Behavior {
    Reply(String),
    Empty,
    Fail(String),
}

/// One recorded `generate` call: the system instruction and the full turn
/// sequence as they would have gone on the wire.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub turns: Vec<ChatTurn>,
}

/// Scripted in-process [`ChatTransport`].
///
/// Backs the test suite (call counting, payload inspection, failure
/// injection) and the CLI's `--mock-transport` offline mode. Interior
/// mutability keeps the trait's `&self` contract.
pub struct MockTransport {
    behavior: Behavior,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// A transport that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Reply(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A transport whose replies carry no text.
    pub fn empty() -> Self {
        Self {
            behavior: Behavior::Empty,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A transport that fails every call with a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn generate(&self, system: &str, turns: &[ChatTurn]) -> Result<String, DomainError> {
        debug!("MockTransport: recording call with {} turns", turns.len());

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                system: system.to_string(),
                turns: turns.to_vec(),
            });
        }

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Empty => Ok(String::new()),
            Behavior::Fail(message) => Err(DomainError::transport(message.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[tokio::test]
    async fn test_mock_records_payloads_in_order() {
        let transport = MockTransport::new("ok");

        let turns = vec![ChatTurn::model("hello"), ChatTurn::user("hi")];
        transport.generate("system", &turns).await.unwrap();
        transport.generate("system", &turns[..1]).await.unwrap();

        assert_eq!(transport.call_count(), 2);
        let calls = transport.recorded_calls();
        assert_eq!(calls[0].turns.len(), 2);
        assert_eq!(calls[0].turns[1].role(), Role::User);
        assert_eq!(calls[1].turns.len(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock_returns_transport_error() {
        let transport = MockTransport::failing("boom");

        let err = transport.generate("system", &[]).await.unwrap_err();
        assert!(err.is_transport_error());
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_mock_returns_empty_string() {
        let transport = MockTransport::empty();

        let reply = transport.generate("system", &[]).await.unwrap();
        assert!(reply.is_empty());
    }
}
