use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No API key configured")]
    Unconfigured,

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Model returned no usable text")]
    EmptyResponse,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Self::Unconfigured)
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }

    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse)
    }
}
