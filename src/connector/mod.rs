//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Gemini HTTP transport for the hosted generative-language endpoint
//! - Scripted mock transport for tests and offline demo mode

pub mod adapter;

pub use adapter::*;
