mod gemini_transport;
mod mock_transport;

pub use gemini_transport::*;
pub use mock_transport::*;
