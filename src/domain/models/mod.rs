mod config;
mod message;
mod persona;

pub use config::*;
pub use message::*;
pub use persona::*;
