//! Data models

pub mod chat;
pub mod features;
pub mod prediction;

pub use chat::*;
pub use features::*;
pub use prediction::*;
