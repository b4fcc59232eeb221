//! Model inference

pub mod artifacts;
pub mod engine;

pub use engine::InferenceEngine;
