//! # Embedding Provider
//!
//! Text encoder trait, the lazily loaded ONNX text model, and the worker
//! pool that isolates encoding from request handling.

pub mod manager;
pub mod pool;
pub mod text;

pub use manager::Models;
pub use pool::Encoder;

use anyhow::Result;

/// Text to fixed-width vector. Output is not expected to be normalized.
pub trait TextEncoder: Send + Sync {
	fn encode(&self, text: &str) -> Result<Vec<f32>>;
}
