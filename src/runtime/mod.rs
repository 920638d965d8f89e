//! # ONNX Runtime
//!
//! Session creation and execution provider selection for the text model.

pub mod providers;

pub use providers::{create_session, set_provider};
