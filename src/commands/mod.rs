//! # Command Implementations
//!
//! Each submodule handles one CLI command (search, hum, repl, info).

pub mod hum;
pub mod info;
pub mod repl;
pub mod search;

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{self, ENCODE_TIMEOUT, ENCODE_WORKERS};
use crate::engine::Engine;
use crate::models::{Encoder, Models};
use crate::ui;

/// Load the catalog and prepare the encoder pool
pub fn open_engine() -> Result<Engine> {
	let start = Instant::now();

	let models = Models::new()?;
	let encoder = Encoder::new(Arc::new(models), ENCODE_WORKERS, ENCODE_TIMEOUT)?;
	let data_dir = config::data_dir();
	let engine = Engine::open(data_dir.as_deref(), encoder);

	ui::debug(&format!("Engine ready in {:.2}s", start.elapsed().as_secs_f32()));
	Ok(engine)
}
