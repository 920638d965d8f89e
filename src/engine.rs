//! Request entry points
//!
//! An `Engine` pairs the shared catalog with the encoder pool. When the
//! catalog failed to load the engine stays up in a degraded mode where every
//! request answers "no song identified".

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::models::Encoder;
use crate::search::{pipeline, Outcome, Strategy};
use crate::storage::Catalog;
use crate::ui;

pub struct Engine {
	catalog: Option<Arc<Catalog>>,
	encoder: Encoder,
}

impl Engine {
	pub fn new(catalog: Option<Arc<Catalog>>, encoder: Encoder) -> Self {
		Self { catalog, encoder }
	}

	/// Load the snapshot at `dir`; a missing or broken snapshot degrades the engine
	pub fn open(dir: Option<&Path>, encoder: Encoder) -> Self {
		let catalog = match dir {
			Some(dir) => match Catalog::load(dir) {
				Ok(catalog) => {
					let stats = catalog.stats();
					ui::success(&format!(
						"Catalog ready: {} songs, {} lines",
						stats.songs, stats.lines
					));
					Some(Arc::new(catalog))
				}
				Err(e) => {
					ui::error(&format!("Catalog failed to load: {:#}", e));
					None
				}
			},
			None => {
				ui::error("No catalog snapshot found. Pass --data or set TUNEFIND_DATA_DIR");
				None
			}
		};

		Self::new(catalog, encoder)
	}

	pub fn catalog(&self) -> Option<&Catalog> {
		self.catalog.as_deref()
	}

	pub fn is_degraded(&self) -> bool {
		self.catalog.is_none()
	}

	pub fn identify_and_recommend_from_text(&self, query_text: &str) -> Result<Outcome> {
		self.respond(query_text, Strategy::Text)
	}

	pub fn identify_and_recommend_from_audio_text(&self, transcript: &str) -> Result<Outcome> {
		self.respond(transcript, Strategy::Transcript)
	}

	fn respond(&self, text: &str, strategy: Strategy) -> Result<Outcome> {
		let Some(catalog) = self.catalog.as_deref() else {
			ui::debug("Catalog unavailable, answering with no result");
			return Ok(Outcome::none());
		};

		if text.trim().is_empty() {
			return Ok(Outcome::none());
		}

		let query = match self.encoder.encode(text) {
			Ok(query) => query,
			Err(e) => {
				ui::warn(&format!("Query encoding failed: {:#}", e));
				return Ok(Outcome::none());
			}
		};

		pipeline::run(catalog, &query, text, strategy)
	}
}
