//! Lazy model loading coordinator
//!
//! Each encoder worker checks out its own `TextModel`; a model is loaded the
//! first time a worker finds none idle and is returned after every encode.

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::sync::Mutex;

use super::text::TextModel;
use super::TextEncoder;
use crate::config;

pub struct Models {
	idle: Mutex<Vec<TextModel>>,
	text_path: PathBuf,
	tokenizer_path: PathBuf,
}

impl Models {
	pub fn new() -> Result<Self> {
		let text_path = config::get_text_model_path().context(format!(
			"Text model not found. Ensure {} exists",
			config::TEXT_MODEL
		))?;
		let tokenizer_path = config::get_tokenizer_path().context(format!(
			"Tokenizer not found. Ensure {} exists",
			config::TOKENIZER
		))?;

		// Verify files actually exist
		if !text_path.exists() {
			anyhow::bail!("Text model file does not exist: {}", text_path.display());
		}
		if !tokenizer_path.exists() {
			anyhow::bail!("Tokenizer file does not exist: {}", tokenizer_path.display());
		}

		Ok(Self {
			idle: Mutex::new(Vec::new()),
			text_path,
			tokenizer_path,
		})
	}
}

impl Models {
	fn checkout(&self) -> Result<TextModel> {
		let idle = self
			.idle
			.lock()
			.map_err(|_| anyhow!("Text model lock poisoned"))?
			.pop();

		match idle {
			Some(model) => Ok(model),
			None => {
				crate::ui::debug(&format!("Loading text model: {}", self.text_path.display()));
				let model = TextModel::load(&self.text_path, &self.tokenizer_path)?;
				crate::ui::success("Text model loaded");
				Ok(model)
			}
		}
	}

	fn checkin(&self, model: TextModel) {
		if let Ok(mut idle) = self.idle.lock() {
			idle.push(model);
		}
	}
}

impl TextEncoder for Models {
	fn encode(&self, text: &str) -> Result<Vec<f32>> {
		// Checked out for this one encode
		let mut model = self.checkout()?;
		let result = model.encode(text);
		self.checkin(model);
		result
	}
}
