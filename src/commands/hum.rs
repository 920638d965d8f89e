//! Hum command - identify from a transcribed hum or sung lyrics

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::ui::{self, report, Log};

pub fn run(transcript: Option<&str>, file: Option<&Path>, json: bool) -> Result<()> {
	Log::set_quiet(json);

	let text = match (transcript, file) {
		(Some(text), _) => text.to_string(),
		(None, Some(path)) => fs::read_to_string(path)
			.with_context(|| format!("Failed to read transcript: {}", path.display()))?,
		(None, None) => bail!("Provide a transcript or --file"),
	};

	if text.trim().is_empty() {
		bail!("Transcript is empty");
	}

	let engine = super::open_engine()?;
	ui::info(&format!("Listening for: \"{}\"", text.trim()));

	let start = Instant::now();
	let outcome = engine.identify_and_recommend_from_audio_text(text.trim())?;

	if json {
		return report::print_json(&outcome);
	}

	report::print_outcome(&outcome);
	if outcome.is_identified() {
		ui::success(&format!("Done in {}ms", start.elapsed().as_millis()));
	}

	Ok(())
}
