//! Search command - identify from a free-text description

use anyhow::Result;
use std::time::Instant;

use crate::ui::{self, report, Log};

pub fn run(query: &str, json: bool) -> Result<()> {
	Log::set_quiet(json);

	let engine = super::open_engine()?;
	ui::info(&format!("Searching for: \"{}\"", query));

	let start = Instant::now();
	let outcome = engine.identify_and_recommend_from_text(query)?;

	if json {
		return report::print_json(&outcome);
	}

	report::print_outcome(&outcome);
	if outcome.is_identified() {
		ui::success(&format!("Done in {}ms", start.elapsed().as_millis()));
	} else {
		ui::info("Try describing the mood, or quote a line you remember");
	}

	Ok(())
}
