//! Terminal rendering of identification results

use anyhow::{Context, Result};
use colored::*;

use crate::core::TagSet;
use crate::search::Outcome;

pub fn print_json(outcome: &Outcome) -> Result<()> {
	let json = serde_json::to_string_pretty(outcome).context("Failed to serialize result")?;
	println!("{}", json);
	Ok(())
}

pub fn print_outcome(outcome: &Outcome) {
	let Some(song) = &outcome.song else {
		super::warn("No song identified");
		return;
	};

	super::header("Identified");
	println!(
		"  {} {} {}",
		song.title.bright_white().bold(),
		"by".dimmed(),
		song.artist.bright_magenta()
	);
	if !outcome.excerpt.is_empty() {
		println!("  {} {}", "♪".bright_blue(), outcome.excerpt.italic());
	}
	if !song.tags.is_empty() {
		println!("  {}", format_tags(&song.tags).dimmed());
	}

	if outcome.recommendations.is_empty() {
		println!();
		super::warn("No recommendations");
		return;
	}

	super::header("You might also like");
	for (i, rec) in outcome.recommendations.iter().enumerate() {
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			rec.title.bright_white(),
			"by".dimmed(),
			rec.artist.bright_magenta()
		);
		println!("    {}", rec.reason.dimmed());
		if !rec.snippet.is_empty() {
			println!("    {} {}", "♪".bright_blue(), rec.snippet.italic());
		}
	}
	println!();
}

fn format_tags(tags: &TagSet) -> String {
	tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ")
}
