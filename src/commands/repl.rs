//! REPL mode - interactive identification session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

use crate::engine::Engine;
use crate::ui::{self, report};

pub fn run() -> Result<()> {
	ui::print_logo();
	println!();
	ui::info("Starting interactive session");
	ui::info("Describe a song, or start with 'hum' for transcribed lyrics. 'exit' quits");
	println!();

	// Load catalog and encoder once
	let engine = super::open_engine()?;
	if engine.is_degraded() {
		ui::warn("Running without a catalog, nothing can be identified");
	}
	println!();

	loop {
		print!("{} ", "tunefind>".bright_magenta().bold());
		io::stdout().flush()?;

		let mut input = String::new();
		if io::stdin().read_line(&mut input)? == 0 {
			break;
		}

		let line = input.trim();

		if line.is_empty() {
			continue;
		}

		if line == "exit" || line == "quit" || line == "q" {
			ui::info("Goodbye!");
			break;
		}

		if line == "help" {
			show_help();
			continue;
		}

		if let Err(e) = respond(&engine, line) {
			ui::error(&format!("Search failed: {:#}", e));
		}
	}

	Ok(())
}

fn respond(engine: &Engine, line: &str) -> Result<()> {
	let start = Instant::now();

	let outcome = match line.strip_prefix("hum ") {
		Some(transcript) => engine.identify_and_recommend_from_audio_text(transcript.trim())?,
		None => engine.identify_and_recommend_from_text(line)?,
	};

	report::print_outcome(&outcome);
	if outcome.is_identified() {
		println!(
			"{} {}",
			"✓".bright_magenta().bold(),
			format!("{}ms", start.elapsed().as_millis()).dimmed()
		);
	}
	println!();

	Ok(())
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_magenta().bold());
	println!("  {}        Identify from a description", "<text>".dimmed());
	println!("  {}    Identify from transcribed lyrics", "hum <text>".dimmed());
	println!("  {}          Show this help message", "help".dimmed());
	println!("  {}          Exit REPL mode", "exit".dimmed());
}
