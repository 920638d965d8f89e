//! Unified logging system

use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
  __                    ____ _           __
 / /___ _____  ___     / __/(_)___  ____/ /
/ __/ // / _ \/ -_)   / _/ / / _ \/ __  /
\__/\_,_/_//_/\__/   /_/  /_/_//_/\_,_/   "#;

const SLOGANS: &[&str] = &[
	"Hum it, we'll find it",
	"That song that goes la-la-la",
	"Earworm removal service",
	"Shazam for people who can't sing",
	"Cosine similarity, but make it pop",
	"Now playing: something you half remember",
	"Three recommendations, zero repeats per artist",
	"No, it's not Never Gonna Give You Up... probably",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_magenta().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}

	/// Silence info/success/debug (machine-readable output mode)
	pub fn set_quiet(enabled: bool) {
		QUIET.store(enabled, Ordering::Relaxed);
	}

	pub fn is_quiet() -> bool {
		QUIET.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	if !Log::is_quiet() {
		println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
	}
}

pub fn success(msg: &str) {
	if !Log::is_quiet() {
		println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
	}
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	if !Log::is_quiet() {
		println!("\n{}", text.bright_magenta().bold());
	}
}
