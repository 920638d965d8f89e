//! Info command - catalog statistics

use anyhow::{bail, Result};
use colored::*;

use crate::config;
use crate::storage::Catalog;
use crate::ui;

pub fn run() -> Result<()> {
	let Some(dir) = config::data_dir() else {
		bail!("No catalog snapshot found. Pass --data or set TUNEFIND_DATA_DIR");
	};

	let catalog = Catalog::load(&dir)?;
	let stats = catalog.stats();

	ui::header("Catalog");
	println!("  {:<10} {}", "Location".dimmed(), dir.display());
	println!("  {:<10} {}", "Songs".dimmed(), stats.songs.to_string().bright_white());
	println!("  {:<10} {}", "Artists".dimmed(), stats.artists.to_string().bright_white());
	println!("  {:<10} {}", "Lines".dimmed(), stats.lines.to_string().bright_white());
	println!("  {:<10} {}", "Dimension".dimmed(), stats.dim.to_string().bright_white());

	if stats.dim != config::EMBEDDING_DIM {
		ui::warn(&format!(
			"Snapshot dimension {} differs from the text model's {}",
			stats.dim,
			config::EMBEDDING_DIM
		));
	}

	println!();
	Ok(())
}
