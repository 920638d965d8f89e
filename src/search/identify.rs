//! Resolve a query vector to a single catalog song

use anyhow::Result;

use crate::config::IDENTIFY_THRESHOLD;
use crate::core::Embedding;
use crate::storage::Catalog;
use crate::ui;

/// Which probe won identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPath {
	Summary,
	Line(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
	pub song: usize,
	pub path: MatchPath,
	pub score: f32,
	/// Summary text on the summary path, the literal line otherwise
	pub excerpt: String,
}

impl Identification {
	pub fn matched_line(&self) -> Option<usize> {
		match self.path {
			MatchPath::Line(line) => Some(line),
			MatchPath::Summary => None,
		}
	}
}

/// Free-text query: probe the summary and line indices once each and keep
/// the stronger hit, provided either clears the confidence threshold.
pub fn from_text(catalog: &Catalog, query: &Embedding) -> Result<Option<Identification>> {
	let summary_hit = catalog.summary_index().search(query.as_slice(), 1)?.into_iter().next();
	let line_hit = catalog.line_index().search(query.as_slice(), 1)?.into_iter().next();

	let summary_score = summary_hit.map_or(0.0, |h| h.score);
	let line_score = line_hit.map_or(0.0, |h| h.score);

	ui::debug(&format!(
		"Top summary score {:.3}, top line score {:.3}",
		summary_score, line_score
	));

	if summary_score.max(line_score) <= IDENTIFY_THRESHOLD {
		ui::debug("Below confidence threshold, no song identified");
		return Ok(None);
	}

	let identification = if summary_score > line_score {
		summary_hit.map(|hit| summary_identification(catalog, hit.index, hit.score))
	} else {
		line_hit.map(|hit| line_identification(catalog, hit.index, hit.score))
	};

	Ok(identification)
}

/// Transcribed hum or lyrics: the nearest line wins unconditionally.
pub fn from_transcript(catalog: &Catalog, query: &Embedding) -> Result<Option<Identification>> {
	let Some(hit) = catalog.line_index().search(query.as_slice(), 1)?.into_iter().next() else {
		ui::debug("Line index is empty, no song identified");
		return Ok(None);
	};

	ui::debug(&format!("Top line score {:.3}", hit.score));
	Ok(Some(line_identification(catalog, hit.index, hit.score)))
}

fn summary_identification(catalog: &Catalog, song: usize, score: f32) -> Identification {
	Identification {
		song,
		path: MatchPath::Summary,
		score,
		excerpt: catalog.song(song).summary_text().to_string(),
	}
}

fn line_identification(catalog: &Catalog, line: usize, score: f32) -> Identification {
	let record = catalog.line(line);
	Identification {
		song: record.song_index,
		path: MatchPath::Line(line),
		score,
		excerpt: record.text.clone(),
	}
}
