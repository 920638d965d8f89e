//! Identify-then-recommend pipelines over an already encoded query

use anyhow::Result;
use serde::Serialize;

use super::diversity;
use super::identify::{self, Identification};
use super::recommend::{self, Weights};
use crate::config::MAX_RECOMMENDATIONS;
use crate::core::{Embedding, TagSet};
use crate::storage::Catalog;
use crate::ui;

/// How the query text was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	/// Typed description or remembered lyric
	Text,
	/// Transcribed hum or sung lyrics
	Transcript,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifiedSong {
	#[serde(rename = "songId")]
	pub id: Option<String>,
	#[serde(rename = "songTitle")]
	pub title: String,
	pub artist: String,
	#[serde(rename = "albumCoverUrl")]
	pub album_art_url: Option<String>,
	#[serde(rename = "tagName")]
	pub tags: TagSet,
	#[serde(rename = "songDescription")]
	pub summary: String,
	#[serde(rename = "userQuery")]
	pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
	#[serde(rename = "songId")]
	pub id: Option<String>,
	#[serde(rename = "songTitle")]
	pub title: String,
	pub artist: String,
	#[serde(rename = "albumCoverUrl")]
	pub album_art_url: Option<String>,
	#[serde(rename = "tagName")]
	pub tags: TagSet,
	#[serde(rename = "songDescription")]
	pub summary: String,
	#[serde(rename = "matchLine")]
	pub snippet: String,
	#[serde(rename = "recommendationReason")]
	pub reason: String,
	#[serde(skip)]
	pub score: f32,
}

/// Identified song, the excerpt that matched, and up to three recommendations
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Outcome {
	pub song: Option<IdentifiedSong>,
	#[serde(rename = "lyrics")]
	pub excerpt: String,
	pub recommendations: Vec<Recommendation>,
}

impl Outcome {
	/// No song identified
	pub fn none() -> Self {
		Self::default()
	}

	pub fn is_identified(&self) -> bool {
		self.song.is_some()
	}
}

pub fn text_pipeline(catalog: &Catalog, query: &Embedding, query_text: &str) -> Result<Outcome> {
	run(catalog, query, query_text, Strategy::Text)
}

pub fn transcript_pipeline(catalog: &Catalog, query: &Embedding, transcript: &str) -> Result<Outcome> {
	run(catalog, query, transcript, Strategy::Transcript)
}

pub fn run(catalog: &Catalog, query: &Embedding, query_text: &str, strategy: Strategy) -> Result<Outcome> {
	if query_text.trim().is_empty() {
		ui::debug("Empty query, nothing to identify");
		return Ok(Outcome::none());
	}

	let identified = match strategy {
		Strategy::Text => identify::from_text(catalog, query)?,
		Strategy::Transcript => identify::from_transcript(catalog, query)?,
	};
	let Some(identified) = identified else {
		return Ok(Outcome::none());
	};

	let weights = match strategy {
		Strategy::Text => Weights::text(),
		Strategy::Transcript => Weights::transcript(query_text.split_whitespace().count()),
	};

	let candidates = recommend::score(catalog, &identified, &weights)?;

	let anchor = match strategy {
		Strategy::Transcript => identified.matched_line().map(|line| catalog.line_index().vector(line)),
		Strategy::Text => None,
	};
	let picks = diversity::select(catalog, identified.song, candidates, anchor.as_ref(), MAX_RECOMMENDATIONS);

	let recommendations = picks
		.into_iter()
		.map(|pick| {
			let song = catalog.song(pick.song);
			Recommendation {
				id: song.id.clone(),
				title: song.title.clone(),
				artist: song.artist.clone(),
				album_art_url: song.album_art_url.clone(),
				tags: song.tag_set(),
				summary: song.summary_text().to_string(),
				snippet: pick.snippet,
				reason: pick.reason,
				score: pick.score,
			}
		})
		.collect();

	Ok(Outcome {
		song: Some(identified_song(catalog, &identified, query_text)),
		excerpt: identified.excerpt,
		recommendations,
	})
}

fn identified_song(catalog: &Catalog, identified: &Identification, query_text: &str) -> IdentifiedSong {
	let song = catalog.song(identified.song);
	IdentifiedSong {
		id: song.id.clone(),
		title: song.title.clone(),
		artist: song.artist.clone(),
		album_art_url: song.album_art_url.clone(),
		tags: song.tag_set(),
		summary: song.summary_text().to_string(),
		query: query_text.to_string(),
	}
}
