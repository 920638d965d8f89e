//! Candidate scoring from the identified song's neighbors
//!
//! Every signal adds `score * weight` to the candidate song it points at and
//! records why. Reasons may repeat here; they are deduplicated only when a
//! recommendation is rendered.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;

use super::identify::Identification;
use super::index::Hit;
use crate::config::{
	LONG_TRANSCRIPT_WEIGHTS, LONG_TRANSCRIPT_WORDS, LYRIC_NEIGHBORS, LYRIC_RANK_STEP,
	SHORT_TRANSCRIPT_WEIGHTS, SONG_NEIGHBORS, SONG_RANK_STEP, SUMMARY_NEIGHBORS, SUMMARY_RANK_STEP,
	TEXT_TAG_BONUS, TEXT_WEIGHTS, TRANSCRIPT_TAG_BONUS,
};
use crate::core::tags;
use crate::storage::Catalog;
use crate::ui;

/// Signal weights for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
	pub song: f32,
	pub summary: f32,
	/// Lyric neighbors are only consulted for transcripts
	pub lyric: Option<f32>,
	pub tag_bonus: f32,
	/// Small rank-position bonuses that settle near ties
	pub rank_bonus: bool,
}

impl Weights {
	pub fn text() -> Self {
		let (song, summary) = TEXT_WEIGHTS;
		Self {
			song,
			summary,
			lyric: None,
			tag_bonus: TEXT_TAG_BONUS,
			rank_bonus: false,
		}
	}

	pub fn transcript(word_count: usize) -> Self {
		let (song, summary, lyric) = if word_count > LONG_TRANSCRIPT_WORDS {
			LONG_TRANSCRIPT_WEIGHTS
		} else {
			SHORT_TRANSCRIPT_WEIGHTS
		};
		Self {
			song,
			summary,
			lyric: Some(lyric),
			tag_bonus: TRANSCRIPT_TAG_BONUS,
			rank_bonus: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
	Mood,
	Tone,
	Lyrics,
	SharedTags(Vec<String>),
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Reason::Mood => write!(f, "mood/genre similarity"),
			Reason::Tone => write!(f, "overall emotional tone similarity"),
			Reason::Lyrics => write!(f, "similar lyrical feel"),
			Reason::SharedTags(shared) => write!(f, "shared tags ({})", shared.join(", ")),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
	pub song: usize,
	pub score: f32,
	pub reasons: Vec<Reason>,
}

/// Per-request accumulator, iterated in first-insertion order
#[derive(Debug, Default)]
struct Scoreboard {
	candidates: Vec<Candidate>,
	slots: HashMap<usize, usize>,
}

impl Scoreboard {
	fn entry(&mut self, song: usize) -> &mut Candidate {
		let slot = match self.slots.get(&song) {
			Some(&slot) => slot,
			None => {
				self.candidates.push(Candidate {
					song,
					score: 0.0,
					reasons: Vec::new(),
				});
				let slot = self.candidates.len() - 1;
				self.slots.insert(song, slot);
				slot
			}
		};
		&mut self.candidates[slot]
	}

	fn add(&mut self, song: usize, amount: f32, reason: Reason) {
		let candidate = self.entry(song);
		candidate.score += amount;
		candidate.reasons.push(reason);
	}

	fn bump(&mut self, song: usize, amount: f32) {
		self.entry(song).score += amount;
	}
}

/// Accumulate weighted neighbor signals around the identified song
pub fn score(catalog: &Catalog, identified: &Identification, weights: &Weights) -> Result<Vec<Candidate>> {
	let mut board = Scoreboard::default();

	let song_vector = catalog.song_index().vector(identified.song);
	let song_hits = catalog.song_index().search(song_vector.as_slice(), SONG_NEIGHBORS)?;
	for hit in &song_hits {
		board.add(hit.index, hit.score * weights.song, Reason::Mood);
	}

	let summary_vector = catalog.summary_index().vector(identified.song);
	let summary_hits = catalog.summary_index().search(summary_vector.as_slice(), SUMMARY_NEIGHBORS)?;
	for hit in &summary_hits {
		board.add(hit.index, hit.score * weights.summary, Reason::Tone);
	}

	let mut lyric_hits: Vec<Hit> = Vec::new();
	if let (Some(lyric_weight), Some(line)) = (weights.lyric, identified.matched_line()) {
		let line_vector = catalog.line_index().vector(line);
		lyric_hits = catalog.line_index().search(line_vector.as_slice(), LYRIC_NEIGHBORS)?;
		for hit in &lyric_hits {
			let owner = catalog.line(hit.index).song_index;
			if owner == identified.song {
				continue;
			}
			board.add(owner, hit.score * lyric_weight, Reason::Lyrics);
		}
	}

	let identified_tags = catalog.song(identified.song).tag_set();
	for candidate in board.candidates.iter_mut() {
		let shared = tags::shared(&identified_tags, &catalog.song(candidate.song).tag_set());
		if !shared.is_empty() {
			candidate.score += weights.tag_bonus;
			candidate.reasons.push(Reason::SharedTags(shared));
		}
	}

	if weights.rank_bonus {
		for (rank, hit) in song_hits.iter().enumerate() {
			board.bump(hit.index, rank_bonus(SONG_NEIGHBORS, rank, SONG_RANK_STEP));
		}
		for (rank, hit) in summary_hits.iter().enumerate() {
			board.bump(hit.index, rank_bonus(SUMMARY_NEIGHBORS, rank, SUMMARY_RANK_STEP));
		}
		for (rank, hit) in lyric_hits.iter().enumerate() {
			let owner = catalog.line(hit.index).song_index;
			board.bump(owner, rank_bonus(LYRIC_NEIGHBORS, rank, LYRIC_RANK_STEP));
		}
	}

	ui::debug(&format!(
		"Scored {} candidates (song {:.1}, summary {:.1}, lyric {})",
		board.candidates.len(),
		weights.song,
		weights.summary,
		weights.lyric.map_or("off".to_string(), |w| format!("{:.1}", w))
	));

	Ok(board.candidates)
}

fn rank_bonus(depth: usize, rank: usize, step: f32) -> f32 {
	depth.saturating_sub(rank) as f32 * step
}
