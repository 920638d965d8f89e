//! Final pick: best candidates, one per artist, never the identified song

use std::collections::{BTreeSet, HashSet};

use ndarray::ArrayView1;

use super::recommend::Candidate;
use crate::core::Embedding;
use crate::storage::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
	pub song: usize,
	pub score: f32,
	/// Deduplicated reasons joined for display
	pub reason: String,
	/// Best-matching line of the picked song, empty when no anchor is given
	pub snippet: String,
}

/// Walk candidates by descending score and keep at most `limit`, skipping the
/// identified song and any artist already represented. `anchor` is the matched
/// line's vector; when present each pick carries its closest line as snippet.
pub fn select(
	catalog: &Catalog,
	identified: usize,
	mut candidates: Vec<Candidate>,
	anchor: Option<&Embedding>,
	limit: usize,
) -> Vec<Pick> {
	// Stable: equal scores keep first-insertion order
	candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

	let mut seen_songs: HashSet<usize> = HashSet::from([identified]);
	let mut seen_artists: HashSet<&str> = HashSet::from([catalog.song(identified).artist.as_str()]);
	let mut picks = Vec::new();

	for candidate in candidates {
		if picks.len() >= limit {
			break;
		}

		let artist = catalog.song(candidate.song).artist.as_str();
		if seen_songs.contains(&candidate.song) || seen_artists.contains(artist) {
			continue;
		}

		let reasons: BTreeSet<String> = candidate.reasons.iter().map(ToString::to_string).collect();
		let snippet = anchor
			.and_then(|anchor| closest_line(catalog, candidate.song, anchor))
			.unwrap_or_default();

		picks.push(Pick {
			song: candidate.song,
			score: candidate.score,
			reason: reasons.into_iter().collect::<Vec<_>>().join(", "),
			snippet,
		});

		seen_songs.insert(candidate.song);
		seen_artists.insert(artist);
	}

	picks
}

/// Text of the song's line most similar to `anchor`; first line wins ties
fn closest_line(catalog: &Catalog, song: usize, anchor: &Embedding) -> Option<String> {
	let mut best: Option<(usize, f32)> = None;

	for &line in catalog.lines_of(song) {
		let score = catalog.line_index().row(line).dot(&ArrayView1::from(anchor.as_slice()));
		if best.map_or(true, |(_, top)| score > top) {
			best = Some((line, score));
		}
	}

	best.map(|(line, _)| catalog.line(line).text.clone())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::{LineRecord, SongRecord};
	use crate::search::recommend::Reason;
	use crate::storage::Embeddings;

	fn catalog(artists: &[&str]) -> Catalog {
		let songs = artists
			.iter()
			.enumerate()
			.map(|(i, artist)| SongRecord {
				id: Some(format!("song-{}", i)),
				title: format!("Song {}", i),
				artist: artist.to_string(),
				album_art_url: None,
				summary: None,
				tags: None,
			})
			.collect::<Vec<_>>();
		let n = songs.len();
		let lines = vec![
			LineRecord { text: "first line of song 1".into(), song_index: 1 },
			LineRecord { text: "second line of song 1".into(), song_index: 1 },
		];
		let unit = |i: usize| {
			let mut v = vec![0.0; n];
			v[i] = 1.0;
			v
		};
		let mut second = unit(0);
		second[1] = 1.0;
		Catalog::from_parts(
			songs,
			lines,
			Embeddings::new(vec![unit(1), second], (0..n).map(unit).collect(), (0..n).map(unit).collect()),
		)
		.unwrap()
	}

	fn candidate(song: usize, score: f32, reasons: Vec<Reason>) -> Candidate {
		Candidate { song, score, reasons }
	}

	#[test]
	fn skips_identified_song_and_repeated_artists() {
		let catalog = catalog(&["x", "y", "y", "x", "z"]);
		let picks = select(
			&catalog,
			0,
			vec![
				candidate(0, 9.0, vec![Reason::Mood]),
				candidate(1, 0.9, vec![Reason::Mood]),
				candidate(2, 0.8, vec![Reason::Mood]),
				candidate(3, 0.7, vec![Reason::Mood]),
				candidate(4, 0.6, vec![Reason::Mood]),
			],
			None,
			3,
		);
		let songs: Vec<usize> = picks.iter().map(|p| p.song).collect();
		assert_eq!(songs, vec![1, 4]);
		assert!(picks.iter().all(|p| p.snippet.is_empty()));
	}

	#[test]
	fn caps_results_and_keeps_insertion_order_on_ties() {
		let catalog = catalog(&["a", "b", "c", "d", "e"]);
		let picks = select(
			&catalog,
			0,
			vec![
				candidate(3, 0.5, vec![]),
				candidate(1, 0.5, vec![]),
				candidate(4, 0.7, vec![]),
				candidate(2, 0.5, vec![]),
			],
			None,
			3,
		);
		let songs: Vec<usize> = picks.iter().map(|p| p.song).collect();
		assert_eq!(songs, vec![4, 3, 1]);
		assert!(picks.windows(2).all(|w| w[0].score >= w[1].score));
	}

	#[test]
	fn duplicate_reasons_collapse() {
		let catalog = catalog(&["a", "b"]);
		let picks = select(
			&catalog,
			0,
			vec![candidate(1, 1.0, vec![Reason::Lyrics, Reason::Mood, Reason::Lyrics, Reason::Lyrics])],
			None,
			3,
		);
		let mut parts: Vec<&str> = picks[0].reason.split(", ").collect();
		parts.sort();
		assert_eq!(parts, vec!["mood/genre similarity", "similar lyrical feel"]);
	}

	#[test]
	fn anchor_picks_closest_line_as_snippet() {
		let catalog = catalog(&["a", "b", "c"]);
		let mut anchor = vec![0.0; 3];
		anchor[0] = 1.0;
		let picks = select(
			&catalog,
			0,
			vec![candidate(1, 1.0, vec![]), candidate(2, 0.5, vec![])],
			Some(&Embedding::new(anchor)),
			3,
		);
		assert_eq!(picks[0].snippet, "second line of song 1");
		assert_eq!(picks[1].snippet, "");
	}
}
