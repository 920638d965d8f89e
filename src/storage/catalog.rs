//! Read-only catalog shared by every request
//!
//! Built once at startup from a snapshot (or from fixture parts in tests),
//! then only ever borrowed. Song position is the join key: song `i` owns row
//! `i` of the song and summary indices, and every line row points back at
//! its song through `LineRecord::song_index`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Result};
use rayon::prelude::*;

use super::snapshot::{self, Embeddings};
use crate::config::EMBEDDING_DIM;
use crate::core::embedding::normalize_in_place;
use crate::core::{LineRecord, SongRecord};
use crate::search::VectorIndex;
use crate::ui;

#[derive(Debug)]
pub struct Catalog {
	songs: Vec<SongRecord>,
	lines: Vec<LineRecord>,
	line_index: VectorIndex,
	song_index: VectorIndex,
	summary_index: VectorIndex,
	lines_by_song: Vec<Vec<usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
	pub songs: usize,
	pub lines: usize,
	pub artists: usize,
	pub dim: usize,
}

impl Catalog {
	pub fn load(dir: &Path) -> Result<Self> {
		ui::debug(&format!("Loading snapshot: {}", dir.display()));
		let snapshot = snapshot::load(dir)?;

		if !snapshot.embeddings.is_current_version() {
			ui::debug(&format!(
				"Embeddings written by version '{}'",
				snapshot.embeddings.version
			));
		}

		Self::from_parts(snapshot.songs, snapshot.lines, snapshot.embeddings)
	}

	/// Validate, normalize and index raw parts
	pub fn from_parts(songs: Vec<SongRecord>, lines: Vec<LineRecord>, embeddings: Embeddings) -> Result<Self> {
		let Embeddings {
			line: mut line_vectors,
			song: mut song_vectors,
			summary: mut summary_vectors,
			..
		} = embeddings;

		if song_vectors.len() != songs.len() {
			bail!("{} songs but {} song vectors", songs.len(), song_vectors.len());
		}
		if summary_vectors.len() != songs.len() {
			bail!("{} songs but {} summary vectors", songs.len(), summary_vectors.len());
		}
		if line_vectors.len() != lines.len() {
			bail!("{} lines but {} line vectors", lines.len(), line_vectors.len());
		}

		let mut lines_by_song = vec![Vec::new(); songs.len()];
		for (i, line) in lines.iter().enumerate() {
			let Some(owned) = lines_by_song.get_mut(line.song_index) else {
				bail!(
					"Line {} points at song {}, but only {} songs exist",
					i,
					line.song_index,
					songs.len()
				);
			};
			owned.push(i);
		}

		let dim = song_vectors
			.first()
			.or(line_vectors.first())
			.map(Vec::len)
			.unwrap_or(EMBEDDING_DIM);

		for rows in [&mut line_vectors, &mut song_vectors, &mut summary_vectors] {
			rows.par_iter_mut().for_each(|row| normalize_in_place(row));
		}

		let line_index = VectorIndex::build(dim, line_vectors)?;
		let song_index = VectorIndex::build(dim, song_vectors)?;
		let summary_index = VectorIndex::build(dim, summary_vectors)?;

		Ok(Self {
			songs,
			lines,
			line_index,
			song_index,
			summary_index,
			lines_by_song,
		})
	}

	pub fn songs(&self) -> &[SongRecord] {
		&self.songs
	}

	pub fn song(&self, index: usize) -> &SongRecord {
		&self.songs[index]
	}

	pub fn line(&self, index: usize) -> &LineRecord {
		&self.lines[index]
	}

	pub fn line_index(&self) -> &VectorIndex {
		&self.line_index
	}

	pub fn song_index(&self) -> &VectorIndex {
		&self.song_index
	}

	pub fn summary_index(&self) -> &VectorIndex {
		&self.summary_index
	}

	/// Line rows owned by a song, in snapshot order
	pub fn lines_of(&self, song: usize) -> &[usize] {
		self.lines_by_song.get(song).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn dim(&self) -> usize {
		self.song_index.dim()
	}

	pub fn stats(&self) -> CatalogStats {
		let artists: HashSet<&str> = self.songs.iter().map(|s| s.artist.as_str()).collect();
		CatalogStats {
			songs: self.songs.len(),
			lines: self.lines.len(),
			artists: artists.len(),
			dim: self.dim(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn song(title: &str, artist: &str) -> SongRecord {
		SongRecord {
			id: Some(title.to_lowercase()),
			title: title.to_string(),
			artist: artist.to_string(),
			album_art_url: None,
			summary: None,
			tags: None,
		}
	}

	fn line(text: &str, song_index: usize) -> LineRecord {
		LineRecord {
			text: text.to_string(),
			song_index,
		}
	}

	#[test]
	fn rows_are_normalized_and_lines_grouped() {
		let catalog = Catalog::from_parts(
			vec![song("A", "x"), song("B", "y")],
			vec![line("a1", 0), line("b1", 1), line("a2", 0)],
			Embeddings::new(
				vec![vec![2.0, 0.0], vec![0.0, 3.0], vec![1.0, 1.0]],
				vec![vec![5.0, 0.0], vec![0.0, 0.5]],
				vec![vec![3.0, 4.0], vec![1.0, 0.0]],
			),
		)
		.unwrap();

		assert_eq!(catalog.lines_of(0), &[0, 2]);
		assert_eq!(catalog.lines_of(1), &[1]);
		assert!(catalog.lines_of(7).is_empty());

		for index in [catalog.line_index(), catalog.song_index(), catalog.summary_index()] {
			for i in 0..index.len() {
				assert!((index.vector(i).norm() - 1.0).abs() < 1e-5);
			}
		}

		let stats = catalog.stats();
		assert_eq!((stats.songs, stats.lines, stats.artists, stats.dim), (2, 3, 2, 2));
	}

	#[test]
	fn mismatched_lengths_are_rejected() {
		let result = Catalog::from_parts(
			vec![song("A", "x")],
			vec![],
			Embeddings::new(vec![], vec![vec![1.0]], vec![]),
		);
		assert!(result.is_err());
	}

	#[test]
	fn dangling_line_owner_is_rejected() {
		let result = Catalog::from_parts(
			vec![song("A", "x")],
			vec![line("ghost", 3)],
			Embeddings::new(vec![vec![1.0]], vec![vec![1.0]], vec![vec![1.0]]),
		);
		assert!(result.is_err());
	}

	#[test]
	fn mixed_dimensions_are_rejected() {
		let result = Catalog::from_parts(
			vec![song("A", "x")],
			vec![line("a", 0)],
			Embeddings::new(vec![vec![1.0, 0.0, 0.0]], vec![vec![1.0, 0.0]], vec![vec![1.0, 0.0]]),
		);
		assert!(result.is_err());
	}
}
