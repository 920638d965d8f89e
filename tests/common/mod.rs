// Fixture catalogs built from hand-placed unit vectors

#![allow(dead_code)]

use tunefind::core::{LineRecord, SongRecord};
use tunefind::storage::{Catalog, Embeddings};

pub const DIM: usize = 8;

/// Basis vector e_i
pub fn e(i: usize) -> Vec<f32> {
	let mut v = vec![0.0; DIM];
	v[i] = 1.0;
	v
}

/// a*e_i + b*e_j
pub fn mix(i: usize, a: f32, j: usize, b: f32) -> Vec<f32> {
	let mut v = vec![0.0; DIM];
	v[i] += a;
	v[j] += b;
	v
}

pub struct Song {
	pub title: &'static str,
	pub artist: &'static str,
	pub summary: Option<&'static str>,
	pub tags: Option<&'static str>,
	pub song_vector: Vec<f32>,
	pub summary_vector: Vec<f32>,
}

pub fn song(title: &'static str, artist: &'static str, song_vector: Vec<f32>, summary_vector: Vec<f32>) -> Song {
	Song {
		title,
		artist,
		summary: Some(title),
		tags: None,
		song_vector,
		summary_vector,
	}
}

pub struct Line {
	pub text: &'static str,
	pub song: usize,
	pub vector: Vec<f32>,
}

pub fn line(text: &'static str, song: usize, vector: Vec<f32>) -> Line {
	Line { text, song, vector }
}

pub fn catalog(songs: Vec<Song>, lines: Vec<Line>) -> Catalog {
	let mut records = Vec::new();
	let mut song_vectors = Vec::new();
	let mut summary_vectors = Vec::new();

	for s in songs {
		records.push(SongRecord {
			id: Some(s.title.to_lowercase().replace(' ', "-")),
			title: s.title.to_string(),
			artist: s.artist.to_string(),
			album_art_url: Some(format!("https://img.example/{}.jpg", s.title.len())),
			summary: s.summary.map(str::to_string),
			tags: s.tags.map(str::to_string),
		});
		song_vectors.push(s.song_vector);
		summary_vectors.push(s.summary_vector);
	}

	let mut line_records = Vec::new();
	let mut line_vectors = Vec::new();
	for l in lines {
		line_records.push(LineRecord {
			text: l.text.to_string(),
			song_index: l.song,
		});
		line_vectors.push(l.vector);
	}

	Catalog::from_parts(records, line_records, Embeddings::new(line_vectors, song_vectors, summary_vectors))
		.expect("fixture catalog")
}
