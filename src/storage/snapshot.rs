//! Snapshot file format and I/O

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{EMBEDDINGS_FILE, LINES_FILE, SONGS_FILE};
use crate::core::{LineRecord, SongRecord};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw embedding matrices, one row per line / song / song summary
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Embeddings {
	#[serde(default)]
	pub version: String,
	pub line: Vec<Vec<f32>>,
	pub song: Vec<Vec<f32>>,
	pub summary: Vec<Vec<f32>>,
}

impl Embeddings {
	pub fn new(line: Vec<Vec<f32>>, song: Vec<Vec<f32>>, summary: Vec<Vec<f32>>) -> Self {
		Self {
			version: VERSION.to_string(),
			line,
			song,
			summary,
		}
	}

	pub fn is_current_version(&self) -> bool {
		self.version == VERSION
	}
}

/// Everything read from a snapshot directory, before validation
#[derive(Debug)]
pub struct Snapshot {
	pub songs: Vec<SongRecord>,
	pub lines: Vec<LineRecord>,
	pub embeddings: Embeddings,
}

pub fn load(dir: &Path) -> Result<Snapshot> {
	let songs_path = dir.join(SONGS_FILE);
	let songs_bytes =
		fs::read(&songs_path).with_context(|| format!("Failed to read {}", songs_path.display()))?;
	let songs: Vec<SongRecord> = serde_json::from_slice(&songs_bytes)
		.with_context(|| format!("Failed to parse {}", songs_path.display()))?;

	let lines_path = dir.join(LINES_FILE);
	let lines_bytes =
		fs::read(&lines_path).with_context(|| format!("Failed to read {}", lines_path.display()))?;
	let lines: Vec<LineRecord> = serde_json::from_slice(&lines_bytes)
		.with_context(|| format!("Failed to parse {}", lines_path.display()))?;

	let embeddings = load_embeddings(&dir.join(EMBEDDINGS_FILE))?;

	Ok(Snapshot {
		songs,
		lines,
		embeddings,
	})
}

pub fn load_embeddings(path: &Path) -> Result<Embeddings> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	decode_embeddings(&bytes)
}

pub fn encode_embeddings(embeddings: &Embeddings) -> Result<Vec<u8>> {
	rmp_serde::to_vec_named(embeddings).context("Failed to serialize embeddings")
}

pub fn decode_embeddings(bytes: &[u8]) -> Result<Embeddings> {
	rmp_serde::from_slice(bytes).context("Failed to deserialize embeddings")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embeddings_survive_msgpack() {
		let original = Embeddings::new(vec![vec![0.5, 0.5]], vec![vec![1.0, 0.0]], vec![vec![0.0, 1.0]]);
		let bytes = encode_embeddings(&original).unwrap();
		let decoded = decode_embeddings(&bytes).unwrap();

		assert!(decoded.is_current_version());
		assert_eq!(decoded.line, original.line);
		assert_eq!(decoded.summary, original.summary);
	}

	#[test]
	fn garbage_bytes_fail_to_decode() {
		assert!(decode_embeddings(&[0xc1, 0x00, 0x13]).is_err());
	}

	#[test]
	fn missing_directory_is_an_error() {
		let err = load(Path::new("/nonexistent/tunefind-snapshot")).unwrap_err();
		assert!(err.to_string().contains(SONGS_FILE));
	}
}
