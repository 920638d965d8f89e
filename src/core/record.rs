//! Song and lyric line records loaded from the catalog snapshot

use serde::{Deserialize, Deserializer, Serialize};

use super::tags::{self, TagSet};
use crate::config::MISSING_SUMMARY;

/// One catalog song. Its position in `songs.json` is the join key shared by
/// the song, summary and line indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRecord {
	#[serde(default, alias = "spotify_id")]
	pub id: Option<String>,
	pub title: String,
	pub artist: String,
	#[serde(default, alias = "album_cover_url")]
	pub album_art_url: Option<String>,
	#[serde(default)]
	pub summary: Option<String>,
	/// Serialized list literal, e.g. `['city pop', 'night']`
	#[serde(default, alias = "tags_normalized", deserialize_with = "string_or_none")]
	pub tags: Option<String>,
}

impl SongRecord {
	pub fn summary_text(&self) -> &str {
		self.summary.as_deref().unwrap_or(MISSING_SUMMARY)
	}

	pub fn tag_set(&self) -> TagSet {
		tags::parse(self.tags.as_deref())
	}
}

/// One lyric line, owned by the song at `song_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
	#[serde(alias = "line_text")]
	pub text: String,
	#[serde(alias = "original_song_index")]
	pub song_index: usize,
}

/// Upstream metadata sometimes carries tags as null, numbers or real arrays.
/// Only strings are kept; everything else reads as "no tags".
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	Ok(match value {
		serde_json::Value::String(s) => Some(s),
		_ => None,
	})
}
