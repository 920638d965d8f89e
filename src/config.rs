//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Model Files ===
pub const TEXT_MODEL: &str = "text_model.onnx";
pub const TOKENIZER: &str = "tokenizer.json";

// === Model Parameters ===
/// paraphrase-multilingual-MiniLM-L12-v2 output width
pub const EMBEDDING_DIM: usize = 384;

// === Snapshot Files ===
pub const SONGS_FILE: &str = "songs.json";
pub const LINES_FILE: &str = "lines.json";
pub const EMBEDDINGS_FILE: &str = "embeddings.msgpack";

// === Identification ===
/// Best summary or line score must exceed this for a text query to identify a song
pub const IDENTIFY_THRESHOLD: f32 = 0.4;
pub const MISSING_SUMMARY: &str = "N/A";

// === Recommendation ===
pub const SONG_NEIGHBORS: usize = 10;
pub const SUMMARY_NEIGHBORS: usize = 10;
pub const LYRIC_NEIGHBORS: usize = 50;
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Transcripts longer than this many words lean on lyric similarity
pub const LONG_TRANSCRIPT_WORDS: usize = 5;

/// Signal weights as (song, summary, lyric)
pub const TEXT_WEIGHTS: (f32, f32) = (0.5, 0.3);
pub const SHORT_TRANSCRIPT_WEIGHTS: (f32, f32, f32) = (0.6, 0.2, 0.2);
pub const LONG_TRANSCRIPT_WEIGHTS: (f32, f32, f32) = (0.5, 0.1, 0.4);

pub const TEXT_TAG_BONUS: f32 = 0.2;
pub const TRANSCRIPT_TAG_BONUS: f32 = 0.1;

pub const SONG_RANK_STEP: f32 = 0.005;
pub const SUMMARY_RANK_STEP: f32 = 0.003;
pub const LYRIC_RANK_STEP: f32 = 0.001;

// === Encoder Pool ===
pub const ENCODE_WORKERS: usize = 2;
pub const ENCODE_TIMEOUT: Duration = Duration::from_secs(15);

pub fn set_data_dir(path: PathBuf) {
	let _ = CUSTOM_DATA_DIR.set(path);
}

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

/// Snapshot directory (--data, TUNEFIND_DATA_DIR, or `data/` next to the executable)
pub fn data_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_DATA_DIR.get() {
		crate::ui::debug(&format!("Using custom data dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var("TUNEFIND_DATA_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using TUNEFIND_DATA_DIR: {}", env_path));
			return Some(path);
		}
	}

	beside_executable("data")
}

/// Models directory (--models, TUNEFIND_MODELS_DIR, or `models/` next to the executable)
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var("TUNEFIND_MODELS_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using TUNEFIND_MODELS_DIR: {}", env_path));
			return Some(path);
		}
	}

	beside_executable("models")
}

fn beside_executable(name: &str) -> Option<PathBuf> {
	let exe = std::env::current_exe().ok()?;
	let dir = exe.parent()?.join(name);
	if dir.is_dir() {
		crate::ui::debug(&format!("Found {} at: {}", name, dir.display()));
		Some(dir)
	} else {
		None
	}
}

pub fn get_text_model_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(TEXT_MODEL))
}

pub fn get_tokenizer_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(TOKENIZER))
}
