//! # Identification and Recommendation
//!
//! Nearest-neighbor probes over the line, song and summary indices, weighted
//! candidate scoring, and the one-per-artist final pick.

pub mod diversity;
pub mod identify;
pub mod index;
pub mod pipeline;
pub mod recommend;

pub use identify::{Identification, MatchPath};
pub use index::{Hit, VectorIndex};
pub use pipeline::{text_pipeline, transcript_pipeline, IdentifiedSong, Outcome, Recommendation, Strategy};
pub use recommend::{Candidate, Reason, Weights};
