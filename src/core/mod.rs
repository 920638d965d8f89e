//! Core domain types

pub mod embedding;
pub mod record;
pub mod tags;

pub use embedding::Embedding;
pub use record::{LineRecord, SongRecord};
pub use tags::TagSet;
