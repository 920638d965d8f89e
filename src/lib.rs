//! # Tunefind Library
//!
//! Identify a song from a short description or transcribed hum, then
//! recommend up to three related songs from other artists. Retrieval runs
//! over three parallel embedding indices (lyric lines, songs, summaries).

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod models;
pub mod runtime;
pub mod search;
pub mod storage;
pub mod ui;

pub use engine::Engine;
pub use search::Outcome;
pub use storage::Catalog;
