//! Bounded worker pool around the text encoder
//!
//! Encoding is the only slow, blocking step of a request. It runs on a small
//! dedicated pool so callers can give up after a timeout instead of stalling.
//! A job whose caller gave up is skipped if no worker has started it yet, so
//! abandoned requests never queue ahead of live ones.

use anyhow::{bail, Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use super::TextEncoder;
use crate::core::Embedding;
use crate::ui;

pub struct Encoder {
	pool: ThreadPool,
	model: Arc<dyn TextEncoder>,
	timeout: Duration,
}

impl Encoder {
	pub fn new(model: Arc<dyn TextEncoder>, workers: usize, timeout: Duration) -> Result<Self> {
		let pool = ThreadPoolBuilder::new()
			.num_threads(workers.max(1))
			.thread_name(|i| format!("tunefind-encode-{}", i))
			.panic_handler(|_| ui::error("Encoder worker panicked"))
			.build()
			.context("Failed to start encoder pool")?;

		Ok(Self { pool, model, timeout })
	}

	/// Encode and normalize one query, or fail after the timeout
	pub fn encode(&self, text: &str) -> Result<Embedding> {
		let (tx, rx) = mpsc::channel();
		let model = Arc::clone(&self.model);
		let text = text.to_string();
		let abandoned = Arc::new(AtomicBool::new(false));
		let flag = Arc::clone(&abandoned);

		self.pool.spawn(move || {
			if flag.load(Ordering::Acquire) {
				ui::debug("Skipping abandoned encode");
				return;
			}
			// Receiver may already have timed out
			let _ = tx.send(model.encode(&text));
		});

		match rx.recv_timeout(self.timeout) {
			Ok(raw) => Ok(Embedding::new(raw?)),
			Err(RecvTimeoutError::Timeout) => {
				abandoned.store(true, Ordering::Release);
				bail!("Encoding timed out after {:.1}s", self.timeout.as_secs_f32())
			}
			Err(RecvTimeoutError::Disconnected) => bail!("Encoder worker exited without a result"),
		}
	}
}
