// Engine entry points with injected catalogs and encoders

mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use common::{catalog, e, line, mix, song};
use tunefind::models::{Encoder, TextEncoder};
use tunefind::{Engine, Outcome};

/// Looks queries up in a fixed table; unknown text fails
struct Table(HashMap<&'static str, Vec<f32>>);

impl TextEncoder for Table {
	fn encode(&self, text: &str) -> Result<Vec<f32>> {
		self.0
			.get(text)
			.cloned()
			.ok_or_else(|| anyhow!("no vector for {:?}", text))
	}
}

struct Stalls;

impl TextEncoder for Stalls {
	fn encode(&self, _text: &str) -> Result<Vec<f32>> {
		std::thread::sleep(Duration::from_millis(500));
		Ok(e(0))
	}
}

fn encoder(model: impl TextEncoder + 'static) -> Encoder {
	Encoder::new(Arc::new(model), 2, Duration::from_secs(5)).unwrap()
}

fn engine() -> Engine {
	let catalog = catalog(
		vec![
			song("Night Train", "b", e(0), e(0)),
			song("Wind Song", "c", mix(0, 0.6, 1, 0.8), e(6)),
			song("Star Town", "d", e(2), e(7)),
		],
		vec![
			line("yoru no machi", 0, e(0)),
			line("hoshi no machi", 2, mix(0, 0.9, 1, 0.436)),
			line("kaze ga fuku", 1, e(2)),
		],
	);

	// Raw, unnormalized vectors, as a real model would return
	let table = Table(HashMap::from([
		("a night train through the city", vec![4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
		("la la la la", vec![0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0]),
	]));

	Engine::new(Some(Arc::new(catalog)), encoder(table))
}

#[test]
fn text_entry_point_identifies_and_recommends() {
	let outcome = engine()
		.identify_and_recommend_from_text("a night train through the city")
		.unwrap();

	let song = outcome.song.as_ref().expect("identified");
	assert_eq!(song.title, "Night Train");
	assert_eq!(song.summary, "Night Train");
	assert!(!outcome.recommendations.is_empty());
	assert!(outcome.recommendations.iter().all(|r| r.title != "Night Train"));
}

#[test]
fn audio_entry_point_always_identifies() {
	let outcome = engine().identify_and_recommend_from_audio_text("la la la la").unwrap();
	assert!(outcome.is_identified());
	assert_eq!(outcome.recommendations.len(), 2);
}

#[test]
fn encode_failure_yields_no_result() {
	let outcome = engine().identify_and_recommend_from_text("unknown words").unwrap();
	assert_eq!(outcome, Outcome::none());
}

#[test]
fn encode_timeout_yields_no_result() {
	let catalog = catalog(vec![song("Only", "x", e(0), e(0))], vec![line("only line", 0, e(0))]);
	let encoder = Encoder::new(Arc::new(Stalls), 1, Duration::from_millis(20)).unwrap();
	let engine = Engine::new(Some(Arc::new(catalog)), encoder);

	let outcome = engine.identify_and_recommend_from_audio_text("hmm hmm").unwrap();
	assert_eq!(outcome, Outcome::none());
}

#[test]
fn query_of_wrong_width_is_an_error() {
	let table = Table(HashMap::from([("too short", vec![1.0, 0.0, 0.0, 0.0])]));
	let catalog = catalog(vec![song("Only", "x", e(0), e(0))], vec![line("only line", 0, e(0))]);
	let engine = Engine::new(Some(Arc::new(catalog)), encoder(table));

	let err = engine.identify_and_recommend_from_text("too short").unwrap_err();
	assert!(err.to_string().contains("dimension"), "unexpected error: {:#}", err);
	assert!(engine.identify_and_recommend_from_audio_text("too short").is_err());
}

#[test]
fn missing_catalog_degrades_every_request() {
	let engine = Engine::new(None, encoder(Table(HashMap::new())));
	assert!(engine.is_degraded());

	assert_eq!(engine.identify_and_recommend_from_text("anything").unwrap(), Outcome::none());
	assert_eq!(engine.identify_and_recommend_from_audio_text("la la").unwrap(), Outcome::none());
}

#[test]
fn unreadable_snapshot_degrades_engine() {
	let engine = Engine::open(
		Some(std::path::Path::new("/nonexistent/tunefind-data")),
		encoder(Table(HashMap::new())),
	);
	assert!(engine.is_degraded());
}

#[test]
fn blank_query_is_not_encoded() {
	// Blank text never reaches the encoder
	let outcome = engine().identify_and_recommend_from_text("  ").unwrap();
	assert_eq!(outcome, Outcome::none());
}

#[test]
fn engine_is_shared_across_threads() {
	let engine = Arc::new(engine());
	let handles: Vec<_> = (0..4)
		.map(|_| {
			let engine = Arc::clone(&engine);
			std::thread::spawn(move || {
				engine
					.identify_and_recommend_from_text("a night train through the city")
					.unwrap()
			})
		})
		.collect();

	let outcomes: Vec<Outcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
	assert!(outcomes.windows(2).all(|w| w[0] == w[1]));
}
