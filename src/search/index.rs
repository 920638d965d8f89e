//! Exact inner-product nearest-neighbor index
//!
//! Rows are expected to be unit length already, so the inner product is the
//! cosine similarity. The index never normalizes on its own and is immutable
//! once built.

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use ndarray::{Array2, ArrayView1};

use crate::core::Embedding;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
	pub index: usize,
	pub score: f32,
}

#[derive(Debug, Clone)]
pub struct VectorIndex {
	vectors: Array2<f32>,
}

impl VectorIndex {
	pub fn empty(dim: usize) -> Self {
		Self {
			vectors: Array2::zeros((0, dim)),
		}
	}

	/// Build from rows that all have width `dim`
	pub fn build(dim: usize, rows: Vec<Vec<f32>>) -> Result<Self> {
		let count = rows.len();
		let mut flat = Vec::with_capacity(count * dim);

		for (i, row) in rows.into_iter().enumerate() {
			if row.len() != dim {
				bail!("Row {} has dimension {}, expected {}", i, row.len(), dim);
			}
			flat.extend(row);
		}

		let vectors = Array2::from_shape_vec((count, dim), flat).context("Failed to shape index matrix")?;
		Ok(Self { vectors })
	}

	pub fn len(&self) -> usize {
		self.vectors.nrows()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn dim(&self) -> usize {
		self.vectors.ncols()
	}

	pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
		self.vectors.row(index)
	}

	/// Stored row as an embedding (already unit length)
	pub fn vector(&self, index: usize) -> Embedding {
		Embedding::raw(self.vectors.row(index).to_vec())
	}

	/// Top `k` rows by inner product, best first. Equal scores keep the lower
	/// row first. Returns every row when the index holds fewer than `k`.
	pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Hit>> {
		if query.len() != self.dim() {
			bail!(
				"Query dimension {} does not match index dimension {}",
				query.len(),
				self.dim()
			);
		}

		let scores = self.vectors.dot(&ArrayView1::from(query));
		let mut hits: Vec<Hit> = scores
			.iter()
			.enumerate()
			.map(|(index, &score)| Hit { index, score })
			.collect();

		let k = k.min(hits.len());
		if k == 0 {
			return Ok(Vec::new());
		}
		if k < hits.len() {
			hits.select_nth_unstable_by(k - 1, rank);
			hits.truncate(k);
		}
		hits.sort_by(rank);

		Ok(hits)
	}
}

fn rank(a: &Hit, b: &Hit) -> Ordering {
	b.score.total_cmp(&a.score).then(a.index.cmp(&b.index))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn index() -> VectorIndex {
		VectorIndex::build(
			2,
			vec![
				vec![1.0, 0.0],
				vec![0.0, 1.0],
				vec![0.6, 0.8],
				vec![-1.0, 0.0],
			],
		)
		.unwrap()
	}

	#[test]
	fn search_orders_by_descending_score() {
		let hits = index().search(&[1.0, 0.0], 3).unwrap();
		let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
		assert_eq!(order, vec![0, 2, 1]);
		assert!((hits[1].score - 0.6).abs() < 1e-6);
	}

	#[test]
	fn k_larger_than_index_returns_everything() {
		let hits = index().search(&[0.0, 1.0], 50).unwrap();
		assert_eq!(hits.len(), 4);
		assert_eq!(hits[3].index, 3);
	}

	#[test]
	fn ties_prefer_lower_row() {
		let index = VectorIndex::build(2, vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 0.0]]).unwrap();
		let hits = index.search(&[1.0, 0.0], 1).unwrap();
		assert_eq!(hits[0].index, 1);
	}

	#[test]
	fn dimension_mismatch_is_an_error() {
		assert!(index().search(&[1.0, 0.0, 0.0], 1).is_err());
	}

	#[test]
	fn ragged_rows_are_rejected() {
		assert!(VectorIndex::build(2, vec![vec![1.0, 0.0], vec![1.0]]).is_err());
	}

	#[test]
	fn empty_index_returns_no_hits() {
		let hits = VectorIndex::empty(2).search(&[1.0, 0.0], 1).unwrap();
		assert!(hits.is_empty());
	}
}
