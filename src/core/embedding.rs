//! Normalized embedding vectors for semantic similarity

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	/// Create normalized embedding from raw data
	pub fn new(mut data: Vec<f32>) -> Self {
		normalize_in_place(&mut data);
		Self(data)
	}

	/// Create from pre-normalized data (snapshot rows)
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	/// Get raw vector
	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn norm(&self) -> f32 {
		l2_norm(&self.0)
	}

	/// Cosine similarity [-1.0, 1.0]
	pub fn similarity(&self, other: &Self) -> f32 {
		dot(&self.0, &other.0)
	}
}

pub fn dot(a: &[f32], b: &[f32]) -> f32 {
	a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub fn l2_norm(v: &[f32]) -> f32 {
	v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Rescale to unit length. Zero vectors are left untouched.
pub fn normalize_in_place(v: &mut [f32]) {
	let norm = l2_norm(v);
	if norm > 0.0 {
		for x in v.iter_mut() {
			*x /= norm;
		}
	}
}
