//! Text model (multilingual MiniLM sentence encoder) for query embeddings

use anyhow::{bail, Context, Result};
use ndarray::{Array1, ArrayView2, Axis};
use ort::session::Session;
use std::path::Path;
use tokenizers::Tokenizer;

pub struct TextModel {
	session: Session,
	tokenizer: Tokenizer,
}

impl TextModel {
	pub fn load(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
		let session = crate::runtime::create_session(model_path).context("Failed to load text model")?;

		let tokenizer = Tokenizer::from_file(tokenizer_path)
			.map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

		Ok(Self { session, tokenizer })
	}

	/// Raw (unnormalized) sentence embedding
	pub fn encode(&mut self, text: &str) -> Result<Vec<f32>> {
		let encoding = self
			.tokenizer
			.encode(text, true)
			.map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let attention_mask: Vec<i64> = encoding.get_attention_mask().iter().map(|&x| x as i64).collect();
		let token_type_ids: Vec<i64> = encoding.get_type_ids().iter().map(|&x| x as i64).collect();
		let shape = vec![1, input_ids.len()];

		let ids = ort::value::Value::from_array((shape.clone(), input_ids))?;
		let mask = ort::value::Value::from_array((shape.clone(), attention_mask.clone()))?;
		let types = ort::value::Value::from_array((shape, token_type_ids))?;

		let outputs = self.session.run(ort::inputs![
			"input_ids" => ids,
			"attention_mask" => mask,
			"token_type_ids" => types
		])?;

		extract_embedding(&outputs, &attention_mask)
	}
}

fn extract_embedding(outputs: &ort::session::SessionOutputs, attention_mask: &[i64]) -> Result<Vec<f32>> {
	// Exports with a pooling head already emit the sentence vector
	if let Some(pooled) = outputs.get("sentence_embedding") {
		let (_, data) = pooled.try_extract_tensor::<f32>()?;
		return Ok(data.to_vec());
	}

	let hidden = outputs
		.get("last_hidden_state")
		.context("No sentence_embedding or last_hidden_state output found")?;

	let (shape, data) = hidden.try_extract_tensor::<f32>()?;
	let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

	let [1, tokens, dim] = dims.as_slice() else {
		bail!("Unexpected hidden state shape {:?}", dims);
	};

	let hidden = ArrayView2::from_shape((*tokens, *dim), data).context("Hidden state shape mismatch")?;
	Ok(mean_pool(hidden, attention_mask))
}

/// Average token vectors, counting only attended tokens
pub fn mean_pool(hidden: ArrayView2<'_, f32>, attention_mask: &[i64]) -> Vec<f32> {
	let mut sum = Array1::<f32>::zeros(hidden.ncols());
	let mut count = 0.0f32;

	for (row, &attended) in hidden.axis_iter(Axis(0)).zip(attention_mask) {
		if attended != 0 {
			sum += &row;
			count += 1.0;
		}
	}

	if count > 0.0 {
		sum /= count;
	}
	sum.to_vec()
}
