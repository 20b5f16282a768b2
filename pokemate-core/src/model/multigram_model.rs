use std::collections::BTreeMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};
use rand::Rng;

use serde::{Deserialize, Serialize};

use super::ngram_model::NGramModel;
use super::sampling::{NameSampler, SamplingContext, SamplingOptions};
use crate::error::{GeneratorError, Result};
use crate::io::{read_bytes, require_file};

/// Marks the beginning of a name inside the model.
pub const START_CHAR: char = '<';

/// Marks the end of a name inside the model.
pub const END_CHAR: char = '>';

/// How many times an empty sample is redrawn before giving up.
const EMPTY_SAMPLE_RETRIES: usize = 32;

/// Character-level model made of one `NGramModel` per order.
///
/// Every learned name is framed as `<name>` and fed to each order from 2
/// up to the framed length, so generation can always fall back to a
/// shorter context when a long one is unknown.
///
/// This is the pretrained artifact served by the generator. It is written
/// once with `save` and loaded read-only with `load`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MultiGramModel {
	ngrams: BTreeMap<usize, NGramModel>,
}

impl MultiGramModel {
	/// Loads a model artifact produced by `save`.
	///
	/// # Errors
	/// - `NotFound` if `path` is not an existing file
	/// - `InvalidModel` if the file cannot be decoded or holds no n-grams
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		require_file(&path)?;
		let bytes = read_bytes(&path)?;
		let model: Self = postcard::from_bytes(&bytes)?;
		if model.is_empty() {
			return Err(GeneratorError::InvalidModel(format!(
				"{} holds no n-grams",
				path.as_ref().display()
			)));
		}

		info!("Loaded model {} (max order {})", path.as_ref().display(), model.order());
		Ok(model)
	}

	/// Serializes the model to `path` with `postcard`.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(&path, bytes)?;
		info!("Saved model {} ({} bytes)", path.as_ref().display(), std::fs::metadata(&path)?.len());
		Ok(())
	}

	/// Builds a model from a list of names.
	///
	/// # Behavior
	/// - Splits the names into chunks (based on CPU cores * factor).
	/// - Spawns threads to build partial models for each chunk.
	/// - Merges all partial models sequentially.
	pub fn train(names: &[String]) -> Result<Self> {
		if names.is_empty() {
			return Ok(Self::default());
		}

		let chunks = num_cpus::get() * 8;
		let chunk_size = names.len().div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		for chunk in names.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial_model = MultiGramModel::default();
				for name in &chunk {
					partial_model.add_name(name);
				}
				if tx.send(partial_model).is_err() {
					warn!("Partial model dropped, receiver is gone");
				}
			});
		}
		drop(tx);

		let mut final_model = MultiGramModel::default();
		for partial_model in rx.iter() {
			final_model.merge(&partial_model)?;
		}

		debug!("Trained model on {} names in chunks of {}", names.len(), chunk_size);
		Ok(final_model)
	}

	/// Adds a name to every n-gram order.
	///
	/// Marker characters inside `name` are dropped, then the name is framed
	/// with `START_CHAR` and `END_CHAR`. Empty names are ignored.
	pub fn add_name(&mut self, name: &str) {
		let inner: String = name.chars().filter(|c| *c != START_CHAR && *c != END_CHAR).collect();
		if inner.is_empty() {
			return;
		}
		let framed = format!("{START_CHAR}{inner}{END_CHAR}");

		for n in 2..=framed.chars().count() {
			if let Ok(model) = NGramModel::new(n) {
				self.ngrams.entry(n).or_insert(model).add_sentence(&framed);
			}
		}
	}

	/// Highest n-gram order held by the model, `0` when empty.
	pub fn order(&self) -> usize {
		self.ngrams.keys().next_back().copied().unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.ngrams.values().all(NGramModel::is_empty)
	}

	/// Merges another model into this one, order by order.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		for (n, ngram) in &other.ngrams {
			if let Some(existing) = self.ngrams.get_mut(n) {
				existing.merge(ngram)?;
			} else {
				self.ngrams.insert(*n, ngram.clone());
			}
		}
		Ok(())
	}

	/// Returns the last `n` characters of a string (UTF-8 aware).
	fn last_n_chars(s: &str, n: usize) -> &str {
		match s.char_indices().rev().nth(n.saturating_sub(1)) {
			Some((index, _)) if n > 0 => &s[index..],
			_ if n == 0 => "",
			_ => s,
		}
	}

	/// Computes the n-gram order for the next step.
	///
	/// Defaults to the longest order the context allows (bounded by
	/// `max_n`); with probability `randomness` a random order in
	/// `[2, default]` is picked instead.
	fn compute_n<R: Rng>(&self, context_len: usize, options: &SamplingOptions, rng: &mut R) -> usize {
		let mut n = (context_len + 1).min(self.order());
		if options.max_n >= 2 {
			n = n.min(options.max_n);
		}
		let n = n.max(2);

		if options.randomness > 0.0 && rng.random_range(0.0..=1.0) <= options.randomness {
			return rng.random_range(2..=n);
		}
		n
	}

	/// Picks the next character, falling back to shorter orders.
	fn predict_next<F, R>(&self, context: &str, mut n: usize, accept: &F, rng: &mut R) -> Option<char>
	where
		F: Fn(char) -> bool,
		R: Rng,
	{
		while n > 1 {
			if let Some(model) = self.ngrams.get(&n) {
				let prefix = Self::last_n_chars(context, n - 1);
				if let Some(c) = model.predict(prefix, accept, rng) {
					return Some(c);
				}
			}
			n -= 1;
		}
		None
	}

	/// Generates one raw name, possibly empty.
	fn generate<R: Rng>(&self, context: &SamplingContext<'_>, rng: &mut R) -> String {
		let options = context.options;
		let accept = |c: char| c == END_CHAR || context.vocabulary.contains(&c);

		let mut word = String::new();
		let mut global_prefix = String::from(START_CHAR);
		let mut length = 0;

		while length < options.max_len {
			let n = self.compute_n(global_prefix.chars().count(), options, rng);
			match self.predict_next(&global_prefix, n, &accept, rng) {
				Some(c) if c != END_CHAR => {
					word.push(c);
					global_prefix.push(c);
					length += 1;
				}
				_ => break,
			}
		}

		word
	}

	/// Samples one non-empty name with the given random generator.
	///
	/// # Errors
	/// - `InvalidArgument` if the options are invalid
	/// - `SamplingFailed` if only empty names come out
	pub fn sample_name<R: Rng>(&self, context: &SamplingContext<'_>, rng: &mut R) -> Result<String> {
		context.options.validate()?;

		for _ in 0..EMPTY_SAMPLE_RETRIES {
			let word = self.generate(context, rng);
			if !word.is_empty() {
				return Ok(word);
			}
		}

		Err(GeneratorError::SamplingFailed(format!(
			"no name produced after {} attempts",
			EMPTY_SAMPLE_RETRIES
		)))
	}
}

impl NameSampler for MultiGramModel {
	fn sample(&self, count: usize, context: &SamplingContext<'_>) -> Result<Vec<String>> {
		let mut rng = rand::rng();
		(0..count).map(|_| self.sample_name(context, &mut rng)).collect()
	}
}
