use super::state::State;
use crate::error::{GeneratorError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents an n-gram model for sequences of characters.
///
/// The `NGramModel` stores states for prefixes of length `n-1`
/// and allows probabilistic prediction of the next character
/// based on learned names.
///
/// # Invariants
/// - `n` is always >= 2
/// - Each state in `states` corresponds to a unique lowercase prefix of length `n-1`
/// - All state transitions have occurrence counts >= 1
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of characters in the n-gram)
	n: usize, // must be >= 2

	/// Mapping from a prefix (length n-1) to its corresponding state
	states: BTreeMap<String, State>,
}

impl NGramModel {
	/// Creates a new n-gram model of order `n`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `n < 2`.
	pub fn new(n: usize) -> Result<Self> {
		if n < 2 {
			return Err(GeneratorError::InvalidArgument(format!("n must be >= 2, got {}", n)));
		}
		Ok(Self { n, states: BTreeMap::new() })
	}

	/// Order of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of distinct prefixes learned so far.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Adds a (framed) name to the model.
	///
	/// Lowercases the input, then records every n-gram it contains.
	/// Inputs shorter than `n` characters are ignored.
	pub fn add_sentence(&mut self, sentence: &str) {
		let chars: Vec<char> = sentence.chars().flat_map(char::to_lowercase).collect();

		for window in chars.windows(self.n) {
			let (prefix, next) = window.split_at(self.n - 1);
			let prefix: String = prefix.iter().collect();
			self.states
				.entry(prefix)
				.or_insert_with_key(|key| State::new(key))
				.add_transition(next[0]);
		}
	}

	/// Predicts the next character given a prefix of `n-1` characters.
	///
	/// Returns `None` if the prefix is unknown or none of its transitions
	/// is accepted.
	pub fn predict<F, R>(&self, prefix: &str, accept: F, rng: &mut R) -> Option<char>
	where
		F: Fn(char) -> bool,
		R: Rng,
	{
		let key: String = prefix.chars().flat_map(char::to_lowercase).collect();
		self.states.get(&key)?.predict(accept, rng)
	}

	/// Merges another n-gram model into this one.
	///
	/// Occurrence counts for matching states and transitions are summed.
	///
	/// # Errors
	/// Returns an error if the model orders do not match.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.n != other.n {
			return Err(GeneratorError::InvalidModel(format!(
				"n-gram order mismatch: {} vs {}",
				self.n, other.n
			)));
		}

		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}

		Ok(())
	}
}
