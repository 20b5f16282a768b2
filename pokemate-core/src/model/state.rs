use std::collections::BTreeMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// Represents a state in an n-gram model.
///
/// A `State` corresponds to a fixed (n-1)-character prefix (`key`) and stores
/// all observed transitions from this prefix to the next character.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct State {
	/// Identifier of the state (n-1 character prefix).
	key: String,
	/// Outgoing transitions indexed by the next character.
	/// Example: { 'e' => 42, 'a' => 3 }
	transitions: BTreeMap<char, usize>,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: BTreeMap::new(),
		}
	}

	/// Records an occurrence of a transition toward `next_char`.
	pub fn add_transition(&mut self, next_char: char) {
		*self.transitions.entry(next_char).or_insert(0) += 1;
	}

	/// Picks the next character using weighted random sampling.
	///
	/// Only transitions whose character satisfies `accept` take part in the
	/// draw; the probability of each of them is proportional to its
	/// occurrence count.
	///
	/// Returns `None` if no transition is accepted.
	pub fn predict<F, R>(&self, accept: F, rng: &mut R) -> Option<char>
	where
		F: Fn(char) -> bool,
		R: Rng,
	{
		let total: usize = self
			.transitions
			.iter()
			.filter(|(next_char, _)| accept(**next_char))
			.map(|(_, occurrence)| occurrence)
			.sum();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for (next_char, occurrence) in &self.transitions {
			if !accept(*next_char) {
				continue;
			}
			if r < *occurrence {
				return Some(*next_char);
			}
			r -= occurrence;
		}

		None
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same prefix (`key`).
	/// Transition occurrence counts are summed.
	///
	/// # Errors
	/// Returns an error if the state keys do not match.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.key != other.key {
			return Err(GeneratorError::InvalidModel(format!(
				"state key mismatch: {:?} vs {:?}",
				self.key, other.key
			)));
		}

		for (next_char, occurrence) in &other.transitions {
			*self.transitions.entry(*next_char).or_insert(0) += *occurrence;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn empty_state_predicts_nothing() {
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(State::new("ab").predict(|_| true, &mut rng), None);
	}

	#[test]
	fn rejected_transitions_are_never_picked() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut state = State::new("ab");
		for _ in 0..50 {
			state.add_transition('x');
		}
		state.add_transition('y');

		for _ in 0..100 {
			assert_eq!(state.predict(|c| c != 'x', &mut rng), Some('y'));
		}
		assert_eq!(state.predict(|c| c == 'z', &mut rng), None);
	}

	#[test]
	fn merge_sums_occurrences() {
		let mut left = State::new("k");
		left.add_transition('a');
		let mut right = State::new("k");
		right.add_transition('a');
		right.add_transition('o');

		left.merge(&right).unwrap();
		assert_eq!(left.transitions.get(&'a'), Some(&2));
		assert_eq!(left.transitions.get(&'o'), Some(&1));
	}

	#[test]
	fn merge_rejects_other_keys() {
		let mut left = State::new("k");
		assert!(left.merge(&State::new("j")).is_err());
	}
}
