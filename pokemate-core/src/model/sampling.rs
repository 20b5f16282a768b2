use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// Generation parameters handed to a `NameSampler`.
///
/// # Fields
/// - `max_n`: highest n-gram order used while sampling, `0` means no bound
/// - `nb_try`: how many times a name already present in the corpus is resampled
/// - `randomness`: probability in `[0.0, 1.0]` of dropping to a random lower order at each step
/// - `max_len`: hard cap on the number of characters in a generated name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
	pub max_n: usize,
	pub nb_try: usize,
	pub randomness: f32,
	pub max_len: usize,
}

impl Default for SamplingOptions {
	fn default() -> Self {
		Self {
			max_n: 0,
			nb_try: 10,
			randomness: 0.1,
			max_len: 16,
		}
	}
}

impl SamplingOptions {
	/// Checks that the options can be used for sampling.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `randomness` is outside `[0.0, 1.0]`
	/// or `max_len` is zero.
	pub fn validate(&self) -> Result<()> {
		if !(0.0..=1.0).contains(&self.randomness) {
			return Err(GeneratorError::InvalidArgument(format!(
				"randomness must be between 0.0 and 1.0, got {}",
				self.randomness
			)));
		}
		if self.max_len == 0 {
			return Err(GeneratorError::InvalidArgument("max_len must be at least 1".to_owned()));
		}
		Ok(())
	}
}

/// What a sampler may rely on beyond its own weights.
pub struct SamplingContext<'a> {
	/// Characters a generated name may contain (lowercase).
	pub vocabulary: &'a BTreeSet<char>,
	pub options: &'a SamplingOptions,
}

/// A pretrained generative model seen as a black box.
///
/// Implementations return raw, lowercase names; presentation and corpus
/// checks are left to `NameGenerator`.
pub trait NameSampler: Send + Sync {
	/// Samples exactly `count` names.
	fn sample(&self, count: usize, context: &SamplingContext<'_>) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(SamplingOptions::default().validate().is_ok());
	}

	#[test]
	fn rejects_randomness_out_of_range() {
		let options = SamplingOptions { randomness: 2.0, ..Default::default() };
		assert!(matches!(options.validate(), Err(GeneratorError::InvalidArgument(_))));

		let options = SamplingOptions { randomness: -1.0, ..Default::default() };
		assert!(options.validate().is_err());
	}

	#[test]
	fn rejects_zero_length() {
		let options = SamplingOptions { max_len: 0, ..Default::default() };
		assert!(options.validate().is_err());
	}
}
