use std::path::Path;

use log::{debug, info};

use crate::amount::Amount;
use crate::corpus::Corpus;
use crate::error::{GeneratorError, Result};
use crate::model::multigram_model::MultiGramModel;
use crate::model::sampling::{NameSampler, SamplingContext, SamplingOptions};

/// High-level generator pairing a pretrained model with its name corpus.
///
/// # Responsibilities
/// - Load the corpus and the model once, then keep them immutable
/// - Validate the requested amount of names
/// - Condition sampling on the corpus vocabulary
/// - Resample names that already exist in the corpus, up to `nb_try` times
///
/// A `NameGenerator` is meant to be built at startup and shared by
/// reference; `generate_names` only needs `&self`.
#[derive(Debug)]
pub struct NameGenerator<S = MultiGramModel> {
	sampler: S,
	corpus: Corpus,
	options: SamplingOptions,
}

impl NameGenerator<MultiGramModel> {
	/// Loads the corpus then the model artifact, with default sampling options.
	///
	/// # Errors
	/// - `NotFound` if either path does not resolve to an existing file
	/// - `EmptyCorpus` / `InvalidModel` if a file exists but is unusable
	pub fn new<PM, PC>(model_path: PM, corpus_path: PC) -> Result<Self>
	where
		PM: AsRef<Path>,
		PC: AsRef<Path>,
	{
		Self::with_options(model_path, corpus_path, SamplingOptions::default())
	}

	/// Same as `new`, with explicit sampling options.
	pub fn with_options<PM, PC>(model_path: PM, corpus_path: PC, options: SamplingOptions) -> Result<Self>
	where
		PM: AsRef<Path>,
		PC: AsRef<Path>,
	{
		let corpus = Corpus::load(corpus_path)?;
		let model = MultiGramModel::load(model_path)?;
		let generator = Self::from_parts(model, corpus, options)?;
		info!("Name generator ready ({:?})", generator.options);
		Ok(generator)
	}
}

impl<S: NameSampler> NameGenerator<S> {
	/// Assembles a generator from an already loaded sampler and corpus.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `options` are invalid.
	pub fn from_parts(sampler: S, corpus: Corpus, options: SamplingOptions) -> Result<Self> {
		options.validate()?;
		Ok(Self { sampler, corpus, options })
	}

	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	pub fn options(&self) -> &SamplingOptions {
		&self.options
	}

	/// Produces exactly `amount` freshly sampled names.
	///
	/// `amount` may be any integer or a string; it must describe an
	/// integer in `[Amount::MIN, Amount::MAX]`.
	///
	/// # Errors
	/// - `InvalidArgument` if `amount` is not an integer or out of range
	/// - Any sampler error, the request is never partially satisfied
	pub fn generate_names<A>(&self, amount: A) -> Result<Vec<String>>
	where
		A: TryInto<Amount, Error = GeneratorError>,
	{
		let amount = amount.try_into()?;
		let context = SamplingContext {
			vocabulary: self.corpus.vocabulary(),
			options: &self.options,
		};

		let mut names = self.sampler.sample(amount.get(), &context)?;
		if names.len() != amount.get() {
			return Err(GeneratorError::SamplingFailed(format!(
				"sampler returned {} names instead of {}",
				names.len(),
				amount
			)));
		}

		for name in names.iter_mut() {
			let mut nb_try = self.options.nb_try;
			while nb_try > 0 && self.corpus.contains(name) {
				debug!("Resampling {:?}, already in corpus", name);
				*name = self.sample_one(&context)?;
				nb_try -= 1;
			}
			*name = capitalize(name);
		}

		Ok(names)
	}

	fn sample_one(&self, context: &SamplingContext<'_>) -> Result<String> {
		self.sampler
			.sample(1, context)?
			.pop()
			.ok_or_else(|| GeneratorError::SamplingFailed("sampler returned no name".to_owned()))
	}
}

/// Uppercases the first character of `name`.
fn capitalize(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
