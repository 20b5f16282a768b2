use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use log::info;

use crate::error::{GeneratorError, Result};
use crate::io::{read_file, require_file};

/// Reads a corpus file and returns its names, one per line.
///
/// Lines are trimmed and blank lines are skipped.
///
/// # Errors
/// Returns `NotFound` if `path` is not an existing file.
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	require_file(&path)?;
	let names = read_file(&path)?
		.into_iter()
		.map(|line| line.trim().to_owned())
		.filter(|line| !line.is_empty())
		.collect();
	Ok(names)
}

/// The list of example names used to condition generation.
///
/// Besides the ordered names, the corpus keeps:
/// - a case-insensitive lookup, to tell whether a generated name already exists
/// - its vocabulary, the set of lowercase characters appearing in any name
///
/// A `Corpus` is immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
	names: Vec<String>,
	lookup: HashSet<String>,
	vocabulary: BTreeSet<char>,
}

impl Corpus {
	/// Loads a corpus from a text file (one name per line).
	///
	/// # Errors
	/// - `NotFound` if the path does not resolve to an existing file
	/// - `EmptyCorpus` if the file holds no names
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let names = load_names(&path)?;
		if names.is_empty() {
			return Err(GeneratorError::EmptyCorpus(path.as_ref().to_path_buf()));
		}

		let corpus = Self::from_names(names);
		info!(
			"Loaded corpus {} ({} names, {} characters)",
			path.as_ref().display(),
			corpus.len(),
			corpus.vocabulary.len()
		);
		Ok(corpus)
	}

	/// Builds a corpus from names already in memory.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names: Vec<String> = names.into_iter().map(Into::into).collect();
		let lookup = names.iter().map(|name| name.to_lowercase()).collect();
		let vocabulary = names
			.iter()
			.flat_map(|name| name.chars())
			.flat_map(char::to_lowercase)
			.collect();

		Self { names, lookup, vocabulary }
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Returns `true` if `name` is part of the corpus, ignoring case.
	pub fn contains(&self, name: &str) -> bool {
		self.lookup.contains(&name.to_lowercase())
	}

	/// Lowercase characters that appear in at least one name.
	pub fn vocabulary(&self) -> &BTreeSet<char> {
		&self.vocabulary
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn missing_file_is_not_found() {
		let err = load_names("./brokenPath").unwrap_err();
		assert!(matches!(err, GeneratorError::NotFound(_)));

		let err = Corpus::load("./brokenPath").unwrap_err();
		assert!(matches!(err, GeneratorError::NotFound(_)));
	}

	#[test]
	fn skips_blank_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("names.txt");
		fs::write(&path, "Pikachu\n\n  Eevee  \r\nMew\n").unwrap();

		let corpus = Corpus::load(&path).unwrap();
		assert_eq!(corpus.names(), ["Pikachu", "Eevee", "Mew"]);
	}

	#[test]
	fn blank_file_is_empty_corpus() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("names.txt");
		fs::write(&path, "\n   \n").unwrap();

		assert!(matches!(Corpus::load(&path), Err(GeneratorError::EmptyCorpus(_))));
	}

	#[test]
	fn lookup_ignores_case() {
		let corpus = Corpus::from_names(["Bulbasaur", "Mr. Mime"]);
		assert!(corpus.contains("bulbasaur"));
		assert!(corpus.contains("MR. MIME"));
		assert!(!corpus.contains("Ivysaur"));
	}

	#[test]
	fn vocabulary_is_lowercase() {
		let corpus = Corpus::from_names(["Abra", "Kadabra"]);
		let vocabulary: String = corpus.vocabulary().iter().collect();
		assert_eq!(vocabulary, "abdkr");
	}
}
