use std::path::PathBuf;

use pokemate_core::corpus::load_names;
use pokemate_core::{Corpus, GeneratorError, MultiGramModel, NameGenerator};
use tempfile::TempDir;

const NAMES: &str = include_str!("../../data/names.txt");

/// Writes the fixture corpus and a model trained on it into a temporary directory.
fn fixture() -> (TempDir, PathBuf, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let corpus_path = dir.path().join("names.txt");
	let model_path = dir.path().join("model.bin");

	std::fs::write(&corpus_path, NAMES).unwrap();
	let corpus = Corpus::load(&corpus_path).unwrap();
	MultiGramModel::train(corpus.names()).unwrap().save(&model_path).unwrap();

	(dir, model_path, corpus_path)
}

#[test]
fn names_path_loads() {
	let (_dir, _model_path, corpus_path) = fixture();
	let names = load_names(corpus_path).unwrap();
	assert!(!names.is_empty());
}

#[test]
fn broken_names_path_is_not_found() {
	assert!(matches!(load_names("./brokenPath"), Err(GeneratorError::NotFound(_))));
}

#[test]
fn missing_files_prevent_construction() {
	let (dir, model_path, corpus_path) = fixture();

	let err = NameGenerator::new(&model_path, dir.path().join("nope.txt")).unwrap_err();
	assert!(matches!(err, GeneratorError::NotFound(_)));

	let err = NameGenerator::new(dir.path().join("nope.bin"), &corpus_path).unwrap_err();
	assert!(matches!(err, GeneratorError::NotFound(_)));
}

#[test]
fn garbage_model_is_invalid() {
	let (dir, _model_path, corpus_path) = fixture();
	let garbage = dir.path().join("garbage.bin");
	std::fs::write(&garbage, b"not a model at all").unwrap();

	let err = NameGenerator::new(&garbage, &corpus_path).unwrap_err();
	assert!(matches!(err, GeneratorError::InvalidModel(_)));
}

#[test]
fn every_valid_amount_is_honored() {
	let (_dir, model_path, corpus_path) = fixture();
	let generator = NameGenerator::new(model_path, corpus_path).unwrap();

	for amount in 1..=10 {
		let names = generator.generate_names(amount).unwrap();
		assert_eq!(names.len(), amount as usize);
	}
}

#[test]
fn invalid_amounts_fail() {
	let (_dir, model_path, corpus_path) = fixture();
	let generator = NameGenerator::new(model_path, corpus_path).unwrap();

	assert!(generator.generate_names(0).is_err());
	assert!(generator.generate_names(11).is_err());
	assert!(generator.generate_names(-1).is_err());
	assert!(generator.generate_names("string input").is_err());
	assert_eq!(generator.generate_names("3").unwrap().len(), 3);
}

#[test]
fn names_follow_the_corpus() {
	let (_dir, model_path, corpus_path) = fixture();
	let generator = NameGenerator::new(model_path, corpus_path).unwrap();
	let vocabulary = generator.corpus().vocabulary().clone();
	let max_len = generator.options().max_len;

	for _ in 0..20 {
		for name in generator.generate_names(10).unwrap() {
			assert!(!name.is_empty());
			assert!(name.chars().count() <= max_len, "{name} is too long");
			assert!(
				name.chars().flat_map(char::to_lowercase).all(|c| vocabulary.contains(&c)),
				"{name} leaves the corpus vocabulary"
			);
			assert!(name.chars().next().is_some_and(|c| !c.is_lowercase()), "{name} is not capitalized");
		}
	}
}
