use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or sampling from a name generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
	/// A corpus or model path does not resolve to an existing file.
	#[error("File not found: {}", .0.display())]
	NotFound(PathBuf),

	/// The caller passed a value outside of the operation contract.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// The model artifact exists but cannot be used.
	#[error("Invalid model: {0}")]
	InvalidModel(String),

	/// The corpus file holds no names.
	#[error("Corpus is empty: {}", .0.display())]
	EmptyCorpus(PathBuf),

	/// The model could not produce a name within its retry budget.
	#[error("Sampling failed: {0}")]
	SamplingFailed(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<postcard::Error> for GeneratorError {
	fn from(err: postcard::Error) -> Self {
		GeneratorError::InvalidModel(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
