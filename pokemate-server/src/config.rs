use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;
use pokemate_core::{GeneratorError, NameGenerator, SamplingOptions};
use serde::Deserialize;

use crate::error::ServerError;

/// Environment variable pointing at an alternative configuration file.
pub const CONFIG_ENV: &str = "POKEMATE_CONFIG";

/// Configuration file read when `CONFIG_ENV` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/pokemate.yml";

/// Server settings, read from YAML.
///
/// Every field is optional in the file; missing ones keep their default.
/// `model_file` and `corpus_file` are resolved against `base_dir` unless
/// they are absolute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub base_dir: PathBuf,
	pub model_file: PathBuf,
	pub corpus_file: PathBuf,
	pub sampling: SamplingOptions,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			base_dir: PathBuf::from("./data"),
			model_file: PathBuf::from("model.bin"),
			corpus_file: PathBuf::from("names.txt"),
			sampling: SamplingOptions::default(),
		}
	}
}

impl ServerConfig {
	/// Loads the configuration from `path`.
	///
	/// A missing file yields the default configuration; a malformed one
	/// is an error.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServerError> {
		let path = path.as_ref();
		if !path.exists() {
			info!("No configuration at {}, using defaults", path.display());
			return Ok(Self::default());
		}

		let config: Self = serde_yaml::from_reader(File::open(path)?)?;
		info!("Configuration loaded from {}", path.display());
		Ok(config)
	}

	/// Loads the configuration named by `CONFIG_ENV`, or `DEFAULT_CONFIG_PATH`.
	pub fn from_env() -> Result<Self, ServerError> {
		let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
		Self::load(path)
	}

	pub fn model_path(&self) -> PathBuf {
		self.base_dir.join(&self.model_file)
	}

	pub fn corpus_path(&self) -> PathBuf {
		self.base_dir.join(&self.corpus_file)
	}

	/// Loads the corpus and model this configuration points at.
	pub fn load_generator(&self) -> Result<NameGenerator, GeneratorError> {
		NameGenerator::with_options(self.model_path(), self.corpus_path(), self.sampling.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_gives_defaults() {
		let config = ServerConfig::load("./does/not/exist.yml").unwrap();
		assert_eq!(config, ServerConfig::default());
		assert_eq!(config.model_path(), PathBuf::from("./data/model.bin"));
		assert_eq!(config.corpus_path(), PathBuf::from("./data/names.txt"));
	}

	#[test]
	fn partial_yaml_keeps_defaults() {
		let config: ServerConfig = serde_yaml::from_str("port: 8080\nsampling:\n  nb_try: 3\n").unwrap();
		assert_eq!(config.port, 8080);
		assert_eq!(config.host, "127.0.0.1");
		assert_eq!(config.sampling.nb_try, 3);
		assert_eq!(config.sampling.max_len, SamplingOptions::default().max_len);
	}

	#[test]
	fn absolute_files_ignore_base_dir() {
		let config = ServerConfig {
			model_file: PathBuf::from("/srv/pokemate/model.bin"),
			..Default::default()
		};
		assert_eq!(config.model_path(), PathBuf::from("/srv/pokemate/model.bin"));
	}

	#[test]
	fn malformed_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("pokemate.yml");
		std::fs::write(&path, "port: [not, a, number]\n").unwrap();

		assert!(matches!(ServerConfig::load(&path), Err(ServerError::Config(_))));
	}
}
