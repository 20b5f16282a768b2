use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::error::{GeneratorError, Result};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads a whole file as bytes.
pub(crate) fn read_bytes<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	fs::read(filename)
}

/// Ensures `path` resolves to an existing regular file.
///
/// # Errors
/// Returns `NotFound` carrying the path otherwise.
pub(crate) fn require_file<P: AsRef<Path>>(path: P) -> Result<()> {
	let path = path.as_ref();
	if path.is_file() {
		Ok(())
	} else {
		Err(GeneratorError::NotFound(path.to_path_buf()))
	}
}
