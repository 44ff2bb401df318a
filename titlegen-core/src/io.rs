use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::error::Result;
use crate::model::Chain;

/// Serializes `chain` to a compact binary file at `path`.
///
/// Every edge weight round-trips exactly through [`load_chain`].
pub fn save_chain<P: AsRef<Path>>(chain: &Chain, path: P) -> Result<()> {
	let bytes = postcard::to_stdvec(chain)?;
	fs::write(path, bytes)?;
	Ok(())
}

/// Loads a chain previously written by [`save_chain`].
pub fn load_chain<P: AsRef<Path>>(path: P) -> Result<Chain> {
	let bytes = fs::read(path)?;
	Ok(postcard::from_bytes(&bytes)?)
}

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/movies.list` + `"bin"` → `data/movies.bin`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TitlegenError;
	use crate::model::ChainBuilder;

	#[test]
	fn chains_round_trip_exactly() {
		let chain = ChainBuilder::build([
			"the godfather",
			"the godfather part ii",
			"night of the hunter",
		]);

		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("chain.bin");

		save_chain(&chain, &path).unwrap();
		let loaded = load_chain(&path).unwrap();
		assert_eq!(chain, loaded);
	}

	#[test]
	fn loading_a_missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("nothing-here.bin");
		assert!(matches!(load_chain(&path), Err(TitlegenError::Io(_))));
	}

	#[test]
	fn output_path_swaps_the_extension() {
		let out = build_output_path("data/movies.list", "bin").unwrap();
		assert_eq!(out, PathBuf::from("data/movies.bin"));

		let out = build_output_path("movies.list", "bin").unwrap();
		assert_eq!(out, PathBuf::from("movies.bin"));
	}

	#[test]
	fn read_lines_splits_on_newlines() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("corpus.txt");
		fs::write(&path, "first line\nsecond line\r\nthird line\n").unwrap();

		let lines = read_lines(&path).unwrap();
		assert_eq!(lines, vec!["first line", "second line", "third line"]);
	}
}
