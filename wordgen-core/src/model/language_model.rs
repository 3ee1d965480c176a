use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::schema;
use crate::error::ModelError;
use crate::io;
use crate::model::weights::{TrigramTable, WeightTable};

/// File name of the word-length distribution inside a model directory.
pub const LENGTHS_FILE: &str = "distinct_word_lengths.json";
/// File name of the word-start bigram counts inside a model directory.
pub const STARTS_FILE: &str = "word_start_bigrams.json";
/// File name of the trigram continuation counts inside a model directory.
pub const TRIGRAMS_FILE: &str = "trigrams.json";

/// File name of the binary model cache written next to the JSON files.
const CACHE_FILE: &str = "model.bin";

/// The validated statistical model backing word generation.
///
/// This struct holds:
/// - `lengths`: the ordered list of distinct word lengths; the position of
///   a length in this list is the key the driver samples, the value is both
///   the actual target length and its sampling weight.
/// - `starts`: counts of two-character sequences observed as word starts.
/// - `trigrams`: counts of each character observed after a two-character
///   suffix.
///
/// The model is loaded once, then read-only for the process lifetime.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LanguageModel {
	lengths: Vec<u64>,
	starts: WeightTable<String>,
	trigrams: TrigramTable,
}

impl LanguageModel {
	/// Loads a model from a directory if a binary cache exists, otherwise
	/// parses and validates the three JSON model files.
	///
	/// # Parameters
	/// - `filepath`: Path to the model directory. Both `"folder"` and
	///   `"folder/"` are accepted.
	///
	/// # Behavior
	/// - Checks for `model.bin` for fast loading (`postcard` encoding).
	/// - Otherwise reads `distinct_word_lengths.json`,
	///   `word_start_bigrams.json` and `trigrams.json`, validates them
	///   against the model schema, and writes the cache for future loads.
	///
	/// # Errors
	/// - `NotADirectory` if the path does not point to a directory.
	/// - `Io` / `Json` / `Schema` if a model file is missing, unreadable,
	///   syntactically invalid, or malformed. Schema errors always surface
	///   before any generation can start.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, ModelError> {
		// Normalize "folder" / "folder/"
		let folder = io::normalize_folder(filepath);
		if !folder.is_dir() {
			return Err(ModelError::NotADirectory(folder));
		}

		let cache_path = folder.join(CACHE_FILE);
		if cache_path.exists() {
			let bytes = fs::read(&cache_path)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		let model = Self::read_model_files(&folder)?;
		let bytes = postcard::to_stdvec(&model)?;
		fs::write(&cache_path, bytes)?;

		Ok(model)
	}

	/// Reads and validates the three JSON model files from `folder`.
	fn read_model_files(folder: &Path) -> Result<Self, ModelError> {
		let lengths = schema::parse_lengths(&io::read_json(folder.join(LENGTHS_FILE))?)?;
		let starts = schema::parse_bigrams(&io::read_json(folder.join(STARTS_FILE))?)?;
		let trigrams = schema::parse_trigrams(&io::read_json(folder.join(TRIGRAMS_FILE))?)?;
		Ok(Self { lengths, starts, trigrams })
	}

	/// Builds a model from already-validated parts.
	///
	/// Intended for in-memory construction; data loaded from disk should go
	/// through `load` so it is schema-checked first.
	///
	/// # Errors
	/// Returns a schema error if `lengths` is empty or contains zero.
	pub fn from_parts(
		lengths: Vec<u64>,
		starts: WeightTable<String>,
		trigrams: TrigramTable,
	) -> Result<Self, ModelError> {
		if lengths.is_empty() {
			return Err(ModelError::Schema("the length list must not be empty".to_owned()));
		}
		if lengths.contains(&0) {
			return Err(ModelError::Schema("word lengths must be positive".to_owned()));
		}
		Ok(Self { lengths, starts, trigrams })
	}

	/// The ordered list of distinct word lengths.
	pub fn lengths(&self) -> &[u64] {
		&self.lengths
	}

	/// Word-start bigram counts.
	pub fn starts(&self) -> &WeightTable<String> {
		&self.starts
	}

	/// Trigram continuation counts.
	pub fn trigrams(&self) -> &TrigramTable {
		&self.trigrams
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_parts_rejects_an_empty_length_list() {
		let model = LanguageModel::from_parts(vec![], WeightTable::new(), TrigramTable::new());
		assert!(model.is_err());
	}

	#[test]
	fn from_parts_rejects_zero_lengths() {
		let model = LanguageModel::from_parts(vec![3, 0], WeightTable::new(), TrigramTable::new());
		assert!(model.is_err());
	}

	#[test]
	fn load_rejects_a_missing_directory() {
		let result = LanguageModel::load("./does-not-exist");
		assert!(matches!(result, Err(ModelError::NotADirectory(_))));
	}
}
