use std::path::{Path, PathBuf};
use std::{env, fs};

use serde_json::Value;

use crate::error::ModelError;

/// Reads a file and parses it as a raw JSON value.
///
/// Schema validation happens separately in `model::schema`; this only
/// guarantees syntactic validity.
pub(crate) fn read_json<P: AsRef<Path>>(filename: P) -> Result<Value, ModelError> {
	let contents = fs::read_to_string(filename)?;
	Ok(serde_json::from_str(&contents)?)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let path = input.as_ref();
	if path == Path::new(".") || path == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		path.to_path_buf()
	}
}
