use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by weighted random sampling.
///
/// # Variants
/// - `InvalidWeight`: a negative weight was supplied; indicates corrupt
///   model data and aborts generation of the current word.
/// - `EmptyDistribution`: the table was empty or all weights summed to zero.
/// - `SelectionExhausted`: the cumulative scan completed without landing on
///   a key. Unreachable for valid input; treated as an internal bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
	#[error("weights cannot be negative (got {0})")]
	InvalidWeight(i64),

	#[error("total weight must exceed zero")]
	EmptyDistribution,

	#[error("random selection failed to land on a key")]
	SelectionExhausted,
}

/// Errors raised while loading and validating a language model.
#[derive(Error, Debug)]
pub enum ModelError {
	/// File I/O failure while reading a model file or writing the cache.
	#[error("model file error: {0}")]
	Io(#[from] std::io::Error),

	/// A model file is not syntactically valid JSON.
	#[error("model file is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// A model file parsed but does not match the expected shape.
	#[error("model schema error: {0}")]
	Schema(String),

	/// The binary model cache could not be encoded or decoded.
	#[error("model cache error: {0}")]
	Cache(#[from] postcard::Error),

	/// The model path does not point to a directory.
	#[error("expected a model directory, got: {0}")]
	NotADirectory(PathBuf),
}

/// Errors raised by the generation driver.
///
/// Sampler errors propagate uncaught through the driver: a single malformed
/// model entry is fatal for the whole batch. Vowel-filter rejection is not
/// an error and is retried silently up to the driver's attempt bound.
#[derive(Error, Debug)]
pub enum GenerateError {
	#[error(transparent)]
	Sample(#[from] SampleError),

	#[error("no candidate with a vowel after {0} attempts")]
	RetriesExhausted(usize),
}
