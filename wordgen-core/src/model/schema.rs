use serde_json::Value;

use crate::error::ModelError;
use crate::model::weights::{TrigramTable, WeightTable};

/// Coerces a JSON value into a non-negative count.
///
/// Accepts any JSON number and any string parsing as a finite number;
/// fractional values are truncated. Everything else is a schema error,
/// reported with `context` naming the offending location.
fn coerce_count(value: &Value, context: &str) -> Result<i64, ModelError> {
	let number = match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	};

	let number = number.ok_or_else(|| {
		ModelError::Schema(format!("{context}: expected a numeric count, got {value}"))
	})?;

	if !number.is_finite() || number < 0.0 {
		return Err(ModelError::Schema(format!(
			"{context}: counts must be finite and non-negative, got {number}"
		)));
	}

	Ok(number as i64)
}

/// Validates the `distinct_word_lengths` file: a non-empty array of
/// positive integers, ordered by position.
pub(crate) fn parse_lengths(value: &Value) -> Result<Vec<u64>, ModelError> {
	let items = value.as_array().ok_or_else(|| {
		ModelError::Schema("distinct_word_lengths: expected an array".to_owned())
	})?;

	if items.is_empty() {
		return Err(ModelError::Schema(
			"distinct_word_lengths: the length list must not be empty".to_owned(),
		));
	}

	let mut lengths = Vec::with_capacity(items.len());
	for (index, item) in items.iter().enumerate() {
		let length = coerce_count(item, &format!("distinct_word_lengths[{index}]"))?;
		if length == 0 {
			return Err(ModelError::Schema(format!(
				"distinct_word_lengths[{index}]: word lengths must be positive"
			)));
		}
		lengths.push(length as u64);
	}

	Ok(lengths)
}

/// Validates the `word_start_bigrams` file: an object mapping start
/// sequences to non-negative counts.
pub(crate) fn parse_bigrams(value: &Value) -> Result<WeightTable<String>, ModelError> {
	let entries = value.as_object().ok_or_else(|| {
		ModelError::Schema("word_start_bigrams: expected an object".to_owned())
	})?;

	let mut starts = WeightTable::new();
	for (key, count) in entries {
		let weight = coerce_count(count, &format!("word_start_bigrams[{key:?}]"))?;
		starts.insert(key.clone(), weight);
	}

	Ok(starts)
}

/// Validates the `trigrams` file: an object mapping two-character suffixes
/// to nested objects mapping a single following character to its count.
pub(crate) fn parse_trigrams(value: &Value) -> Result<TrigramTable, ModelError> {
	let entries = value
		.as_object()
		.ok_or_else(|| ModelError::Schema("trigrams: expected an object".to_owned()))?;

	let mut trigrams = TrigramTable::new();
	for (suffix, nested) in entries {
		let nested = nested.as_object().ok_or_else(|| {
			ModelError::Schema(format!("trigrams[{suffix:?}]: expected a nested object"))
		})?;

		let mut counts = WeightTable::new();
		for (next, count) in nested {
			let mut chars = next.chars();
			let next_char = match (chars.next(), chars.next()) {
				(Some(c), None) => c,
				_ => {
					return Err(ModelError::Schema(format!(
						"trigrams[{suffix:?}]: continuation keys must be a single character, got {next:?}"
					)));
				}
			};
			let weight = coerce_count(count, &format!("trigrams[{suffix:?}][{next:?}]"))?;
			counts.insert(next_char, weight);
		}
		trigrams.insert(suffix.clone(), counts);
	}

	Ok(trigrams)
}
