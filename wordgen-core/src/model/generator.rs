use std::path::Path;

use rand::Rng;

use crate::error::{GenerateError, ModelError, SampleError};
use crate::model::builder;
use crate::model::language_model::LanguageModel;
use crate::model::weights::WeightTable;

/// Defensive bound on vowel-filter retries for a single word.
///
/// The rejection loop is expected to terminate within a handful of
/// attempts on real models; the bound turns a degenerate vowel-free model
/// into an error instead of a hang.
const MAX_ATTEMPTS: usize = 1000;

/// High-level pseudo-word generator.
///
/// # Responsibilities
/// - Own the loaded `LanguageModel` and the derived length-index table
/// - Drive one generation attempt: sample a target length, sample a start
///   seed, fill the word from trigram continuations
/// - Apply the vowel-presence filter, retrying rejected candidates, and
///   lowercase accepted words
#[derive(Clone, Debug)]
pub struct Generator {
	model: LanguageModel,
	/// Positions into `model.lengths()`, weighted by the value stored at
	/// each position.
	length_index: WeightTable<usize>,
}

impl Generator {
	/// Creates a generator by loading the model files from a directory.
	///
	/// # Errors
	/// Returns an error if the directory or any model file is missing or
	/// fails schema validation.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, ModelError> {
		Ok(Self::from_model(LanguageModel::load(filepath)?))
	}

	/// Creates a generator from an already-loaded model.
	pub fn from_model(model: LanguageModel) -> Self {
		let length_index = model
			.lengths()
			.iter()
			.enumerate()
			.map(|(index, length)| (index, *length as i64))
			.collect();
		Self { model, length_index }
	}

	/// Returns the model backing this generator.
	pub fn model(&self) -> &LanguageModel {
		&self.model
	}

	/// Runs one construction attempt, without the vowel filter.
	///
	/// Samples a position in the length list, maps it back to the actual
	/// length value, samples a start seed and fills the word.
	fn candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, SampleError> {
		let index = *self.length_index.sample(rng)?;
		let target_length = self.model.lengths()[index] as usize;
		let start = self.model.starts().sample(rng)?.clone();
		builder::fill_word(&start, target_length, self.model.trigrams(), rng)
	}

	/// Generates one accepted word.
	///
	/// Candidates without a vowel are discarded and the whole attempt
	/// (length, start and fill) is retried from scratch; nothing of a
	/// rejected candidate is reused. Accepted words are lowercased.
	///
	/// # Errors
	/// - Sampler errors propagate uncaught (corrupt model data is fatal).
	/// - `RetriesExhausted` if no candidate passes the vowel filter within
	///   the attempt bound.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
		for _ in 0..MAX_ATTEMPTS {
			let word = self.candidate(rng)?;
			if has_vowel(&word) {
				return Ok(word.to_lowercase());
			}
		}
		Err(GenerateError::RetriesExhausted(MAX_ATTEMPTS))
	}

	/// Generates a finite batch of accepted words.
	///
	/// The first error aborts the whole batch; there is no per-word
	/// recovery.
	pub fn generate_batch<R: Rng + ?Sized>(
		&self,
		count: usize,
		rng: &mut R,
	) -> Result<Vec<String>, GenerateError> {
		(0..count).map(|_| self.generate(rng)).collect()
	}
}

/// Returns `true` if the word contains at least one of {a,e,i,o,u,y},
/// case-insensitively.
fn has_vowel(word: &str) -> bool {
	word.chars()
		.any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::weights::TrigramTable;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn starts(pairs: &[(&str, i64)]) -> WeightTable<String> {
		pairs.iter().map(|(k, w)| (k.to_string(), *w)).collect()
	}

	fn trigrams(entries: &[(&str, &[(char, i64)])]) -> TrigramTable {
		entries
			.iter()
			.map(|(suffix, counts)| {
				let table: WeightTable<char> = counts.iter().copied().collect();
				(suffix.to_string(), table)
			})
			.collect()
	}

	fn generator(
		lengths: Vec<u64>,
		starts: WeightTable<String>,
		trigrams: TrigramTable,
	) -> Generator {
		let model = LanguageModel::from_parts(lengths, starts, trigrams).unwrap();
		Generator::from_model(model)
	}

	#[test]
	fn emitted_words_are_lowercase() {
		let generator = generator(vec![4], starts(&[("CA", 1)]), TrigramTable::new());
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(generator.generate(&mut rng).unwrap(), "ca");
	}

	#[test]
	fn emitted_words_always_contain_a_vowel() {
		// "xz" candidates are rejected and retried until "ca" comes up
		let generator = generator(
			vec![2],
			starts(&[("xz", 5), ("ca", 1)]),
			TrigramTable::new(),
		);
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..50 {
			assert_eq!(generator.generate(&mut rng).unwrap(), "ca");
		}
	}

	#[test]
	fn gives_up_when_no_candidate_has_a_vowel() {
		let generator = generator(vec![2], starts(&[("xz", 1)]), TrigramTable::new());
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(
			generator.generate(&mut rng),
			Err(GenerateError::RetriesExhausted(_))
		));
	}

	#[test]
	fn length_index_maps_back_to_the_length_value() {
		// One length entry of value 7 at position 0: the sampled key is the
		// position, the target length must be 7, not 0
		let generator = generator(
			vec![7],
			starts(&[("aa", 1)]),
			trigrams(&[("aa", &[('a', 1)])]),
		);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(generator.generate(&mut rng).unwrap(), "aaaaaaa");
	}

	#[test]
	fn batch_has_the_requested_size() {
		let generator = generator(vec![2], starts(&[("ca", 1)]), TrigramTable::new());
		let mut rng = StdRng::seed_from_u64(1);
		let words = generator.generate_batch(25, &mut rng).unwrap();
		assert_eq!(words.len(), 25);
	}

	#[test]
	fn generation_is_reproducible_under_a_seeded_rng() {
		let generator = generator(
			vec![3, 4, 5],
			starts(&[("ca", 2), ("he", 3)]),
			trigrams(&[
				("ca", &[('t', 10), ('r', 4)]),
				("he", &[('l', 5), ('r', 1)]),
				("at", &[('e', 2)]),
				("el", &[('l', 3)]),
				("ll", &[('o', 2)]),
			]),
		);

		let mut first = StdRng::seed_from_u64(11);
		let mut second = StdRng::seed_from_u64(11);
		assert_eq!(
			generator.generate_batch(30, &mut first).unwrap(),
			generator.generate_batch(30, &mut second).unwrap()
		);
	}

	#[test]
	fn corrupt_counts_abort_the_batch() {
		let generator = generator(
			vec![3],
			starts(&[("ca", 1)]),
			trigrams(&[("ca", &[('t', -1)])]),
		);
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(
			generator.generate_batch(10, &mut rng),
			Err(GenerateError::Sample(SampleError::InvalidWeight(-1)))
		));
	}
}
