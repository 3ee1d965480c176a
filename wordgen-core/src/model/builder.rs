use rand::Rng;

use crate::error::SampleError;
use crate::model::weights::TrigramTable;

/// Fills a word up to the target length using trigram continuations.
///
/// Starting from `seed`, repeatedly looks up the trailing two characters of
/// the word-so-far in `trigrams`, samples one continuation character from
/// the counts observed after that suffix, and appends it.
///
/// # Parameters
/// - `seed`: The initial part of the word (typically a start bigram).
/// - `target_length`: The desired final length, in characters.
/// - `trigrams`: Trigram continuation counts.
/// - `rng`: Random source consumed by the weighted draws.
///
/// # Returns
/// A word of at most `target_length` characters. The word is shorter when
/// the suffix has no continuation entry; that is a normal termination, not
/// an error.
///
/// # Notes
/// - UTF-8 safe: lengths and suffixes count characters, not bytes.
/// - A word shorter than two characters uses the whole word as the suffix.
/// - Sampler errors propagate; there is no per-character recovery.
pub fn fill_word<R: Rng + ?Sized>(
	seed: &str,
	target_length: usize,
	trigrams: &TrigramTable,
	rng: &mut R,
) -> Result<String, SampleError> {
	let mut word = seed.to_owned();

	while word.chars().count() < target_length {
		let tail = last_n_chars(&word, 2);
		let continuations = match trigrams.get(&tail) {
			Some(counts) => counts,
			None => return Ok(word),
		};
		word.push(*continuations.sample(rng)?);
	}

	Ok(word)
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire
/// string is returned.
fn last_n_chars(s: &str, n: usize) -> String {
	if n > s.chars().count() {
		return s.to_owned();
	}
	s.chars()
		.rev()
		.take(n)
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::weights::WeightTable;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn trigrams(entries: &[(&str, &[(char, i64)])]) -> TrigramTable {
		entries
			.iter()
			.map(|(suffix, counts)| {
				let table: WeightTable<char> = counts.iter().copied().collect();
				(suffix.to_string(), table)
			})
			.collect()
	}

	#[test]
	fn fills_up_to_the_target_length() {
		let trigrams = trigrams(&[("ca", &[('t', 10)])]);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(fill_word("ca", 3, &trigrams, &mut rng).unwrap(), "cat");
	}

	#[test]
	fn returns_the_seed_unchanged_when_the_suffix_is_unknown() {
		let trigrams = TrigramTable::new();
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(fill_word("xy", 5, &trigrams, &mut rng).unwrap(), "xy");
	}

	#[test]
	fn never_exceeds_the_target_length() {
		// A self-continuing suffix would grow forever without the bound
		let trigrams = trigrams(&[("aa", &[('a', 1)])]);
		let mut rng = StdRng::seed_from_u64(1);
		let word = fill_word("aa", 7, &trigrams, &mut rng).unwrap();
		assert_eq!(word, "aaaaaaa");
	}

	#[test]
	fn a_short_seed_uses_the_whole_word_as_suffix() {
		let trigrams = trigrams(&[("a", &[('b', 1)]), ("ab", &[('c', 1)])]);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(fill_word("a", 3, &trigrams, &mut rng).unwrap(), "abc");
	}

	#[test]
	fn sampler_errors_propagate() {
		let trigrams = trigrams(&[("ca", &[('t', -3)])]);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(
			fill_word("ca", 3, &trigrams, &mut rng),
			Err(crate::error::SampleError::InvalidWeight(-3))
		);
	}
}
