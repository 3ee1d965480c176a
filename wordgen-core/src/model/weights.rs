use std::borrow::Borrow;
use std::collections::BTreeMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// A table of discrete outcomes with associated observation counts.
///
/// A `WeightTable` maps each outcome key to the number of times it was
/// observed in the corpus. Conceptually this is one node of a Markov chain
/// where outgoing edges are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Hold outcome counts loaded from a validated model
/// - Select one outcome by weighted random sampling
///
/// ## Invariants
/// - Keys are unique (map semantics)
/// - Weights are expected to be non-negative; a negative weight is caught
///   at sampling time and reported as `SampleError::InvalidWeight`
///
/// Iteration order for the cumulative scan is ascending key order (the
/// `BTreeMap` order). The order does not affect correctness but is fixed,
/// which keeps sampling reproducible under a seeded random source.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WeightTable<K: Ord> {
	/// Outcome counts indexed by key.
	/// Example: { 'e' => 42, 'a' => 3 }
	weights: BTreeMap<K, i64>,
}

impl<K: Ord> WeightTable<K> {
	/// Creates a new empty table.
	pub fn new() -> Self {
		Self { weights: BTreeMap::new() }
	}

	/// Sets the weight associated with `key`, replacing any previous value.
	pub fn insert(&mut self, key: K, weight: i64) {
		self.weights.insert(key, weight);
	}

	/// Returns the weight stored for `key`, if any.
	pub fn get<Q>(&self, key: &Q) -> Option<i64>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.weights.get(key).copied()
	}

	/// Returns the number of keys in the table.
	pub fn len(&self) -> usize {
		self.weights.len()
	}

	/// Returns `true` if the table holds no keys.
	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}

	/// Selects one key by weighted random sampling.
	///
	/// The probability of selecting a key is proportional to its weight;
	/// a weight of 0 has exactly zero probability of selection. The draw is
	/// a discrete integer draw over `[1, total]`, followed by a cumulative
	/// subtraction scan in ascending key order.
	///
	/// # Errors
	/// - `InvalidWeight` if any weight is negative.
	/// - `EmptyDistribution` if the table is empty or all weights are zero.
	/// - `SelectionExhausted` if the scan completes without a match. This
	///   cannot happen for valid input and indicates an internal bug.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&K, SampleError> {
		// Compute the total number of occurrences
		let mut total: i64 = 0;
		for weight in self.weights.values() {
			if *weight < 0 {
				return Err(SampleError::InvalidWeight(*weight));
			}
			total += *weight;
		}
		if total == 0 {
			return Err(SampleError::EmptyDistribution);
		}

		// Randomly select a key
		let mut r = rng.random_range(1..=total);
		for (key, weight) in &self.weights {
			r -= *weight;
			if r <= 0 {
				return Ok(key);
			}
		}

		// Should not happen given the total computed above
		Err(SampleError::SelectionExhausted)
	}
}

impl<K: Ord> Default for WeightTable<K> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Ord> FromIterator<(K, i64)> for WeightTable<K> {
	fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
		Self { weights: iter.into_iter().collect() }
	}
}

/// Trigram continuation counts, keyed by a two-character suffix.
///
/// Each entry maps the trailing two characters of a word under construction
/// to the counts of every character observed to follow that suffix.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TrigramTable {
	continuations: BTreeMap<String, WeightTable<char>>,
}

impl TrigramTable {
	/// Creates a new empty trigram table.
	pub fn new() -> Self {
		Self { continuations: BTreeMap::new() }
	}

	/// Sets the continuation counts for `suffix`.
	pub fn insert(&mut self, suffix: String, counts: WeightTable<char>) {
		self.continuations.insert(suffix, counts);
	}

	/// Returns the continuation counts observed after `suffix`, if any.
	pub fn get(&self, suffix: &str) -> Option<&WeightTable<char>> {
		self.continuations.get(suffix)
	}

	/// Returns the number of suffixes in the table.
	pub fn len(&self) -> usize {
		self.continuations.len()
	}

	/// Returns `true` if the table holds no suffixes.
	pub fn is_empty(&self) -> bool {
		self.continuations.is_empty()
	}
}

impl FromIterator<(String, WeightTable<char>)> for TrigramTable {
	fn from_iter<I: IntoIterator<Item = (String, WeightTable<char>)>>(iter: I) -> Self {
		Self { continuations: iter.into_iter().collect() }
	}
}
