//! Top-level module for the pseudo-word generation system.
//!
//! This module provides the statistical word generator, including:
//! - Weighted count tables (`WeightTable`, `TrigramTable`)
//! - Iterative trigram word construction (`builder`)
//! - The validated on-disk model (`LanguageModel`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating batches of pseudo-words.
///
/// Exposes model loading, the vowel-filter driver loop, and lowercase
/// normalization of accepted words.
pub mod generator;

/// The validated language model: distinct word lengths, start bigrams and
/// trigram continuation counts.
///
/// Supports loading from a directory of JSON files with a binary cache.
pub mod language_model;

/// Weighted count tables and the cumulative-scan sampler.
///
/// Tracks discrete outcomes with non-negative weights and supports
/// weighted random sampling.
pub mod weights;

/// Iterative word construction from a seed using trigram continuations.
pub mod builder;

/// Internal schema validation and numeric coercion for model files.
///
/// This module is not exposed publicly.
mod schema;
