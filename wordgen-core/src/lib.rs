//! Pseudo-word generation library.
//!
//! This crate synthesizes pronounceable pseudo-words from corpus statistics:
//! - Weighted random sampling over discrete count tables
//! - Trigram-driven word construction with a sampled target length
//! - A driver applying a vowel-presence filter and lowercase normalization
//! - Model loading with schema validation and a binary cache
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core model types, sampling and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal schema handling private.
pub mod model;

/// Error types shared across the crate.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
