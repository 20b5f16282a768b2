//! Name generation model.
//!
//! This module provides:
//! - Fixed-order n-gram models (`NGramModel`)
//! - The pretrained multi-order model (`MultiGramModel`)
//! - Sampling options and the `NameSampler` abstraction
//! - The high-level `NameGenerator`

/// High-level interface pairing a pretrained model with a name corpus.
///
/// Validates the requested amount, conditions sampling on the corpus and
/// avoids returning names that already exist in it.
pub mod generator;

/// Multi-order character model composed of multiple `NGramModel`s.
///
/// Supports loading from and saving to a `postcard` artifact, parallel
/// training, merging and vocabulary-restricted sampling.
pub mod multigram_model;

/// Fixed-order n-gram model (`n >= 2`).
pub mod ngram_model;

/// Sampling options and the `NameSampler` trait.
pub mod sampling;

/// Internal representation of a single n-gram state (prefix).
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;
