//! Pokémon-style name generation library.
//!
//! This crate provides everything needed to produce new names from a
//! pretrained character-level model:
//! - Loading a name corpus (one name per line)
//! - A multi-order n-gram model, loadable from a `postcard` artifact
//! - A high-level `NameGenerator` pairing the model with the corpus
//! - Validation of the requested amount of names
//!
//! The model is consumed through the `NameSampler` trait, so another
//! generative backend can be plugged into `NameGenerator` unchanged.

/// Error type shared by the whole crate.
pub mod error;

/// Bounded amount of names per request.
pub mod amount;

/// Name corpus loading and lookups.
pub mod corpus;

/// Pretrained model, sampling options and the high-level generator.
pub mod model;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;

pub use amount::Amount;
pub use corpus::Corpus;
pub use error::{GeneratorError, Result};
pub use model::generator::NameGenerator;
pub use model::multigram_model::MultiGramModel;
pub use model::sampling::{NameSampler, SamplingContext, SamplingOptions};
