//! SMILES sequence encoding and batch generation for neural network training.
//!
//! This crate provides:
//! - A fixed-table SMILES encoder with greedy longest-match lookup, so
//!   multi-character symbols (Cl, Br, two-digit ring closures) are recognized
//!   before their leading character
//! - A batch generator that owns the dataset arrays and the per-epoch index
//!   permutation, serving shuffled and optionally augmented mini-batches
//!   through the `len` / `get` / `on_epoch_end` batch-sequence protocol
//! - A pluggable augmentation seam for SMILES randomization
//!
//! Chemistry validation and canonicalization are out of scope; inputs are
//! assumed to be pre-validated, and a malformed string fails the whole batch.

#![warn(missing_docs)]

pub mod augment;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod vocabulary;

pub use augment::*;
pub use constants::*;
pub use encoding::*;
pub use error::*;
pub use generator::*;
pub use vocabulary::*;
