//! Error types for encoding and batch generation.

use thiserror::Error;

/// Errors produced by the SMILES sequence encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input contains a symbol that is not in the vocabulary.
    ///
    /// This signals invalid training data; callers should surface it rather
    /// than skip the offending string.
    #[error("unknown SMILES symbol {fragment:?} at byte offset {offset}")]
    UnknownSymbol {
        /// The unrecognized fragment (one character).
        fragment: String,
        /// Byte offset of the fragment in the input string.
        offset: usize,
    },

    /// The input parses to more symbols than the target sequence length.
    #[error("SMILES parses to {len} symbols, exceeding sequence length {max}")]
    TooLong {
        /// Number of parsed symbols.
        len: usize,
        /// Configured sequence length.
        max: usize,
    },
}

/// Errors produced by the batch generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Batch index outside `[0, num_batches)`.
    #[error("batch index {index} out of range (dataset has {num_batches} batches)")]
    BatchIndexOutOfRange {
        /// The requested batch index.
        index: usize,
        /// Number of batches in the current epoch.
        num_batches: usize,
    },

    /// An input string failed to encode.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Inputs and labels have different lengths.
    #[error("dataset has {inputs} inputs but {labels} labels")]
    LengthMismatch {
        /// Number of input strings.
        inputs: usize,
        /// Number of labels.
        labels: usize,
    },
}

/// Result type for batch generation operations.
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
