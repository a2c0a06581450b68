//! Batch generation for the training loop.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::augment::Augmenter;
use crate::encoding::encode_batch;
use crate::error::{GeneratorError, Result};
use crate::vocabulary::SmilesVocab;

/// Configuration for the batch generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Target sequence length for encoded inputs.
    pub seq_length: usize,
    /// Batch size.
    pub batch_size: usize,
    /// Whether to augment inputs before encoding.
    pub augment: bool,
    /// Whether to shuffle the epoch permutation.
    pub shuffle: bool,
    /// Random seed for shuffling.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seq_length: 128,
            batch_size: 128,
            augment: true,
            shuffle: true,
            seed: 42,
        }
    }
}

/// One batch of encoded inputs and their labels.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Encoded input sequences [batch_size, seq_length].
    pub input_ids: Array2<u32>,
    /// Labels [batch_size].
    pub labels: Array1<f32>,
}

impl Batch {
    /// Number of samples in this batch.
    pub fn batch_size(&self) -> usize {
        self.input_ids.nrows()
    }

    /// Sequence length of the encoded inputs.
    pub fn seq_length(&self) -> usize {
        self.input_ids.ncols()
    }
}

/// The batch-sequence protocol consumed by a training loop.
///
/// The loop calls [`len`](BatchSequence::len) once per epoch, then
/// [`get`](BatchSequence::get) for each batch index, and
/// [`on_epoch_end`](BatchSequence::on_epoch_end) between epochs.
pub trait BatchSequence {
    /// Number of batches per epoch.
    fn len(&self) -> usize;

    /// Whether the sequence has no batches.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce the batch at `index`.
    fn get(&self, index: usize) -> Result<Batch>;

    /// Refresh the epoch ordering. Called once per completed epoch.
    fn on_epoch_end(&mut self);
}

/// Serves shuffled, optionally augmented mini-batches of encoded SMILES.
///
/// Owns the dataset arrays and the per-epoch index permutation. Batch reads
/// go through `&self` and only touch read-only state; the permutation is
/// mutated exclusively by [`on_epoch_end`](DataGenerator::on_epoch_end),
/// which takes `&mut self`, so the borrow checker rules out a shuffle racing
/// a read.
#[derive(Debug)]
pub struct DataGenerator<A: Augmenter> {
    /// Raw input strings.
    smiles: Vec<String>,
    /// Labels, parallel to `smiles`.
    labels: Vec<f32>,
    /// Symbol vocabulary for encoding.
    vocab: SmilesVocab,
    /// Augmentation strategy, applied per input when enabled.
    augmenter: A,
    /// Configuration.
    config: GeneratorConfig,
    /// Current epoch index permutation.
    indexes: Vec<usize>,
    /// RNG for epoch shuffles, advanced across epochs.
    rng: StdRng,
}

impl<A: Augmenter> DataGenerator<A> {
    /// Create a generator over parallel input/label arrays.
    ///
    /// Establishes the first epoch's ordering immediately, so the generator
    /// is ready for `get` without a prior `on_epoch_end` call.
    ///
    /// # Errors
    /// [`GeneratorError::LengthMismatch`] if the arrays differ in length.
    ///
    /// # Panics
    /// If `config.batch_size` is zero.
    pub fn new(
        smiles: Vec<String>,
        labels: Vec<f32>,
        vocab: SmilesVocab,
        augmenter: A,
        config: GeneratorConfig,
    ) -> Result<Self> {
        assert!(config.batch_size > 0, "batch_size must be positive");

        if smiles.len() != labels.len() {
            return Err(GeneratorError::LengthMismatch {
                inputs: smiles.len(),
                labels: labels.len(),
            });
        }

        let rng = StdRng::seed_from_u64(config.seed);
        let mut generator = Self {
            smiles,
            labels,
            vocab,
            augmenter,
            config,
            indexes: Vec::new(),
            rng,
        };
        generator.on_epoch_end();

        Ok(generator)
    }

    /// Number of samples in the dataset.
    pub fn num_samples(&self) -> usize {
        self.smiles.len()
    }

    /// Number of batches per epoch: `ceil(num_samples / batch_size)`.
    pub fn num_batches(&self) -> usize {
        (self.smiles.len() + self.config.batch_size - 1) / self.config.batch_size
    }

    /// The generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce the batch at `index` under the current epoch permutation.
    ///
    /// Selects permutation entries `[index * B, (index + 1) * B)`; the last
    /// batch is shorter when the dataset size is not a multiple of `B`. Each
    /// selected input is augmented (when enabled) and encoded to
    /// `seq_length` codes.
    ///
    /// # Errors
    /// - [`GeneratorError::BatchIndexOutOfRange`] for an invalid index.
    /// - [`GeneratorError::Encode`] if an input fails to encode.
    pub fn get_batch(&self, index: usize) -> Result<Batch> {
        let num_batches = self.num_batches();
        if index >= num_batches {
            return Err(GeneratorError::BatchIndexOutOfRange { index, num_batches });
        }

        let start = index * self.config.batch_size;
        let end = (start + self.config.batch_size).min(self.indexes.len());
        let selected = &self.indexes[start..end];

        let seqs = if self.config.augment {
            let augmented: Vec<String> = selected
                .iter()
                .map(|&i| self.augmenter.augment(&self.smiles[i]))
                .collect();
            encode_batch(&augmented, self.config.seq_length, &self.vocab)?
        } else {
            let inputs: Vec<&str> = selected.iter().map(|&i| self.smiles[i].as_str()).collect();
            encode_batch(&inputs, self.config.seq_length, &self.vocab)?
        };

        let flat: Vec<u32> = seqs.into_iter().flatten().collect();
        let input_ids = Array2::from_shape_vec((selected.len(), self.config.seq_length), flat)
            .expect("encoded rows match batch shape");
        let labels = Array1::from_iter(selected.iter().map(|&i| self.labels[i]));

        Ok(Batch { input_ids, labels })
    }

    /// Regenerate the epoch index permutation.
    ///
    /// Rebuilds the identity ordering over `[0, num_samples)` and shuffles
    /// it when configured. Must be called once per completed epoch by the
    /// training loop; construction performs the initial call.
    pub fn on_epoch_end(&mut self) {
        self.indexes = (0..self.smiles.len()).collect();
        if self.config.shuffle {
            self.indexes.shuffle(&mut self.rng);
        }
        log::debug!(
            "Epoch permutation refreshed: {} samples, shuffle={}",
            self.indexes.len(),
            self.config.shuffle
        );
    }
}

impl<A: Augmenter> BatchSequence for DataGenerator<A> {
    fn len(&self) -> usize {
        self.num_batches()
    }

    fn get(&self, index: usize) -> Result<Batch> {
        self.get_batch(index)
    }

    fn on_epoch_end(&mut self) {
        DataGenerator::on_epoch_end(self);
    }
}
