//! The fixed SMILES symbol vocabulary.

use ahash::AHashMap;
use compact_str::CompactString;

use crate::constants::{PAD_ID, SMILES_SYMBOLS};

/// Immutable symbol-to-code lookup table.
///
/// Built once from [`SMILES_SYMBOLS`] and never mutated afterwards; the
/// encoder takes it by shared reference, so concurrent lookups are safe.
#[derive(Debug, Clone)]
pub struct SmilesVocab {
    /// Maps symbol strings to integer codes.
    symbol_to_id: AHashMap<CompactString, u32>,
    /// Length in bytes of the longest symbol (2 for the default table).
    max_symbol_len: usize,
}

impl SmilesVocab {
    /// Build the vocabulary from the compiled-in symbol table.
    pub fn new() -> Self {
        let mut symbol_to_id = AHashMap::with_capacity(SMILES_SYMBOLS.len());
        let mut max_symbol_len = 1;

        for &(symbol, id) in SMILES_SYMBOLS {
            debug_assert_ne!(id, PAD_ID, "symbol codes must not collide with padding");
            symbol_to_id.insert(CompactString::from(symbol), id);
            max_symbol_len = max_symbol_len.max(symbol.len());
        }

        log::debug!(
            "Built SMILES vocabulary: {} symbols, longest symbol {} chars",
            symbol_to_id.len(),
            max_symbol_len
        );

        Self {
            symbol_to_id,
            max_symbol_len,
        }
    }

    /// Get the code for a symbol, if it is in the table.
    #[inline]
    pub fn lookup(&self, symbol: &str) -> Option<u32> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Whether the table contains the given symbol.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbol_to_id.contains_key(symbol)
    }

    /// Number of symbols in the table (padding excluded).
    pub fn len(&self) -> usize {
        self.symbol_to_id.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbol_to_id.is_empty()
    }

    /// Length in bytes of the longest symbol in the table.
    ///
    /// The encoder tries substrings of this width first, so multi-character
    /// symbols win over their leading character.
    pub fn max_symbol_len(&self) -> usize {
        self.max_symbol_len
    }

    /// Return all (symbol, code) pairs in code order.
    pub fn symbols(&self) -> Vec<(String, u32)> {
        let mut pairs: Vec<(String, u32)> = self
            .symbol_to_id
            .iter()
            .map(|(symbol, &id)| (symbol.to_string(), id))
            .collect();
        pairs.sort_by_key(|&(_, id)| id);
        pairs
    }
}

impl Default for SmilesVocab {
    fn default() -> Self {
        Self::new()
    }
}
