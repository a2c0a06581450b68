//! SMILES-to-sequence encoding.

use rayon::prelude::*;

use crate::constants::PAD_ID;
use crate::error::EncodeError;
use crate::vocabulary::SmilesVocab;

/// Encode a SMILES string into a fixed-length integer sequence.
///
/// Scans left to right with greedy longest-match against the vocabulary, so
/// two-character symbols (Cl, Br, two-digit ring closures) are recognized
/// before their leading character. Spaces are skipped. The result is padded
/// with [`PAD_ID`] to exactly `seq_length` entries.
///
/// # Errors
/// - [`EncodeError::UnknownSymbol`] if a fragment is not in the vocabulary.
/// - [`EncodeError::TooLong`] if the string parses to more than `seq_length`
///   symbols.
pub fn smiles_to_seq(
    smiles: &str,
    seq_length: usize,
    vocab: &SmilesVocab,
) -> Result<Vec<u32>, EncodeError> {
    let mut seq = Vec::with_capacity(seq_length);
    let max_width = vocab.max_symbol_len();

    let mut i = 0;
    while i < smiles.len() {
        if smiles.as_bytes()[i] == b' ' {
            i += 1;
            continue;
        }

        // Longest match wins: try the widest substring first.
        let mut matched = None;
        for width in (1..=max_width).rev() {
            if let Some(id) = smiles.get(i..i + width).and_then(|sub| vocab.lookup(sub)) {
                matched = Some((id, width));
                break;
            }
        }

        match matched {
            Some((id, width)) => {
                seq.push(id);
                i += width;
            }
            None => {
                // Always on a char boundary here, so the iterator is non-empty.
                let fragment: String = smiles[i..].chars().take(1).collect();
                log::warn!(
                    "Failed to encode SMILES {:?}: unknown symbol {:?} at offset {}",
                    smiles,
                    fragment,
                    i
                );
                return Err(EncodeError::UnknownSymbol {
                    fragment,
                    offset: i,
                });
            }
        }
    }

    if seq.len() > seq_length {
        return Err(EncodeError::TooLong {
            len: seq.len(),
            max: seq_length,
        });
    }

    seq.resize(seq_length, PAD_ID);
    Ok(seq)
}

/// Encode multiple SMILES strings in parallel using rayon.
///
/// Returns the first encoding error if any string fails.
pub fn encode_batch<S: AsRef<str> + Sync>(
    smiles_list: &[S],
    seq_length: usize,
    vocab: &SmilesVocab,
) -> Result<Vec<Vec<u32>>, EncodeError> {
    smiles_list
        .par_iter()
        .map(|smi| smiles_to_seq(smi.as_ref(), seq_length, vocab))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SMILES_SYMBOLS;

    #[test]
    fn test_encode_single_symbols() {
        let vocab = SmilesVocab::new();

        for &(symbol, id) in SMILES_SYMBOLS {
            let seq = smiles_to_seq(symbol, 4, &vocab).unwrap();
            assert_eq!(seq, vec![id, 0, 0, 0], "symbol {:?}", symbol);
        }
    }

    #[test]
    fn test_encode_ethanol() {
        let vocab = SmilesVocab::new();

        let seq = smiles_to_seq("CCO", 6, &vocab).unwrap();
        assert_eq!(seq, vec![16, 16, 21, 0, 0, 0]);
    }

    #[test]
    fn test_two_char_symbols_win() {
        let vocab = SmilesVocab::new();

        // "Cl" is one symbol, not C followed by an unknown 'l'
        let seq = smiles_to_seq("Cl", 3, &vocab).unwrap();
        assert_eq!(seq, vec![29, 0, 0]);

        let seq = smiles_to_seq("CClBr", 5, &vocab).unwrap();
        assert_eq!(seq, vec![16, 29, 30, 0, 0]);
    }

    #[test]
    fn test_two_digit_ring_closure() {
        let vocab = SmilesVocab::new();

        // "11" is a single two-digit closure, not "1" twice
        let seq = smiles_to_seq("11", 2, &vocab).unwrap();
        assert_eq!(seq, vec![42, 0]);
    }

    #[test]
    fn test_spaces_skipped() {
        let vocab = SmilesVocab::new();

        assert_eq!(
            smiles_to_seq("C C", 3, &vocab).unwrap(),
            smiles_to_seq("CC", 3, &vocab).unwrap()
        );
    }

    #[test]
    fn test_padding_length() {
        let vocab = SmilesVocab::new();

        let seq = smiles_to_seq("c1ccccc1", 12, &vocab).unwrap();
        assert_eq!(seq.len(), 12);
        assert_eq!(&seq[..8], &[28, 7, 28, 28, 28, 28, 28, 7]);
        assert!(seq[8..].iter().all(|&id| id == PAD_ID));
    }

    #[test]
    fn test_empty_smiles() {
        let vocab = SmilesVocab::new();

        let seq = smiles_to_seq("", 4, &vocab).unwrap();
        assert_eq!(seq, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_symbol() {
        let vocab = SmilesVocab::new();

        let err = smiles_to_seq("CQO", 8, &vocab).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownSymbol {
                fragment: "Q".to_string(),
                offset: 1,
            }
        );
    }

    #[test]
    fn test_too_long() {
        let vocab = SmilesVocab::new();

        let err = smiles_to_seq("CCCCC", 3, &vocab).unwrap_err();
        assert_eq!(err, EncodeError::TooLong { len: 5, max: 3 });
    }

    #[test]
    fn test_exact_length_not_too_long() {
        let vocab = SmilesVocab::new();

        let seq = smiles_to_seq("CCC", 3, &vocab).unwrap();
        assert_eq!(seq, vec![16, 16, 16]);
    }

    #[test]
    fn test_encode_batch() {
        let vocab = SmilesVocab::new();

        let inputs = ["CCO", "c1ccccc1", "ClCCl"];
        let seqs = encode_batch(&inputs, 10, &vocab).unwrap();

        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0][..3], [16, 16, 21]);
        assert_eq!(seqs[2][..3], [29, 16, 29]);
        for seq in &seqs {
            assert_eq!(seq.len(), 10);
        }
    }

    #[test]
    fn test_encode_batch_propagates_error() {
        let vocab = SmilesVocab::new();

        let inputs = ["CCO", "CQ"];
        assert!(encode_batch(&inputs, 10, &vocab).is_err());
    }
}
