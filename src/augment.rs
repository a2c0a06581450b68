//! Pluggable SMILES augmentation strategy.

/// A strategy producing an alternate, equivalent encoding of a SMILES string.
///
/// Real augmentation (atom-order randomization) lives outside this crate; the
/// generator only needs something it can call per input string. Closures of
/// type `Fn(&str) -> String` implement this trait directly.
pub trait Augmenter {
    /// Return a (possibly randomized) equivalent of `smiles`.
    fn augment(&self, smiles: &str) -> String;
}

impl<F> Augmenter for F
where
    F: Fn(&str) -> String,
{
    fn augment(&self, smiles: &str) -> String {
        self(smiles)
    }
}

/// No-op augmenter: returns the input unchanged.
///
/// Used when augmentation is disabled and as a deterministic stand-in for
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Augmenter for Identity {
    fn augment(&self, smiles: &str) -> String {
        smiles.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.augment("CCO"), "CCO");
    }

    #[test]
    fn test_closure_augmenter() {
        let reverse = |s: &str| s.chars().rev().collect::<String>();
        assert_eq!(reverse.augment("OCC"), "CCO");
    }
}
