//! Constants for the SMILES sequence encoder.

/// The fixed SMILES symbol table: symbol string to integer code.
///
/// Covers:
/// - Two-char elements: Cl, Br (must be matched before C, B)
/// - Single-char elements: C, F, H, I, N, O, P, S, B
/// - Aromatic atoms: c, n, o, s, a, e, i
/// - Bonds: =, #, -, /, \
/// - Branches and brackets: (, ), [, ]
/// - Charge and stereochemistry: +, @
/// - Ring numbers: 1-9 plus two-digit closures 10, 11
/// - Disconnected: .
///
/// Code 0 is reserved for padding and never appears in the table.
pub const SMILES_SYMBOLS: &[(&str, u32)] = &[
    ("#", 1),
    ("(", 2),
    (")", 3),
    ("+", 4),
    ("-", 5),
    ("/", 6),
    ("1", 7),
    ("2", 8),
    ("3", 9),
    ("4", 10),
    ("5", 11),
    ("6", 12),
    ("7", 13),
    ("8", 14),
    ("=", 15),
    ("C", 16),
    ("F", 17),
    ("H", 18),
    ("I", 19),
    ("N", 20),
    ("O", 21),
    ("P", 22),
    ("S", 23),
    ("[", 24),
    ("\\", 25),
    ("]", 26),
    ("_", 27),
    ("c", 28),
    ("Cl", 29),
    ("Br", 30),
    ("n", 31),
    ("o", 32),
    ("s", 33),
    ("@", 34),
    (".", 35),
    ("a", 36),
    ("B", 37),
    ("e", 38),
    ("i", 39),
    ("9", 40),
    ("10", 41),
    ("11", 42),
];

/// Padding code used to fill sequences out to their target length.
pub const PAD_ID: u32 = 0;
