use crate::errors::HillCipherError;
use crate::ring::Vector;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Residue appended by [`pad_to_block_size`]: the letter 'X'.
pub const PAD_RESIDUE: i64 = 23;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// A static HashMap mapping an uppercase letter A-Z to its residue 0-25.
    pub static ref LETTER_TO_RESIDUE_MAP: HashMap<char, i64> = {
        let mut map = HashMap::new();
        for (i, ch) in ALPHABET.chars().enumerate() {
            map.insert(ch, i as i64);
        }
        map
    };

    /// A static HashMap mapping a residue 0-25 back to its uppercase letter.
    pub static ref RESIDUE_TO_LETTER_MAP: HashMap<i64, char> = {
        let mut map = HashMap::new();
        for (&ch, &i) in LETTER_TO_RESIDUE_MAP.iter() {
            map.insert(i, ch);
        }
        map
    };
}

/// Maps an uppercase A-Z letter to its residue (A=0 .. Z=25).
///
/// # Errors
///
/// Returns `HillCipherError::InvalidCharacter` for anything outside A-Z;
/// callers are expected to run [`normalize_text`] first.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::encode_letter;
/// assert_eq!(encode_letter('A').unwrap(), 0);
/// assert_eq!(encode_letter('Z').unwrap(), 25);
/// assert!(encode_letter('a').is_err());
/// assert!(encode_letter('!').is_err());
/// ```
pub fn encode_letter(c: char) -> Result<i64, HillCipherError> {
    LETTER_TO_RESIDUE_MAP.get(&c).copied().ok_or_else(|| {
        HillCipherError::InvalidCharacter(format!(
            "Character {:?} is outside the cipher alphabet A-Z",
            c
        ))
    })
}

/// Maps a residue in `[0, 26)` back to its uppercase letter.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidCharacter` for out-of-range residues;
/// core operations normalize before returning, so hitting this means a
/// caller skipped canonicalization.
pub fn decode_residue(r: i64) -> Result<char, HillCipherError> {
    RESIDUE_TO_LETTER_MAP.get(&r).copied().ok_or_else(|| {
        HillCipherError::InvalidCharacter(format!(
            "Residue {} is outside the canonical range [0, 26)",
            r
        ))
    })
}

/// Encodes a whole message of uppercase letters into residues.
pub fn encode_text(text: &str) -> Result<Vector, HillCipherError> {
    text.chars().map(encode_letter).collect()
}

/// Decodes a residue sequence back into a string of uppercase letters.
pub fn decode_residues(residues: &[i64]) -> Result<String, HillCipherError> {
    residues.iter().map(|&r| decode_residue(r)).collect()
}

/// Strips every non-letter byte and upcases the rest: the cleanup uploaded
/// text goes through before it may enter the codec.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::normalize_text;
/// assert_eq!(normalize_text("Hello, World!"), "HELLOWORLD");
/// assert_eq!(normalize_text("123"), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Appends the padding residue ('X' = 23) until the message length is a
/// multiple of `block_size`.
///
/// Known limitation of the scheme: if the genuine plaintext itself ends in
/// 'X', the padding is ambiguous on decryption. That ambiguity is inherent
/// to the classical padding policy and is deliberately left as-is.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidMatrixDimension` if `block_size` is 0.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::{encode_text, pad_to_block_size, decode_residues};
/// let mut residues = encode_text("HELLO").unwrap();
/// pad_to_block_size(&mut residues, 3).unwrap();
/// assert_eq!(decode_residues(&residues).unwrap(), "HELLOX");
/// ```
pub fn pad_to_block_size(residues: &mut Vector, block_size: usize) -> Result<(), HillCipherError> {
    if block_size == 0 {
        return Err(HillCipherError::InvalidMatrixDimension(
            "Block size must be at least 1".to_string(),
        ));
    }
    while residues.len() % block_size != 0 {
        residues.push(PAD_RESIDUE);
    }
    Ok(())
}
