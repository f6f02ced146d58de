//! # Cipher engine
//!
//! Splits a residue sequence into key-sized blocks, pushes each block
//! through the modular matrix engine, and reassembles the result. Every
//! function here is a pure function of its inputs; nothing is cached
//! between calls, so concurrent callers need no coordination.

pub mod key;

pub use key::KeyMatrix;

use crate::codec;
use crate::errors::HillCipherError;
use crate::ring::matrix_ops::matrix_vector_mul;
use crate::ring::{Ring, Vector};

use tracing::debug;

/// Single-pass block loop shared by both directions. The same
/// canonicalizing multiply serves encryption and decryption, so residues
/// come out in `[0, 26)` either way.
fn transform_blocks(
    residues: &[i64],
    key: &KeyMatrix,
    ring: &Ring,
) -> Result<Vector, HillCipherError> {
    let n = key.dimension();
    if residues.len() % n != 0 {
        return Err(HillCipherError::LengthNotMultipleOfBlockSize(format!(
            "Message length {} is not a multiple of the key dimension {}",
            residues.len(),
            n
        )));
    }

    let mut out = Vec::with_capacity(residues.len());
    for block in residues.chunks(n) {
        let transformed = matrix_vector_mul(key.as_matrix(), &block.to_vec(), ring)?;
        out.extend(transformed);
    }
    Ok(out)
}

/// Encrypts a residue sequence block by block with the key matrix.
///
/// # Errors
///
/// Returns `HillCipherError::LengthNotMultipleOfBlockSize` when padding was
/// not applied upstream (see [`codec::pad_to_block_size`]).
pub fn encrypt_blocks(plaintext: &[i64], key: &KeyMatrix) -> Result<Vector, HillCipherError> {
    transform_blocks(plaintext, key, &Ring::alphabet())
}

/// Decrypts a residue sequence block by block with an already-derived
/// inverse key matrix. Identical splitting and reassembly to
/// [`encrypt_blocks`].
pub fn decrypt_blocks(ciphertext: &[i64], key_inverse: &KeyMatrix) -> Result<Vector, HillCipherError> {
    transform_blocks(ciphertext, key_inverse, &Ring::alphabet())
}

/// The encrypt contract: plaintext residues and the encryption key in,
/// ciphertext residues out.
pub fn encrypt(plaintext: &[i64], key: &KeyMatrix) -> Result<Vector, HillCipherError> {
    debug!(
        dimension = key.dimension(),
        blocks = plaintext.len() / key.dimension(),
        "encrypting blocks"
    );
    encrypt_blocks(plaintext, key)
}

/// The decrypt contract: the caller supplies the *encryption* key and the
/// inverse is derived internally.
///
/// # Errors
///
/// Propagates `HillCipherError::NonInvertibleMatrix` when the key
/// determinant shares a factor with 26.
pub fn decrypt(ciphertext: &[i64], key: &KeyMatrix) -> Result<Vector, HillCipherError> {
    let ring = Ring::alphabet();
    let key_inverse = key.inverse(&ring)?;
    debug!(
        dimension = key.dimension(),
        blocks = ciphertext.len() / key.dimension(),
        "decrypting blocks with derived inverse key"
    );
    decrypt_blocks(ciphertext, &key_inverse)
}

/// Encrypts free-form text: strips non-letters, upcases, pads with 'X' to
/// the key dimension, and runs the block loop. Mirrors what a transport
/// layer does with an uploaded file before calling in.
pub fn encrypt_text(text: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    let cleaned = codec::normalize_text(text);
    let mut residues = codec::encode_text(&cleaned)?;
    codec::pad_to_block_size(&mut residues, key.dimension())?;
    let ciphertext = encrypt(&residues, key)?;
    codec::decode_residues(&ciphertext)
}

/// Decrypts a ciphertext string of uppercase letters with the encryption
/// key. Padding appended at encryption time is not removed; whether a
/// trailing 'X' is padding or plaintext is ambiguous by design.
pub fn decrypt_text(text: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    let residues = codec::encode_text(text)?;
    let recovered = decrypt(&residues, key)?;
    codec::decode_residues(&recovered)
}
