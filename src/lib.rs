//! # hill-crypto
//!
//! The Hill cipher: a classical polygraphic substitution cipher that
//! encrypts fixed-size blocks of letters by multiplying them, as vectors,
//! against a square key matrix over Z/26.
//!
//! Z/26 is not a field (26 = 2·13), so key invertibility is checked
//! explicitly and failures surface as typed errors rather than panics.
//! This is a teaching cipher, not a secure one: the block size is tiny,
//! the structure is linear, and small key spaces are brute-forceable.
//!
//! ```
//! use hill_crypto::cipher::{self, KeyMatrix};
//!
//! # fn main() -> Result<(), hill_crypto::HillCipherError> {
//! let key = KeyMatrix::parse("3,3;2,5")?;
//! let ciphertext = cipher::encrypt_text("HI", &key)?;
//! assert_eq!(ciphertext, "TC");
//! assert_eq!(cipher::decrypt_text(&ciphertext, &key)?, "HI");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod ring;

pub use cipher::KeyMatrix;
pub use errors::HillCipherError;
