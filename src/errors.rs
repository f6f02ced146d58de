#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// A symbol outside A-Z reached the codec.
    #[error("InvalidCharacter: {0}")]
    InvalidCharacter(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Key matrix not square, block size zero, or a dimension mismatch
    /// between a matrix and a vector.
    #[error("InvalidMatrixDimension: {0}")]
    InvalidMatrixDimension(String),
    /// Message length is not a multiple of the key dimension; padding was
    /// not applied upstream.
    #[error("LengthNotMultipleOfBlockSize: {0}")]
    LengthNotMultipleOfBlockSize(String),
    /// A scalar has no multiplicative inverse modulo the ring modulus
    /// (gcd(a, m) != 1).
    #[error("NoModularInverse: {0}")]
    NoModularInverse(String),
    /// Key matrix determinant is not coprime with 26; no decryption key
    /// can be derived from it.
    #[error("NonInvertibleMatrix: {0}")]
    NonInvertibleMatrix(String),
    /// Malformed textual key matrix ("a,b;c,d" form).
    #[error("KeyParseError: {0}")]
    KeyParseError(String),

    #[error("Key serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
