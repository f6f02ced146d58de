use crate::errors::HillCipherError;
use crate::ring::matrix_ops::{determinant, matrix_inverse, reduce_entries};
use crate::ring::{Matrix, Ring, gcd};

use rand::prelude::{Rng, SeedableRng, StdRng};

use serde::{Deserialize, Serialize};

/// The shared secret of the cipher: a square integer matrix.
///
/// Entries are not required to be pre-reduced mod 26; they are normalized
/// by the ring arithmetic as they are used. Use with the decryption path
/// additionally requires the determinant to be coprime with 26, which is
/// checked when the inverse is derived, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMatrix {
    rows: Matrix,
}

impl KeyMatrix {
    /// Builds a key from raw rows, rejecting empty or non-square input.
    pub fn try_with(rows: Matrix) -> Result<Self, HillCipherError> {
        let n = rows.len();
        if n == 0 {
            return Err(HillCipherError::InvalidMatrixDimension(
                "Key matrix must have at least one row".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(HillCipherError::InvalidMatrixDimension(format!(
                    "Key matrix must be square: row {} has length {} but expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Parses the textual key form: rows separated by `;`, values within a
    /// row by `,`, e.g. `"3,3;2,5"`. Values are base-10 integers, possibly
    /// negative; whitespace around values is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::cipher::KeyMatrix;
    /// let key = KeyMatrix::parse("3, 3; 2, 5").unwrap();
    /// assert_eq!(key.dimension(), 2);
    /// assert!(KeyMatrix::parse("3,3;2").is_err());
    /// assert!(KeyMatrix::parse("a,b;c,d").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, HillCipherError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(HillCipherError::KeyParseError(
                "Key matrix text is empty".to_string(),
            ));
        }

        let mut rows = Matrix::new();
        for (i, row_text) in trimmed.split(';').enumerate() {
            let mut row = Vec::new();
            for value_text in row_text.split(',') {
                let value_text = value_text.trim();
                let value = value_text.parse::<i64>().map_err(|e| {
                    HillCipherError::KeyParseError(format!(
                        "Row {}: cannot parse {:?} as an integer: {}",
                        i, value_text, e
                    ))
                })?;
                row.push(value);
            }
            rows.push(row);
        }
        Self::try_with(rows)
    }

    /// Searches for a random key that is invertible mod the ring, driven by
    /// a seeded generator so key material is reproducible from the seed.
    ///
    /// Roughly a third of random matrices mod 26 are invertible, so the
    /// search terminates quickly in practice.
    pub fn generate(dimension: usize, seed: u64, ring: &Ring) -> Result<Self, HillCipherError> {
        if dimension == 0 {
            return Err(HillCipherError::InvalidMatrixDimension(
                "Key dimension must be at least 1".to_string(),
            ));
        }

        let m = ring.modulus() as i64;
        let mut rng = StdRng::seed_from_u64(seed);
        loop {
            let rows: Matrix = (0..dimension)
                .map(|_| (0..dimension).map(|_| rng.random_range(0..m)).collect())
                .collect();
            let candidate = Self { rows };
            if candidate.is_invertible(ring)? {
                return Ok(candidate);
            }
        }
    }

    /// Side length n of the key; also the cipher block size.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.rows
    }

    /// Determinant as a plain (unreduced) integer.
    pub fn determinant(&self) -> Result<i64, HillCipherError> {
        determinant(&self.rows)
    }

    /// Whether a decryption key can be derived: the determinant mod 26
    /// shares no factor (2 or 13) with the modulus.
    ///
    /// Entries are reduced into the ring before the determinant is taken,
    /// so arbitrarily large raw key entries are fine here.
    pub fn is_invertible(&self, ring: &Ring) -> Result<bool, HillCipherError> {
        let reduced = reduce_entries(&self.rows, ring);
        let det = ring.normalize(determinant(&reduced)?);
        Ok(gcd(det, ring.modulus() as i64) == 1)
    }

    /// Derives the decryption key via the adjugate construction.
    ///
    /// # Errors
    ///
    /// Propagates `HillCipherError::NonInvertibleMatrix` when the
    /// determinant has no inverse mod the ring.
    pub fn inverse(&self, ring: &Ring) -> Result<Self, HillCipherError> {
        Ok(Self {
            rows: matrix_inverse(&self.rows, ring)?,
        })
    }

    pub fn to_json(&self) -> Result<String, HillCipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, HillCipherError> {
        Ok(serde_json::from_str(json)?)
    }
}
