use crate::errors::HillCipherError;
use crate::ring::{Matrix, Ring, Vector};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector with every entry normalized into `[0, modulus)`.
///
/// Both the encryption and the decryption direction go through this one
/// function, so negative key entries can never leak an out-of-range
/// residue from either side.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, HillCipherError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(HillCipherError::InvalidMatrixDimension(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(HillCipherError::InvalidMatrixDimension(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus
/// of the ring.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidMatrixDimension` if the inner dimensions
/// of the matrices do not match or if rows have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(HillCipherError::InvalidMatrixDimension(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, |row| row.len()); // cols in B

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(HillCipherError::InvalidMatrixDimension(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(HillCipherError::InvalidMatrixDimension(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

fn check_square(matrix: &Matrix, context: &str) -> Result<usize, HillCipherError> {
    let n = matrix.len();
    if n == 0 {
        return Err(HillCipherError::InvalidMatrixDimension(format!(
            "{}: matrix must have at least one row",
            context
        )));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCipherError::InvalidMatrixDimension(format!(
                "{}: row {} has length {} but expected {}",
                context,
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// Submatrix of `matrix` with the given row and column removed.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidMatrixDimension` if the matrix is not
/// square or is smaller than 2×2.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Result<Matrix, HillCipherError> {
    let n = check_square(matrix, "minor")?;
    if n < 2 {
        return Err(HillCipherError::InvalidMatrixDimension(format!(
            "minor: matrix must be at least 2x2, got {}x{}",
            n, n
        )));
    }
    if row >= n || col >= n {
        return Err(HillCipherError::InvalidMatrixDimension(format!(
            "minor: index ({}, {}) out of bounds for {}x{} matrix",
            row, col, n, n
        )));
    }

    let mut sub = Vec::with_capacity(n - 1);
    for (i, r) in matrix.iter().enumerate() {
        if i == row {
            continue;
        }
        let reduced: Vec<i64> = r
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != col)
            .map(|(_, &v)| v)
            .collect();
        sub.push(reduced);
    }
    Ok(sub)
}

/// Determinant of a square matrix as a plain (unreduced) integer.
///
/// Laplace cofactor expansion along the first row. Factorial-time in the
/// matrix dimension, which is fine for Hill-cipher key sizes (n <= 6 or so);
/// callers validating untrusted keys must bound n before calling in.
pub fn determinant(matrix: &Matrix) -> Result<i64, HillCipherError> {
    let n = check_square(matrix, "determinant")?;
    if n == 1 {
        return Ok(matrix[0][0]);
    }

    let mut det = 0i64;
    let mut sign = 1i64;
    for f in 0..n {
        let sub = minor(matrix, 0, f)?;
        det += sign * matrix[0][f] * determinant(&sub)?;
        sign = -sign;
    }
    Ok(det)
}

/// Entrywise reduction of a matrix into the canonical range of the ring.
pub fn reduce_entries(matrix: &Matrix, ring: &Ring) -> Matrix {
    matrix
        .iter()
        .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
        .collect()
}

/// Adjugate (transposed cofactor matrix), each entry normalized into the
/// ring. For a 1×1 matrix the adjugate is `[[1]]`.
pub fn adjoint(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = check_square(matrix, "adjoint")?;
    if n == 1 {
        return Ok(vec![vec![1]]);
    }

    let mut adj = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let sub = minor(matrix, i, j)?;
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            // Transposed: cofactor of (i, j) lands at (j, i).
            adj[j][i] = ring.normalize(sign * determinant(&sub)?);
        }
    }
    Ok(adj)
}

/// Inverse of a square matrix modulo the ring, via the adjugate and the
/// modular inverse of the determinant.
///
/// # Errors
///
/// Returns `HillCipherError::NonInvertibleMatrix` when the determinant is
/// not coprime with the modulus (in Z_26: shares a factor 2 or 13), and
/// `HillCipherError::InvalidMatrixDimension` if the matrix is not square.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    check_square(matrix, "matrix_inverse")?;

    // Key entries arrive unreduced; det mod m is invariant under entrywise
    // reduction, and reducing first keeps the cofactor arithmetic inside
    // i64 no matter how large the raw entries are.
    let reduced = reduce_entries(matrix, ring);

    let det = ring.normalize(determinant(&reduced)?);
    let det_inv = ring.inv(det).map_err(|_| {
        HillCipherError::NonInvertibleMatrix(format!(
            "Determinant {} has no inverse mod {}; matrix is not invertible",
            det,
            ring.modulus()
        ))
    })?;

    let adj = adjoint(&reduced, ring)?;
    let inv = adj
        .iter()
        .map(|row| row.iter().map(|&v| ring.mul(v, det_inv)).collect())
        .collect();
    Ok(inv)
}
