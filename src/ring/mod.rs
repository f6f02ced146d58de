//! # Ring module
//!
//! Provides the [`Ring`] struct for modular arithmetic over Z_m together with
//! the matrix operations the cipher is built on.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

/// Size of the cipher alphabet (A-Z); every residue lives in `[0, 26)`.
pub const ALPHABET_MODULUS: u64 = 26;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
