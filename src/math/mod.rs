//! Mathematical predicates used by the row clues

/// Digit-wise operations: products, divisibility, palindromes
pub mod digits;
/// Membership tests against integer sequences
pub mod sequences;
