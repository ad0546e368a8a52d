/// Atoms: numbers, identifiers, calls and parenthesized expressions.
pub mod atom;
/// Comparison, additive and multiplicative levels.
pub mod binary;
/// Braced blocks and statement lists.
pub mod block;
/// The parser state, token handling and the program entry points.
pub mod core;
/// Statement forms: assignments, calls, `if`, `while`, `fn` and `return`.
pub mod statement;
/// Helpers shared by several grammar rules.
pub mod utils;
