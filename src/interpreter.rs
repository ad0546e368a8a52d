/// Scope chains for variables and functions.
///
/// An environment holds the bindings of one scope and a handle to its parent.
/// The root environment lives for the whole run; every function call gets a
/// fresh one that is dropped when the call returns.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// Evaluation is a recursive walk over the tree. Every expression and
/// statement produces an `i64`; side effects happen only through native
/// functions.
///
/// # Responsibilities
/// - Evaluates expressions and statements with wrapping 64-bit arithmetic.
/// - Implements the call protocol for script and native functions.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and hands out tokens one at a time,
/// each with the line and column of its first character.
///
/// # Responsibilities
/// - Recognizes numbers, identifiers, keywords, operators and punctuation.
/// - Skips whitespace and tracks line numbers.
/// - Applies the configured policy to characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead. Operator precedence
/// is encoded by one function per level.
///
/// # Responsibilities
/// - Converts tokens into statements, expressions and function declarations.
/// - Reports the first syntax error with the offending token and position.
pub mod parser;
