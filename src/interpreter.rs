/// The evaluator module reduces AST nodes to numbers.
///
/// The evaluator walks a line's tree, applies the arithmetic operators, reads
/// and writes the working memory register, looks up earlier results and runs
/// conditionals and loops.
///
/// # Responsibilities
/// - Evaluates every node kind with an exhaustive match.
/// - Reports runtime errors such as division by zero or history underflow.
pub mod evaluator;
/// The lexer module tokenizes one source line.
///
/// The lexer reads the raw text of a line and produces a sequence of tokens
/// (numbers, operators, parentheses and keywords) with their columns, ending
/// in an end-of-line sentinel.
///
/// # Responsibilities
/// - Converts the input characters into positioned tokens.
/// - Absorbs a `-` directly followed by a digit into a negative literal.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with a single token of lookahead, except for
/// the one decision right after `(` that peeks one token further.
///
/// # Responsibilities
/// - Converts tokens into one expression tree per line.
/// - Validates the grammar, reporting the expected and found token.
pub mod parser;
/// The session module holds per-file state.
///
/// A session owns the memory register and the result history, evaluates
/// lines against them and commits a line's effects only when it succeeds.
pub mod session;
