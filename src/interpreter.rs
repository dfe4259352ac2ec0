/// The evaluator module computes the integer value of an expression tree.
///
/// The evaluator walks the tree in post-order with an explicit operand stack,
/// applying each operator once both of its operands are on the stack.
///
/// # Responsibilities
/// - Applies `+ - * /` with checked 64-bit arithmetic.
/// - Reports division by zero and overflow as runtime errors.
/// - Verifies the stack discipline (two operands per operator, one result).
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces a lazy stream of tokens: number
/// literals and the four operator symbols, each tagged with its byte offset.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Recognizes maximal runs of digits as a single number token.
/// - Reports unrecognized characters as lexical errors.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a hand-written recursive descent over two precedence levels,
/// folding operators of equal precedence to the left.
///
/// # Responsibilities
/// - Encodes precedence: `*` and `/` bind tighter than `+` and `-`.
/// - Encodes left associativity: `10 - 3 - 2` is `(10 - 3) - 2`.
/// - Rejects missing operands and trailing tokens.
pub mod parser;
