/// The evaluator module computes values from declarations.
///
/// The evaluator walks the declarations in source order, resolves name
/// references against the constants evaluated so far, folds arithmetic and
/// records `print` output. It produces the ordered constant list consumed by
/// the XML builder.
///
/// # Responsibilities
/// - Evaluates every value form, including nested arrays and expressions.
/// - Maintains the call-scoped environment and print log.
/// - Reports evaluation errors such as division by zero or undeclared names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of located
/// tokens: octal literals, strings, identifiers, punctuation and operators.
/// Whitespace and block comments are discarded here.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Handles string bodies and `=begin`/`=cut` comments.
/// - Reports lexical errors for invalid or unterminated input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream with a single token of lookahead
/// and folds it into declarations and value nodes.
///
/// # Responsibilities
/// - Converts tokens into [`Declaration`](crate::ast::Declaration) nodes.
/// - Validates the grammar, reporting errors with location info.
/// - Decodes octal literals and normalizes operator spellings.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum produced by evaluation and its textual
/// rendering, shared by `print` and the XML builder.
pub mod value;
