/// Core parsing entry point and token cursor.
///
/// Contains the program-level parse loop, the lookahead cursor shared by all
/// productions, and common error construction.
pub mod core;

/// Declaration parsing.
///
/// Implements the only statement form, `NAME := value ;`.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the dot-separated list helper, identifier parsing and octal
/// literal decoding.
pub mod utils;

/// Value parsing.
///
/// Parses literals, name references, arrays and operator expressions,
/// recursing for nested forms.
pub mod value;
