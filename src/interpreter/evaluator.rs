/// Arithmetic evaluation.
///
/// Implements the left fold of `+ - * /`, numeric promotion and the
/// division-by-zero checks.
pub mod arithmetic;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the per-program context and the
/// `evaluate` entry point.
pub mod core;

/// Evaluation of `print`.
///
/// Records the printed value's text and passes the value through.
pub mod print;

/// Utility functions for evaluation.
///
/// Provides name lookup and argument-count checks.
pub mod utils;
