//! # octconf
//!
//! octconf translates a small declarative configuration language into a
//! normalized XML document. Programs declare named constants built from
//! octal numbers, `q(...)` strings, `{ a. b. }` arrays, references to earlier
//! constants and prefix expressions such as `[+ a 0o1]` or `[print a]`.
//! Values logged by `print` are collected separately from the XML.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    interpreter::{
        evaluator::core::{Constant, evaluate},
        parser::core::parse,
    },
    xml::{builder::build_with, element::Layout},
};

/// Defines the structure of parsed code.
///
/// This module declares the `ValueNode` enum and the `Declaration` struct
/// that represent a program as a tree. The AST is built by the parser and
/// consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the five value forms and the declaration shape.
/// - Defines the operators usable in the expression form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Parse errors carry the line and column of the
/// offending input; evaluation errors carry a message only.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps both kinds unchanged in the crate-level [`Error`](error::Error).
pub mod error;
/// Runs source code through lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and runtime value
/// types. Each stage completes before the next begins.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// This module holds integer-to-float promotion and the canonical float
/// rendering shared by evaluation and XML output.
pub mod util;
/// XML output.
///
/// Maps evaluated constants onto an immutable element tree and renders it
/// as indented or compact text.
pub mod xml;

pub use error::Error;

/// The outputs of one translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// The rendered XML document.
    pub xml:       String,
    /// Text logged by `print`, in call order.
    pub print_log: Vec<String>,
    /// Every declaration with its evaluated value, in source order.
    pub constants: Vec<Constant>,
}

/// Translates a program into an indented XML document.
///
/// Parsing completes before evaluation starts, and evaluation completes
/// before any XML is built. Nothing is shared between calls.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed source and [`Error::Evaluation`]
/// for semantic failures such as undeclared names or division by zero. No
/// partial output is produced.
///
/// # Examples
/// ```
/// use octconf::translate;
///
/// let translation = translate("value := [+ 0o2 0o3];\nshown := [print value];").unwrap();
///
/// assert_eq!(translation.print_log, vec!["5".to_string()]);
/// assert!(translation.xml.contains(r#"<const name="shown">"#));
///
/// // 'unknown' has not been declared.
/// assert!(translate("value := unknown;").is_err());
/// ```
pub fn translate(source: &str) -> Result<Translation, Error> {
    translate_with(source, Layout::default())
}

/// Translates a program, rendering the XML with the given layout.
///
/// # Errors
/// Same as [`translate`].
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn translate_with(source: &str, layout: Layout) -> Result<Translation, Error> {
    let declarations = parse(source)?;
    let evaluation = evaluate(&declarations)?;
    let xml = build_with(&evaluation.constants, layout);

    debug!(constants = evaluation.constants.len(),
           prints = evaluation.print_log.len(),
           "translation finished");
    Ok(Translation { xml,
                     print_log: evaluation.print_log,
                     constants: evaluation.constants })
}
