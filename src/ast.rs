use num_bigint::BigInt;

/// An abstract syntax tree (AST) node representing a value in the language.
///
/// `ValueNode` covers every construct that may appear on the right-hand side
/// of a declaration. Arrays and operator expressions nest further value
/// nodes, so the tree is recursive. Nodes are built once by the parser and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    /// An octal integer literal such as `0o17`.
    Number {
        /// The literal exactly as written, prefix included.
        raw:   String,
        /// The decoded base-8 value.
        value: BigInt,
    },
    /// A `q(...)` string literal. The body is kept verbatim.
    Str(String),
    /// An `{ a. b. }` array literal.
    Array(Vec<Self>),
    /// Reference to a previously declared constant.
    NameRef(String),
    /// A bracketed prefix-operator expression such as `[+ a 0o1]`.
    ConstExpr {
        /// The operator selected by the first token inside the brackets.
        op:   Operator,
        /// The operands, in source order. Never empty.
        args: Vec<Self>,
    },
}

/// A single `NAME := value ;` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The declared name.
    pub name:  String,
    /// The value bound to the name.
    pub value: ValueNode,
}

/// Represents an operator usable in the expression form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Print (`print` or `print()`)
    Print,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Print => "print",
        };
        write!(f, "{operator}")
    }
}
