use num_bigint::BigInt;
use num_traits::Zero;

use crate::util::num::format_float;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible results of evaluating a value node.
/// Lists may be heterogeneous and nest arbitrarily.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer of unbounded size. Produced by octal literals and by
    /// `+ - *` over integers.
    Integer(BigInt),
    /// A numeric value (double precision floating-point). Produced by `/` and
    /// by arithmetic involving another float.
    Float(f64),
    /// A string value.
    Str(String),
    /// An ordered list of values.
    List(Vec<Self>),
    /// A boolean value (`true` or `false`).
    /// Nothing in the language produces one yet, but the XML mapping renders
    /// it distinctly from integers.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Human-readable name of the value's type, used in error messages.
    ///
    /// # Example
    /// ```
    /// use octconf::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// assert_eq!(Value::List(vec![]).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "array",
            Self::Bool(_) => "boolean",
        }
    }

    /// Whether arithmetic accepts this value as an operand.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Whether this is a numeric zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Float(x) => *x == 0.0,
            _ => false,
        }
    }

    /// Writes the value as a list member: like [`Display`], except that
    /// strings are quoted.
    ///
    /// [`Display`]: std::fmt::Display
    fn fmt_member(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write_quoted(f, s),
            _ => write!(f, "{self}"),
        }
    }
}

/// Writes a string in single quotes, or double quotes when it contains a
/// single quote but no double quote. Control characters other than tab,
/// newline and carriage return are written as `\xNN`.
fn write_quoted(f: &mut std::fmt::Formatter<'_>, s: &str) -> std::fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c.is_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.fmt_member(f)?;
                }

                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scalars_display_like_xml_text() {
        assert_eq!(Value::from(10).to_string(), "10");
        assert_eq!(Value::from(-3).to_string(), "-3");
        assert_eq!(Value::from(6.0).to_string(), "6.0");
        assert_eq!(Value::from("a b").to_string(), "a b");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn lists_quote_their_strings() {
        let value = Value::List(vec![Value::from(1),
                                    Value::from("api"),
                                    Value::List(vec![Value::Float(2.5)])]);
        assert_eq!(value.to_string(), "[1, 'api', [2.5]]");

        let value = Value::List(vec![Value::from("it's"), Value::from("back\\slash")]);
        assert_eq!(value.to_string(), r#"["it's", 'back\\slash']"#);

        assert_eq!(Value::List(vec![]).to_string(), "[]");
    }

    #[test]
    fn listed_strings_escape_control_characters() {
        let value = Value::List(vec![Value::from("a\0b"), Value::from("\x7f\t\u{85}")]);
        assert_eq!(value.to_string(), r"['a\x00b', '\x7f\t\x85']");
        assert_eq!(Value::from("a\0b").to_string(), "a\0b");
    }

    #[test]
    fn integers_display_every_digit() {
        let value = Value::from(BigInt::from(1_u64 << 63) * 8);
        assert_eq!(value.to_string(), "73786976294838206464");
    }

    #[test]
    fn zero_detection_covers_both_numeric_kinds() {
        assert!(Value::from(0).is_zero());
        assert!(Value::from(-0.0).is_zero());
        assert!(!Value::from(0.5).is_zero());
        assert!(!Value::from("0").is_zero());
    }
}
