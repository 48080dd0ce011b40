use std::{fmt, rc::Rc};

use crate::{ast::LiteralValue, interpreter::value::callable::Callable, util::num::format_number};

/// Represents a runtime value in the interpreter.
///
/// Values are cheap to clone: strings and callables are reference counted.
#[derive(Debug, Clone)]
pub enum Value {
    /// A double-precision number. The language has no separate integer type.
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value.
    Nil,
    /// A user-defined or native function.
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `nil` and `false` are falsy; every other value, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use cosmo::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(_) | Self::Str(_) | Self::Callable(_) => true,
        }
    }

    /// Returns the number inside, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Equality never coerces: values of different types are unequal. Numbers
/// follow IEEE `==`, so `NaN` is not equal to itself. Callables are equal
/// only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Callable(a), Self::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
            Self::Callable(callable) => write!(f, "{callable}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(Rc::from(s.as_str())),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::from("").is_truthy());
    }

    #[test]
    fn equality_never_coerces() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_eq!(Value::from("ab"), Value::from(String::from("ab")));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::from("raw text").to_string(), "raw text");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn literals_convert() {
        assert_eq!(Value::from(&LiteralValue::Number(2.0)), Value::Number(2.0));
        assert_eq!(Value::from(&LiteralValue::Str("s".to_string())), Value::from("s"));
        assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
    }
}
