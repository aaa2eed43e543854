use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Values are plain immutable data. The two booleans and `Null` behave like
/// singletons: every `true` equals every other `true`, so values are always
/// compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`. Produced by literals, comparisons and `!`.
    Boolean(bool),
    /// The absence of a value. Produced by an `if` without a taken branch,
    /// by `let`, by unbound identifiers, and by ill-typed operations.
    Null,
}

/// The `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The `null` value.
pub const NULL: Value = Value::Null;

impl Value {
    /// Maps the value to the boolean used for conditional branching.
    ///
    /// `null` and `false` are falsy; `true` and every integer, zero
    /// included, are truthy.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::value::{FALSE, NULL, TRUE, Value};
    ///
    /// assert!(TRUE.is_truthy());
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Upper-case name of the value's type, for diagnostics and logs.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}
