// ============================================================================
// Money Errors
// Error types for money construction, coercion and arithmetic
// ============================================================================

use std::error::Error;
use std::fmt;

/// Operations that require both sides to already be [`Money`](super::Money).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Comparison,
    Addition,
    Subtraction,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Comparison => write!(f, "comparison"),
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
        }
    }
}

/// Call sites that coerce an arbitrary operand into a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coercion {
    /// `Money::new` and everything routed through it
    Construction,
    /// Right-hand side of `*`, `/` and `percent`
    Scalar,
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coercion::Construction => {
                write!(f, "Money can only be initialized with Money, a Decimal or a string")
            },
            Coercion::Scalar => {
                write!(f, "expected a Decimal, a numeric string or an integer")
            },
        }
    }
}

/// Errors that can occur while building or operating on money values.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyError {
    /// Operand kind is not accepted at this call site
    UnsupportedType { context: Coercion, found: &'static str },
    /// String is not a valid decimal literal
    Parse {
        input: String,
        source: rust_decimal::Error,
    },
    /// Ordering, addition or subtraction against a non-money operand
    InvalidOperand {
        operation: Operation,
        found: &'static str,
    },
    /// Attempted division by zero
    DivisionByZero,
    /// Result does not fit in the decimal significand
    Overflow,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::UnsupportedType { context, found } => {
                write!(f, "type error: {}, not {}", context, found)
            },
            MoneyError::Parse { input, source } => {
                write!(f, "invalid decimal literal {:?}: {}", input, source)
            },
            MoneyError::InvalidOperand {
                operation: Operation::Comparison,
                found,
            } => write!(f, "{} cannot be compared with Money", found),
            MoneyError::InvalidOperand { operation, found } => {
                write!(f, "cannot perform {} on Money with {}", operation, found)
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
        }
    }
}

impl Error for MoneyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoneyError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
