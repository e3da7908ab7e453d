// ============================================================================
// Operands
// Closed set of inputs accepted by money construction and arithmetic
// ============================================================================

use super::errors::{Coercion, MoneyError, MoneyResult, Operation};
use super::Money;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// Anything that may appear on the right-hand side of a money operation.
///
/// Each call site accepts a different subset:
///
/// | call site                      | Money | Decimal | Str | Integer |
/// |--------------------------------|-------|---------|-----|---------|
/// | construction (`Money::new`)    | yes   | yes     | yes | no      |
/// | scalar (`*`, `/`, `percent`)   | no    | yes     | yes | yes     |
/// | `+`, `-`, ordering             | yes   | no      | no  | no      |
///
/// `Unsupported` carries the name of a native type that never converts
/// (floats, booleans); it exists so those values are rejected with a typed
/// error rather than silently rounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
    Money(Money),
    Decimal(Decimal),
    Str(Cow<'a, str>),
    Integer(i128),
    Unsupported(&'static str),
}

impl Operand<'_> {
    /// Human-readable kind used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Money(_) => "Money",
            Operand::Decimal(_) => "Decimal",
            Operand::Str(_) => "string",
            Operand::Integer(_) => "integer",
            Operand::Unsupported(name) => *name,
        }
    }

    /// Construction rule: Money, Decimal or a `$`-tolerant string.
    pub(crate) fn into_money_decimal(self) -> MoneyResult<Decimal> {
        match self {
            Operand::Money(money) => Ok(money.raw()),
            Operand::Decimal(value) => Ok(value),
            Operand::Str(text) => parse_exact(&text.replace('$', "")),
            other => Err(reject(Coercion::Construction, other.kind())),
        }
    }

    /// Scalar rule: Decimal, numeric string or integer.
    pub(crate) fn into_scalar(self) -> MoneyResult<Decimal> {
        match self {
            Operand::Decimal(value) => Ok(value),
            Operand::Str(text) => parse_exact(&text),
            Operand::Integer(value) => integer_scalar(value),
            other => Err(reject(Coercion::Scalar, other.kind())),
        }
    }

    /// Money-only rule used by `+`, `-` and ordering.
    pub(crate) fn into_money(self, operation: Operation) -> MoneyResult<Money> {
        match self {
            Operand::Money(money) => Ok(money),
            other => {
                tracing::debug!(%operation, found = other.kind(), "rejected non-money operand");
                Err(MoneyError::InvalidOperand {
                    operation,
                    found: other.kind(),
                })
            },
        }
    }
}

fn reject(context: Coercion, found: &'static str) -> MoneyError {
    tracing::debug!(?context, found, "rejected operand type");
    MoneyError::UnsupportedType { context, found }
}

/// Integers convert through their exact text; the only failure is range.
fn integer_scalar(value: i128) -> MoneyResult<Decimal> {
    Decimal::from_str_exact(&value.to_string()).map_err(|_| {
        tracing::debug!(value = %value, "integer scalar outside decimal range");
        MoneyError::Overflow
    })
}

/// Parse a decimal literal without rounding significant digits away.
///
/// Accepted grammar:
/// - surrounding whitespace is ignored (`" 12.3 "`)
/// - `_` digit separators are allowed (`"1_000.50"`)
/// - scientific notation with `e` or `E` (`"1e3"`, `"15e-1"`)
/// - trailing fractional zeros never count against precision, so
///   `"79228162514264337593543950335.00"` parses
///
/// Inner whitespace, thousands commas and anything else is a parse error.
pub(crate) fn parse_exact(text: &str) -> MoneyResult<Decimal> {
    let literal = text.trim();
    let parsed = if literal.contains(['e', 'E']) {
        Decimal::from_scientific(literal)
    } else {
        Decimal::from_str_exact(strip_fraction_zeros(literal))
    };

    parsed.map_err(|source| MoneyError::Parse {
        input: text.to_string(),
        source,
    })
}

fn strip_fraction_zeros(literal: &str) -> &str {
    if !literal.contains('.') {
        return literal;
    }

    let stripped = literal.trim_end_matches(['0', '_']).trim_end_matches('.');
    if stripped.ends_with(|c: char| c.is_ascii_digit()) {
        stripped
    } else {
        literal
    }
}

// ============================================================================
// Conversions into Operand
// ============================================================================

impl From<Money> for Operand<'_> {
    fn from(value: Money) -> Self {
        Operand::Money(value)
    }
}

impl From<&Money> for Operand<'_> {
    fn from(value: &Money) -> Self {
        Operand::Money(*value)
    }
}

impl From<Decimal> for Operand<'_> {
    fn from(value: Decimal) -> Self {
        Operand::Decimal(value)
    }
}

impl From<&Decimal> for Operand<'_> {
    fn from(value: &Decimal) -> Self {
        Operand::Decimal(*value)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Self {
        Operand::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(value: &'a String) -> Self {
        Operand::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Operand<'_> {
    fn from(value: String) -> Self {
        Operand::Str(Cow::Owned(value))
    }
}

macro_rules! integer_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand<'_> {
                fn from(value: $ty) -> Self {
                    Operand::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Operand<'_> {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Operand::Integer(value as i128)
    }
}

impl From<usize> for Operand<'_> {
    fn from(value: usize) -> Self {
        Operand::Integer(value as i128)
    }
}

macro_rules! unsupported_operand {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl From<$ty> for Operand<'_> {
                fn from(_: $ty) -> Self {
                    Operand::Unsupported($name)
                }
            }
        )*
    };
}

unsupported_operand!(f32 => "f32", f64 => "f64", bool => "bool", char => "char");

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_names() {
        assert_eq!(Operand::from(Money::zero()).kind(), "Money");
        assert_eq!(Operand::from(dec!(1.5)).kind(), "Decimal");
        assert_eq!(Operand::from("1.5").kind(), "string");
        assert_eq!(Operand::from(7u8).kind(), "integer");
        assert_eq!(Operand::from(43.22f64).kind(), "f64");
        assert_eq!(Operand::from(true).kind(), "bool");
    }

    #[test]
    fn test_construction_rule() {
        assert_eq!(Operand::from("$12.89").into_money_decimal(), Ok(dec!(12.89)));
        assert_eq!(Operand::from(dec!(4)).into_money_decimal(), Ok(dec!(4)));
        assert_eq!(
            Operand::from(5i32).into_money_decimal(),
            Err(MoneyError::UnsupportedType {
                context: Coercion::Construction,
                found: "integer",
            })
        );
    }

    #[test]
    fn test_scalar_rule() {
        assert_eq!(Operand::from(2i64).into_scalar(), Ok(dec!(2)));
        assert_eq!(Operand::from("0.25").into_scalar(), Ok(dec!(0.25)));
        assert_eq!(
            Operand::from(Money::zero()).into_scalar(),
            Err(MoneyError::UnsupportedType {
                context: Coercion::Scalar,
                found: "Money",
            })
        );
        // The currency marker is only stripped on construction
        assert!(matches!(
            Operand::from("$2").into_scalar(),
            Err(MoneyError::Parse { .. })
        ));
    }

    #[test]
    fn test_large_integers_are_exact() {
        let value = Operand::from(u64::MAX).into_scalar().unwrap();
        assert_eq!(value.to_string(), u64::MAX.to_string());
    }

    #[test]
    fn test_integer_beyond_decimal_range() {
        assert_eq!(
            Operand::from(i128::MAX).into_scalar(),
            Err(MoneyError::Overflow)
        );
        assert_eq!(
            Operand::from(i128::MIN).into_scalar(),
            Err(MoneyError::Overflow)
        );
        // 2^96 - 1 is the widest integer a decimal holds
        let widest = 79_228_162_514_264_337_593_543_950_335i128;
        assert_eq!(Operand::from(widest).into_scalar(), Ok(Decimal::MAX));
        assert_eq!(
            Operand::from(widest + 1).into_scalar(),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_literal_grammar() {
        assert_eq!(parse_exact("1_000"), Ok(dec!(1000)));
        assert_eq!(parse_exact("1e3"), Ok(dec!(1000)));
        assert_eq!(parse_exact("15e-1"), Ok(dec!(1.5)));
        assert_eq!(parse_exact(" 12.3 "), Ok(dec!(12.3)));
        assert_eq!(parse_exact("\t-4.50\n"), Ok(dec!(-4.5)));
        assert_eq!(parse_exact("2."), Ok(dec!(2)));
    }

    #[test]
    fn test_literal_grammar_rejections() {
        for input in ["", "   ", "1 000", "1,000", "12.3.4", "twelve"] {
            assert!(
                matches!(parse_exact(input), Err(MoneyError::Parse { .. })),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_trailing_fraction_zeros_do_not_cost_precision() {
        assert_eq!(
            parse_exact("79228162514264337593543950335.00"),
            Ok(Decimal::MAX)
        );
        assert_eq!(
            parse_exact("-79228162514264337593543950335.000"),
            Ok(Decimal::MIN)
        );
        assert_eq!(parse_exact("100"), Ok(dec!(100)));
        assert_eq!(parse_exact("10.0"), Ok(dec!(10)));
        assert_eq!(parse_exact("0.0"), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_construction_trims_whitespace_around_marker() {
        assert_eq!(Operand::from(" $12.30 ").into_money_decimal(), Ok(dec!(12.3)));
        assert_eq!(Operand::from("$ 12.30").into_money_decimal(), Ok(dec!(12.3)));
    }

    #[test]
    fn test_money_only_rule() {
        assert!(Operand::from(Money::zero())
            .into_money(Operation::Addition)
            .is_ok());
        assert_eq!(
            Operand::from(15i32).into_money(Operation::Subtraction),
            Err(MoneyError::InvalidOperand {
                operation: Operation::Subtraction,
                found: "integer",
            })
        );
    }
}
