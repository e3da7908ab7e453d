// ============================================================================
// Money Value
// Immutable exact-decimal amount with strict operand rules
// ============================================================================

use super::errors::{MoneyError, MoneyResult, Operation};
use super::operand::Operand;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// One exact monetary amount.
///
/// Wraps a [`Decimal`] that is normalized on construction, so `"10.20"`,
/// `"$10.2"` and `Decimal::new(1020, 2)` all produce the same internal value.
/// Every operation returns a new `Money`; nothing is mutated in place.
///
/// Operations come in two flavours, mirroring the decimal type underneath:
/// - `checked_*` methods take any [`Operand`] and return [`MoneyResult`],
///   rejecting operand kinds that the operation does not accept.
/// - `std::ops` impls are statically typed and panic on overflow or
///   division by zero, like the `Decimal` operators they delegate to.
///
/// # Example
/// ```
/// use decimal_money::Money;
///
/// let price = Money::new("$32.35")?;
/// let total = price.checked_mul(2)?;
/// assert_eq!(total.to_string(), "$64.70");
/// # Ok::<(), decimal_money::MoneyError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money {
    raw: Decimal,
}

/// Rounding used by [`Money::round`] and formatting: half up, away from zero.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a money value from Money, a [`Decimal`] or a string.
    ///
    /// Strings may carry `$` markers anywhere; all of them are removed before
    /// the remainder is parsed as an exact decimal literal:
    ///
    /// - surrounding whitespace is ignored: `" $12.30 "`
    /// - `_` separates digits: `"1_000.50"`
    /// - scientific notation is accepted: `"1e3"`, `"15e-1"`
    /// - trailing fractional zeros never cost precision, so every formatted
    ///   amount parses back, `"$79228162514264337593543950335.00"` included
    ///
    /// Inner whitespace (`"1 000"`), thousands commas (`"1,000"`) and digits
    /// beyond the decimal's 28-digit scale or 96-bit significand are rejected.
    ///
    /// # Errors
    /// - `UnsupportedType` for integers, floats and other operand kinds
    /// - `Parse` if the string is not a decimal literal
    pub fn new<'a>(value: impl Into<Operand<'a>>) -> MoneyResult<Self> {
        value.into().into_money_decimal().map(Self::from_decimal)
    }

    /// The canonical zero amount.
    #[inline]
    pub fn zero() -> Self {
        Self::from_decimal(Decimal::ZERO)
    }

    #[inline]
    fn from_decimal(value: Decimal) -> Self {
        Self {
            raw: value.normalize(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The underlying decimal, suitable for persisting verbatim.
    #[inline]
    pub const fn raw(self) -> Decimal {
        self.raw
    }

    /// Same as [`Money::raw`].
    #[inline]
    pub const fn to_decimal(self) -> Decimal {
        self.raw
    }

    /// The amount multiplied by 100, without truncation.
    ///
    /// `0.5` yields `50`, `10.205` yields `1020.5`; round separately when an
    /// integer cent count is needed.
    pub fn cents(self) -> MoneyResult<Decimal> {
        self.raw.checked_mul(HUNDRED).ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Value equality against any operand. Non-money operands are never
    /// equal, even when they hold the same number.
    pub fn equals<'a>(self, other: impl Into<Operand<'a>>) -> bool {
        match other.into() {
            Operand::Money(money) => self.raw == money.raw,
            _ => false,
        }
    }

    /// Ordering against any operand; only money can be ordered.
    ///
    /// # Errors
    /// `InvalidOperand` naming the offending operand kind.
    pub fn try_cmp<'a>(self, other: impl Into<Operand<'a>>) -> MoneyResult<Ordering> {
        let other = other.into().into_money(Operation::Comparison)?;
        Ok(self.raw.cmp(&other.raw))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw.is_zero()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.raw > Decimal::ZERO
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.raw < Decimal::ZERO
    }

    /// True for every amount strictly greater than minus one.
    ///
    /// Note this includes the open interval (-1, 0): `-0.50` is reported as
    /// non-negative.
    #[inline]
    pub fn is_non_negative(self) -> bool {
        self.raw > Decimal::NEGATIVE_ONE
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Addition; the operand must be money.
    ///
    /// # Errors
    /// `InvalidOperand` for non-money operands, `Overflow` if out of range.
    pub fn checked_add<'a>(self, other: impl Into<Operand<'a>>) -> MoneyResult<Self> {
        let other = other.into().into_money(Operation::Addition)?;
        self.raw
            .checked_add(other.raw)
            .map(Self::from_decimal)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtraction; the operand must be money.
    ///
    /// # Errors
    /// `InvalidOperand` for non-money operands, `Overflow` if out of range.
    pub fn checked_sub<'a>(self, other: impl Into<Operand<'a>>) -> MoneyResult<Self> {
        let other = other.into().into_money(Operation::Subtraction)?;
        self.raw
            .checked_sub(other.raw)
            .map(Self::from_decimal)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplication by a scalar: decimal, numeric string or integer.
    ///
    /// # Errors
    /// `UnsupportedType` for money and floats, `Parse` for malformed strings,
    /// `Overflow` if out of range.
    pub fn checked_mul<'a>(self, factor: impl Into<Operand<'a>>) -> MoneyResult<Self> {
        let factor = factor.into().into_scalar()?;
        self.raw
            .checked_mul(factor)
            .map(Self::from_decimal)
            .ok_or(MoneyError::Overflow)
    }

    /// Division by a scalar: decimal, numeric string or integer.
    ///
    /// # Errors
    /// As [`Money::checked_mul`], plus `DivisionByZero`.
    pub fn checked_div<'a>(self, divisor: impl Into<Operand<'a>>) -> MoneyResult<Self> {
        let divisor = divisor.into().into_scalar()?;
        divide(self.raw, divisor).map(Self::from_decimal)
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_decimal(self.raw.abs())
    }

    /// The given percentage of this amount: `raw * (p / 100)`.
    ///
    /// ```
    /// use decimal_money::Money;
    ///
    /// let fee = Money::new("100")?.percent(10)?;
    /// assert_eq!(fee, Money::new("10")?);
    /// # Ok::<(), decimal_money::MoneyError>(())
    /// ```
    pub fn percent<'a>(self, percentage: impl Into<Operand<'a>>) -> MoneyResult<Self> {
        let rate = divide(percentage.into().into_scalar()?, HUNDRED)?;
        self.raw
            .checked_mul(rate)
            .map(Self::from_decimal)
            .ok_or(MoneyError::Overflow)
    }

    /// How many percent of this amount `other` represents:
    /// `other / self * 100`. The result is a plain decimal, not money.
    ///
    /// # Errors
    /// `DivisionByZero` when this amount is zero.
    pub fn proportion(self, other: &Money) -> MoneyResult<Decimal> {
        let ratio = divide(other.raw, self.raw)?;
        ratio.checked_mul(HUNDRED).ok_or(MoneyError::Overflow)
    }

    /// Round to `places` decimal places, half up.
    #[inline]
    pub fn round(self, places: u32) -> Self {
        Self::from_decimal(self.raw.round_dp_with_strategy(places, ROUNDING))
    }

    /// Round to whole cents.
    #[inline]
    pub fn round_cents(self) -> Self {
        self.round(2)
    }
}

fn divide(dividend: Decimal, divisor: Decimal) -> MoneyResult<Decimal> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(MoneyError::Overflow)
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.raw
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_decimal(-self.raw)
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in production)
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_decimal(self.raw + rhs.raw)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_decimal(self.raw - rhs.raw)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self::from_decimal(self.raw * rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Decimal) -> Self::Output {
        Self::from_decimal(self.raw / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({})", self.raw)
    }
}

// ============================================================================
// Tests
// ============================================================================
