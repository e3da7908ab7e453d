// ============================================================================
// Currency Formatting
// Two-place currency strings with optional marker and cents
// ============================================================================

use super::value::{Money, ROUNDING};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currency marker placed in front of formatted amounts.
pub const CURRENCY_MARKER: &str = "$";

/// Options for [`Money::to_s`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Emit the leading `$` marker
    pub prefix: bool,

    /// Render whole-dollar amounts without a decimal point
    pub drop_cents: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            prefix: true,
            drop_cents: false,
        }
    }
}

impl FormatOptions {
    /// Builder method: toggle the `$` marker
    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    /// Builder method: toggle dropping `.00`
    pub fn with_drop_cents(mut self, drop_cents: bool) -> Self {
        self.drop_cents = drop_cents;
        self
    }

    /// Bare number, always two places: `345.87`
    pub fn plain() -> Self {
        Self::default().with_prefix(false)
    }

    /// Marker, cents only when present: `$345`, `$345.45`
    pub fn whole_dollars() -> Self {
        Self::default().with_drop_cents(true)
    }
}

impl Money {
    /// Render as a currency string rounded (half up) to two places.
    ///
    /// Negative amounts put the sign before the marker (`-$5.25`). An amount
    /// that rounds to zero is printed without a sign.
    ///
    /// ```
    /// use decimal_money::money::{FormatOptions, Money};
    ///
    /// let m = Money::new("345.00")?;
    /// assert_eq!(m.to_s(&FormatOptions::default()), "$345.00");
    /// assert_eq!(m.to_s(&FormatOptions::whole_dollars()), "$345");
    /// # Ok::<(), decimal_money::MoneyError>(())
    /// ```
    pub fn to_s(self, options: &FormatOptions) -> String {
        let rounded = self.raw().round_dp_with_strategy(2, ROUNDING);
        let whole = self.raw().round_dp_with_strategy(0, ROUNDING);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let prefix = if options.prefix { CURRENCY_MARKER } else { "" };
        let magnitude = rounded.abs();
        let dollars = magnitude.trunc().normalize();

        if options.drop_cents && rounded == whole {
            format!("{}{}{}", sign, prefix, dollars)
        } else {
            format!("{}{}{}.{}", sign, prefix, dollars, cents_digits(magnitude))
        }
    }
}

/// Exactly two fraction digits of an amount already rounded to cents.
///
/// Built as text: rescaling the decimal itself would silently give up
/// fraction digits once the significand has no room left.
fn cents_digits(magnitude: Decimal) -> String {
    let fraction = magnitude.fract().to_string();
    let digits = fraction.split_once('.').map_or("", |(_, digits)| digits);
    format!("{:0<2}", digits)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_s(&FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: &str) -> Money {
        Money::new(value).unwrap()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(money("345.8724").to_string(), "$345.87");
        assert_eq!(money("4543.6798").to_string(), "$4543.68");
        assert_eq!(money("345").to_string(), "$345.00");
        assert_eq!(money("0.5").to_string(), "$0.50");
    }

    #[test]
    fn test_without_prefix() {
        let plain = FormatOptions::plain();
        assert_eq!(money("345.8724").to_s(&plain), "345.87");
        assert_eq!(money("4543.6798").to_s(&plain), "4543.68");
    }

    #[test]
    fn test_drop_cents() {
        let whole = FormatOptions::whole_dollars();
        assert_eq!(money("345.00").to_s(&whole), "$345");
        assert_eq!(money("345.45").to_s(&whole), "$345.45");

        let bare = FormatOptions::plain().with_drop_cents(true);
        assert_eq!(money("345.00").to_s(&bare), "345");
        assert_eq!(money("345.45").to_s(&bare), "345.45");
    }

    #[test]
    fn test_drop_cents_after_rounding() {
        let whole = FormatOptions::whole_dollars();
        assert_eq!(money("345.004").to_s(&whole), "$345");
        assert_eq!(money("345.995").to_s(&whole), "$346");
        assert_eq!(money("345.5").to_s(&whole), "$345.50");
    }

    #[test]
    fn test_negative_sign_precedes_marker() {
        assert_eq!(money("-5").to_s(&FormatOptions::whole_dollars()), "-$5");
        assert_eq!(money("-5.254").to_string(), "-$5.25");
        assert_eq!(money("-5.255").to_s(&FormatOptions::plain()), "-5.26");
    }

    #[test]
    fn test_negative_rounding_to_zero_is_unsigned() {
        assert_eq!(money("-0.001").to_string(), "$0.00");
        assert_eq!(money("-0.001").to_s(&FormatOptions::whole_dollars()), "$0");
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(money("0.005").to_string(), "$0.01");
        assert_eq!(money("0.015").to_string(), "$0.02");
        assert_eq!(money("0.025").to_string(), "$0.03");
    }

    #[test]
    fn test_decimal_range_limits_keep_cents() {
        let max = Money::from(Decimal::MAX);
        let min = Money::from(Decimal::MIN);
        assert_eq!(max.to_string(), "$79228162514264337593543950335.00");
        assert_eq!(min.to_string(), "-$79228162514264337593543950335.00");
        assert_eq!(
            max.to_s(&FormatOptions::whole_dollars()),
            "$79228162514264337593543950335"
        );
        assert_eq!(
            min.to_s(&FormatOptions::plain().with_drop_cents(true)),
            "-79228162514264337593543950335"
        );
    }

    #[test]
    fn test_large_amounts_keep_two_fraction_digits() {
        assert_eq!(
            money("1000000000000000000000000000").to_string(),
            "$1000000000000000000000000000.00"
        );
        assert_eq!(
            money("-900000000000000000000000000.5").to_string(),
            "-$900000000000000000000000000.50"
        );
        assert_eq!(
            money("792281625142643375935439503.35").to_s(&FormatOptions::plain()),
            "792281625142643375935439503.35"
        );
    }

    #[test]
    fn test_full_scale_amounts() {
        let tiny = Money::from(Decimal::new(1, 28));
        assert_eq!(tiny.to_string(), "$0.00");
        let precise = Money::from(Decimal::from_i128_with_scale(
            79_228_162_514_264_337_593_543_950_335,
            28,
        ));
        assert_eq!(precise.to_string(), "$7.92");
    }

    #[test]
    fn test_options_builder() {
        let options = FormatOptions::default()
            .with_prefix(false)
            .with_drop_cents(true);
        assert!(!options.prefix);
        assert!(options.drop_cents);
        assert_eq!(FormatOptions::default(), FormatOptions::plain().with_prefix(true));
    }
}
